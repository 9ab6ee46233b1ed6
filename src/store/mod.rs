// SPDX-License-Identifier: MPL-2.0
//! Shared image store for the comparison view.
//!
//! Two slots hold the most recently set source images as immutable,
//! shared-ownership snapshots. A role assignment records which slot is
//! currently rendered as the primary (large) view; the other slot feeds the
//! thumbnail. Swapping roles never rebinds image references, it only flips
//! the assignment.
//!
//! # Design
//!
//! - **Immutable snapshots**: `set` replaces a slot wholesale with an
//!   `Arc<RgbaImage>`; readers clone the `Arc` and keep the image alive for
//!   as long as they need it. A reader never observes a half-written image.
//! - **One critical section**: slots and the role assignment live under a
//!   single mutex. The derived-bitmap work belonging to a `set` call runs
//!   inside that same critical section (see [`ImageStore::set_with`]), so a
//!   render never sees an image without its matching scaled bitmap queued.

use image_rs::RgbaImage;
use std::sync::{Arc, Mutex};

/// An immutable source image with shared ownership. Its lifetime is that of
/// the longest holder.
pub type SharedImage = Arc<RgbaImage>;

/// A logical image-holding position. Independent of which slot currently
/// renders as primary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    A,
    B,
}

impl Slot {
    /// The other slot.
    #[must_use]
    pub fn other(self) -> Slot {
        match self {
            Slot::A => Slot::B,
            Slot::B => Slot::A,
        }
    }

    fn index(self) -> usize {
        match self {
            Slot::A => 0,
            Slot::B => 1,
        }
    }
}

/// The display role a slot currently plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Main, large view.
    Primary,
    /// Thumbnail source.
    Secondary,
}

/// Which slot currently plays the primary role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleAssignment {
    primary: Slot,
}

impl Default for RoleAssignment {
    fn default() -> Self {
        Self { primary: Slot::A }
    }
}

impl RoleAssignment {
    #[must_use]
    pub fn primary_slot(self) -> Slot {
        self.primary
    }

    #[must_use]
    pub fn secondary_slot(self) -> Slot {
        self.primary.other()
    }

    #[must_use]
    pub fn role_of(self, slot: Slot) -> Role {
        if slot == self.primary {
            Role::Primary
        } else {
            Role::Secondary
        }
    }

    #[must_use]
    pub fn swapped(self) -> Self {
        Self {
            primary: self.primary.other(),
        }
    }
}

/// A stable view of the store at one instant.
#[derive(Debug, Clone, Default)]
pub struct StoreSnapshot {
    pub images: [Option<SharedImage>; 2],
    pub assignment: RoleAssignment,
}

impl StoreSnapshot {
    #[must_use]
    pub fn image(&self, slot: Slot) -> Option<&SharedImage> {
        self.images[slot.index()].as_ref()
    }

    #[must_use]
    pub fn primary(&self) -> Option<&SharedImage> {
        self.image(self.assignment.primary_slot())
    }

    #[must_use]
    pub fn secondary(&self) -> Option<&SharedImage> {
        self.image(self.assignment.secondary_slot())
    }
}

#[derive(Debug, Default)]
struct Slots {
    images: [Option<SharedImage>; 2],
    assignment: RoleAssignment,
}

/// Owner of the two source image slots and their role assignment.
#[derive(Debug, Default)]
pub struct ImageStore {
    inner: Mutex<Slots>,
}

impl ImageStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the image in `slot` and, while still holding the lock, runs
    /// `derive` with the role the slot currently plays. `derive` is where
    /// the caller recomputes the one derived bitmap that depends on this
    /// slot's role — not unconditionally both.
    pub fn set_with<R>(
        &self,
        slot: Slot,
        image: SharedImage,
        derive: impl FnOnce(Role, &SharedImage) -> R,
    ) -> R {
        let mut slots = self.inner.lock().expect("image store poisoned");
        let role = slots.assignment.role_of(slot);
        tracing::debug!(?slot, ?role, width = image.width(), height = image.height(), "image set");
        slots.images[slot.index()] = Some(Arc::clone(&image));
        derive(role, &image)
    }

    /// Replaces the image in `slot` without deriving anything.
    pub fn set(&self, slot: Slot, image: SharedImage) {
        self.set_with(slot, image, |_, _| {});
    }

    /// A stable, independently-lifetimed snapshot of one slot.
    #[must_use]
    pub fn get(&self, slot: Slot) -> Option<SharedImage> {
        let slots = self.inner.lock().expect("image store poisoned");
        slots.images[slot.index()].clone()
    }

    /// A stable snapshot of both slots plus the current role assignment.
    #[must_use]
    pub fn snapshot(&self) -> StoreSnapshot {
        let slots = self.inner.lock().expect("image store poisoned");
        StoreSnapshot {
            images: slots.images.clone(),
            assignment: slots.assignment,
        }
    }

    #[must_use]
    pub fn role_of(&self, slot: Slot) -> Role {
        let slots = self.inner.lock().expect("image store poisoned");
        slots.assignment.role_of(slot)
    }

    /// Inverts the role assignment and returns a snapshot taken under the
    /// same lock, so callers recompute both derived bitmaps from a
    /// consistent pair.
    pub fn swap_roles(&self) -> StoreSnapshot {
        let mut slots = self.inner.lock().expect("image store poisoned");
        slots.assignment = slots.assignment.swapped();
        tracing::debug!(primary = ?slots.assignment.primary_slot(), "roles swapped");
        StoreSnapshot {
            images: slots.images.clone(),
            assignment: slots.assignment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, value: u8) -> SharedImage {
        Arc::new(RgbaImage::from_pixel(
            width,
            height,
            image_rs::Rgba([value, value, value, 255]),
        ))
    }

    #[test]
    fn default_assignment_is_slot_a_primary() {
        let store = ImageStore::new();
        assert_eq!(store.role_of(Slot::A), Role::Primary);
        assert_eq!(store.role_of(Slot::B), Role::Secondary);
    }

    #[test]
    fn set_with_reports_current_role() {
        let store = ImageStore::new();
        let role = store.set_with(Slot::B, solid(2, 2, 10), |role, _| role);
        assert_eq!(role, Role::Secondary);

        store.swap_roles();
        let role = store.set_with(Slot::B, solid(2, 2, 20), |role, _| role);
        assert_eq!(role, Role::Primary);
    }

    #[test]
    fn get_returns_latest_snapshot() {
        let store = ImageStore::new();
        assert!(store.get(Slot::A).is_none());

        let first = solid(2, 2, 1);
        store.set(Slot::A, Arc::clone(&first));
        let held = store.get(Slot::A).expect("image present");

        // Replacing the slot does not disturb the held snapshot.
        store.set(Slot::A, solid(2, 2, 2));
        assert!(Arc::ptr_eq(&held, &first));
        assert_eq!(store.get(Slot::A).expect("image present")[(0, 0)].0[0], 2);
    }

    #[test]
    fn swap_roles_twice_restores_assignment() {
        let store = ImageStore::new();
        let once = store.swap_roles();
        assert_eq!(once.assignment.primary_slot(), Slot::B);
        let twice = store.swap_roles();
        assert_eq!(twice.assignment.primary_slot(), Slot::A);
    }

    #[test]
    fn snapshot_resolves_roles() {
        let store = ImageStore::new();
        store.set(Slot::A, solid(4, 4, 1));
        store.set(Slot::B, solid(8, 8, 2));

        let snapshot = store.snapshot();
        assert_eq!(snapshot.primary().expect("primary").width(), 4);
        assert_eq!(snapshot.secondary().expect("secondary").width(), 8);

        let swapped = store.swap_roles();
        assert_eq!(swapped.primary().expect("primary").width(), 8);
    }
}
