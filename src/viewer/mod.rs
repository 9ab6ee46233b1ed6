// SPDX-License-Identifier: MPL-2.0
//! Picture-in-picture comparison view facade.
//!
//! [`PictureInPictureView`] ties the image store, the derived display state,
//! the drag machine, and the UI dispatcher together behind the surface the
//! host toolkit talks to: feed images and pointer/resize events in, read a
//! [`RenderSnapshot`] out on every repaint.
//!
//! # Threading
//!
//! The view itself lives on the UI thread. Producer threads set images
//! through a cloneable [`ImageUpdater`]: the slot replacement and the
//! derived-bitmap recomputation happen inside the store's critical section,
//! and the result is handed to the UI thread as one queued callback, so the
//! install order always matches the store's write order.
//!
//! A resize or role swap recomputes both derived bitmaps in place, bypassing
//! the queue. Each such recomputation bumps the display state's generation;
//! a queued install carries the generation it was derived under and is
//! dropped at drain time when it no longer matches, since the bypassing
//! recomputation already read the slot image it was derived from.
//!
//! Lock order is store before display; no path holds the display lock while
//! taking the store lock.

use std::sync::{Arc, Mutex};

use crate::config::Config;
use crate::dispatch::UiDispatcher;
use crate::domain::{Offset, Point, Rect, Size};
use crate::interaction::{hit, DragState};
use crate::store::{ImageStore, Role, SharedImage, Slot, StoreSnapshot};
use crate::view::{scale, thumbnail, DisplayState};

/// Host callback requesting a repaint.
pub type RepaintHandle = Arc<dyn Fn() + Send + Sync>;

/// What the renderer reads for one repaint. A pure copy; holding it does not
/// block the view.
#[derive(Clone)]
pub struct RenderSnapshot {
    /// Primary image scaled to the viewport, absent while that slot is
    /// empty.
    pub primary: Option<SharedImage>,

    /// Thumbnail of the secondary image, absent while that slot is empty.
    pub thumbnail: Option<SharedImage>,

    /// Content-space position where the thumbnail is drawn.
    pub thumbnail_position: Point,

    /// Current scroll offset of the primary view.
    pub view_offset: Offset,

    /// Border to inflate the drawn thumbnail frame by, in pixels.
    pub thumbnail_border: u32,
}

/// The comparison view. All methods except [`render`](Self::render) belong
/// to the UI thread; cross-thread image updates go through
/// [`updater`](Self::updater).
pub struct PictureInPictureView {
    config: Config,
    store: Arc<ImageStore>,
    display: Arc<Mutex<DisplayState>>,
    drag: DragState,
    dispatcher: Arc<dyn UiDispatcher>,
    repaint: RepaintHandle,
}

impl PictureInPictureView {
    pub fn new(
        config: Config,
        dispatcher: Arc<dyn UiDispatcher>,
        repaint: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        Self {
            config,
            store: Arc::new(ImageStore::new()),
            display: Arc::new(Mutex::new(DisplayState::default())),
            drag: DragState::default(),
            dispatcher,
            repaint: Arc::new(repaint),
        }
    }

    /// A handle for producer threads to replace slot images.
    #[must_use]
    pub fn updater(&self) -> ImageUpdater {
        ImageUpdater {
            thumbnail_box: self.config.thumbnail_box(),
            store: Arc::clone(&self.store),
            display: Arc::clone(&self.display),
            dispatcher: Arc::clone(&self.dispatcher),
            repaint: Arc::clone(&self.repaint),
        }
    }

    /// Replaces the image in `slot`. Safe from any thread; schedules a
    /// repaint.
    pub fn set_image(&self, slot: Slot, image: SharedImage) {
        self.updater().set(slot, image);
    }

    /// Recomputes both derived bitmaps for the new viewport size and
    /// schedules a repaint.
    pub fn on_resize(&mut self, viewport: Size) {
        let snapshot = self.store.snapshot();
        let primary = derive_primary(&snapshot, viewport);
        let thumb = derive_thumbnail(&snapshot, self.config.thumbnail_box());

        {
            let mut display = self.lock_display();
            display.viewport = viewport;
            display.primary = primary;
            display.thumbnail = thumb;
            display.invalidate_pending();
        }
        (self.repaint)();
    }

    /// Pointer-down outside the thumbnail begins a pan. Returns true when a
    /// drag session started, in which case the host should capture the
    /// pointer.
    pub fn on_pointer_down(&mut self, position: Point) -> bool {
        let (region, offset) = {
            let display = self.lock_display();
            (
                hit::thumbnail_hit_region(display.viewport, display.thumbnail_size(), &self.config),
                display.view_offset,
            )
        };

        if region.contains_exclusive(position) {
            return false;
        }
        self.drag.start(position, offset);
        true
    }

    /// Pointer motion pans the primary view while a drag is active.
    pub fn on_pointer_move(&mut self, position: Point) {
        self.pan_to(position);
    }

    /// Pointer-up applies the final pan position and ends the drag. The host
    /// releases its pointer capture unconditionally.
    pub fn on_pointer_up(&mut self, position: Point) {
        self.pan_to(position);
        self.drag.stop();
    }

    /// Capture loss (window defocus and the like) discards any drag session
    /// unconditionally.
    pub fn on_capture_lost(&mut self) {
        self.drag.stop();
    }

    /// Double-click inside the thumbnail hit-region swaps the primary and
    /// secondary roles. Returns true when a swap happened.
    ///
    /// The thumbnail is regenerated from the outgoing primary bitmap using
    /// the just-departed viewport crop, so after the swap it shows what was
    /// just on screen; the two per-role view offsets are exchanged.
    pub fn on_double_click(&mut self, position: Point) -> bool {
        let (viewport, view_offset, outgoing_primary) = {
            let display = self.lock_display();
            let region = hit::thumbnail_hit_region(
                display.viewport,
                display.thumbnail_size(),
                &self.config,
            );
            if !region.contains_exclusive(position) {
                return false;
            }
            (display.viewport, display.view_offset, display.primary.clone())
        };

        let crop = Rect::new(Point::ZERO + view_offset, viewport);
        let new_thumbnail = outgoing_primary
            .and_then(|bitmap| thumbnail::generate(&bitmap, self.config.thumbnail_box(), Some(crop)))
            .map(Arc::new);

        let snapshot = self.store.swap_roles();
        let new_primary = derive_primary(&snapshot, viewport);

        {
            let mut display = self.lock_display();
            display.primary = new_primary;
            display.thumbnail = new_thumbnail;
            display.exchange_offsets();
            display.invalidate_pending();
        }
        (self.repaint)();
        true
    }

    /// Whether a drag session is currently active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Pure read for the repaint path. Takes a short-lived lock only to copy
    /// out the current bitmap handles and offsets.
    #[must_use]
    pub fn render(&self) -> RenderSnapshot {
        let display = self.lock_display();
        let anchor = hit::thumbnail_anchor(display.viewport, &self.config);
        RenderSnapshot {
            primary: display.primary.clone(),
            thumbnail: display.thumbnail.clone(),
            thumbnail_position: Point::ZERO + display.view_offset + anchor,
            view_offset: display.view_offset,
            thumbnail_border: self.config.thumbnail_border,
        }
    }

    fn pan_to(&mut self, position: Point) {
        if let Some(offset) = self.drag.offset_for(position) {
            self.lock_display().view_offset = offset;
            (self.repaint)();
        }
    }

    fn lock_display(&self) -> std::sync::MutexGuard<'_, DisplayState> {
        self.display.lock().expect("display state poisoned")
    }
}

/// Cross-thread handle for replacing slot images.
#[derive(Clone)]
pub struct ImageUpdater {
    thumbnail_box: Size,
    store: Arc<ImageStore>,
    display: Arc<Mutex<DisplayState>>,
    dispatcher: Arc<dyn UiDispatcher>,
    repaint: RepaintHandle,
}

impl ImageUpdater {
    /// Replaces the image in `slot`, recomputes the one derived bitmap that
    /// depends on the slot's current role, and marshals the install plus a
    /// repaint request to the UI thread.
    pub fn set(&self, slot: Slot, image: SharedImage) {
        let thumbnail_box = self.thumbnail_box;

        // Viewport/generation read, derivation, and enqueue all happen inside
        // the store's critical section: the queue order then matches the
        // store's write order, so the last set for a slot is also the last
        // install. A resize or swap that lands after this point bumps the
        // generation and recomputes from the store, which already holds this
        // image; the install below then arrives stale and is dropped.
        self.store.set_with(slot, image, |role, image| {
            let (viewport, generation) = {
                let display = self.display.lock().expect("display state poisoned");
                (display.viewport, display.generation())
            };

            let derived = match role {
                Role::Primary => Derived::Primary(
                    scale::scale_to_viewport(image, viewport).map(Arc::new),
                ),
                Role::Secondary => Derived::Thumbnail(
                    thumbnail::generate(image, thumbnail_box, None).map(Arc::new),
                ),
            };

            let display = Arc::clone(&self.display);
            let repaint = Arc::clone(&self.repaint);
            self.dispatcher.post(Box::new(move || {
                {
                    let mut display = display.lock().expect("display state poisoned");
                    if display.generation() != generation {
                        tracing::trace!("dropping stale derived-bitmap install");
                        return;
                    }
                    match derived {
                        Derived::Primary(bitmap) => display.primary = bitmap,
                        Derived::Thumbnail(bitmap) => display.thumbnail = bitmap,
                    }
                }
                repaint();
            }));
        });
    }
}

enum Derived {
    Primary(Option<SharedImage>),
    Thumbnail(Option<SharedImage>),
}

fn derive_primary(snapshot: &StoreSnapshot, viewport: Size) -> Option<SharedImage> {
    snapshot
        .primary()
        .and_then(|image| scale::scale_to_viewport(image, viewport))
        .map(Arc::new)
}

fn derive_thumbnail(snapshot: &StoreSnapshot, thumbnail_box: Size) -> Option<SharedImage> {
    snapshot
        .secondary()
        .and_then(|image| thumbnail::generate(image, thumbnail_box, None))
        .map(Arc::new)
}
