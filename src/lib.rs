// SPDX-License-Identifier: MPL-2.0
//! `pair_lens` is the toolkit-agnostic core of a picture-in-picture image
//! comparison viewer.
//!
//! It provides the state and geometry logic behind three reusable widgets:
//! the pan/zoom/thumbnail/swap machinery of a two-image comparison view, a
//! basic pannable scrolled-image view, and a tabbed grid inspector driven by
//! per-type field descriptors. Rendering, widget layout, and event dispatch
//! stay in the host GUI toolkit: the host feeds pointer and resize events in
//! and reads render snapshots out.

#![doc(html_root_url = "https://docs.rs/pair_lens/0.1.0")]

pub mod config;
pub mod dispatch;
pub mod domain;
pub mod error;
pub mod grid;
pub mod interaction;
pub mod scroll;
pub mod store;
pub mod view;
pub mod viewer;

#[cfg(test)]
pub(crate) mod test_utils;

pub use dispatch::{ChannelDispatcher, ImmediateDispatcher, UiDispatcher, UiQueue};
pub use store::{ImageStore, Role, SharedImage, Slot};
pub use viewer::{PictureInPictureView, RenderSnapshot};
