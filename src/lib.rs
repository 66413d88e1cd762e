// SPDX-License-Identifier: MPL-2.0
//! `pinch_lens` holds the state behind a pinch & zoom image screen.
//!
//! It turns double-taps, drags, pinches and zoom button presses into a
//! scale/offset transform for the displayed image, tracks which page of a
//! fixed catalog is shown and whether the thumbnail drawer is open. Rendering
//! is left to the host, which feeds events to a [`Viewer`](ui::Viewer) and
//! applies the resulting [`Transform`](domain::Transform).
//!
//! ```
//! use pinch_lens::ui::{Message, Viewer};
//!
//! let mut viewer = Viewer::default();
//! viewer.handle(Message::PinchChanged(7.0));
//! viewer.handle(Message::PinchEnded);
//! assert_eq!(viewer.transform().scale, 5.0);
//! ```

#![doc(html_root_url = "https://docs.rs/pinch_lens/0.1.0")]

pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
