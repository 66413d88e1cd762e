// SPDX-License-Identifier: MPL-2.0
//! Screen state and its orchestration, free of any UI toolkit.
//!
//! The host renders; this module decides what to render following the
//! Elm-style "state down, messages up" pattern.
//!
//! - [`viewer`] - Session routing messages to the state objects
//! - [`state`] - Zoom/pan controller, page selector, drawer
//! - [`animation`] - Animation hints attached to every change
//! - [`info_panel`] - Scale and offset readout

pub mod animation;
pub mod info_panel;
pub mod state;
pub mod viewer;

pub use viewer::{Effect, Message, Snapshot, Viewer};
