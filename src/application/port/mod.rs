// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`assets`]: Resolution of image and thumbnail names into renderable data
//!
//! # Design Notes
//!
//! - Traits use domain types only (no UI toolkit handles)
//! - Resolution failures are reported as `None`; what to render instead is
//!   the host's decision

pub mod assets;

pub use assets::{AssetResolver, ResolvedPage};
