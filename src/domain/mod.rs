// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects with ZERO external dependencies.
//!
//! # Modules
//!
//! - [`page`]: Page catalog types ([`PageId`](page::PageId), [`Page`](page::Page),
//!   [`PageList`](page::PageList))
//! - [`transform`]: Geometry applied to the displayed image ([`Offset`](transform::Offset),
//!   [`Transform`](transform::Transform))
//! - [`zoom`]: Zoom bounds ([`MaxScale`](zoom::MaxScale), [`ZoomStep`](zoom::ZoomStep),
//!   [`ZoomLimits`](zoom::ZoomLimits))

pub mod page;
pub mod transform;
pub mod zoom;

pub use page::{Page, PageId, PageList};
pub use transform::{Offset, Transform};
pub use zoom::{MaxScale, ZoomLimits, ZoomStep};
