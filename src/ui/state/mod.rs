// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Plain state objects updated through explicit methods, separated from the
//! [`Viewer`](crate::ui::viewer::Viewer) session that routes events to them.

pub mod drawer;
pub mod page_selector;
pub mod zoom_pan;

// Re-export commonly used types for convenience
pub use drawer::DrawerState;
pub use page_selector::PageSelector;
pub use zoom_pan::{TransformUpdate, ZoomPanController, ZoomPhase};
