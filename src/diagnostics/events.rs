// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.

use serde::{Deserialize, Serialize};

/// User interactions captured for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UserAction {
    // ==========================================================================
    // Gestures
    // ==========================================================================
    DoubleTap,

    DragChanged {
        x: f32,
        y: f32,
    },

    DragEnded,

    PinchChanged {
        /// Cumulative magnification reported by the recognizer.
        magnification: f32,
    },

    PinchEnded,

    // ==========================================================================
    // Buttons
    // ==========================================================================
    ZoomIn,

    ZoomOut,

    ResetZoom,

    // ==========================================================================
    // Drawer & Pages
    // ==========================================================================
    ToggleDrawer,

    SelectPage {
        page: u32,
        /// False when the page id was not part of the catalog.
        accepted: bool,
    },
}

/// A recorded action with its time relative to the start of the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticEvent {
    pub elapsed_ms: u64,
    /// Scale right after the action was handled.
    pub scale: f32,
    pub action: UserAction,
}
