// SPDX-License-Identifier: MPL-2.0
//! Animation hints attached to state changes.
//!
//! The core never animates anything itself. Each update tells the host which
//! curve to use when moving the rendered image to the new transform.

use crate::config::{DRAWER_SLIDE_DURATION, GESTURE_FOLLOW_DURATION, THUMBNAIL_FADE_DURATION};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Animation {
    /// Apply immediately.
    #[default]
    None,
    /// Spring curve, used for resets, double-tap and button zoom.
    Spring,
    /// Linear interpolation over the given duration.
    Linear(Duration),
    /// Ease-out curve over the given duration.
    EaseOut(Duration),
}

impl Animation {
    /// Curve used while following a live drag or pinch.
    #[must_use]
    pub fn gesture_follow() -> Self {
        Self::Linear(GESTURE_FOLLOW_DURATION)
    }

    /// Curve used when the drawer slides open or closed.
    #[must_use]
    pub fn drawer_slide() -> Self {
        Self::EaseOut(DRAWER_SLIDE_DURATION)
    }

    /// Curve used when the drawer thumbnails fade in or out.
    #[must_use]
    pub fn thumbnail_fade() -> Self {
        Self::EaseOut(THUMBNAIL_FADE_DURATION)
    }
}
