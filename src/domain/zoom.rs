// SPDX-License-Identifier: MPL-2.0
//! Zoom newtypes.
//!
//! Type-safe wrappers for the zoom limits, guaranteed to be within
//! valid ranges so the state machine never has to re-validate them.

use crate::config::{
    DEFAULT_DOUBLE_TAP_SCALE, DEFAULT_MAX_SCALE, DEFAULT_ZOOM_STEP, MAX_MAX_SCALE, MAX_ZOOM_STEP,
    MIN_MAX_SCALE, MIN_ZOOM_STEP, REST_SCALE,
};

// =============================================================================
// MaxScale
// =============================================================================

/// Upper scale bound, guaranteed to be within the valid range (2×–20×).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxScale(f32);

impl MaxScale {
    /// Creates a new maximum scale, clamping the value to the valid range.
    /// Non-finite values fall back to the default.
    #[must_use]
    pub fn new(scale: f32) -> Self {
        if scale.is_finite() {
            Self(scale.clamp(MIN_MAX_SCALE, MAX_MAX_SCALE))
        } else {
            Self::default()
        }
    }

    /// Returns the raw scale value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for MaxScale {
    fn default() -> Self {
        Self(DEFAULT_MAX_SCALE)
    }
}

// =============================================================================
// ZoomStep
// =============================================================================

/// Scale increment of the zoom buttons, guaranteed to be within valid range (0.1–5).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomStep(f32);

impl ZoomStep {
    /// Creates a new zoom step, clamping the value to the valid range.
    /// Non-finite values fall back to the default.
    #[must_use]
    pub fn new(step: f32) -> Self {
        if step.is_finite() {
            Self(step.clamp(MIN_ZOOM_STEP, MAX_ZOOM_STEP))
        } else {
            Self::default()
        }
    }

    /// Returns the raw step value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for ZoomStep {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_STEP)
    }
}

// =============================================================================
// ZoomLimits
// =============================================================================

/// Bounds and step sizes driving the zoom/pan state machine.
///
/// The defaults give a 1×–5× range where a double-tap jumps straight to 5×
/// and each zoom button press moves by one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    max_scale: MaxScale,
    double_tap_scale: f32,
    step: ZoomStep,
}

impl ZoomLimits {
    /// Builds limits; the double-tap target is kept strictly above rest and
    /// no higher than the maximum scale.
    #[must_use]
    pub fn new(max_scale: MaxScale, double_tap_scale: f32, step: ZoomStep) -> Self {
        let double_tap_scale = if double_tap_scale.is_finite() && double_tap_scale > REST_SCALE {
            double_tap_scale.min(max_scale.value())
        } else {
            max_scale.value()
        };
        Self {
            max_scale,
            double_tap_scale,
            step,
        }
    }

    #[must_use]
    pub fn max_scale(&self) -> f32 {
        self.max_scale.value()
    }

    #[must_use]
    pub fn double_tap_scale(&self) -> f32 {
        self.double_tap_scale
    }

    #[must_use]
    pub fn step(&self) -> f32 {
        self.step.value()
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self::new(
            MaxScale::default(),
            DEFAULT_DOUBLE_TAP_SCALE,
            ZoomStep::default(),
        )
    }
}
