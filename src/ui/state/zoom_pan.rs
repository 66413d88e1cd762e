// SPDX-License-Identifier: MPL-2.0
//! Zoom and pan state management
//!
//! This module turns gesture and button events into a [`Transform`] for the
//! displayed image:
//! - Double-tap toggles between rest and the double-tap scale
//! - Drag live-follows the finger and snaps back when released at rest
//! - Pinch assigns the gesture magnification and is clamped when it ends
//! - Zoom buttons step the scale up or down
//!
//! Clamping happens at checkpoints (gesture end, taps, buttons, page changes),
//! never during the live `*_changed` callbacks. Between a pinch-changed event
//! and its pinch-ended event the scale may sit outside the allowed range.

use crate::config::REST_SCALE;
use crate::domain::{Offset, Transform, ZoomLimits};
use crate::ui::animation::Animation;

/// Logical state derived from the current scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomPhase {
    /// Scale at rest, no panning.
    AtRest,
    /// Scale above rest; drag pans freely.
    Zoomed,
}

/// Result of applying one event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformUpdate {
    /// Transform after the event.
    pub transform: Transform,
    /// Whether the event took the reset branch (rest scale, zero offset).
    pub reset: bool,
    /// Whether the transform differs from the one before the event.
    pub changed: bool,
    /// Curve the host should use to reach the new transform.
    pub animation: Animation,
}

/// Owns the transform of one displayed image.
#[derive(Debug, Clone, Default)]
pub struct ZoomPanController {
    transform: Transform,
    limits: ZoomLimits,
}

impl ZoomPanController {
    /// Creates a controller at rest.
    #[must_use]
    pub fn new(limits: ZoomLimits) -> Self {
        Self {
            transform: Transform::IDENTITY,
            limits,
        }
    }

    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    #[must_use]
    pub fn scale(&self) -> f32 {
        self.transform.scale
    }

    #[must_use]
    pub fn offset(&self) -> Offset {
        self.transform.offset
    }

    #[must_use]
    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    #[must_use]
    pub fn phase(&self) -> ZoomPhase {
        phase_of(&self.transform)
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.phase() == ZoomPhase::Zoomed
    }

    /// Jumps to the double-tap scale from rest, otherwise resets.
    pub fn on_double_tap(&mut self) -> TransformUpdate {
        if self.transform.scale == REST_SCALE {
            let next = Transform::new(self.limits.double_tap_scale(), self.transform.offset);
            self.apply(next, false, Animation::Spring)
        } else {
            self.reset()
        }
    }

    /// Follows a drag in progress.
    ///
    /// `translation` is the total translation since the drag began; the offset
    /// is replaced, not accumulated. Nothing is suppressed at rest scale: the
    /// offset is only corrected when the drag ends.
    pub fn on_drag_changed(&mut self, translation: Offset) -> TransformUpdate {
        if !translation.x.is_finite() || !translation.y.is_finite() {
            return self.unchanged();
        }
        let next = Transform::new(self.transform.scale, translation);
        self.apply(next, false, Animation::gesture_follow())
    }

    /// Snaps back to rest if the drag ended without zoom.
    pub fn on_drag_ended(&mut self) -> TransformUpdate {
        if self.transform.is_at_rest() {
            self.reset()
        } else {
            self.unchanged()
        }
    }

    /// Follows a pinch in progress.
    ///
    /// `magnification` is the cumulative magnification reported by the gesture
    /// recognizer and becomes the new scale as-is. A scale left above the
    /// maximum by an earlier overshoot is pulled back to the maximum instead,
    /// and a scale left below rest is kept until the pinch ends.
    pub fn on_pinch_changed(&mut self, magnification: f32) -> TransformUpdate {
        if !magnification.is_finite() {
            return self.unchanged();
        }

        let max = self.limits.max_scale();
        let scale = self.transform.scale;
        let next_scale = if (REST_SCALE..=max).contains(&scale) {
            magnification
        } else if scale > max {
            max
        } else {
            return self.unchanged();
        };

        let next = Transform::new(next_scale, self.transform.offset);
        self.apply(next, false, Animation::gesture_follow())
    }

    /// Clamps an overshoot to the maximum or collapses to rest.
    pub fn on_pinch_ended(&mut self) -> TransformUpdate {
        let max = self.limits.max_scale();
        if self.transform.scale > max {
            let next = Transform::new(max, self.transform.offset);
            self.apply(next, false, Animation::None)
        } else if self.transform.is_at_rest() {
            self.reset()
        } else {
            self.unchanged()
        }
    }

    /// Steps the scale down, resetting once it reaches rest.
    pub fn on_zoom_out_button(&mut self) -> TransformUpdate {
        let next_scale = self.transform.scale - self.limits.step();
        if next_scale <= REST_SCALE {
            return self.reset();
        }
        let next = Transform::new(next_scale, self.transform.offset);
        self.apply(next, false, Animation::Spring)
    }

    /// Returns to rest scale with no offset.
    pub fn on_zoom_reset_button(&mut self) -> TransformUpdate {
        self.reset()
    }

    /// Steps the scale up, never past the maximum. Never resets.
    ///
    /// A scale left below rest by an unfinished pinch steps up from rest.
    pub fn on_zoom_in_button(&mut self) -> TransformUpdate {
        let base = self.transform.scale.max(REST_SCALE);
        let next_scale = (base + self.limits.step()).min(self.limits.max_scale());
        let next = Transform::new(next_scale, self.transform.offset);
        self.apply(next, false, Animation::Spring)
    }

    /// A new page became active; zoom never carries over between pages.
    pub fn on_page_activated(&mut self) -> TransformUpdate {
        self.reset()
    }

    fn reset(&mut self) -> TransformUpdate {
        self.apply(Transform::IDENTITY, true, Animation::Spring)
    }

    fn unchanged(&self) -> TransformUpdate {
        TransformUpdate {
            transform: self.transform,
            reset: false,
            changed: false,
            animation: Animation::None,
        }
    }

    fn apply(&mut self, next: Transform, reset: bool, animation: Animation) -> TransformUpdate {
        let previous = std::mem::replace(&mut self.transform, next);
        let changed = previous != next;

        let (from, to) = (phase_of(&previous), phase_of(&next));
        if from != to {
            tracing::debug!(?from, ?to, scale = next.scale, "zoom phase changed");
        }

        TransformUpdate {
            transform: next,
            reset,
            changed,
            animation: if changed { animation } else { Animation::None },
        }
    }
}

fn phase_of(transform: &Transform) -> ZoomPhase {
    if transform.is_at_rest() {
        ZoomPhase::AtRest
    } else {
        ZoomPhase::Zoomed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MaxScale, ZoomStep};
    use crate::test_utils::assert_abs_diff_eq;

    fn at_scale(scale: f32, offset: Offset) -> ZoomPanController {
        ZoomPanController {
            transform: Transform::new(scale, offset),
            limits: ZoomLimits::default(),
        }
    }

    #[test]
    fn new_controller_is_at_rest() {
        let controller = ZoomPanController::default();
        assert_eq!(controller.transform(), Transform::IDENTITY);
        assert_eq!(controller.phase(), ZoomPhase::AtRest);
        assert!(!controller.is_zoomed());
    }

    #[test]
    fn double_tap_toggles_between_rest_and_max() {
        let mut controller = ZoomPanController::default();

        let update = controller.on_double_tap();
        assert_eq!(update.transform, Transform::new(5.0, Offset::ZERO));
        assert!(!update.reset);
        assert_eq!(update.animation, Animation::Spring);
        assert_eq!(controller.phase(), ZoomPhase::Zoomed);

        let update = controller.on_double_tap();
        assert_eq!(update.transform, Transform::IDENTITY);
        assert!(update.reset);
    }

    #[test]
    fn double_tap_while_zoomed_clears_offset() {
        let mut controller = at_scale(2.5, Offset::new(40.0, -12.0));
        let update = controller.on_double_tap();
        assert!(update.reset);
        assert_eq!(controller.offset(), Offset::ZERO);
    }

    #[test]
    fn drag_changed_replaces_offset() {
        let mut controller = at_scale(3.0, Offset::ZERO);
        controller.on_drag_changed(Offset::new(10.0, 5.0));
        let update = controller.on_drag_changed(Offset::new(12.0, 7.0));

        assert_eq!(controller.offset(), Offset::new(12.0, 7.0));
        assert_eq!(update.animation, Animation::gesture_follow());
    }

    #[test]
    fn drag_changed_at_rest_is_not_suppressed() {
        let mut controller = ZoomPanController::default();
        let update = controller.on_drag_changed(Offset::new(50.0, 30.0));
        assert!(update.changed);
        assert_eq!(controller.offset(), Offset::new(50.0, 30.0));
    }

    #[test]
    fn drag_ended_at_rest_collapses() {
        let mut controller = ZoomPanController::default();
        controller.on_drag_changed(Offset::new(50.0, 30.0));
        let update = controller.on_drag_ended();

        assert!(update.reset);
        assert_eq!(controller.transform(), Transform::IDENTITY);
    }

    #[test]
    fn drag_ended_while_zoomed_keeps_offset() {
        let mut controller = at_scale(3.0, Offset::ZERO);
        controller.on_drag_changed(Offset::new(-20.0, 8.0));
        let update = controller.on_drag_ended();

        assert!(!update.reset);
        assert!(!update.changed);
        assert_eq!(controller.transform(), Transform::new(3.0, Offset::new(-20.0, 8.0)));
    }

    #[test]
    fn pinch_assigns_magnification_directly() {
        let mut controller = at_scale(2.0, Offset::ZERO);
        controller.on_pinch_changed(1.5);
        assert_abs_diff_eq!(controller.scale(), 1.5);
    }

    #[test]
    fn pinch_overshoot_is_clamped_on_end() {
        let mut controller = ZoomPanController::default();
        controller.on_pinch_changed(7.0);
        assert_abs_diff_eq!(controller.scale(), 7.0);

        let update = controller.on_pinch_ended();
        assert_abs_diff_eq!(update.transform.scale, 5.0);
        assert!(!update.reset);
    }

    #[test]
    fn pinch_changed_after_overshoot_pulls_back_to_max() {
        let mut controller = ZoomPanController::default();
        controller.on_pinch_changed(7.0);
        controller.on_pinch_changed(8.0);
        assert_abs_diff_eq!(controller.scale(), 5.0);
    }

    #[test]
    fn pinch_below_rest_is_held_until_end() {
        let mut controller = ZoomPanController::default();
        controller.on_pinch_changed(0.4);
        let update = controller.on_pinch_changed(2.0);
        assert!(!update.changed);
        assert_abs_diff_eq!(controller.scale(), 0.4);

        let update = controller.on_pinch_ended();
        assert!(update.reset);
        assert_eq!(controller.transform(), Transform::IDENTITY);
    }

    #[test]
    fn pinch_ended_within_range_keeps_scale() {
        let mut controller = ZoomPanController::default();
        controller.on_pinch_changed(3.2);
        let update = controller.on_pinch_ended();
        assert!(!update.changed);
        assert_abs_diff_eq!(controller.scale(), 3.2);
    }

    #[test]
    fn non_finite_input_is_ignored() {
        let mut controller = at_scale(2.0, Offset::new(1.0, 1.0));
        assert!(!controller.on_pinch_changed(f32::NAN).changed);
        assert!(!controller.on_drag_changed(Offset::new(f32::INFINITY, 0.0)).changed);
        assert_eq!(controller.transform(), Transform::new(2.0, Offset::new(1.0, 1.0)));
    }

    #[test]
    fn zoom_buttons_step_by_one() {
        let mut controller = ZoomPanController::default();
        controller.on_zoom_in_button();
        controller.on_zoom_in_button();
        controller.on_zoom_in_button();
        assert_abs_diff_eq!(controller.scale(), 4.0);

        controller.on_zoom_out_button();
        assert_abs_diff_eq!(controller.scale(), 3.0);
    }

    #[test]
    fn zoom_in_stops_at_max_without_reset() {
        let mut controller = at_scale(4.5, Offset::ZERO);
        let update = controller.on_zoom_in_button();
        assert_abs_diff_eq!(update.transform.scale, 5.0);
        assert!(!update.reset);

        let update = controller.on_zoom_in_button();
        assert!(!update.changed);
        assert_eq!(update.animation, Animation::None);
    }

    #[test]
    fn zoom_out_to_rest_resets_offset() {
        let mut controller = at_scale(2.0, Offset::new(15.0, 15.0));
        let update = controller.on_zoom_out_button();
        assert!(update.reset);
        assert_eq!(controller.transform(), Transform::IDENTITY);
    }

    #[test]
    fn zoom_out_at_rest_stays_at_rest() {
        let mut controller = ZoomPanController::default();
        let update = controller.on_zoom_out_button();
        assert!(update.reset);
        assert!(!update.changed);
        assert_eq!(controller.transform(), Transform::IDENTITY);
    }

    #[test]
    fn zoom_in_from_unfinished_pinch_below_rest_starts_at_rest() {
        let mut controller = ZoomPanController::default();
        controller.on_pinch_changed(0.2);
        controller.on_zoom_in_button();
        assert_abs_diff_eq!(controller.scale(), 2.0);
    }

    #[test]
    fn reset_button_is_idempotent() {
        let mut controller = at_scale(3.0, Offset::new(10.0, 10.0));
        let first = controller.on_zoom_reset_button();
        let second = controller.on_zoom_reset_button();

        assert_eq!(first.transform, Transform::IDENTITY);
        assert_eq!(second.transform, Transform::IDENTITY);
        assert!(first.changed);
        assert!(!second.changed);
    }

    #[test]
    fn page_activation_resets_zoom() {
        let mut controller = at_scale(3.0, Offset::new(10.0, 10.0));
        let update = controller.on_page_activated();
        assert!(update.reset);
        assert_eq!(controller.transform(), Transform::IDENTITY);
    }

    #[test]
    fn custom_limits_drive_double_tap_and_step() {
        let limits = ZoomLimits::new(MaxScale::new(8.0), 2.5, ZoomStep::new(0.5));
        let mut controller = ZoomPanController::new(limits);

        controller.on_double_tap();
        assert_abs_diff_eq!(controller.scale(), 2.5);

        controller.on_zoom_in_button();
        assert_abs_diff_eq!(controller.scale(), 3.0);

        controller.on_pinch_changed(9.0);
        controller.on_pinch_ended();
        assert_abs_diff_eq!(controller.scale(), 8.0);
    }
}
