// SPDX-License-Identifier: MPL-2.0
//! Geometric value objects applied by the host to the displayed image.

use crate::config::REST_SCALE;

/// Translation of the displayed image, in host layout units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    /// No translation.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Scale and translation of the displayed image.
///
/// At every checkpoint of the zoom/pan state machine the scale lies between
/// [`REST_SCALE`] and the configured maximum, and a transform at rest scale
/// carries no offset. Live gesture updates may break this until the gesture
/// ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f32,
    pub offset: Offset,
}

impl Transform {
    /// Rest scale, no offset.
    pub const IDENTITY: Self = Self {
        scale: REST_SCALE,
        offset: Offset::ZERO,
    };

    #[must_use]
    pub const fn new(scale: f32, offset: Offset) -> Self {
        Self { scale, offset }
    }

    /// Returns whether the scale is at (or below) the rest scale.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.scale <= REST_SCALE
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_rest_scale_without_offset() {
        let transform = Transform::default();
        assert_eq!(transform, Transform::IDENTITY);
        assert!(transform.is_at_rest());
        assert_eq!(transform.offset, Offset::ZERO);
    }

    #[test]
    fn scale_below_rest_counts_as_rest() {
        assert!(Transform::new(0.4, Offset::ZERO).is_at_rest());
        assert!(!Transform::new(1.01, Offset::ZERO).is_at_rest());
    }
}
