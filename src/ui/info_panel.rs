// SPDX-License-Identifier: MPL-2.0
//! Text readout of the current transform, shown in the info overlay above
//! the image.

use crate::domain::Transform;
use std::fmt;

/// Formatted scale and offset of a transform.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoPanel {
    scale: String,
    offset_x: String,
    offset_y: String,
}

impl InfoPanel {
    #[must_use]
    pub fn from_transform(transform: &Transform) -> Self {
        Self {
            scale: format_number(transform.scale),
            offset_x: format_number(transform.offset.x),
            offset_y: format_number(transform.offset.y),
        }
    }

    /// e.g. `Scale: 2.5`
    #[must_use]
    pub fn scale_label(&self) -> String {
        format!("Scale: {}", self.scale)
    }

    /// e.g. `Offset: W 10 · H -4`
    #[must_use]
    pub fn offset_label(&self) -> String {
        format!("Offset: W {} · H {}", self.offset_x, self.offset_y)
    }
}

impl fmt::Display for InfoPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.scale_label(), self.offset_label())
    }
}

/// Formats a number for display (removes unnecessary decimal places)
#[must_use]
pub fn format_number(value: f32) -> String {
    if value.fract().abs() < f32::EPSILON {
        // Value has no fractional part, so it represents an integer exactly
        #[allow(clippy::cast_possible_truncation)]
        let int_value = value as i32;
        format!("{int_value}")
    } else {
        let formatted = format!("{value:.1}")
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string();
        // -0.04 rounds to "-0"
        if formatted == "-0" {
            "0".to_string()
        } else {
            formatted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Offset;

    #[test]
    fn format_number_drops_trailing_zeros() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(1.26), "1.3");
        assert_eq!(format_number(-4.0), "-4");
        assert_eq!(format_number(-0.04), "0");
    }

    #[test]
    fn identity_readout() {
        let panel = InfoPanel::from_transform(&Transform::IDENTITY);
        assert_eq!(panel.scale_label(), "Scale: 1");
        assert_eq!(panel.offset_label(), "Offset: W 0 · H 0");
    }

    #[test]
    fn zoomed_readout_shows_offset() {
        let panel = InfoPanel::from_transform(&Transform::new(2.5, Offset::new(10.0, -4.0)));
        assert_eq!(panel.to_string(), "Scale: 2.5 | Offset: W 10 · H -4");
    }
}
