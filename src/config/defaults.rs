// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom**: Rest scale, maximum scale and button step bounds
//! - **Animation**: Durations hinted to the host for each kind of change
//! - **Pages**: Thumbnail naming and the built-in page catalog
//! - **Diagnostics**: Action buffer capacity

use std::time::Duration;

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Scale of an image at rest. Panning is not allowed at this scale.
pub const REST_SCALE: f32 = 1.0;

/// Default maximum scale reachable by pinch, double-tap or buttons.
pub const DEFAULT_MAX_SCALE: f32 = 5.0;

/// Smallest configurable maximum scale.
pub const MIN_MAX_SCALE: f32 = 2.0;

/// Largest configurable maximum scale.
pub const MAX_MAX_SCALE: f32 = 20.0;

/// Default scale a double-tap jumps to from rest.
pub const DEFAULT_DOUBLE_TAP_SCALE: f32 = 5.0;

/// Default scale increment of the zoom in/out buttons.
pub const DEFAULT_ZOOM_STEP: f32 = 1.0;

/// Minimum zoom button step.
pub const MIN_ZOOM_STEP: f32 = 0.1;

/// Maximum zoom button step.
pub const MAX_ZOOM_STEP: f32 = 5.0;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Duration of the linear animation following live drag and pinch updates.
pub const GESTURE_FOLLOW_DURATION: Duration = Duration::from_secs(1);

/// Duration of the thumbnail fade when the drawer opens or closes.
pub const THUMBNAIL_FADE_DURATION: Duration = Duration::from_millis(500);

/// Duration of the drawer slide.
pub const DRAWER_SLIDE_DURATION: Duration = Duration::from_millis(350);

// ==========================================================================
// Page Defaults
// ==========================================================================

/// Prefix prepended to an image name to obtain its thumbnail asset name.
pub const THUMBNAIL_PREFIX: &str = "thumb-";

/// Built-in page catalog, as `(id, image name)` pairs.
pub const DEFAULT_PAGES: &[(u32, &str)] = &[
    (1, "magazine-front-cover"),
    (2, "magazine-back-cover"),
];

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of handled actions kept for diagnostics.
pub const DEFAULT_DIAGNOSTICS_CAPACITY: usize = 256;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_CAPACITY: usize = 8;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_CAPACITY: usize = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Zoom validation
    assert!(REST_SCALE == 1.0);
    assert!(MIN_MAX_SCALE > REST_SCALE);
    assert!(DEFAULT_MAX_SCALE >= MIN_MAX_SCALE);
    assert!(DEFAULT_MAX_SCALE <= MAX_MAX_SCALE);
    assert!(DEFAULT_DOUBLE_TAP_SCALE > REST_SCALE);
    assert!(DEFAULT_DOUBLE_TAP_SCALE <= DEFAULT_MAX_SCALE);
    assert!(MIN_ZOOM_STEP > 0.0);
    assert!(DEFAULT_ZOOM_STEP >= MIN_ZOOM_STEP);
    assert!(DEFAULT_ZOOM_STEP <= MAX_ZOOM_STEP);

    // Page validation
    assert!(!DEFAULT_PAGES.is_empty());

    // Diagnostics validation
    assert!(MIN_DIAGNOSTICS_CAPACITY > 0);
    assert!(DEFAULT_DIAGNOSTICS_CAPACITY >= MIN_DIAGNOSTICS_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_CAPACITY <= MAX_DIAGNOSTICS_CAPACITY);
};
