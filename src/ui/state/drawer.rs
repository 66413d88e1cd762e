// SPDX-License-Identifier: MPL-2.0
//! Thumbnail drawer state management
//!
//! Tracks whether the drawer holding the page thumbnails is open.

/// Open/closed state of the thumbnail drawer. Closed by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawerState {
    open: bool,
}

impl DrawerState {
    /// Flips the drawer and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }
}
