// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording what the user did on a screen.
//!
//! Handled actions are stored in a memory-bounded circular buffer and can be
//! exported as TOML for bug reports.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: A [`UserAction`] with its timing and resulting scale
//! - [`ActionLog`]: Per-session recorder owning the buffer

mod buffer;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use events::{DiagnosticEvent, UserAction};

use crate::error::Result;
use serde::Serialize;
use std::time::Instant;

/// Records the actions handled by one viewer session.
#[derive(Debug, Clone)]
pub struct ActionLog {
    started_at: Instant,
    events: CircularBuffer<DiagnosticEvent>,
}

#[derive(Serialize)]
struct Report<'a> {
    events: Vec<&'a DiagnosticEvent>,
}

impl ActionLog {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            started_at: Instant::now(),
            events: CircularBuffer::new(capacity),
        }
    }

    pub fn record(&mut self, action: UserAction, scale: f32) {
        let elapsed_ms = u64::try_from(self.started_at.elapsed().as_millis()).unwrap_or(u64::MAX);
        self.events.push(DiagnosticEvent {
            elapsed_ms,
            scale,
            action,
        });
    }

    /// Recorded events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.events.iter()
    }

    #[must_use]
    pub fn last(&self) -> Option<&DiagnosticEvent> {
        self.events.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Serializes the recorded events as a TOML document.
    pub fn export_toml(&self) -> Result<String> {
        let report = Report {
            events: self.events.iter().collect(),
        };
        Ok(toml::to_string_pretty(&report)?)
    }
}

impl Default for ActionLog {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}
