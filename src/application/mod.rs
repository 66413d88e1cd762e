// SPDX-License-Identifier: MPL-2.0
//! Application layer - seams between the state core and the host.
//!
//! - [`port`]: Trait definitions (interfaces) the host implements
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - The host implements application layer ports
//! - The viewer session consumes them without knowing the implementation

pub mod port;
