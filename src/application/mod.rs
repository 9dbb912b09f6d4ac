// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! The UI talks to the outside world only through these ports, so the
//! browser can be driven by an in-memory source in tests and by the HTTP
//! client in the shipped binary.

pub mod port;
