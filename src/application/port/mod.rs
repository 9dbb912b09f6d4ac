// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`photo_source`]: Photo listing/search and image download
//!
//! # Design Notes
//!
//! - Traits use domain types only (no Iced handles, no `reqwest` types)
//! - Traits are `Send + Sync` so they can be shared across tasks
//! - Methods return boxed `'static` futures that callers hand to `Task::perform`

pub mod photo_source;

pub use photo_source::{PhotoFuture, PhotoSource};
