// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! # Modules
//!
//! - [`photo`]: Photo records and the query that selects them
//!   ([`Photo`](photo::Photo), [`PhotoId`](photo::PhotoId),
//!   [`PhotoQuery`](photo::PhotoQuery))

pub mod photo;

pub use photo::{Photo, PhotoId, PhotoQuery};
