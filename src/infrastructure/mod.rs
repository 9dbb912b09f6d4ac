// SPDX-License-Identifier: MPL-2.0
//! Infrastructure adapters implementing the application ports.
//!
//! - [`unsplash`]: HTTP client for the Unsplash API

pub mod unsplash;

pub use unsplash::UnsplashClient;
