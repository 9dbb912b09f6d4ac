// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **API**: Photo API endpoint and credential sources
//! - **Grid**: Column count and responsive breakpoints

// ==========================================================================
// API Defaults
// ==========================================================================

/// Base URL of the Unsplash API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.unsplash.com";

/// Environment variable holding the API access key.
pub const ENV_ACCESS_KEY: &str = "UNSPLASH_ACCESS_KEY";

// ==========================================================================
// Grid Defaults
// ==========================================================================

/// Default maximum number of columns in the photo grid.
pub const DEFAULT_MAX_COLUMNS: u16 = 3;

/// Minimum allowed column count.
pub const MIN_COLUMNS: u16 = 1;

/// Maximum allowed column count.
pub const MAX_COLUMNS: u16 = 6;

/// Below this window width the grid collapses to a single column.
pub const BREAKPOINT_SM: f32 = 640.0;

/// Below this window width the grid shows at most two columns.
pub const BREAKPOINT_MD: f32 = 768.0;

/// Maximum width of the browser content, centered in the window.
pub const MAX_CONTENT_WIDTH: f32 = 1152.0;
