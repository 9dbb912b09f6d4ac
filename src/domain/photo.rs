// SPDX-License-Identifier: MPL-2.0
//! Photo records as the browser sees them.
//!
//! These mirror what the image API returns, flattened to the handful of
//! fields a card needs. They are read-only; a fetch replaces them wholesale.

use std::fmt;

// =============================================================================
// PhotoId
// =============================================================================

/// Identifier assigned by the image API. Unique within a result set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhotoId(String);

impl PhotoId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Photo
// =============================================================================

/// A single image record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub id: PhotoId,
    /// URL of the display-sized rendition.
    pub image_url: String,
    /// Name of the photographer.
    pub author: String,
    /// Page for the photo on the hosting site.
    pub link: String,
    /// Alt text, when the API has one.
    pub description: Option<String>,
}

// =============================================================================
// PhotoQuery
// =============================================================================

/// Which endpoint a fetch hits.
///
/// Only the empty string selects the default listing. Whitespace is a real
/// search term and goes to the search endpoint untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoQuery {
    /// Default feed, no filter.
    Listing,
    /// Full-text search for the given text.
    Search(String),
}

impl PhotoQuery {
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        if text.is_empty() {
            PhotoQuery::Listing
        } else {
            PhotoQuery::Search(text.to_string())
        }
    }

    #[must_use]
    pub fn is_search(&self) -> bool {
        matches!(self, PhotoQuery::Search(_))
    }
}

impl fmt::Display for PhotoQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhotoQuery::Listing => write!(f, "default listing"),
            PhotoQuery::Search(text) => write!(f, "search {:?}", text),
        }
    }
}
