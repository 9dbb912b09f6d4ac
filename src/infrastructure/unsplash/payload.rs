// SPDX-License-Identifier: MPL-2.0
//! JSON shapes returned by the Unsplash API.
//!
//! The listing endpoint answers with a bare array of photos, the search
//! endpoint wraps the same records in `{ "results": [...] }`. Only the fields
//! a card needs are read; everything else is ignored.

use crate::domain::{Photo, PhotoId, PhotoQuery};
use crate::error::FetchError;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ApiPhoto {
    id: String,
    urls: ApiUrls,
    user: ApiUser,
    links: ApiLinks,
    #[serde(default)]
    alt_description: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiUrls {
    regular: String,
}

#[derive(Debug, Deserialize)]
struct ApiUser {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ApiLinks {
    html: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<ApiPhoto>,
}

impl From<ApiPhoto> for Photo {
    fn from(raw: ApiPhoto) -> Self {
        Photo {
            id: PhotoId::new(raw.id),
            image_url: raw.urls.regular,
            author: raw.user.name,
            link: raw.links.html,
            description: raw.alt_description.or(raw.description),
        }
    }
}

/// Decodes a response body for the endpoint `query` was sent to.
pub fn parse_photos(query: &PhotoQuery, body: &[u8]) -> Result<Vec<Photo>, FetchError> {
    let raw = match query {
        PhotoQuery::Listing => serde_json::from_slice::<Vec<ApiPhoto>>(body)?,
        PhotoQuery::Search(_) => serde_json::from_slice::<SearchResponse>(body)?.results,
    };
    Ok(raw.into_iter().map(Photo::from).collect())
}
