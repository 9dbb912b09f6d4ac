// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the Unsplash API.
//!
//! Two endpoints are used:
//! - `GET {base}/photos?client_id=<key>` for the default listing
//! - `GET {base}/search/photos?query=<text>&client_id=<key>` for searches
//!
//! Query parameters are form-urlencoded, so text with spaces, `&`, `=` or
//! non-ASCII characters reaches the server unchanged. No timeout is set: a
//! hung request keeps its fetch pending until the connection gives up.

pub mod payload;

use crate::application::port::{PhotoFuture, PhotoSource};
use crate::domain::{Photo, PhotoQuery};
use crate::error::FetchError;
use reqwest::Url;

/// API version header value the client pins to.
const ACCEPT_VERSION: &str = "v1";

/// Unsplash client holding the base URL and the static access key.
#[derive(Debug, Clone)]
pub struct UnsplashClient {
    http: reqwest::Client,
    base_url: String,
    access_key: String,
}

impl UnsplashClient {
    /// Builds a client for `base_url` (no trailing path needed).
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Network`] if the TLS backend cannot be set up.
    pub fn new(base_url: &str, access_key: impl Into<String>) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("photo_grid/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self::with_http_client(http, base_url, access_key))
    }

    /// Builds a client around an already configured `reqwest::Client`.
    pub fn with_http_client(
        http: reqwest::Client,
        base_url: &str,
        access_key: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_key: access_key.into(),
        }
    }

    /// Returns the full request URL for `query`, credential included.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Network`] if the configured base URL is not a
    /// valid absolute URL.
    pub fn endpoint_url(&self, query: &PhotoQuery) -> Result<Url, FetchError> {
        let client_id = ("client_id", self.access_key.as_str());
        let parsed = match query {
            PhotoQuery::Listing => {
                Url::parse_with_params(&format!("{}/photos", self.base_url), [client_id])
            }
            PhotoQuery::Search(text) => Url::parse_with_params(
                &format!("{}/search/photos", self.base_url),
                [("query", text.as_str()), client_id],
            ),
        };
        parsed.map_err(|e| FetchError::Network(format!("invalid base URL {}: {e}", self.base_url)))
    }

    async fn get_bytes(http: reqwest::Client, url: Url) -> Result<Vec<u8>, FetchError> {
        let response = http
            .get(url)
            .header("Accept-Version", ACCEPT_VERSION)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

impl PhotoSource for UnsplashClient {
    fn fetch_photos(&self, query: PhotoQuery) -> PhotoFuture<Vec<Photo>> {
        let http = self.http.clone();
        let url = self.endpoint_url(&query);

        Box::pin(async move {
            let body = Self::get_bytes(http, url?).await?;
            payload::parse_photos(&query, &body)
        })
    }

    fn fetch_image(&self, url: String) -> PhotoFuture<Vec<u8>> {
        let http = self.http.clone();

        Box::pin(async move {
            let url = Url::parse(&url).map_err(|e| FetchError::Network(format!("{url}: {e}")))?;
            Self::get_bytes(http, url).await
        })
    }
}
