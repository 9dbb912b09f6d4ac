// SPDX-License-Identifier: MPL-2.0
//! Photo source port definition.
//!
//! [`PhotoSource`] is what the browser fetches through. The shipped adapter is
//! [`UnsplashClient`](crate::infrastructure::unsplash::UnsplashClient).

use crate::domain::{Photo, PhotoQuery};
use crate::error::FetchError;
use futures_util::future::BoxFuture;

/// Future returned by every port method.
pub type PhotoFuture<T> = BoxFuture<'static, Result<T, FetchError>>;

/// Anything able to answer photo queries and hand back image bytes.
pub trait PhotoSource: Send + Sync {
    /// Fetches the result set for `query`.
    ///
    /// [`PhotoQuery::Listing`] returns the default feed;
    /// [`PhotoQuery::Search`] returns matches for the text.
    fn fetch_photos(&self, query: PhotoQuery) -> PhotoFuture<Vec<Photo>>;

    /// Downloads the encoded image behind `url`.
    fn fetch_image(&self, url: String) -> PhotoFuture<Vec<u8>>;
}
