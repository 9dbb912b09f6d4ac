// SPDX-License-Identifier: MPL-2.0
//! Photo browser state and message handling.
//!
//! The state owns exactly what the screen shows: the query text, the loading
//! flag and the current result set. [`State::handle`] is a pure transition
//! that returns an [`Effect`]; turning effects into `Task`s lives in
//! [`super::perform`].

use crate::config::{BREAKPOINT_MD, BREAKPOINT_SM, DEFAULT_MAX_COLUMNS};
use crate::domain::{Photo, PhotoId, PhotoQuery};
use crate::error::FetchError;
use crate::ui::loading::Spinner;
use iced::widget::image;
use std::collections::HashMap;

/// Download state of one card's picture.
#[derive(Debug, Clone)]
pub enum Thumbnail {
    Loading,
    Ready(image::Handle),
    Failed,
}

/// Messages for the photo browser.
#[derive(Debug, Clone)]
pub enum Message {
    /// The search field changed.
    QueryChanged(String),
    /// Search button pressed or Enter hit in the search field.
    SearchRequested,
    /// A photo fetch finished, successfully or not.
    PhotosFetched {
        query: PhotoQuery,
        result: Result<Vec<Photo>, FetchError>,
    },
    /// A card picture finished downloading.
    ImageFetched {
        id: PhotoId,
        result: Result<image::Handle, FetchError>,
    },
    /// The outbound link of a card was clicked.
    OpenLink(String),
    /// Animate the spinner.
    SpinnerTick,
    /// The window width changed.
    ViewportResized(f32),
}

/// Side effects requested by the browser.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Fetch the result set for this query.
    Fetch(PhotoQuery),
    /// Download the picture of each listed card.
    LoadImages(Vec<(PhotoId, String)>),
    /// Open this URL in the system browser.
    OpenLink(String),
}

/// Pure description of what the browser should draw right now.
#[derive(Debug)]
pub enum BrowserView<'a> {
    /// A fetch is in flight: only the loading indicator is shown.
    Loading { spinner: Spinner },
    /// Search controls plus one card per photo.
    Gallery {
        query: &'a str,
        columns: u16,
        cards: Vec<Card<'a>>,
    },
}

/// One grid cell.
#[derive(Debug, Clone, Copy)]
pub struct Card<'a> {
    pub photo: &'a Photo,
    pub thumbnail: &'a Thumbnail,
}

/// Photo browser state.
#[derive(Debug, Clone)]
pub struct State {
    query: String,
    loading: bool,
    photos: Vec<Photo>,
    thumbnails: HashMap<PhotoId, Thumbnail>,
    spinner: Spinner,
    viewport_width: f32,
    max_columns: u16,
}

impl Default for State {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_COLUMNS)
    }
}

impl State {
    /// Creates an empty browser capped at `max_columns` columns.
    #[must_use]
    pub fn new(max_columns: u16) -> Self {
        Self {
            query: String::new(),
            loading: false,
            photos: Vec::new(),
            thumbnails: HashMap::new(),
            spinner: Spinner::default(),
            viewport_width: f32::INFINITY,
            max_columns: max_columns.max(1),
        }
    }

    /// First activation: fetch the default listing.
    pub fn initialize(&mut self) -> Effect {
        self.begin_fetch(PhotoQuery::Listing)
    }

    /// Handle a browser message.
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::QueryChanged(text) => {
                self.query = text;
                Effect::None
            }
            Message::SearchRequested => {
                let query = PhotoQuery::from_text(&self.query);
                self.begin_fetch(query)
            }
            Message::PhotosFetched { query, result } => self.finish_fetch(&query, result),
            Message::ImageFetched { id, result } => {
                self.store_thumbnail(id, result);
                Effect::None
            }
            Message::OpenLink(url) => Effect::OpenLink(url),
            Message::SpinnerTick => {
                if self.loading {
                    self.spinner.tick();
                }
                Effect::None
            }
            Message::ViewportResized(width) => {
                self.viewport_width = width;
                Effect::None
            }
        }
    }

    /// Raises the loading flag and asks for `query` to be fetched.
    pub fn begin_fetch(&mut self, query: PhotoQuery) -> Effect {
        log::info!("Fetching photos: {}", query);
        self.loading = true;
        self.spinner.reset();
        Effect::Fetch(query)
    }

    /// Lowers the loading flag whatever the outcome.
    ///
    /// On success the result set is replaced wholesale. On failure the error
    /// is logged and the previous result set stays on screen.
    pub fn finish_fetch(
        &mut self,
        query: &PhotoQuery,
        result: Result<Vec<Photo>, FetchError>,
    ) -> Effect {
        self.loading = false;

        match result {
            Ok(photos) => {
                log::info!("Fetched {} photos ({})", photos.len(), query);
                self.photos = photos;
                self.thumbnails = self
                    .photos
                    .iter()
                    .map(|photo| (photo.id.clone(), Thumbnail::Loading))
                    .collect();

                if self.photos.is_empty() {
                    return Effect::None;
                }
                Effect::LoadImages(
                    self.photos
                        .iter()
                        .map(|photo| (photo.id.clone(), photo.image_url.clone()))
                        .collect(),
                )
            }
            Err(err) => {
                log::error!("Failed to fetch photos ({}): {}", query, err);
                Effect::None
            }
        }
    }

    fn store_thumbnail(&mut self, id: PhotoId, result: Result<image::Handle, FetchError>) {
        // Pictures for photos that are no longer displayed are dropped
        let Some(slot) = self.thumbnails.get_mut(&id) else {
            log::debug!("Dropping picture for photo {} no longer displayed", id);
            return;
        };

        *slot = match result {
            Ok(handle) => Thumbnail::Ready(handle),
            Err(err) => {
                log::warn!("Failed to load picture for photo {}: {}", id, err);
                Thumbnail::Failed
            }
        };
    }

    /// Current query text (not necessarily submitted).
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The most recent successful result set.
    #[must_use]
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    #[must_use]
    pub fn thumbnail(&self, id: &PhotoId) -> Option<&Thumbnail> {
        self.thumbnails.get(id)
    }

    #[must_use]
    pub fn spinner(&self) -> Spinner {
        self.spinner
    }

    /// Number of grid columns for the current window width.
    #[must_use]
    pub fn columns(&self) -> u16 {
        columns_for_width(self.viewport_width, self.max_columns)
    }

    /// Computes what should be on screen from the current state.
    #[must_use]
    pub fn render_model(&self) -> BrowserView<'_> {
        if self.loading {
            return BrowserView::Loading {
                spinner: self.spinner,
            };
        }

        static MISSING: Thumbnail = Thumbnail::Loading;
        let cards = self
            .photos
            .iter()
            .map(|photo| Card {
                photo,
                thumbnail: self.thumbnails.get(&photo.id).unwrap_or(&MISSING),
            })
            .collect();

        BrowserView::Gallery {
            query: &self.query,
            columns: self.columns(),
            cards,
        }
    }
}

/// Responsive column count: one column on narrow windows, two on medium,
/// `max_columns` otherwise.
#[must_use]
pub fn columns_for_width(width: f32, max_columns: u16) -> u16 {
    let max_columns = max_columns.max(1);
    if width < BREAKPOINT_SM {
        1
    } else if width < BREAKPOINT_MD {
        max_columns.min(2)
    } else {
        max_columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(id: &str) -> Photo {
        Photo {
            id: PhotoId::new(id),
            image_url: format!("https://img/{id}"),
            author: format!("author {id}"),
            link: format!("https://unsplash.com/photos/{id}"),
            description: None,
        }
    }

    fn loaded_state(ids: &[&str]) -> State {
        let mut state = State::default();
        state.initialize();
        state.finish_fetch(
            &PhotoQuery::Listing,
            Ok(ids.iter().map(|id| photo(id)).collect()),
        );
        state
    }

    #[test]
    fn initialize_fetches_listing_and_sets_loading() {
        let mut state = State::default();
        assert!(!state.is_loading());

        let effect = state.initialize();

        assert_eq!(effect, Effect::Fetch(PhotoQuery::Listing));
        assert!(state.is_loading());
    }

    #[test]
    fn query_changes_do_not_fetch() {
        let mut state = State::default();
        let effect = state.handle(Message::QueryChanged("moun".into()));
        assert_eq!(effect, Effect::None);
        assert_eq!(state.query(), "moun");
        assert!(!state.is_loading());
    }

    #[test]
    fn search_uses_current_query_text() {
        let mut state = State::default();
        state.handle(Message::QueryChanged("mountains".into()));

        let effect = state.handle(Message::SearchRequested);

        assert_eq!(
            effect,
            Effect::Fetch(PhotoQuery::Search("mountains".into()))
        );
        assert!(state.is_loading());
    }

    #[test]
    fn search_with_empty_query_falls_back_to_listing() {
        let mut state = State::default();
        let effect = state.handle(Message::SearchRequested);
        assert_eq!(effect, Effect::Fetch(PhotoQuery::Listing));
    }

    #[test]
    fn success_replaces_result_set_and_requests_pictures() {
        let mut state = loaded_state(&["a", "b"]);
        state.handle(Message::SearchRequested);

        let effect = state.handle(Message::PhotosFetched {
            query: PhotoQuery::Listing,
            result: Ok(vec![photo("c")]),
        });

        assert!(!state.is_loading());
        assert_eq!(state.photos(), &[photo("c")]);
        assert!(state.thumbnail(&PhotoId::new("a")).is_none());
        assert_eq!(
            effect,
            Effect::LoadImages(vec![(PhotoId::new("c"), "https://img/c".to_string())])
        );
    }

    #[test]
    fn failure_keeps_previous_result_set_and_clears_loading() {
        let mut state = loaded_state(&["a", "b"]);
        state.handle(Message::SearchRequested);
        assert!(state.is_loading());

        let effect = state.handle(Message::PhotosFetched {
            query: PhotoQuery::Listing,
            result: Err(FetchError::Network("connection reset".into())),
        });

        assert_eq!(effect, Effect::None);
        assert!(!state.is_loading());
        assert_eq!(state.photos(), &[photo("a"), photo("b")]);
    }

    #[test]
    fn failure_before_any_success_leaves_empty_set() {
        let mut state = State::default();
        state.initialize();
        state.handle(Message::PhotosFetched {
            query: PhotoQuery::Listing,
            result: Err(FetchError::Status(401)),
        });
        assert!(state.photos().is_empty());
        assert!(!state.is_loading());
    }

    #[test]
    fn empty_success_requests_no_pictures() {
        let mut state = loaded_state(&["a"]);
        let effect = state.finish_fetch(&PhotoQuery::Search("zzz".into()), Ok(Vec::new()));
        assert_eq!(effect, Effect::None);
        assert!(state.photos().is_empty());
    }

    #[test]
    fn picture_results_update_matching_cards_only() {
        let mut state = loaded_state(&["a"]);

        state.handle(Message::ImageFetched {
            id: PhotoId::new("a"),
            result: Ok(image::Handle::from_bytes(vec![0u8; 4])),
        });
        state.handle(Message::ImageFetched {
            id: PhotoId::new("gone"),
            result: Ok(image::Handle::from_bytes(vec![0u8; 4])),
        });

        assert!(matches!(
            state.thumbnail(&PhotoId::new("a")),
            Some(Thumbnail::Ready(_))
        ));
        assert!(state.thumbnail(&PhotoId::new("gone")).is_none());
    }

    #[test]
    fn failed_picture_marks_card_failed() {
        let mut state = loaded_state(&["a"]);
        state.handle(Message::ImageFetched {
            id: PhotoId::new("a"),
            result: Err(FetchError::Status(404)),
        });
        assert!(matches!(
            state.thumbnail(&PhotoId::new("a")),
            Some(Thumbnail::Failed)
        ));
    }

    #[test]
    fn render_model_shows_only_loader_while_loading() {
        let mut state = loaded_state(&["a"]);
        state.handle(Message::SearchRequested);
        assert!(matches!(state.render_model(), BrowserView::Loading { .. }));
    }

    #[test]
    fn render_model_lists_one_card_per_photo() {
        let state = loaded_state(&["a", "b"]);
        match state.render_model() {
            BrowserView::Gallery { cards, query, .. } => {
                assert_eq!(query, "");
                assert_eq!(cards.len(), 2);
                assert_eq!(cards[0].photo.id, PhotoId::new("a"));
                assert!(matches!(cards[0].thumbnail, Thumbnail::Loading));
            }
            BrowserView::Loading { .. } => panic!("expected gallery"),
        }
    }

    #[test]
    fn spinner_only_turns_while_loading() {
        let mut state = State::default();
        state.handle(Message::SpinnerTick);
        assert_eq!(state.spinner().rotation(), 0.0);

        state.initialize();
        state.handle(Message::SpinnerTick);
        assert!(state.spinner().rotation() > 0.0);
    }

    #[test]
    fn open_link_is_forwarded() {
        let mut state = State::default();
        let effect = state.handle(Message::OpenLink("https://unsplash.com/photos/a".into()));
        assert_eq!(
            effect,
            Effect::OpenLink("https://unsplash.com/photos/a".into())
        );
    }

    #[test]
    fn columns_follow_breakpoints() {
        assert_eq!(columns_for_width(500.0, 3), 1);
        assert_eq!(columns_for_width(700.0, 3), 2);
        assert_eq!(columns_for_width(1200.0, 3), 3);
        assert_eq!(columns_for_width(700.0, 1), 1);
        assert_eq!(columns_for_width(1200.0, 0), 1);
    }

    #[test]
    fn viewport_resize_changes_columns() {
        let mut state = State::new(4);
        assert_eq!(state.columns(), 4);
        state.handle(Message::ViewportResized(600.0));
        assert_eq!(state.columns(), 1);
    }
}
