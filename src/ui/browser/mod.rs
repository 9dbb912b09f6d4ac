// SPDX-License-Identifier: MPL-2.0
//! Photo browser: search field, loading indicator and result grid.
//!
//! [`State::handle`] decides what happens, [`perform`] runs it against a
//! [`PhotoSource`]. Each fetch fully replaces the result set. Overlapping
//! fetches are not cancelled; whichever resolves last decides what is shown.

pub mod state;
pub mod view;

pub use state::{columns_for_width, BrowserView, Card, Effect, Message, State, Thumbnail};
pub use view::{view, ViewContext};

use crate::application::port::PhotoSource;
use iced::widget::image;
use iced::{event, time, window, Subscription, Task};
use std::sync::Arc;
use std::time::Duration;

/// Spinner frame interval.
const SPINNER_FRAME: Duration = Duration::from_millis(16);

/// Turns a browser effect into an Iced task.
pub fn perform(effect: Effect, source: &Arc<dyn PhotoSource>) -> Task<Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::Fetch(query) => {
            let request = source.fetch_photos(query.clone());
            Task::perform(request, move |result| Message::PhotosFetched {
                query: query.clone(),
                result,
            })
        }
        Effect::LoadImages(images) => Task::batch(images.into_iter().map(|(id, url)| {
            let request = source.fetch_image(url);
            Task::perform(request, move |result| Message::ImageFetched {
                id: id.clone(),
                result: result.map(image::Handle::from_bytes),
            })
        })),
        Effect::OpenLink(url) => {
            open_link(&url);
            Task::none()
        }
    }
}

/// Handles `message` and runs the resulting effect.
pub fn update(state: &mut State, message: Message, source: &Arc<dyn PhotoSource>) -> Task<Message> {
    let effect = state.handle(message);
    perform(effect, source)
}

/// Opens `url` in the system browser as a separate process.
fn open_link(url: &str) {
    if !is_web_link(url) {
        log::warn!("Refusing to open non-web link: {}", url);
        return;
    }
    if let Err(err) = open::that_detached(url) {
        log::warn!("Failed to open {}: {}", url, err);
    }
}

fn is_web_link(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

/// Window resizes always, spinner frames only while a fetch is in flight.
pub fn subscription(state: &State) -> Subscription<Message> {
    let viewport = event::listen_with(|event, _status, _window| match event {
        event::Event::Window(window::Event::Resized(size)) => {
            Some(Message::ViewportResized(size.width))
        }
        event::Event::Window(window::Event::Opened { size, .. }) => {
            Some(Message::ViewportResized(size.width))
        }
        _ => None,
    });

    if state.is_loading() {
        Subscription::batch([
            viewport,
            time::every(SPINNER_FRAME).map(|_| Message::SpinnerTick),
        ])
    } else {
        viewport
    }
}
