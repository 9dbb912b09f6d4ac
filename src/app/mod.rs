// SPDX-License-Identifier: MPL-2.0
//! Application root state and startup wiring.
//!
//! The `App` struct owns the photo browser, localization and the theme mode,
//! and hands browser effects to the configured [`PhotoSource`]. Startup
//! resolves the config directory, the access key and the API base URL
//! before the window opens.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::application::port::PhotoSource;
use crate::config::{self, Config, ENV_ACCESS_KEY};
use crate::error::Error;
use crate::i18n::I18n;
use crate::infrastructure::UnsplashClient;
use crate::ui::browser;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    browser: browser::State,
    theme_mode: ThemeMode,
    source: Arc<dyn PhotoSource>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("loading", &self.browser.is_loading())
            .field("photos", &self.browser.photos().len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or the window
/// cannot be created.
pub fn run(flags: Flags) -> Result<(), Error> {
    paths::init_cli_overrides(flags.config_dir.clone());

    let (config, config_warning) = config::load();
    if let Some(key) = config_warning {
        let i18n = I18n::new(flags.lang.clone(), &config);
        log::warn!("{}", i18n.tr(&key));
    }

    let source: Arc<dyn PhotoSource> = Arc::new(build_client(&flags, &config)?);
    let lang = flags.lang;

    // iced 0.14 requires a Fn boot, so everything it needs is cloned per call
    let boot = move || App::new(I18n::new(lang.clone(), &config), &config, Arc::clone(&source));

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()?;

    Ok(())
}

/// Creates the Unsplash client from CLI flags, environment and config.
fn build_client(flags: &Flags, config: &Config) -> Result<UnsplashClient, Error> {
    let env_key = std::env::var(ENV_ACCESS_KEY).ok();
    let access_key = config
        .api
        .resolve_access_key(flags.access_key.as_deref(), env_key.as_deref());
    if access_key.is_empty() {
        log::warn!(
            "No API access key configured (set {} or --access-key); requests will be rejected",
            ENV_ACCESS_KEY
        );
    }

    let base_url = flags.base_url.as_deref().unwrap_or(&config.api.base_url);
    log::info!("Using photo API at {}", base_url);

    Ok(UnsplashClient::new(base_url, access_key)?)
}

impl App {
    /// Initializes application state and kicks off the default listing fetch.
    pub fn new(i18n: I18n, config: &Config, source: Arc<dyn PhotoSource>) -> (Self, Task<Message>) {
        let mut app = App {
            i18n,
            browser: browser::State::new(config.display.max_columns()),
            theme_mode: config.general.theme_mode,
            source,
        };

        let effect = app.browser.initialize();
        let task = browser::perform(effect, &app.source).map(Message::Browser);

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_browser_subscription(&self.browser)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Browser(message) => {
                browser::update(&mut self.browser, message, &self.source).map(Message::Browser)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            browser: &self.browser,
        })
    }

    /// Current photo browser state.
    #[must_use]
    pub fn browser(&self) -> &browser::State {
        &self.browser
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::PhotoFuture;
    use crate::domain::{Photo, PhotoId, PhotoQuery};
    use crate::error::FetchError;

    struct EmptySource;

    impl PhotoSource for EmptySource {
        fn fetch_photos(&self, _query: PhotoQuery) -> PhotoFuture<Vec<Photo>> {
            Box::pin(async { Ok(Vec::new()) })
        }

        fn fetch_image(&self, _url: String) -> PhotoFuture<Vec<u8>> {
            Box::pin(async { Err(FetchError::Status(404)) })
        }
    }

    fn app(config: &Config) -> App {
        let (app, _task) = App::new(I18n::default(), config, Arc::new(EmptySource));
        app
    }

    #[test]
    fn new_app_starts_loading_default_listing() {
        let app = app(&Config::default());
        assert!(app.browser().is_loading());
    }

    #[test]
    fn theme_follows_config() {
        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::Dark;
        assert_eq!(app(&config).theme(), Theme::Dark);

        config.general.theme_mode = ThemeMode::Light;
        assert_eq!(app(&config).theme(), Theme::Light);
    }

    #[test]
    fn browser_messages_are_forwarded() {
        let mut app = app(&Config::default());
        let photo = Photo {
            id: PhotoId::new("a"),
            image_url: "https://img/a".into(),
            author: "Ansel".into(),
            link: "https://unsplash.com/photos/a".into(),
            description: None,
        };

        let _ = app.update(Message::Browser(browser::Message::PhotosFetched {
            query: PhotoQuery::Listing,
            result: Ok(vec![photo.clone()]),
        }));

        assert!(!app.browser().is_loading());
        assert_eq!(app.browser().photos(), &[photo]);
    }

    #[test]
    fn window_title_is_translated() {
        let app = app(&Config::default());
        assert!(!app.title().starts_with("MISSING:"));
    }

    #[test]
    fn cli_base_url_beats_config() {
        let flags = Flags {
            base_url: Some("http://127.0.0.1:9".into()),
            access_key: Some("KEY".into()),
            ..Flags::default()
        };
        let client = build_client(&flags, &Config::default()).expect("client");
        let url = client.endpoint_url(&PhotoQuery::Listing).expect("url");
        assert_eq!(url.as_str(), "http://127.0.0.1:9/photos?client_id=KEY");
    }
}
