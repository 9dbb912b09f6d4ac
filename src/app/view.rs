// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::I18n;
use crate::ui::browser::{self, ViewContext as BrowserViewContext};
use crate::ui::theming::ColorScheme;
use iced::widget::{container, Container};
use iced::{Element, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub browser: &'a browser::State,
}

/// Renders the browser on the themed window surface.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = browser::view(BrowserViewContext { i18n: ctx.i18n }, ctx.browser)
        .map(Message::Browser);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(surface)
        .into()
}

fn surface(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(ColorScheme::for_theme(theme).surface_primary.into()),
        ..container::Style::default()
    }
}
