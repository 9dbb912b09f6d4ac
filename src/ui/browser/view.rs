// SPDX-License-Identifier: MPL-2.0
//! Photo browser rendering.

use super::state::{BrowserView, Card, Message, State, Thumbnail};
use crate::config::MAX_CONTENT_WIDTH;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::loading;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{
    text, text_input, Button, Column, Container, Image, Row, Scrollable, Text,
};
use iced::{alignment, ContentFit, Element, Length, Theme};

/// Contextual data needed to render the browser.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Renders the browser: the loading indicator while a fetch is in flight,
/// the search controls and grid otherwise.
pub fn view<'a>(ctx: ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    match state.render_model() {
        BrowserView::Loading { spinner } => loading::view(ctx.i18n, spinner),
        BrowserView::Gallery {
            query,
            columns,
            cards,
        } => gallery(&ctx, query, columns, cards),
    }
}

fn gallery<'a>(
    ctx: &ViewContext<'a>,
    query: &'a str,
    columns: u16,
    cards: Vec<Card<'a>>,
) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("browser-title"))
        .size(typography::TITLE_LG)
        .style(primary_text);

    let search_input = text_input(&ctx.i18n.tr("search-placeholder"), query)
        .on_input(Message::QueryChanged)
        .on_submit(Message::SearchRequested)
        .padding(spacing::XS)
        .size(typography::BODY)
        .width(Length::Fixed(sizing::SEARCH_INPUT_WIDTH));

    let search_button = Button::new(Text::new(ctx.i18n.tr("search-button")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .on_press(Message::SearchRequested);

    let search_row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(search_input)
        .push(search_button);

    let header = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(search_row);

    let body: Element<'a, Message> = if cards.is_empty() {
        Container::new(
            Text::new(ctx.i18n.tr("results-empty"))
                .size(typography::BODY_LG)
                .style(secondary_text),
        )
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .into()
    } else {
        grid(ctx, columns, cards)
    };

    let content = Column::new()
        .spacing(spacing::XL)
        .padding(spacing::MD)
        .push(
            Container::new(header)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        )
        .push(body);

    let centered = Container::new(content)
        .max_width(MAX_CONTENT_WIDTH)
        .width(Length::Fill);

    Scrollable::new(
        Container::new(centered)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .padding([spacing::XL, 0.0]),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn grid<'a>(ctx: &ViewContext<'a>, columns: u16, cards: Vec<Card<'a>>) -> Element<'a, Message> {
    let columns = usize::from(columns.max(1));
    let mut rows = Column::new().spacing(spacing::LG);

    for chunk in cards.chunks(columns) {
        let mut row = Row::new().spacing(spacing::LG);
        for card in chunk {
            row = row.push(
                Container::new(card_view(ctx, *card)).width(Length::FillPortion(1)),
            );
        }
        // Keep cells the same width on a short last row
        for _ in chunk.len()..columns {
            row = row.push(Container::new(Column::new()).width(Length::FillPortion(1)));
        }
        rows = rows.push(row);
    }

    rows.into()
}

fn card_view<'a>(ctx: &ViewContext<'a>, card: Card<'a>) -> Element<'a, Message> {
    let photo = card.photo;

    let picture: Element<'a, Message> = match card.thumbnail {
        Thumbnail::Ready(handle) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        Thumbnail::Loading => placeholder(ctx.i18n.tr("photo-loading")),
        Thumbnail::Failed => placeholder(
            photo
                .description
                .clone()
                .unwrap_or_else(|| ctx.i18n.tr("photo-unavailable")),
        ),
    };

    let attribution = Text::new(
        ctx.i18n
            .tr_with_args("photo-attribution", &[("author", photo.author.as_str())]),
    )
    .size(typography::BODY)
    .style(secondary_text);

    let link = Button::new(Text::new(ctx.i18n.tr("photo-view-link")).size(typography::BODY))
        .padding(0)
        .style(styles::button::link)
        .on_press(Message::OpenLink(photo.link.clone()));

    let details = Column::new()
        .spacing(spacing::XS)
        .padding(spacing::MD)
        .push(attribution)
        .push(link);

    Container::new(Column::new().push(picture).push(details))
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

fn placeholder<'a>(caption: String) -> Element<'a, Message> {
    Container::new(
        Text::new(caption)
            .size(typography::CAPTION)
            .style(secondary_text),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(styles::container::image_placeholder)
    .into()
}

fn primary_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_primary),
    }
}

fn secondary_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_secondary),
    }
}
