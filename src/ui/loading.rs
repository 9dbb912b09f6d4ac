// SPDX-License-Identifier: MPL-2.0
//! Loading indicator shown while a photo fetch is in flight.
//!
//! Always the same picture: a spinning ring above a "Loading images..."
//! caption, centered in the available space. The only thing that changes is
//! the ring angle, advanced by [`Spinner::tick`].

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length, Theme};

/// Spinner rotation speed in radians per tick.
const SPINNER_SPEED: f32 = 0.1;

/// Rotation angle of the loading ring.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Spinner {
    rotation: f32,
}

impl Spinner {
    /// Advances the ring one step, wrapping at a full turn.
    pub fn tick(&mut self) {
        self.rotation += SPINNER_SPEED;
        if self.rotation > std::f32::consts::TAU {
            self.rotation -= std::f32::consts::TAU;
        }
    }

    pub fn reset(&mut self) {
        self.rotation = 0.0;
    }

    #[must_use]
    pub fn rotation(self) -> f32 {
        self.rotation
    }
}

/// Renders the loading indicator.
pub fn view<'a, Message: 'static>(i18n: &I18n, spinner: Spinner) -> Element<'a, Message> {
    let ring = AnimatedSpinner::new(palette::PRIMARY_500, palette::GRAY_300, spinner.rotation())
        .into_element();

    let caption = Text::new(i18n.tr("loading-images"))
        .size(typography::BODY_LG)
        .style(|theme: &Theme| iced::widget::text::Style {
            color: Some(ColorScheme::for_theme(theme).text_secondary),
        });

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(ring)
        .push(caption);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
