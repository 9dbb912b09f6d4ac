// SPDX-License-Identifier: MPL-2.0
//! Animated spinner widget using Canvas for smooth rotation.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{FRAC_PI_2, PI};

/// Ring width in logical pixels.
const RING_WIDTH: f32 = 4.0;

/// Number of line segments used to approximate the arc.
const ARC_SEGMENTS: u16 = 30;

/// Ring spinner: a faint full circle with a colored quarter arc on top.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32,
    color: Color,
    track_color: Color,
    size: f32,
}

impl AnimatedSpinner {
    /// Creates a spinner drawn at `rotation` radians.
    #[must_use]
    pub fn new(color: Color, track_color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            track_color,
            size: sizing::SPINNER,
        }
    }

    /// Creates a Canvas widget from this spinner.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - RING_WIDTH;

                frame.stroke(
                    &Path::circle(center, radius),
                    Stroke::default()
                        .with_width(RING_WIDTH)
                        .with_color(self.track_color),
                );

                // Quarter arc starting at 12 o'clock
                let start_angle = self.rotation - FRAC_PI_2;
                let end_angle = start_angle + PI / 2.0;

                let mut arc_path = canvas::path::Builder::new();
                arc_path.move_to(Point::new(
                    center.x + radius * start_angle.cos(),
                    center.y + radius * start_angle.sin(),
                ));
                for i in 1..=ARC_SEGMENTS {
                    let t = f32::from(i) / f32::from(ARC_SEGMENTS);
                    let angle = start_angle + (end_angle - start_angle) * t;
                    arc_path.line_to(Point::new(
                        center.x + radius * angle.cos(),
                        center.y + radius * angle.sin(),
                    ));
                }

                frame.stroke(
                    &arc_path.build(),
                    Stroke::default()
                        .with_width(RING_WIDTH)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}
