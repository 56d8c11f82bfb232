// SPDX-License-Identifier: MPL-2.0
//! Animated spinner widget using Canvas, shown inside loading buttons.

use crate::ui::design_tokens::{border, opacity, sizing};
use crate::ui::state::transition::Easing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::TAU;
use std::time::Duration;

/// Time for one full revolution.
pub const REVOLUTION: Duration = Duration::from_secs(1);

/// Rotation angle (radians) at time `now`; each revolution eases in and out.
#[must_use]
pub fn rotation_at(now: Duration) -> f32 {
    let turn = (now.as_secs_f32() / REVOLUTION.as_secs_f32()).fract();
    TAU * Easing::EaseInOut.apply(turn)
}

/// Ring spinner: a faint full circle with a bright quarter arc on top.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32, // Rotation angle in radians
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    /// Creates a new animated spinner with the given color and rotation angle.
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::SPINNER_SM,
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
                let stroke_width = border::WIDTH_MD;
                let radius = frame.width().min(frame.height()) / 2.0 - stroke_width / 2.0;

                let ring = Path::circle(center, radius);
                frame.stroke(
                    &ring,
                    Stroke::default()
                        .with_width(stroke_width)
                        .with_color(Color {
                            a: opacity::OVERLAY_SOFT,
                            ..self.color
                        }),
                );

                // Quarter arc centered on the top of the ring, rotated.
                let start_angle = self.rotation - TAU / 4.0 - TAU / 8.0;
                let end_angle = start_angle + TAU / 4.0;

                let mut arc_path = canvas::path::Builder::new();
                arc_path.move_to(Point::new(
                    center.x + radius * start_angle.cos(),
                    center.y + radius * start_angle.sin(),
                ));

                let segments = 12;
                #[allow(clippy::cast_precision_loss)]
                // segments=12, i∈[1,12] - well within f32 precision
                for i in 1..=segments {
                    let t = i as f32 / segments as f32;
                    let angle = start_angle + (end_angle - start_angle) * t;
                    arc_path.line_to(Point::new(
                        center.x + radius * angle.cos(),
                        center.y + radius * angle.sin(),
                    ));
                }

                frame.stroke(
                    &arc_path.build(),
                    Stroke::default()
                        .with_width(stroke_width)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_wraps_every_revolution() {
        assert!(rotation_at(Duration::ZERO).abs() < 1e-3);
        assert!((rotation_at(Duration::from_millis(500)) - TAU / 2.0).abs() < 1e-2);
        assert!((rotation_at(Duration::from_millis(1500)) - TAU / 2.0).abs() < 1e-2);
    }
}
