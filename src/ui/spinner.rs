/// Canvas-drawn activity indicator
///
/// A faint full circle with a rotating half arc on top. The rotation
/// angle is owned by the application and advanced on a timer while a
/// load is outstanding, so the widget itself stays stateless.

use iced::widget::canvas::{self, Path, Stroke};
use iced::widget::Canvas;
use iced::{Color, Element, Length, Point, Rectangle};
use std::f32::consts::PI;

/// Diameter of the indicator in logical pixels
pub const SPINNER_SIZE: f32 = 56.0;

/// Rotation advance per animation frame, in radians
pub const SPINNER_SPEED: f32 = 0.12;

/// Stroke width for both the track and the arc
const STROKE_WIDTH: f32 = 3.0;

/// Line segments used to approximate the arc
const ARC_SEGMENTS: u32 = 30;

/// Activity indicator at a fixed rotation angle
#[derive(Debug, Clone)]
pub struct Spinner {
    /// Current rotation angle in radians
    rotation: f32,
}

impl Spinner {
    pub fn new(rotation: f32) -> Self {
        Spinner { rotation }
    }

    /// Wrap the spinner in a fixed-size canvas element
    pub fn into_element<Message: 'static>(self) -> Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fixed(SPINNER_SIZE))
            .height(Length::Fixed(SPINNER_SIZE))
            .into()
    }
}

impl<Message> canvas::Program<Message> for Spinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let center = frame.center();
        let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;
        let color = theme.palette().primary;

        // Faint full circle as the track
        let track = Path::circle(center, radius);
        frame.stroke(
            &track,
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(Color { a: 0.25, ..color }),
        );

        // Rotating half arc, approximated with short line segments
        let start_angle = self.rotation - PI / 2.0;
        let end_angle = start_angle + PI;

        let mut path_builder = canvas::path::Builder::new();
        path_builder.move_to(Point::new(
            center.x + radius * start_angle.cos(),
            center.y + radius * start_angle.sin(),
        ));

        for i in 1..=ARC_SEGMENTS {
            let t = i as f32 / ARC_SEGMENTS as f32;
            let angle = start_angle + (end_angle - start_angle) * t;
            path_builder.line_to(Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            ));
        }

        let arc = path_builder.build();
        frame.stroke(
            &arc,
            Stroke {
                line_cap: canvas::LineCap::Round,
                ..Stroke::default()
                    .with_width(STROKE_WIDTH)
                    .with_color(color)
            },
        );

        vec![frame.into_geometry()]
    }
}
