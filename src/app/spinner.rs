//! Rotating arc drawn over a slot while its image loads.

use crate::theme::spinner_color;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{Color, Element, Length, Point, Rectangle, Renderer, Theme, mouse};
use std::f32::consts::PI;

const ARC_SEGMENTS: u16 = 30;
const STROKE_WIDTH: f32 = 3.0;

pub struct LoadingSpinner {
    rotation: f32,
    size: f32,
}

impl LoadingSpinner {
    pub fn new(rotation: f32, size: f32) -> Self {
        Self { rotation, size }
    }

    pub fn into_element<'a, Message: 'a>(self) -> Element<'a, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for LoadingSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let color = spinner_color(theme);
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = (frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH).max(1.0);

        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(Color { a: 0.25, ..color }),
        );

        // Half-circle arc, starting at twelve o'clock when rotation is zero.
        let start_angle = self.rotation - PI / 2.0;
        let mut arc = canvas::path::Builder::new();
        arc.move_to(point_on_circle(center, radius, start_angle));
        for i in 1..=ARC_SEGMENTS {
            let t = f32::from(i) / f32::from(ARC_SEGMENTS);
            arc.line_to(point_on_circle(center, radius, start_angle + PI * t));
        }

        frame.stroke(
            &arc.build(),
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(color)
                .with_line_cap(canvas::LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}

fn point_on_circle(center: Point, radius: f32, angle: f32) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}
