//! Recipe wheel primitive
//!
//! Draws the rotating part of a recipe card: a gradient ring, the arrow
//! gauge and the dish image, all turned by the current swipe rotation.
//! The wheel is centered on a configurable anchor so it can hang half off
//! screen, and sized from the canvas bounds minus an inset.

use iced::widget::canvas::{self, Frame, Geometry, Path, Program, Stroke, gradient};
use iced::widget::image::Handle;
use iced::{Color, Point, Radians, Rectangle, Renderer, Size, Theme, Vector, mouse};

use super::arrow_gauge::ArrowGauge;
use crate::ui::theme;
use crate::utils::{offset_of, radians};

/// Ring scale relative to the image circle
const RING_SCALE: f32 = 1.15;
/// Gauge scale relative to the image circle
const GAUGE_SCALE: f32 = 1.25;
const RING_WIDTH: f32 = 4.0;
const DEFAULT_INSET: f32 = 32.0;

/// Recipe wheel configuration
#[derive(Debug, Clone)]
pub struct RecipeWheel {
    /// Clockwise rotation in degrees
    pub rotation_degrees: f32,
    pub at_top: bool,
    pub at_bottom: bool,
    /// Dish image, None draws a placeholder disc
    pub image: Option<Handle>,
    /// Space between the image circle and the shorter canvas side
    pub inset: f32,
    /// Wheel center as fractions of the canvas bounds
    pub anchor: (f32, f32),
}

impl RecipeWheel {
    pub fn new(at_top: bool, at_bottom: bool) -> Self {
        Self {
            rotation_degrees: 0.0,
            at_top,
            at_bottom,
            image: None,
            inset: DEFAULT_INSET,
            anchor: (0.5, 0.5),
        }
    }

    pub fn rotation(mut self, degrees: f32) -> Self {
        self.rotation_degrees = degrees;
        self
    }

    pub fn image(mut self, image: Option<Handle>) -> Self {
        self.image = image;
        self
    }

    pub fn anchor(mut self, x: f32, y: f32) -> Self {
        self.anchor = (x, y);
        self
    }

    /// Diameter of the image circle for the given canvas size
    fn diameter(&self, bounds: Size) -> f32 {
        (bounds.width.min(bounds.height) - self.inset).max(0.0)
    }

    fn center(&self, bounds: Size) -> Point {
        Point::new(bounds.width * self.anchor.0, bounds.height * self.anchor.1)
    }

    fn draw_ring(&self, frame: &mut Frame, diameter: f32) {
        let radius = diameter / 2.0 * RING_SCALE;
        let ring = Path::circle(Point::ORIGIN, radius);

        let fade = Color {
            a: 0.1,
            ..theme::LIGHT_BACKGROUND
        };
        let sweep = gradient::Linear::new(Point::new(-radius, 0.0), Point::new(radius, 0.0))
            .add_stop(0.0, fade)
            .add_stop(0.5, theme::ACCENT_GREEN)
            .add_stop(1.0, theme::ACCENT_GREEN);

        frame.stroke(
            &ring,
            Stroke {
                style: canvas::Style::Gradient(canvas::Gradient::Linear(sweep)),
                width: RING_WIDTH,
                ..Stroke::default()
            },
        );
    }

    fn draw_gauge(&self, frame: &mut Frame, diameter: f32) {
        let diameter = diameter * GAUGE_SCALE;
        let half = diameter / 2.0;
        frame.with_save(|frame| {
            // Gauge geometry is laid out in its own box starting at the origin
            frame.translate(Vector::new(-half, -half));
            ArrowGauge::new(self.at_top, self.at_bottom)
                .color(theme::GAUGE_GRAY)
                .stroke(frame, Size::new(diameter, diameter));
        });
    }

    fn draw_image(&self, frame: &mut Frame, diameter: f32) {
        let half = diameter / 2.0;
        match &self.image {
            Some(handle) => {
                frame.draw_image(
                    Rectangle::new(
                        Point::new(-half, -half),
                        Size::new(diameter, diameter),
                    ),
                    canvas::Image::new(handle.clone()),
                );
            }
            None => {
                frame.fill(
                    &Path::circle(Point::ORIGIN, half * 0.9),
                    Color::from_rgba(1.0, 1.0, 1.0, 0.08),
                );
            }
        }
    }
}

impl<Message> Program<Message> for RecipeWheel {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = self.center(bounds.size());
        let diameter = self.diameter(bounds.size());

        frame.with_save(|frame| {
            frame.translate(offset_of(center));
            frame.rotate(Radians(radians(self.rotation_degrees)));

            self.draw_ring(frame, diameter);
            self.draw_gauge(frame, diameter);
            self.draw_image(frame, diameter);
        });

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_follows_anchor() {
        let wheel = RecipeWheel::new(false, false).anchor(1.0, 0.5);
        assert_eq!(
            wheel.center(Size::new(400.0, 300.0)),
            Point::new(400.0, 150.0)
        );
    }

    #[test]
    fn test_defaults() {
        let wheel = RecipeWheel::new(true, false).rotation(-30.0);
        assert_eq!(wheel.rotation_degrees, -30.0);
        assert!(wheel.image.is_none());
        assert_eq!(wheel.anchor, (0.5, 0.5));
    }

    #[test]
    fn test_diameter_uses_shorter_side() {
        let wheel = RecipeWheel::new(false, false);
        assert_eq!(wheel.diameter(Size::new(400.0, 300.0)), 268.0);
        let oversized = RecipeWheel {
            inset: 500.0,
            ..wheel
        };
        assert_eq!(oversized.diameter(Size::new(400.0, 300.0)), 0.0);
    }
}
