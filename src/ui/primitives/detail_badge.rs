//! Diamond badge behind the "view details" arrow
//!
//! A rounded square turned 45 degrees, centered in its canvas.

use iced::widget::canvas::{Frame, Geometry, Path, Program};
use iced::{Color, Point, Radians, Rectangle, Renderer, Size, Theme, mouse};

use crate::utils::{offset_of, radians};

/// Rounded square drawn as a diamond
#[derive(Debug, Clone, Copy)]
pub struct DetailBadge {
    pub side: f32,
    pub corner_radius: f32,
    pub color: Color,
}

impl DetailBadge {
    pub fn new(side: f32, color: Color) -> Self {
        Self {
            side,
            corner_radius: 10.0,
            color,
        }
    }

    /// Edge of the square canvas that fits the turned square
    pub fn extent(&self) -> f32 {
        (self.side * std::f32::consts::SQRT_2).ceil()
    }
}

impl<Message> Program<Message> for DetailBadge {
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
        let half = self.side / 2.0;

        frame.with_save(|frame| {
            let center = frame.center();
            frame.translate(offset_of(center));
            frame.rotate(Radians(radians(45.0)));
            let square = Path::rounded_rectangle(
                Point::new(-half, -half),
                Size::new(self.side, self.side),
                self.corner_radius.into(),
            );
            frame.fill(&square, self.color);
        });

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent_fits_the_diagonal() {
        let badge = DetailBadge::new(60.0, Color::BLACK);
        assert_eq!(badge.extent(), 85.0);
    }
}
