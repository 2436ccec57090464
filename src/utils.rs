//! Utility functions

use iced::{Point, Vector};

// ============================================================================
// Geometry
// ============================================================================

/// Point on a circle at `angle` radians (y axis pointing down)
pub fn point_on_circle(center: Point, radius: f32, angle: f32) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Convert degrees to radians
pub fn radians(degrees: f32) -> f32 {
    degrees.to_radians()
}

/// Offset of a point from the origin, used to move canvas content
pub fn offset_of(point: Point) -> Vector {
    Vector::new(point.x, point.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn test_point_on_circle_axes() {
        let center = Point::new(10.0, 10.0);
        assert!(close(point_on_circle(center, 5.0, 0.0), Point::new(15.0, 10.0)));
        assert!(close(
            point_on_circle(center, 5.0, radians(90.0)),
            Point::new(10.0, 15.0)
        ));
        assert!(close(
            point_on_circle(center, 5.0, radians(180.0)),
            Point::new(5.0, 10.0)
        ));
    }

    #[test]
    fn test_point_stays_on_radius() {
        let center = Point::new(-3.0, 7.0);
        for degrees in [0.0_f32, 37.0, 160.0, 200.0, 359.0] {
            let p = point_on_circle(center, 12.5, radians(degrees));
            let distance = ((p.x - center.x).powi(2) + (p.y - center.y).powi(2)).sqrt();
            assert!((distance - 12.5).abs() < 1e-3);
        }
    }
}
