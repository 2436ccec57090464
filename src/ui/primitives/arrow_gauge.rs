//! Arrow gauge primitive
//!
//! A short arc on the left of the recipe wheel with a chevron tick at each
//! open end. A tick is dropped at the end that would point past the first
//! or last recipe.
//!
//! The geometry is produced as a list of [`GaugeSegment`]s so it can be
//! checked without a renderer; [`ArrowGauge::stroke`] turns it into a
//! canvas path.

use iced::widget::canvas::path::Arc;
use iced::widget::canvas::{Frame, LineCap, LineJoin, Path, Stroke};
use iced::{Color, Point, Radians, Size};

use crate::utils::{point_on_circle, radians};

/// Arc start in degrees (y axis pointing down, so this is lower left)
const START_ANGLE: f32 = 160.0;
/// Arc end in degrees (upper left)
const END_ANGLE: f32 = 200.0;
/// How far along the arc the tick tips sit
const TICK_SWEEP: f32 = 4.0;
/// Tick length on either side of the ring
const TICK_REACH: f32 = 8.0;

/// One drawable piece of the gauge
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GaugeSegment {
    Arc {
        center: Point,
        radius: f32,
        start_degrees: f32,
        end_degrees: f32,
    },
    Line {
        from: Point,
        to: Point,
    },
}

/// Arrow gauge configuration
#[derive(Debug, Clone, Copy)]
pub struct ArrowGauge {
    /// Showing the first recipe
    pub at_top: bool,
    /// Showing the last recipe
    pub at_bottom: bool,
    pub color: Color,
    pub stroke_width: f32,
}

impl ArrowGauge {
    pub fn new(at_top: bool, at_bottom: bool) -> Self {
        Self {
            at_top,
            at_bottom,
            color: Color::from_rgb(0.5, 0.5, 0.5),
            stroke_width: 2.5,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Segments for a gauge inscribed in a box of `size`
    pub fn segments(&self, size: Size) -> Vec<GaugeSegment> {
        let radius = size.width / 2.0;
        let center = Point::new(radius, radius);

        let mut segments = vec![GaugeSegment::Arc {
            center,
            radius,
            start_degrees: START_ANGLE,
            end_degrees: END_ANGLE,
        }];

        if !self.at_top {
            segments.extend(tick_pair(
                center,
                radius,
                START_ANGLE,
                START_ANGLE + TICK_SWEEP,
            ));
        }

        if !self.at_bottom {
            segments.extend(tick_pair(center, radius, END_ANGLE, END_ANGLE - TICK_SWEEP));
        }

        segments
    }

    /// Build the canvas path for a box of `size`
    pub fn path(&self, size: Size) -> Path {
        let segments = self.segments(size);
        Path::new(|builder| {
            for segment in &segments {
                match *segment {
                    GaugeSegment::Arc {
                        center,
                        radius,
                        start_degrees,
                        end_degrees,
                    } => builder.arc(Arc {
                        center,
                        radius,
                        start_angle: Radians(radians(start_degrees)),
                        end_angle: Radians(radians(end_degrees)),
                    }),
                    GaugeSegment::Line { from, to } => {
                        builder.move_to(from);
                        builder.line_to(to);
                    }
                }
            }
        })
    }

    /// Stroke the gauge into an existing frame
    pub fn stroke(&self, frame: &mut Frame, size: Size) {
        frame.stroke(
            &self.path(size),
            Stroke::default()
                .with_width(self.stroke_width)
                .with_color(self.color)
                .with_line_cap(LineCap::Round)
                .with_line_join(LineJoin::Round),
        );
    }
}

/// Two ticks from the ring at `anchor_degrees`, one reaching outside the
/// ring and one inside, both leaning towards `tip_degrees`
fn tick_pair(
    center: Point,
    radius: f32,
    anchor_degrees: f32,
    tip_degrees: f32,
) -> [GaugeSegment; 2] {
    let anchor = point_on_circle(center, radius, radians(anchor_degrees));
    let tip = radians(tip_degrees);
    [
        GaugeSegment::Line {
            from: anchor,
            to: point_on_circle(center, radius + TICK_REACH, tip),
        },
        GaugeSegment::Line {
            from: anchor,
            to: point_on_circle(center, radius - TICK_REACH, tip),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: Size = Size {
        width: 200.0,
        height: 200.0,
    };

    fn lines(segments: &[GaugeSegment]) -> Vec<(Point, Point)> {
        segments
            .iter()
            .filter_map(|s| match *s {
                GaugeSegment::Line { from, to } => Some((from, to)),
                GaugeSegment::Arc { .. } => None,
            })
            .collect()
    }

    fn anchor(degrees: f32) -> Point {
        point_on_circle(Point::new(100.0, 100.0), 100.0, radians(degrees))
    }

    #[test]
    fn test_arc_spans_160_to_200() {
        let segments = ArrowGauge::new(true, true).segments(SIZE);
        assert_eq!(
            segments,
            vec![GaugeSegment::Arc {
                center: Point::new(100.0, 100.0),
                radius: 100.0,
                start_degrees: 160.0,
                end_degrees: 200.0,
            }]
        );
    }

    #[test]
    fn test_middle_recipe_has_both_tick_pairs() {
        let segments = ArrowGauge::new(false, false).segments(SIZE);
        assert_eq!(lines(&segments).len(), 4);
    }

    #[test]
    fn test_first_recipe_only_has_end_ticks() {
        let segments = ArrowGauge::new(true, false).segments(SIZE);
        let ticks = lines(&segments);
        assert_eq!(ticks.len(), 2);
        assert!(ticks.iter().all(|(from, _)| *from == anchor(200.0)));
    }

    #[test]
    fn test_last_recipe_only_has_start_ticks() {
        let segments = ArrowGauge::new(false, true).segments(SIZE);
        let ticks = lines(&segments);
        assert_eq!(ticks.len(), 2);
        assert!(ticks.iter().all(|(from, _)| *from == anchor(160.0)));
    }

    #[test]
    fn test_ticks_straddle_the_ring() {
        let segments = ArrowGauge::new(false, true).segments(SIZE);
        let center = Point::new(100.0, 100.0);
        let mut reaches: Vec<f32> = lines(&segments)
            .iter()
            .map(|(_, to)| ((to.x - center.x).powi(2) + (to.y - center.y).powi(2)).sqrt())
            .collect();
        reaches.sort_by(|a, b| a.total_cmp(b));
        assert!((reaches[0] - 92.0).abs() < 1e-3);
        assert!((reaches[1] - 108.0).abs() < 1e-3);
    }
}
