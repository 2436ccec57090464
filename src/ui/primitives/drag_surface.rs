//! Invisible drag surface
//!
//! Reports the vertical translation of a drag since the pointer went down,
//! once per move while dragging and once more on release. Presses only turn
//! into drags after the pointer travels `min_distance`, so a tap produces no
//! messages at all. The hit area is a circle with the radius of the one
//! inscribed in the widget bounds, optionally moved and scaled.

use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::event::Event;
use iced::{Element, Length, Point, Rectangle, Size, Theme, mouse, touch};

/// A drag-tracking overlay
pub struct DragSurface<'a, Message> {
    on_drag: Box<dyn Fn(f32) -> Message + 'a>,
    on_release: Box<dyn Fn(f32) -> Message + 'a>,
    min_distance: f32,
    hit_center: (f32, f32),
    hit_scale: f32,
}

impl<'a, Message> DragSurface<'a, Message> {
    pub fn new<D, R>(on_drag: D, on_release: R) -> Self
    where
        D: Fn(f32) -> Message + 'a,
        R: Fn(f32) -> Message + 'a,
    {
        Self {
            on_drag: Box::new(on_drag),
            on_release: Box::new(on_release),
            min_distance: 10.0,
            hit_center: (0.5, 0.5),
            hit_scale: 1.0,
        }
    }

    /// Pointer travel before a press becomes a drag
    pub fn min_distance(mut self, distance: f32) -> Self {
        self.min_distance = distance.max(0.0);
        self
    }

    /// Center of the hit circle as fractions of the bounds
    pub fn hit_center(mut self, x: f32, y: f32) -> Self {
        self.hit_center = (x, y);
        self
    }

    /// Scale applied to the hit circle radius
    pub fn hit_scale(mut self, scale: f32) -> Self {
        self.hit_scale = scale;
        self
    }

    fn hits(&self, bounds: Rectangle, position: Point) -> bool {
        let center = Point::new(
            bounds.x + bounds.width * self.hit_center.0,
            bounds.y + bounds.height * self.hit_center.1,
        );
        let radius = bounds.width.min(bounds.height) / 2.0 * self.hit_scale;
        center.distance(position) <= radius
    }
}

/// Gesture progress for the drag surface
#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    origin: Option<Point>,
    last: Option<Point>,
    is_dragging: bool,
}

impl State {
    fn press(&mut self, position: Point) {
        self.origin = Some(position);
        self.last = Some(position);
        self.is_dragging = false;
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn translation(&self) -> f32 {
        match (self.origin, self.last) {
            (Some(origin), Some(last)) => last.y - origin.y,
            _ => 0.0,
        }
    }
}

impl<'a, Message, Renderer> Widget<Message, Theme, Renderer> for DragSurface<'a, Message>
where
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> widget::tree::Tag {
        widget::tree::Tag::of::<State>()
    }

    fn state(&self) -> widget::tree::State {
        widget::tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fill)
    }

    fn layout(
        &mut self,
        _tree: &mut widget::Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let size = limits.resolve(Length::Fill, Length::Fill, Size::ZERO);
        layout::Node::new(size)
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<State>();
        let bounds = layout.bounds();

        let (pressed, moved, released) = match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                (cursor.position(), None, false)
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) => (None, Some(*position), false),
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => (None, None, true),
            Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                (Some(*position), None, false)
            }
            Event::Touch(touch::Event::FingerMoved { position, .. }) => {
                (None, Some(*position), false)
            }
            Event::Touch(
                touch::Event::FingerLifted { .. } | touch::Event::FingerLost { .. },
            ) => (None, None, true),
            _ => (None, None, false),
        };

        if let Some(position) = pressed {
            if self.hits(bounds, position) {
                state.press(position);
                shell.capture_event();
            }
            return;
        }

        if let Some(position) = moved {
            let Some(origin) = state.origin else {
                return;
            };
            state.last = Some(position);
            if !state.is_dragging && origin.distance(position) >= self.min_distance {
                state.is_dragging = true;
            }
            if state.is_dragging {
                shell.publish((self.on_drag)(state.translation()));
                shell.capture_event();
            }
            return;
        }

        if released && state.origin.is_some() {
            if state.is_dragging {
                shell.publish((self.on_release)(state.translation()));
                shell.capture_event();
            }
            state.reset();
        }
    }

    fn draw(
        &self,
        _tree: &widget::Tree,
        _renderer: &mut Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        _layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();

        if state.is_dragging {
            mouse::Interaction::Grabbing
        } else if cursor
            .position()
            .is_some_and(|position| self.hits(layout.bounds(), position))
        {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message> From<DragSurface<'a, Message>> for Element<'a, Message, Theme>
where
    Message: 'a,
{
    fn from(surface: DragSurface<'a, Message>) -> Self {
        Element::new(surface)
    }
}

/// Creates a new drag surface
pub fn drag_surface<'a, Message>(
    on_drag: impl Fn(f32) -> Message + 'a,
    on_release: impl Fn(f32) -> Message + 'a,
) -> DragSurface<'a, Message> {
    DragSurface::new(on_drag, on_release)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_is_relative_to_press() {
        let mut state = State::default();
        state.press(Point::new(40.0, 100.0));
        state.last = Some(Point::new(55.0, 10.0));
        assert_eq!(state.translation(), -90.0);

        state.reset();
        assert_eq!(state.translation(), 0.0);
        assert!(!state.is_dragging);
    }

    #[test]
    fn test_hit_area_is_circular() {
        let surface: DragSurface<'_, ()> = drag_surface(|_| (), |_| ()).hit_scale(1.0);
        let bounds = Rectangle::new(Point::ORIGIN, Size::new(100.0, 100.0));
        assert!(surface.hits(bounds, Point::new(50.0, 50.0)));
        assert!(surface.hits(bounds, Point::new(50.0, 1.0)));
        // Box corner lies outside the inscribed circle
        assert!(!surface.hits(bounds, Point::new(2.0, 2.0)));

        let wide = surface.hit_scale(1.5);
        assert!(wide.hits(bounds, Point::new(2.0, 2.0)));
    }

    #[test]
    fn test_hit_circle_can_sit_on_the_edge() {
        let surface: DragSurface<'_, ()> = drag_surface(|_| (), |_| ())
            .hit_center(1.0, 0.5)
            .hit_scale(0.6);
        let bounds = Rectangle::new(Point::ORIGIN, Size::new(100.0, 100.0));
        assert!(surface.hits(bounds, Point::new(80.0, 50.0)));
        assert!(!surface.hits(bounds, Point::new(50.0, 50.0)));
    }
}
