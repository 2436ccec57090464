//! Interaction area: the rotating recipe wheel under its drag surface

use iced::widget::image::Handle;
use iced::widget::{canvas, stack};
use iced::{Element, Fill};

use crate::app::Message;
use crate::ui::primitives::{RecipeWheel, drag_surface};

/// Hit circle relative to the image circle
const HIT_SCALE: f32 = 1.2;

/// Build the interaction area
///
/// The wheel hangs off the right edge with only its left half on screen.
/// Rotation is the negated swipe offset, so dragging up turns it clockwise.
pub fn view(
    offset: f32,
    at_top: bool,
    at_bottom: bool,
    image: Option<Handle>,
    min_drag_distance: f32,
) -> Element<'static, Message> {
    let wheel = RecipeWheel::new(at_top, at_bottom)
        .rotation(-offset)
        .image(image)
        .anchor(1.0, 0.5);

    stack![
        canvas(wheel).width(Fill).height(Fill),
        drag_surface(Message::DragChanged, Message::DragEnded)
            .min_distance(min_drag_distance)
            .hit_center(1.0, 0.5)
            .hit_scale(HIT_SCALE),
    ]
    .width(Fill)
    .height(Fill)
    .into()
}
