//! Description row with the "view details" badge button

use iced::widget::{button, canvas, container, row, stack, svg, text, tooltip};
use iced::{Alignment, Color, Element, Fill};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::primitives::DetailBadge;
use crate::ui::{icons, theme};

const BADGE_SIDE: f32 = 60.0;
const ARROW_SIZE: f32 = 22.0;

/// Build the description row
pub fn view<'a>(description: &'a str, text_color: Color, locale: Locale) -> Element<'a, Message> {
    let badge = DetailBadge::new(BADGE_SIDE, theme::ACCENT_GREEN);
    let extent = badge.extent();

    let arrow = svg(svg::Handle::from_memory(icons::ARROW_RIGHT.as_bytes()))
        .width(ARROW_SIZE)
        .height(ARROW_SIZE)
        .style(|_theme, _status| svg::Style {
            color: Some(Color::WHITE),
        });

    let badge_button = button(stack![
        canvas(badge).width(extent).height(extent),
        container(arrow).center(extent),
    ])
    .padding(0)
    .style(theme::transparent_button)
    .on_press(Message::ShowDetails);

    let details = tooltip(
        badge_button,
        container(text(locale.get(Key::ViewDetails)).size(12))
            .padding([4, 8])
            .style(container::rounded_box),
        tooltip::Position::Top,
    );

    row![
        text(description)
            .size(14)
            .font(theme::semibold())
            .color(text_color)
            .width(Fill),
        details,
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .into()
}
