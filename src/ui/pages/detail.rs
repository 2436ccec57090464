//! Detail page - placeholder for the selected recipe

use iced::widget::{Space, button, column, container, row, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::features::Recipe;
use crate::i18n::{Key, Locale};
use crate::ui::{icons, theme};

/// Build the detail page for a selected recipe
pub fn view<'a>(recipe: &'a Recipe, locale: Locale) -> Element<'a, Message> {
    let back = button(
        row![
            svg(svg::Handle::from_memory(icons::ARROW_LEFT.as_bytes()))
                .width(18)
                .height(18)
                .style(|_theme, _status| svg::Style {
                    color: Some(theme::ACCENT_GREEN),
                }),
            text(locale.get(Key::DetailBack)).size(15),
        ]
        .spacing(6)
        .align_y(Alignment::Center),
    )
    .padding([6, 10])
    .style(theme::transparent_button)
    .on_press(Message::CloseDetails);

    let panel = container(
        column![
            text(&recipe.title).size(26).font(theme::bold()),
            text(&recipe.description).size(15),
            text(locale.get(Key::DetailComingSoon))
                .size(14)
                .color(theme::CAPTION_GRAY),
        ]
        .spacing(16),
    )
    .padding(24)
    .width(Fill)
    .style(theme::detail_panel);

    let content = column![back, Space::new().height(12), panel]
        .padding(Padding::new(20.0).top(28.0));

    container(content)
        .width(Fill)
        .height(Fill)
        .style(theme::main_content)
        .into()
}
