//! Recipe summary: one icon row per attribute plus a closing "healthy" row

use iced::widget::{Column, row, svg, text};
use iced::{Alignment, Color, Element};

use crate::app::Message;
use crate::features::{Recipe, RecipeDeck};
use crate::i18n::{Key, Locale};
use crate::ui::{icons, theme};

const ICON_SIZE: f32 = 20.0;

/// Build the summary column for a recipe
pub fn view<'a>(
    recipe: &'a Recipe,
    deck: &'a RecipeDeck,
    text_color: Color,
    locale: Locale,
) -> Element<'a, Message> {
    // BTreeMap iteration keeps rows in key order
    let rows = recipe.summary.iter().map(|(key, value)| {
        let icon = deck.summary_icon(key).map(icons::by_id).unwrap_or(icons::DOT);
        summary_row(icon, value, text_color)
    });

    Column::with_children(rows)
        .push(summary_row(
            icons::CHART,
            locale.get(Key::SummaryHealthy),
            text_color,
        ))
        .spacing(24)
        .into()
}

fn summary_row<'a>(icon: &'static str, label: &'a str, text_color: Color) -> Element<'a, Message> {
    row![
        svg(svg::Handle::from_memory(icon.as_bytes()))
            .width(ICON_SIZE)
            .height(ICON_SIZE)
            .style(|_theme, _status| svg::Style {
                color: Some(theme::ACCENT_GREEN),
            }),
        text(label)
            .size(17)
            .font(theme::semibold())
            .color(text_color),
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .into()
}
