//! Title block: app caption over the recipe title

use iced::widget::{column, text};
use iced::{Color, Element};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::theme;

/// Build the title block
pub fn view<'a>(title: &'a str, text_color: Color, locale: Locale) -> Element<'a, Message> {
    column![
        text(locale.get(Key::AppCaption))
            .size(16)
            .font(theme::bold())
            .color(theme::CAPTION_GRAY),
        text(title).size(22).font(theme::bold()).color(text_color),
    ]
    .spacing(4)
    .into()
}
