//! Status page shown while the deck loads or after it failed

use iced::widget::{column, container, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::theme;

/// Loading placeholder
pub fn loading(locale: Locale) -> Element<'static, Message> {
    container(text(locale.get(Key::Loading)).size(16))
        .center(Fill)
        .style(theme::main_content)
        .into()
}

/// Load failure with the error message
pub fn failed(error: &str, locale: Locale) -> Element<'_, Message> {
    container(
        column![
            text(locale.get(Key::LoadFailedTitle))
                .size(20)
                .font(theme::bold()),
            text(error).size(14).color(theme::CAPTION_GRAY),
        ]
        .spacing(8)
        .align_x(Alignment::Center),
    )
    .center(Fill)
    .padding(24)
    .style(theme::main_content)
    .into()
}
