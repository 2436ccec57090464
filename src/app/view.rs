//! Application view rendering

use iced::Element;

use super::App;
use super::message::Message;
use super::state::DeckState;
use crate::ui::pages;

impl App {
    /// Build the view for a specific window
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        let locale = self.core.locale;

        match &self.deck {
            DeckState::Loading => pages::status::loading(locale),
            DeckState::Failed(error) => pages::status::failed(error, locale),
            DeckState::Ready(deck) => match deck.selected() {
                Some(recipe) => pages::detail::view(recipe, locale),
                None => pages::deck::view(
                    deck,
                    self.ui.swing.value(),
                    self.core.settings.swipe.min_drag_distance,
                    locale,
                ),
            },
        }
    }
}
