//! Detail page handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle detail page navigation
    pub fn handle_detail(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ShowDetails => {
                let deck = self.deck.ready_mut()?;
                if deck.swipe.is_dragging() {
                    return Some(Task::none());
                }
                deck.swipe.select_current();
                if let Some(recipe) = deck.selected() {
                    tracing::info!("Opening details for '{}'", recipe.title);
                }
                Some(Task::none())
            }

            Message::CloseDetails => {
                let deck = self.deck.ready_mut()?;
                deck.swipe.clear_selection();
                Some(Task::none())
            }

            _ => None,
        }
    }
}
