//! Recipe deck loading handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::{App, DeckState, ReadyDeck};

impl App {
    /// Handle content loading messages
    pub fn handle_deck(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::DeckLoaded(loaded) => {
                match ReadyDeck::new(loaded, &self.core.settings) {
                    Some(ready) => {
                        tracing::info!(
                            "Showing recipe deck, {} of {} images found",
                            ready.images.iter().filter(|image| image.is_some()).count(),
                            ready.images.len()
                        );
                        self.ui.swing.snap_to(0.0);
                        self.deck = DeckState::Ready(ready);
                    }
                    None => {
                        tracing::error!("Loaded recipe deck has no recipes");
                        self.deck = DeckState::Failed("no recipes".to_string());
                    }
                }
                Some(Task::none())
            }

            Message::DeckFailed(e) => {
                tracing::error!("Failed to load recipe deck: {}", e);
                self.deck = DeckState::Failed(e.clone());
                Some(Task::none())
            }

            _ => None,
        }
    }
}
