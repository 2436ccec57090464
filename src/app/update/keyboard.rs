//! Keyboard message handlers

use iced::Task;
use iced::keyboard::{Key, Modifiers, key::Named};

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::Step;

impl App {
    /// Handle keyboard-related messages
    pub fn handle_keyboard(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::KeyPressed(key, modifiers) => {
                let detail_open = self
                    .deck
                    .ready()
                    .is_some_and(|deck| deck.swipe.selected().is_some());

                match action_for_key(key, modifiers, detail_open) {
                    Some(action) => Some(self.update(action)),
                    None => Some(Task::none()),
                }
            }

            _ => None,
        }
    }
}

/// Map a key press to the message it triggers
fn action_for_key(key: &Key, modifiers: &Modifiers, detail_open: bool) -> Option<Message> {
    if modifiers.command() || modifiers.alt() {
        return None;
    }

    match key.as_ref() {
        Key::Named(Named::Escape) if detail_open => Some(Message::CloseDetails),
        Key::Named(Named::Enter) if !detail_open => Some(Message::ShowDetails),
        Key::Named(Named::ArrowUp) if !detail_open => Some(Message::StepDeck(Step::Previous)),
        Key::Named(Named::ArrowDown) if !detail_open => Some(Message::StepDeck(Step::Next)),
        _ => None,
    }
}
