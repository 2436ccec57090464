//! Window message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle window-related messages
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::RequestClose => {
                tracing::info!("Exiting");
                Some(iced::exit())
            }

            _ => None,
        }
    }
}
