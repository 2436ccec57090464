//! Message update handlers - thin dispatcher delegating to submodules

mod deck;
mod detail;
mod keyboard;
mod swipe;
mod window;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        // Try each handler in order until one handles the message
        if let Some(task) = self.handle_deck(&message) {
            return task;
        }
        if let Some(task) = self.handle_swipe(&message) {
            return task;
        }
        if let Some(task) = self.handle_detail(&message) {
            return task;
        }
        if let Some(task) = self.handle_keyboard(&message) {
            return task;
        }
        if let Some(task) = self.handle_window(&message) {
            return task;
        }

        // Default: no task
        Task::none()
    }
}
