//! Main application module

pub mod helpers;
mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};
use std::sync::Arc;

use crate::i18n::Key;
pub use message::Message;
pub use state::{App, ReadyDeck};
use state::{CoreState, DeckState, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Load settings first to initialize locale correctly
        let settings = crate::features::Settings::load();
        let window = settings.window.clone();

        // 2. Initialize sub-states
        let core = CoreState::new(settings);
        let ui = UiState::new();

        let recipes_path = core.recipes_path();
        let assets_dir = core.assets_dir();

        let app = Self {
            core,
            deck: DeckState::Loading,
            ui,
        };

        // 3. Open main window
        let (window_id, open_window) = iced::window::open(iced::window::Settings {
            size: iced::Size::new(window.width, window.height),
            exit_on_close_request: false,
            #[cfg(target_os = "linux")]
            platform_specific: iced::window::settings::PlatformSpecific {
                application_id: "cooking-quest".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });
        tracing::info!("Opening main window with id: {:?}", window_id);

        // 4. Load the recipe deck in the background
        let init_task = Task::batch([
            open_window.discard(),
            Task::perform(
                helpers::load_deck(recipes_path, assets_dir),
                |result| match result {
                    Ok(loaded) => Message::DeckLoaded(Arc::new(loaded)),
                    Err(e) => Message::DeckFailed(e.to_string()),
                },
            ),
        ]);

        (app, init_task)
    }

    /// Application theme for a specific window
    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title, including the recipe on screen once loaded
    pub fn title(&self, _window_id: iced::window::Id) -> String {
        let app_name = self.core.locale.get(Key::AppName);
        match self.deck.ready().and_then(|deck| deck.current()) {
            Some(recipe) => format!("{} - {}", app_name, recipe.title),
            None => app_name.to_string(),
        }
    }

    /// Subscriptions for animation frames, keyboard events, and window close
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::keyboard;

        // 1. Wheel animation (disabled in power saving mode)
        let needs_frames = subscription_logic::needs_animation_subscription(
            self.ui.has_active_animations(),
            self.core.settings.display.power_saving_mode,
        );

        // 2. Keyboard events
        let keyboard_sub = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Some(Message::KeyPressed(key, modifiers))
            }
            _ => None,
        });

        // 3. Window events
        let close_request_sub = iced::window::close_requests().map(|_id| Message::RequestClose);

        // 4. Animation subscription (vsync rate while the wheel swings)
        let animation_sub = if needs_frames {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        iced::Subscription::batch([keyboard_sub, close_request_sub, animation_sub])
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    pub fn needs_animation_subscription(has_animations: bool, power_saving: bool) -> bool {
        has_animations && !power_saving
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;

    #[test]
    fn frames_only_while_animating() {
        assert!(needs_animation_subscription(true, false));
        assert!(!needs_animation_subscription(false, false));
    }

    #[test]
    fn power_saving_suppresses_frames() {
        assert!(
            !needs_animation_subscription(true, true),
            "Power saving mode must not request frames"
        );
        assert!(!needs_animation_subscription(false, true));
    }
}
