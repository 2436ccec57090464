//! Application state definitions

use std::path::PathBuf;
use std::sync::Arc;

use iced::widget::image::Handle;

use crate::app::helpers::LoadedDeck;
use crate::features::{Recipe, RecipeDeck, Settings, SwipeModel};
use crate::i18n::{Language, Locale};
use crate::ui::animation::SwingAnimation;

/// Main application state
pub struct App {
    /// Settings and localization
    pub core: CoreState,
    /// Recipe deck and swipe state
    pub deck: DeckState,
    /// Presentation-only state
    pub ui: UiState,
}

/// Core configuration
pub struct CoreState {
    pub settings: Settings,
    pub locale: Locale,
}

impl CoreState {
    pub fn new(settings: Settings) -> Self {
        let language = Language::from_code(&settings.display.language);
        tracing::info!("Using language: {}", language.code());
        Self {
            settings,
            locale: Locale::new(language),
        }
    }

    pub fn recipes_path(&self) -> Option<PathBuf> {
        self.settings.content.recipes_path.as_ref().map(PathBuf::from)
    }

    pub fn assets_dir(&self) -> PathBuf {
        PathBuf::from(&self.settings.content.assets_dir)
    }
}

/// Recipe deck lifecycle
pub enum DeckState {
    Loading,
    Ready(ReadyDeck),
    Failed(String),
}

/// A loaded deck together with its swipe state
pub struct ReadyDeck {
    pub recipes: Arc<RecipeDeck>,
    pub images: Vec<Option<Handle>>,
    pub swipe: SwipeModel,
}

impl ReadyDeck {
    /// Build from a loaded deck; None if the deck has no recipes
    pub fn new(loaded: &LoadedDeck, settings: &Settings) -> Option<Self> {
        let swipe = SwipeModel::new(loaded.deck.len(), &settings.swipe)?;
        let images = loaded
            .images
            .iter()
            .map(|path| path.as_ref().map(Handle::from_path))
            .collect();

        Some(Self {
            recipes: Arc::new(loaded.deck.clone()),
            images,
            swipe,
        })
    }

    /// Recipe on screen
    pub fn current(&self) -> Option<&Recipe> {
        self.recipes.get(self.swipe.current_index())
    }

    /// Recipe requested for the detail page
    pub fn selected(&self) -> Option<&Recipe> {
        self.swipe.selected().and_then(|index| self.recipes.get(index))
    }

    pub fn current_image(&self) -> Option<Handle> {
        self.images
            .get(self.swipe.current_index())
            .cloned()
            .flatten()
    }
}

impl DeckState {
    pub fn ready(&self) -> Option<&ReadyDeck> {
        match self {
            DeckState::Ready(deck) => Some(deck),
            _ => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut ReadyDeck> {
        match self {
            DeckState::Ready(deck) => Some(deck),
            _ => None,
        }
    }
}

/// UI state
#[derive(Default)]
pub struct UiState {
    /// Displayed wheel offset, eased towards the swipe model's offset
    pub swing: SwingAnimation,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if any animations are currently running
    pub fn has_active_animations(&self) -> bool {
        self.swing.is_animating()
    }
}
