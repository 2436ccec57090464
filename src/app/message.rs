//! Application messages

use std::sync::Arc;

use iced::keyboard::{Key, Modifiers};

use crate::app::helpers::LoadedDeck;
use crate::features::{SettleTicket, Step};

/// Application messages
#[derive(Clone)]
pub enum Message {
    // ============ Content ============
    /// Recipe deck loaded and images resolved
    DeckLoaded(Arc<LoadedDeck>),
    /// Recipe deck could not be loaded
    DeckFailed(String),

    // ============ Swipe ============
    /// Drag in progress, vertical translation since press
    DragChanged(f32),
    /// Drag released, final vertical translation
    DragEnded(f32),
    /// Settle timer fired for a recipe change
    SettleSwipe(SettleTicket),
    /// Step the deck without a drag
    StepDeck(Step),

    // ============ Detail ============
    /// Open the detail page for the recipe on screen
    ShowDetails,
    /// Return to the deck
    CloseDetails,

    // ============ Frames & Input ============
    /// Animation frame
    AnimationTick,
    /// Keyboard key pressed
    KeyPressed(Key, Modifiers),

    // ============ Window ============
    /// Window close requested
    RequestClose,
}

// Drag messages arrive on every pointer move, keep their Debug output short
impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        macro_rules! simple {
            ($name:literal) => { write!(f, $name) };
            ($name:literal, $($arg:tt)*) => { write!(f, concat!($name, "({})"), format_args!($($arg)*)) };
        }

        match self {
            Self::AnimationTick => simple!("AnimationTick"),
            Self::DeckLoaded(loaded) => {
                simple!("DeckLoaded", "{} recipes", loaded.deck.len())
            }
            Self::DeckFailed(e) => simple!("DeckFailed", "{}", e),
            Self::DragChanged(dy) => simple!("DragChanged", "{:.1}", dy),
            Self::DragEnded(dy) => simple!("DragEnded", "{:.1}", dy),
            Self::SettleSwipe(ticket) => simple!("SettleSwipe", "{:?}", ticket),
            Self::StepDeck(step) => simple!("StepDeck", "{:?}", step),
            Self::ShowDetails => simple!("ShowDetails"),
            Self::CloseDetails => simple!("CloseDetails"),
            Self::KeyPressed(key, modifiers) => {
                simple!("KeyPressed", "{:?}, {:?}", key, modifiers)
            }
            Self::RequestClose => simple!("RequestClose"),
        }
    }
}
