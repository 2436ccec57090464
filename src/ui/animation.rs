//! Animation support built on `iced_anim`
//!
//! Animations are ticked from the app's frame subscription, which only runs
//! while something is moving.

mod swing;

pub use swing::SwingAnimation;
