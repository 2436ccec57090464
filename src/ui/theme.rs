//! Theme system for the recipe deck
//! Cards alternate between a dark and a light scheme; the chrome follows
//! the dark mode setting.

use iced::color;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Font, Shadow, Theme, Vector, font};

// ============================================================================
// Card Palette
// ============================================================================

/// Background of even cards
pub const DARK_BACKGROUND: Color = color!(0x223344);

/// Background of odd cards
pub const LIGHT_BACKGROUND: Color = color!(0xf3f3f3);

/// Accent used by icons, the ring and the detail button
pub const ACCENT_GREEN: Color = color!(0x34c759);

/// Caption above the recipe title
pub const CAPTION_GRAY: Color = color!(0x8e8e93);

/// Arrow gauge stroke
pub const GAUGE_GRAY: Color = color!(0x8e8e93);

pub const BOLD_WEIGHT: font::Weight = font::Weight::Bold;
pub const SEMIBOLD_WEIGHT: font::Weight = font::Weight::Semibold;

pub fn bold() -> Font {
    Font {
        weight: BOLD_WEIGHT,
        ..Default::default()
    }
}

pub fn semibold() -> Font {
    Font {
        weight: SEMIBOLD_WEIGHT,
        ..Default::default()
    }
}

/// Card background for the given recipe parity
pub fn card_background(is_even: bool) -> Color {
    if is_even {
        DARK_BACKGROUND
    } else {
        LIGHT_BACKGROUND
    }
}

/// Card text color for the given recipe parity
///
/// Light text on the dark card and dark text on the light card, so the
/// text always contrasts with its own background.
pub fn card_text(is_even: bool) -> Color {
    if is_even { Color::WHITE } else { Color::BLACK }
}

// ============================================================================
// Container Styles
// ============================================================================

/// Full-screen card background
pub fn card(is_even: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(card_background(is_even))),
        text_color: Some(card_text(is_even)),
        ..Default::default()
    }
}

/// Plain page background following the chrome theme
pub fn main_content(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

/// Panel used by the detail page
pub fn detail_panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        border: Border {
            radius: 16.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
            offset: Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Transparent button that only shows its content
pub fn transparent_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: None,
        ..Default::default()
    };

    match status {
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.05))),
            ..base
        },
        _ => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parity_alternates_scheme() {
        assert_eq!(card_background(true), DARK_BACKGROUND);
        assert_eq!(card_background(false), LIGHT_BACKGROUND);
        assert_ne!(card_text(true), card_text(false));
    }

    #[test]
    fn test_text_contrasts_with_card() {
        assert_eq!(card_text(true), Color::WHITE);
        assert_eq!(card_text(false), Color::BLACK);
    }
}
