//! Deck page - one recipe card at a time
//! Title on top, the swipeable wheel with the summary laid over its left
//! side, and the description at the bottom.

use iced::widget::{Space, column, container, row, stack};
use iced::{Element, Fill, Length, Padding};

use crate::app::{Message, ReadyDeck};
use crate::i18n::Locale;
use crate::ui::{components, theme};

/// Build the deck page for the recipe on screen
pub fn view<'a>(
    deck: &'a ReadyDeck,
    displayed_offset: f32,
    min_drag_distance: f32,
    locale: Locale,
) -> Element<'a, Message> {
    let Some(recipe) = deck.current() else {
        return Space::new().width(Fill).height(Fill).into();
    };

    let is_even = deck.swipe.is_even();
    let text_color = theme::card_text(is_even);

    let interaction = stack![
        components::interaction::view(
            displayed_offset,
            deck.swipe.at_top(),
            deck.swipe.at_bottom(),
            deck.current_image(),
            min_drag_distance,
        ),
        container(row![
            components::summary::view(recipe, &deck.recipes, text_color, locale),
            Space::new().width(Fill),
        ])
        .center_y(Fill),
    ]
    .width(Fill)
    .height(Length::FillPortion(3));

    let content = column![
        Space::new().height(Fill),
        components::title::view(&recipe.title, text_color, locale),
        interaction,
        components::description::view(&recipe.description, text_color, locale),
        Space::new().height(Fill),
    ]
    .spacing(10)
    .padding(Padding::new(24.0));

    container(content)
        .width(Fill)
        .height(Fill)
        .style(theme::card(is_even))
        .into()
}
