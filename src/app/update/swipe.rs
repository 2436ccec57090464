//! Swipe gesture and wheel animation handlers

use iced::Task;
use std::time::Instant;

use crate::app::helpers;
use crate::app::message::Message;
use crate::app::state::App;
use crate::features::{Step, SwipeOutcome};

impl App {
    /// Handle swipe-related messages
    pub fn handle_swipe(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::DragChanged(raw) => {
                let deck = self.deck.ready_mut()?;
                deck.swipe.update_drag_offset(*raw);
                let offset = deck.swipe.offset();
                self.follow_offset(offset);
                Some(Task::none())
            }

            Message::DragEnded(raw) => {
                let deck = self.deck.ready_mut()?;
                let outcome = deck.swipe.end_drag(*raw);
                tracing::debug!("Drag ended at {:.1}: {:?}", raw, outcome);
                Some(self.apply_outcome(outcome))
            }

            Message::StepDeck(step) => {
                let deck = self.deck.ready_mut()?;
                // Keyboard steps are ignored mid-drag
                if deck.swipe.is_dragging() {
                    return Some(Task::none());
                }
                let outcome = deck.swipe.step(*step);
                Some(self.apply_outcome(outcome))
            }

            Message::SettleSwipe(ticket) => {
                let deck = self.deck.ready_mut()?;
                if deck.swipe.settle(*ticket) {
                    // A full turn looks the same as no turn, so jump straight back
                    self.ui.swing.snap_to(0.0);
                } else {
                    tracing::debug!("Dropping stale settle {:?}", ticket);
                }
                Some(Task::none())
            }

            Message::AnimationTick => {
                self.ui.swing.tick(Instant::now());
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Move the displayed wheel towards the model offset
    fn follow_offset(&mut self, offset: f32) {
        if self.ui.swing.target() == offset {
            return;
        }
        if self.core.settings.display.power_saving_mode {
            self.ui.swing.snap_to(offset);
        } else {
            self.ui.swing.animate_to(offset);
        }
    }

    /// Animate a drag outcome and schedule the settle for recipe changes
    fn apply_outcome(&mut self, outcome: SwipeOutcome) -> Task<Message> {
        match outcome {
            SwipeOutcome::Settled => {
                self.follow_offset(0.0);
                Task::none()
            }
            SwipeOutcome::Moved { from, to, ticket } => {
                let step = if to > from { Step::Next } else { Step::Previous };
                let (offset, len) = self
                    .deck
                    .ready()
                    .map(|deck| (deck.swipe.offset(), deck.swipe.len()))
                    .unwrap_or_default();
                tracing::info!("Recipe {} -> {} of {} ({:?})", from, to, len, step);

                self.follow_offset(offset);

                let delay = self.core.settings.swipe.settle_delay();
                Task::perform(helpers::settle_after(delay), move |_| {
                    Message::SettleSwipe(ticket)
                })
            }
        }
    }
}
