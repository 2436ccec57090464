//! Swipe view-model - turns vertical drags into recipe changes
//!
//! While a drag is active the card follows the pointer with a damped offset.
//! On release the deck either moves one recipe (the offset jumps to a large
//! sentinel so the old card swings out) or snaps back to rest. After a move
//! a settle is scheduled; it only applies if no newer drag or move has
//! happened since, which is tracked with a generation counter.

use super::settings::{SwipeDirection, SwipeSettings};

/// Position in a non-empty deck. `index < len` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckCursor {
    index: usize,
    len: usize,
}

impl DeckCursor {
    /// Cursor at the first recipe. Returns None for an empty deck.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { index: 0, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.len
    }

    /// Move forward one recipe; refuses to leave the last one
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Move back one recipe; refuses to leave the first one
    pub fn retreat(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.index -= 1;
        true
    }
}

/// Direction of a deck step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Previous,
    Next,
}

/// Identifies the deferred settle that belongs to one recipe change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleTicket {
    generation: u64,
}

/// Result of releasing a drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// No recipe change; the offset is already back at rest
    Settled,
    /// The deck moved; `ticket` must be redeemed after the settle delay
    Moved {
        from: usize,
        to: usize,
        ticket: SettleTicket,
    },
}

/// Swipe state for the recipe deck
#[derive(Debug, Clone)]
pub struct SwipeModel {
    cursor: DeckCursor,
    offset: f32,
    selected: Option<usize>,
    generation: u64,
    dragging: bool,
    damping: f32,
    threshold: f32,
    sentinel: f32,
    direction: SwipeDirection,
}

impl SwipeModel {
    /// Create a model for a deck of `len` recipes. None when the deck is empty.
    pub fn new(len: usize, settings: &SwipeSettings) -> Option<Self> {
        let cursor = DeckCursor::new(len)?;
        Some(Self {
            cursor,
            offset: 0.0,
            selected: None,
            generation: 0,
            dragging: false,
            // A zero damping would turn every drag into infinity
            damping: if settings.damping > 0.0 {
                settings.damping
            } else {
                1.0
            },
            threshold: settings.threshold,
            sentinel: settings.sentinel_offset,
            direction: settings.direction,
        })
    }

    pub fn current_index(&self) -> usize {
        self.cursor.index()
    }

    pub fn len(&self) -> usize {
        self.cursor.len()
    }

    /// Current swipe offset (card rotation in degrees is its negation)
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// First recipe shown; the gauge hides its start tick
    pub fn at_top(&self) -> bool {
        self.cursor.is_first()
    }

    /// Last recipe shown; the gauge hides its end tick
    pub fn at_bottom(&self) -> bool {
        self.cursor.is_last()
    }

    /// Even and odd recipes use alternating color schemes
    pub fn is_even(&self) -> bool {
        self.cursor.index() % 2 == 0
    }

    /// Track the pointer while a drag is active
    pub fn update_drag_offset(&mut self, raw_delta_y: f32) {
        if !self.dragging {
            // A new drag invalidates any settle still in flight
            self.dragging = true;
            self.generation += 1;
        }
        self.offset = raw_delta_y / self.damping;
    }

    /// Release the drag and decide whether the deck moves
    pub fn end_drag(&mut self, raw_delta_y: f32) -> SwipeOutcome {
        self.dragging = false;
        let scaled = raw_delta_y / self.damping;

        if scaled.abs() <= self.threshold {
            self.offset = 0.0;
            return SwipeOutcome::Settled;
        }

        let step = match (self.direction, scaled > 0.0) {
            (SwipeDirection::Natural, true) | (SwipeDirection::Inverted, false) => Step::Previous,
            (SwipeDirection::Natural, false) | (SwipeDirection::Inverted, true) => Step::Next,
        };
        self.step(step)
    }

    /// Move one recipe without a drag (keyboard)
    pub fn step(&mut self, step: Step) -> SwipeOutcome {
        let from = self.cursor.index();
        let moved = match step {
            Step::Previous => self.cursor.retreat(),
            Step::Next => self.cursor.advance(),
        };

        if !moved {
            self.offset = 0.0;
            return SwipeOutcome::Settled;
        }

        self.offset = match step {
            Step::Previous => self.sentinel,
            Step::Next => -self.sentinel,
        };
        self.generation += 1;

        SwipeOutcome::Moved {
            from,
            to: self.cursor.index(),
            ticket: SettleTicket {
                generation: self.generation,
            },
        }
    }

    /// Bring the card back to rest if the ticket is still current
    pub fn settle(&mut self, ticket: SettleTicket) -> bool {
        if ticket.generation != self.generation || self.dragging {
            return false;
        }
        self.offset = 0.0;
        true
    }

    /// Request the detail view for the recipe on screen
    pub fn select_current(&mut self) {
        self.selected = Some(self.cursor.index());
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(len: usize) -> SwipeModel {
        SwipeModel::new(len, &SwipeSettings::default()).unwrap()
    }

    fn ticket_of(outcome: SwipeOutcome) -> SettleTicket {
        match outcome {
            SwipeOutcome::Moved { ticket, .. } => ticket,
            SwipeOutcome::Settled => panic!("expected the deck to move"),
        }
    }

    #[test]
    fn test_empty_deck_has_no_model() {
        assert!(SwipeModel::new(0, &SwipeSettings::default()).is_none());
        assert!(DeckCursor::new(0).is_none());
    }

    #[test]
    fn test_drag_offset_is_damped_without_clamping() {
        let mut m = model(3);
        for raw in [0.0, 15.0, -60.0, 3000.0, -4500.0] {
            m.update_drag_offset(raw);
            assert_eq!(m.offset(), raw / 3.0);
        }
        assert_eq!(m.current_index(), 0);
    }

    #[test]
    fn test_short_release_never_moves() {
        for raw in [60.0, -60.0, 30.0, -30.0, 0.0] {
            let mut m = model(3);
            m.step(Step::Next);
            m.update_drag_offset(raw);
            assert_eq!(m.end_drag(raw), SwipeOutcome::Settled);
            assert_eq!(m.current_index(), 1);
            assert_eq!(m.offset(), 0.0);
        }
    }

    #[test]
    fn test_positive_release_retreats_with_sentinel() {
        let mut m = model(3);
        m.step(Step::Next);
        m.update_drag_offset(90.0);
        let outcome = m.end_drag(90.0);

        assert!(matches!(outcome, SwipeOutcome::Moved { from: 1, to: 0, .. }));
        assert_eq!(m.current_index(), 0);
        assert_eq!(m.offset(), 360.0);
    }

    #[test]
    fn test_retreat_at_first_recipe_resets_immediately() {
        let mut m = model(3);
        m.update_drag_offset(90.0);
        assert_eq!(m.end_drag(90.0), SwipeOutcome::Settled);
        assert_eq!(m.current_index(), 0);
        assert_eq!(m.offset(), 0.0);
    }

    #[test]
    fn test_advance_past_last_recipe_is_refused() {
        let mut m = model(3);
        m.step(Step::Next);
        m.step(Step::Next);
        assert_eq!(m.current_index(), 2);
        assert!(m.at_bottom());

        m.update_drag_offset(-90.0);
        assert_eq!(m.end_drag(-90.0), SwipeOutcome::Settled);
        assert_eq!(m.current_index(), 2);
        assert!(m.current_index() < m.len());
        assert_eq!(m.offset(), 0.0);
    }

    #[test]
    fn test_swipe_up_advances_then_settles() {
        let mut m = model(3);
        m.update_drag_offset(-45.0);
        m.update_drag_offset(-90.0);
        assert_eq!(m.offset(), -30.0);

        let outcome = m.end_drag(-90.0);
        assert!(matches!(outcome, SwipeOutcome::Moved { from: 0, to: 1, .. }));
        assert_eq!(m.current_index(), 1);
        assert_eq!(m.offset(), -360.0);

        assert!(m.settle(ticket_of(outcome)));
        assert_eq!(m.offset(), 0.0);
    }

    #[test]
    fn test_new_drag_makes_pending_settle_stale() {
        let mut m = model(3);
        m.update_drag_offset(-90.0);
        let ticket = ticket_of(m.end_drag(-90.0));

        // Second drag starts before the settle timer fires
        m.update_drag_offset(-12.0);
        assert!(!m.settle(ticket));
        assert_eq!(m.offset(), -4.0);

        assert_eq!(m.end_drag(-12.0), SwipeOutcome::Settled);
        assert!(!m.settle(ticket));
        assert_eq!(m.offset(), 0.0);
    }

    #[test]
    fn test_only_latest_move_settles() {
        let mut m = model(4);
        let first = ticket_of(m.step(Step::Next));
        let second = ticket_of(m.step(Step::Next));

        assert!(!m.settle(first));
        assert_eq!(m.offset(), -360.0);
        assert!(m.settle(second));
        assert_eq!(m.offset(), 0.0);
    }

    #[test]
    fn test_inverted_direction_swaps_mapping() {
        let settings = SwipeSettings {
            direction: SwipeDirection::Inverted,
            ..SwipeSettings::default()
        };
        let mut m = SwipeModel::new(3, &settings).unwrap();
        m.step(Step::Next);

        m.update_drag_offset(-90.0);
        let outcome = m.end_drag(-90.0);
        assert!(matches!(outcome, SwipeOutcome::Moved { from: 1, to: 0, .. }));
        assert_eq!(m.offset(), 360.0);
    }

    #[test]
    fn test_threshold_is_strict() {
        let mut m = model(3);
        // Exactly 20 after damping does not count
        assert_eq!(m.end_drag(-60.0), SwipeOutcome::Settled);
        assert!(matches!(m.end_drag(-61.0), SwipeOutcome::Moved { .. }));
    }

    #[test]
    fn test_boundary_flags_follow_cursor() {
        let mut m = model(2);
        assert!(m.at_top() && !m.at_bottom());
        m.step(Step::Next);
        assert!(!m.at_top() && m.at_bottom());

        let single = model(1);
        assert!(single.at_top() && single.at_bottom());
    }

    #[test]
    fn test_selection() {
        let mut m = model(3);
        m.step(Step::Next);
        m.select_current();
        assert_eq!(m.selected(), Some(1));
        m.clear_selection();
        assert_eq!(m.selected(), None);
    }
}
