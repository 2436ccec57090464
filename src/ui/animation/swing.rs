//! Swing animation for the recipe wheel using iced_anim
//!
//! Drag updates and releases both ease towards their new offset, the same
//! way the wheel follows the finger and then swings out or back.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Swing duration
const SWING_DURATION: Duration = Duration::from_millis(350);

fn swing_easing() -> Easing {
    Easing::EASE.with_duration(SWING_DURATION)
}

/// Animated wheel offset
#[derive(Debug)]
pub struct SwingAnimation {
    animation: Animated<f32>,
}

impl Default for SwingAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl SwingAnimation {
    pub fn new() -> Self {
        Self {
            animation: Animated::transition(0.0, swing_easing()),
        }
    }

    /// Ease towards a new offset
    pub fn animate_to(&mut self, offset: f32) {
        self.animation.update(offset.into());
    }

    /// Jump to an offset without animating (power saving mode)
    pub fn snap_to(&mut self, offset: f32) {
        self.animation = Animated::transition(offset, swing_easing());
    }

    /// Current interpolated offset
    pub fn value(&self) -> f32 {
        *self.animation.value()
    }

    /// Offset the animation is heading to
    pub fn target(&self) -> f32 {
        *self.animation.target()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Must be called on each animation frame to update values
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_rest() {
        let swing = SwingAnimation::new();
        assert_eq!(swing.value(), 0.0);
        assert!(!swing.is_animating());
    }

    #[test]
    fn test_animate_sets_target() {
        let mut swing = SwingAnimation::new();
        swing.animate_to(-360.0);
        assert_eq!(swing.target(), -360.0);
        assert!(swing.is_animating() || swing.value() == -360.0);
    }

    #[test]
    fn test_snap_jumps_immediately() {
        let mut swing = SwingAnimation::new();
        swing.snap_to(360.0);
        assert_eq!(swing.value(), 360.0);
        assert_eq!(swing.target(), 360.0);
        assert!(!swing.is_animating());
    }
}
