//! Short pressed-state flash for buttons

use std::time::Duration;

pub const PRESS_DURATION: Duration = Duration::from_millis(150);

/// Tracks which button, if any, is showing its pressed style
#[derive(Debug, Clone)]
pub struct PressFeedback<K> {
    pressed: Option<(K, Duration)>,
}

impl<K> Default for PressFeedback<K> {
    fn default() -> Self {
        Self { pressed: None }
    }
}

impl<K: Copy + PartialEq> PressFeedback<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flash `key`, replacing any flash still running
    pub fn press(&mut self, key: K) {
        self.pressed = Some((key, PRESS_DURATION));
    }

    pub fn advance(&mut self, dt: Duration) {
        if let Some((key, remaining)) = self.pressed {
            self.pressed = remaining
                .checked_sub(dt)
                .filter(|left| !left.is_zero())
                .map(|left| (key, left));
        }
    }

    pub fn is_pressed(&self, key: K) -> bool {
        matches!(self.pressed, Some((current, _)) if current == key)
    }

    pub fn clear(&mut self) {
        self.pressed = None;
    }
}
