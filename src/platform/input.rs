//! Keyboard input mapped to intent flags
//!
//! Browser callbacks only push events; the loop driver drains the queue once
//! at the start of each frame.

use std::collections::VecDeque;

use crate::sim::Intents;

/// Paddle direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// A queued input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Press(Direction),
    Release(Direction),
    ToggleAutopilot,
}

impl InputEvent {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key(key: &str, pressed: bool) -> Option<Self> {
        let direction = match key {
            "Right" | "ArrowRight" => Some(Direction::Right),
            "Left" | "ArrowLeft" => Some(Direction::Left),
            _ => None,
        };

        match (direction, pressed) {
            (Some(dir), true) => Some(InputEvent::Press(dir)),
            (Some(dir), false) => Some(InputEvent::Release(dir)),
            (None, true) if matches!(key, "i" | "I") => Some(InputEvent::ToggleAutopilot),
            _ => None,
        }
    }
}

/// Held-key state plus pending events
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pending: VecDeque<InputEvent>,
    intents: Intents,
    autopilot: bool,
}

impl InputQueue {
    pub fn new(autopilot: bool) -> Self {
        Self {
            autopilot,
            ..Default::default()
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    #[cfg(test)]
    fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Apply all pending events and return the resulting intents
    pub fn drain(&mut self) -> Intents {
        while let Some(event) = self.pending.pop_front() {
            match event {
                InputEvent::Press(Direction::Left) => self.intents.left = true,
                InputEvent::Press(Direction::Right) => self.intents.right = true,
                InputEvent::Release(Direction::Left) => self.intents.left = false,
                InputEvent::Release(Direction::Right) => self.intents.right = false,
                InputEvent::ToggleAutopilot => {
                    self.autopilot = !self.autopilot;
                    log::info!("Autopilot: {}", self.autopilot);
                }
            }
        }
        self.intents
    }

    pub fn autopilot(&self) -> bool {
        self.autopilot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(
            InputEvent::from_key("ArrowLeft", true),
            Some(InputEvent::Press(Direction::Left))
        );
        assert_eq!(
            InputEvent::from_key("Right", false),
            Some(InputEvent::Release(Direction::Right))
        );
        assert_eq!(InputEvent::from_key("i", true), Some(InputEvent::ToggleAutopilot));
        assert_eq!(InputEvent::from_key("i", false), None);
        assert_eq!(InputEvent::from_key("ArrowUp", true), None);
    }

    #[test]
    fn test_drain_applies_in_order() {
        let mut queue = InputQueue::default();
        queue.push(InputEvent::Press(Direction::Left));
        queue.push(InputEvent::Press(Direction::Right));
        queue.push(InputEvent::Release(Direction::Left));
        assert_eq!(queue.pending(), 3);

        let intents = queue.drain();
        assert_eq!(intents, Intents { left: false, right: true });
        assert_eq!(queue.pending(), 0);
    }

    #[test]
    fn test_held_keys_persist_between_drains() {
        let mut queue = InputQueue::default();
        queue.push(InputEvent::Press(Direction::Right));
        queue.drain();
        assert!(queue.drain().right);
        queue.push(InputEvent::Release(Direction::Right));
        assert!(!queue.drain().right);
    }

    #[test]
    fn test_autopilot_toggle() {
        let mut queue = InputQueue::new(false);
        queue.push(InputEvent::ToggleAutopilot);
        queue.drain();
        assert!(queue.autopilot());
    }
}
