//! Held-key tracking for terminal environments.
//!
//! The engine wants "which actions are held right now", but most terminals
//! only report presses (plus auto-repeat). A key therefore counts as held until
//! either its release event arrives or it has been silent for the release
//! timeout. Once the terminal has delivered a single release event the timeout
//! is no longer applied.

use std::time::{Duration, Instant};

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::map_key;
use crate::types::{GameAction, InputFrame};

// A single tap must not look like a sustained hold long enough to start
// auto-shift (0.2 s).
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

#[derive(Debug, Clone)]
pub struct KeyboardState {
    /// Last press/repeat time per action; `None` when up.
    last_seen: [Option<Instant>; GameAction::COUNT],
    release_timeout: Duration,
    release_events_seen: bool,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::with_key_release_timeout_ms(DEFAULT_KEY_RELEASE_TIMEOUT_MS)
    }

    pub fn with_key_release_timeout_ms(timeout_ms: u64) -> Self {
        Self {
            last_seen: [None; GameAction::COUNT],
            release_timeout: Duration::from_millis(timeout_ms),
            release_events_seen: false,
        }
    }

    pub fn key_release_timeout(&self) -> Duration {
        self.release_timeout
    }

    pub fn release_events_seen(&self) -> bool {
        self.release_events_seen
    }

    /// Feed one key event. Returns the mapped action, if any.
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) -> Option<GameAction> {
        let action = map_key(key)?;
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.press(action, now),
            KeyEventKind::Release => {
                self.release_events_seen = true;
                self.release(action);
            }
        }
        Some(action)
    }

    pub fn press(&mut self, action: GameAction, now: Instant) {
        self.last_seen[action.index()] = Some(now);
    }

    pub fn release(&mut self, action: GameAction) {
        self.last_seen[action.index()] = None;
    }

    /// Snapshot of held actions at `now`, dropping keys that went silent.
    pub fn frame(&mut self, now: Instant) -> InputFrame {
        let mut frame = InputFrame::new();
        for action in GameAction::ALL {
            let slot = &mut self.last_seen[action.index()];
            let Some(seen) = *slot else {
                continue;
            };
            if !self.release_events_seen
                && now.saturating_duration_since(seen) > self.release_timeout
            {
                *slot = None;
                continue;
            }
            frame.set(action, true);
        }
        frame
    }

    /// Forget every held key.
    pub fn reset(&mut self) {
        self.last_seen = [None; GameAction::COUNT];
    }
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn event(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind)
    }

    #[test]
    fn test_press_is_held_until_timeout() {
        let t0 = Instant::now();
        let mut kb = KeyboardState::with_key_release_timeout_ms(100);

        assert_eq!(
            kb.handle_key_event(event(KeyCode::Left, KeyEventKind::Press), t0),
            Some(GameAction::MoveLeft)
        );
        assert!(kb.frame(t0 + Duration::from_millis(50)).is_held(GameAction::MoveLeft));
        assert!(!kb.frame(t0 + Duration::from_millis(101)).is_held(GameAction::MoveLeft));
        // Stays released.
        assert!(!kb.frame(t0 + Duration::from_millis(102)).is_held(GameAction::MoveLeft));
    }

    #[test]
    fn test_repeat_events_extend_the_hold() {
        let t0 = Instant::now();
        let mut kb = KeyboardState::with_key_release_timeout_ms(100);

        kb.handle_key_event(event(KeyCode::Down, KeyEventKind::Press), t0);
        kb.handle_key_event(
            event(KeyCode::Down, KeyEventKind::Repeat),
            t0 + Duration::from_millis(80),
        );
        assert!(kb.frame(t0 + Duration::from_millis(150)).is_held(GameAction::SoftDrop));
    }

    #[test]
    fn test_release_events_disable_timeout() {
        let t0 = Instant::now();
        let mut kb = KeyboardState::with_key_release_timeout_ms(100);

        kb.handle_key_event(event(KeyCode::Up, KeyEventKind::Press), t0);
        kb.handle_key_event(event(KeyCode::Up, KeyEventKind::Release), t0);
        assert!(kb.release_events_seen());
        assert!(!kb.frame(t0).is_held(GameAction::RotateCw));

        kb.handle_key_event(event(KeyCode::Right, KeyEventKind::Press), t0);
        assert!(kb.frame(t0 + Duration::from_secs(5)).is_held(GameAction::MoveRight));
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        let t0 = Instant::now();
        let mut kb = KeyboardState::new();
        assert_eq!(kb.handle_key_event(event(KeyCode::Tab, KeyEventKind::Press), t0), None);
        assert_eq!(kb.frame(t0), InputFrame::new());
    }

    #[test]
    fn test_reset_clears_held_state() {
        let t0 = Instant::now();
        let mut kb = KeyboardState::new();
        kb.press(GameAction::MoveLeft, t0);
        kb.press(GameAction::RotateCcw, t0);
        kb.reset();
        assert_eq!(kb.frame(t0), InputFrame::new());
    }

    #[test]
    fn test_default_key_release_timeout_is_non_zero() {
        assert!(KeyboardState::new().key_release_timeout() > Duration::ZERO);
    }
}
