//! Held-key tracking on top of terminal key events.
//!
//! Instead of acting on each key event individually, we record the frame
//! number of the last press/repeat event for every key. A key is "held"
//! while that record is fresh. This works on two classes of terminal:
//! * **Keyboard-enhancement capable** (kitty protocol): proper
//!   `Press` / `Repeat` / `Release` events, so keys drop on release.
//! * **Classic terminals**: only `Press` events (OS key-repeat shows as
//!   repeated `Press`). Keys expire after `HOLD_WINDOW` frames of silence,
//!   which is shorter than the OS repeat interval.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::entities::TickInput;

/// A key counts as held if its last press/repeat arrived within this many
/// frames (4 frames @ 30 FPS ≈ 133 ms).
pub const HOLD_WINDOW: u64 = 4;

#[derive(Clone, Debug, Default)]
pub struct KeyTracker {
    key_frame: HashMap<KeyCode, u64>,
}

impl KeyTracker {
    pub fn record(&mut self, event: &KeyEvent, frame: u64) {
        match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.key_frame.insert(event.code, frame);
            }
            KeyEventKind::Release => {
                self.key_frame.remove(&event.code);
            }
        }
    }

    pub fn is_held(&self, key: KeyCode, frame: u64) -> bool {
        self.key_frame
            .get(&key)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    pub fn tick_input(&self, frame: u64) -> TickInput {
        TickInput {
            left: self.is_held(KeyCode::Left, frame),
            right: self.is_held(KeyCode::Right, frame),
            up: self.is_held(KeyCode::Up, frame),
            down: self.is_held(KeyCode::Down, frame),
        }
    }

    pub fn clear(&mut self) {
        self.key_frame.clear();
    }
}

/// `Q`, `Esc` or `Ctrl-C`: the terminal's equivalent of closing the window.
pub fn is_quit(event: &KeyEvent) -> bool {
    if event.kind == KeyEventKind::Release {
        return false;
    }
    match event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => event.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
