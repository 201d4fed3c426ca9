//=========================================================================
// Key Tracker
//=========================================================================
//
// Persistent held-key state built from key-down/key-up transitions.
//
// Architecture:
//   InputEvent → process_event() → HashSet (keys held) → query
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode};

//=== KeyTracker ==========================================================

/// Tracks which keys are currently held.
#[derive(Debug, Clone, Default)]
pub struct KeyTracker {
    keys_down: HashSet<KeyCode>,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Event Processing -------------------------------------------------

    /// Applies one event. Returns `true` if the held state changed.
    pub fn process_event(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::KeyDown { key } => self.keys_down.insert(key),
            InputEvent::KeyUp { key } => self.keys_down.remove(&key),
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Returns `true` while `key` is held.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// `+1`, `-1` or `0` depending on which of two opposing keys is held.
    pub fn axis(&self, negative: KeyCode, positive: KeyCode) -> f64 {
        let held = |key| if self.is_key_down(key) { 1.0 } else { 0.0 };
        held(positive) - held(negative)
    }

    /// Iterator over the keys currently held.
    pub fn keys_down(&self) -> impl Iterator<Item = &KeyCode> {
        self.keys_down.iter()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
