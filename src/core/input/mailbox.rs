//=========================================================================
// Transition Mailbox
//=========================================================================
//
// Single-slot hand-off between an input handler and the next animate().
//
// Handlers run when input arrives and only `offer` a signal; animate
// `take`s it, which clears the slot. A signal is therefore consumed
// exactly once and never repeats across frames.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode};
use crate::core::action::Transition;

//=== TransitionMailbox ===================================================

/// Latched transition waiting for the next tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransitionMailbox {
    slot: Option<Transition>,
}

impl TransitionMailbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latches `transition`, replacing any signal not yet taken.
    pub fn offer(&mut self, transition: Transition) {
        self.slot = Some(transition);
    }

    /// Takes the latched signal, leaving the slot empty.
    pub fn take(&mut self) -> Option<Transition> {
        self.slot.take()
    }

    /// Returns `true` if a signal is waiting.
    pub fn is_pending(&self) -> bool {
        self.slot.is_some()
    }

    /// Latches page navigation: page-up release → `Prev`,
    /// page-down release → `Next`. Other events are ignored.
    pub fn offer_page_navigation(&mut self, event: &InputEvent) {
        if let Some(transition) = page_navigation(event) {
            self.offer(transition);
        }
    }
}

//=== page_navigation() ===================================================

/// Transition requested by a page-up/page-down release, if any.
pub fn page_navigation(event: &InputEvent) -> Option<Transition> {
    if event.is_release_of(KeyCode::PageUp) {
        Some(Transition::Prev)
    } else if event.is_release_of(KeyCode::PageDown) {
        Some(Transition::Next)
    } else {
        None
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
