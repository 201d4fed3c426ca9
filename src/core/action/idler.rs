//=========================================================================
// Idler
//=========================================================================

use super::{Action, Capabilities, Transition};
use crate::core::context::StageContext;
use crate::core::input::{InputEvent, TransitionMailbox};

/// Does nothing until page navigation is requested.
#[derive(Debug, Default)]
pub struct Idler {
    mailbox: TransitionMailbox,
}

impl Idler {
    pub fn new(_arrival: Transition) -> Self {
        Self::default()
    }
}

impl Action for Idler {
    fn capabilities(&self) -> Capabilities {
        Capabilities::NONE.with_handler()
    }

    fn handle(&mut self, _context: &StageContext, event: &InputEvent) {
        self.mailbox.offer_page_navigation(event);
    }

    fn animate(&mut self, _context: &mut StageContext) -> Option<Transition> {
        self.mailbox.take()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
