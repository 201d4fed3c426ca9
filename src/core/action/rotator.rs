//=========================================================================
// Rotator
//=========================================================================
//
// Spins the globe about its Y axis until page navigation is requested.
//
//=========================================================================

use super::{Action, Capabilities, Transition};
use crate::core::context::StageContext;
use crate::core::input::{InputEvent, TransitionMailbox};

/// Spins the globe a fixed step per frame.
///
/// A page-up/page-down release is latched and reported on the following
/// `animate`, never from the handler itself.
#[derive(Debug, Default)]
pub struct Rotator {
    mailbox: TransitionMailbox,
}

impl Rotator {
    pub fn new(_arrival: Transition) -> Self {
        Self::default()
    }
}

impl Action for Rotator {
    fn capabilities(&self) -> Capabilities {
        Capabilities::NONE.with_handler()
    }

    fn handle(&mut self, _context: &StageContext, event: &InputEvent) {
        self.mailbox.offer_page_navigation(event);
    }

    fn animate(&mut self, context: &mut StageContext) -> Option<Transition> {
        let step = context.settings.rotator_step;
        context.globe.rotate_by(0.0, step);
        self.mailbox.take()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
