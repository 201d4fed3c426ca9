//=========================================================================
// Map View
//=========================================================================
//
// Shows the globe's texture as a flat map over the whole display.
//
// The 3D render step is skipped while active so the overlay stays put.
//
//=========================================================================

use super::{Action, ActionArgs, Capabilities, Transition};
use crate::core::context::StageContext;
use crate::core::error::StageError;
use crate::core::input::{InputEvent, TransitionMailbox};

/// Flat map overlay, left through page navigation.
#[derive(Debug, Default)]
pub struct MapView {
    mailbox: TransitionMailbox,
}

impl MapView {
    pub fn new(_arrival: Transition) -> Self {
        Self::default()
    }
}

impl Action for MapView {
    fn capabilities(&self) -> Capabilities {
        Capabilities::NONE
            .with_init()
            .with_fini()
            .with_handler()
            .without_render()
    }

    fn init(&mut self, context: &mut StageContext, _args: &ActionArgs) -> Result<(), StageError> {
        context.globe.flatten_to_overlay();
        Ok(())
    }

    fn fini(&mut self, context: &mut StageContext) {
        context.globe.clear_overlay();
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
