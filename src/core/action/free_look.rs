//=========================================================================
// Free Look
//=========================================================================
//
// Manual globe rotation with the arrow keys.
//
// Handy for finding good `(rx, ry)` angles for new destinations: hold
// the arrows to turn the globe, release space to log the rotation.
//
//=========================================================================

use log::info;

use super::{Action, Capabilities, Transition};
use crate::core::context::StageContext;
use crate::core::input::{InputEvent, KeyCode, KeyTracker};

/// Rotates the globe while arrow keys are held. Never hands off.
#[derive(Debug, Default)]
pub struct FreeLook {
    keys: KeyTracker,
}

impl FreeLook {
    pub fn new(_arrival: Transition) -> Self {
        Self::default()
    }
}

impl Action for FreeLook {
    fn capabilities(&self) -> Capabilities {
        Capabilities::NONE.with_handler()
    }

    fn handle(&mut self, context: &StageContext, event: &InputEvent) {
        self.keys.process_event(event);

        if event.is_release_of(KeyCode::Space) {
            let (x, y) = context.globe.current_rotation();
            info!(target: "stage", "Globe rotation: x={:.4} y={:.4}", x, y);
        }
    }

    fn animate(&mut self, context: &mut StageContext) -> Option<Transition> {
        let step = context.settings.free_look_step;
        let dx = step * self.keys.axis(KeyCode::ArrowUp, KeyCode::ArrowDown);
        let dy = step * self.keys.axis(KeyCode::ArrowLeft, KeyCode::ArrowRight);
        context.globe.rotate_by(dx, dy);
        None
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
