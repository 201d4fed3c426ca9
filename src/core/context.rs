//=========================================================================
// Stage Context
//=========================================================================
//
// Shared data container for actions.
//
// Contains everything an action may touch while active:
// - globe / slides: host collaborators
// - journey: the planner owning the travel history
// - destinations: loaded, read-only places
// - settings: tuning constants
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::time::Duration;

//=== Internal Dependencies ===============================================

use crate::core::interface::{GlobeView, SlidePanel};
use crate::core::journey::{Destination, JourneyPlanner, PathBuilder};

//=== StageSettings =======================================================

/// Tuning constants read by actions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageSettings {
    /// Map canvas width in pixels, used for seam-crossing paths.
    pub canvas_width: f64,

    /// Y rotation per frame of the rotator action, in radians.
    pub rotator_step: f64,

    /// Rotation per frame and held arrow key of the free-look action.
    pub free_look_step: f64,

    /// Pause before travelling back to the previous destination.
    pub back_travel_wait: Duration,

    /// X rotation applied to the globe before playback starts.
    pub initial_tilt: f64,
}

impl Default for StageSettings {
    fn default() -> Self {
        Self {
            canvas_width: PathBuilder::DEFAULT_CANVAS_WIDTH,
            rotator_step: 0.04,
            free_look_step: 0.02,
            back_travel_wait: Duration::from_millis(1000),
            initial_tilt: -0.4,
        }
    }
}

//=== StageContext ========================================================

/// Shared context passed to every action hook.
///
/// Actions receive `&mut StageContext` in `init`, `fini` and `animate`,
/// and `&StageContext` in input handlers.
pub struct StageContext {
    /// The rotating globe.
    pub globe: Box<dyn GlobeView>,

    /// The slide deck.
    pub slides: Box<dyn SlidePanel>,

    /// Travel planner and sole owner of the journey history.
    pub journey: JourneyPlanner,

    /// Destinations by name.
    pub destinations: HashMap<String, Destination>,

    /// Tuning constants.
    pub settings: StageSettings,
}

impl StageContext {
    pub fn new(
        globe: Box<dyn GlobeView>,
        slides: Box<dyn SlidePanel>,
        destinations: HashMap<String, Destination>,
        settings: StageSettings,
    ) -> Self {
        Self {
            globe,
            slides,
            journey: JourneyPlanner::new(PathBuilder::new(settings.canvas_width)),
            destinations,
            settings,
        }
    }
}
