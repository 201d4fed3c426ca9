//=========================================================================
// Test Doubles
//=========================================================================
//
// Recording collaborators shared by the unit tests.
//
// Every mock appends to one shared call log so tests can assert on the
// exact order of globe, slide and render calls across an action switch.
//
//=========================================================================

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use glam::DVec2;

use crate::core::context::{StageContext, StageSettings};
use crate::core::interface::{GlobeView, SceneRenderer, SlidePanel};
use crate::core::journey::{Destination, Trip, WrapFlag};

//=== Call Log ============================================================

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    RotateBy(f64, f64),
    BeginTravel {
        target: Option<String>,
        duration: Duration,
    },
    AdvanceTravel,
    Flatten,
    ClearOverlay,
    ShowSlide(String),
    HideSlide(String),
    DeckVisible(bool),
    Render,
}

pub(crate) type CallLog = Rc<RefCell<Vec<Call>>>;

pub(crate) fn count(log: &CallLog, predicate: impl Fn(&Call) -> bool) -> usize {
    log.borrow().iter().filter(|call| predicate(call)).count()
}

//=== MockGlobe ===========================================================

pub(crate) struct MockGlobe {
    log: CallLog,
    travel_complete: Rc<Cell<bool>>,
    rotation: (f64, f64),
}

impl GlobeView for MockGlobe {
    fn rotate_by(&mut self, dx: f64, dy: f64) {
        self.rotation.0 += dx;
        self.rotation.1 += dy;
        self.log.borrow_mut().push(Call::RotateBy(dx, dy));
    }

    fn begin_travel(&mut self, trip: &Trip, duration: Duration) {
        self.log.borrow_mut().push(Call::BeginTravel {
            target: trip.target.as_ref().map(|d| d.name.clone()),
            duration,
        });
    }

    fn advance_travel(&mut self) -> bool {
        self.log.borrow_mut().push(Call::AdvanceTravel);
        self.travel_complete.get()
    }

    fn flatten_to_overlay(&mut self) {
        self.log.borrow_mut().push(Call::Flatten);
    }

    fn clear_overlay(&mut self) {
        self.log.borrow_mut().push(Call::ClearOverlay);
    }

    fn current_rotation(&self) -> (f64, f64) {
        self.rotation
    }
}

//=== MockSlides ==========================================================

pub(crate) struct MockSlides {
    log: CallLog,
}

impl SlidePanel for MockSlides {
    fn show_slide(&mut self, id: &str) {
        self.log.borrow_mut().push(Call::ShowSlide(id.to_string()));
    }

    fn hide_slide(&mut self, id: &str) {
        self.log.borrow_mut().push(Call::HideSlide(id.to_string()));
    }

    fn set_deck_visible(&mut self, visible: bool) {
        self.log.borrow_mut().push(Call::DeckVisible(visible));
    }
}

//=== MockRenderer ========================================================

pub(crate) struct MockRenderer {
    pub(crate) log: CallLog,
}

impl SceneRenderer for MockRenderer {
    fn render(&mut self) {
        self.log.borrow_mut().push(Call::Render);
    }
}

//=== Fixtures ============================================================

/// Handles to inspect and steer a mocked context.
pub(crate) struct Harness {
    pub(crate) log: CallLog,
    pub(crate) travel_complete: Rc<Cell<bool>>,
}

pub(crate) fn destination(name: &str, x: f64, wrap: WrapFlag) -> Destination {
    Destination::new(name, vec![DVec2::new(x, 200.0)], 0.3, x / 1000.0, wrap)
}

pub(crate) fn destinations() -> HashMap<String, Destination> {
    ["paris", "tokyo", "lima"]
        .into_iter()
        .zip([520.0, 930.0, 300.0])
        .map(|(name, x)| (name.to_string(), destination(name, x, WrapFlag::NONE)))
        .collect()
}

pub(crate) fn mock_collaborators(
) -> (Box<dyn GlobeView>, Box<dyn SlidePanel>, MockRenderer, Harness) {
    let log: CallLog = Rc::new(RefCell::new(Vec::new()));
    let travel_complete = Rc::new(Cell::new(false));

    let globe: Box<dyn GlobeView> = Box::new(MockGlobe {
        log: Rc::clone(&log),
        travel_complete: Rc::clone(&travel_complete),
        rotation: (0.0, 0.0),
    });
    let slides: Box<dyn SlidePanel> = Box::new(MockSlides {
        log: Rc::clone(&log),
    });
    let renderer = MockRenderer {
        log: Rc::clone(&log),
    };

    (
        globe,
        slides,
        renderer,
        Harness {
            log,
            travel_complete,
        },
    )
}

pub(crate) fn mock_context() -> (StageContext, Harness) {
    let (globe, slides, _renderer, harness) = mock_collaborators();
    let context = StageContext::new(globe, slides, destinations(), StageSettings::default());
    (context, harness)
}
