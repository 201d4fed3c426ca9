//=========================================================================
// Stage
//
// Action sequencer: plays a talk's route one action at a time.
//
// Architecture:
// ```text
//     StageBuilder  ──build(presentation)──>  Stage  ──run()──>  [Playback]
//         │                                     │
//         ├─ with_fps()                         ├─ pick_action(transition)
//         ├─ with_input_capacity()              │    unsubscribe → fini →
//         ├─ with_canvas_width()                │    instantiate → subscribe →
//         └─ with_*_step() / wait / tilt        │    init
//                                               └─ tick()
//                                                    input → animate →
//                                                    switch → render
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use crossbeam_channel::{bounded, Sender};
use log::{info, warn};

//=== Internal Dependencies ===============================================

use crate::core::action::{Action, Capabilities, Transition};
use crate::core::config::{Presentation, RouteSlot};
use crate::core::context::{StageContext, StageSettings};
use crate::core::error::StageError;
use crate::core::input::{InputCollector, InputEvent};
use crate::core::interface::{FrameScheduler, GlobeView, SceneRenderer, SlidePanel, TickControl};
use crate::core::scheduler::FixedRateScheduler;

//=== StageBuilder ========================================================

/// Builder for configuring and constructing a [`Stage`].
///
/// # Default Values
///
/// - **FPS**: 60.0 (used by [`Stage::play`])
/// - **Input capacity**: 128 events
/// - **Settings**: see [`StageSettings::default`]
///
/// # Examples
///
/// ```no_run
/// # use tour_engine::core::config::Presentation;
/// # use tour_engine::core::interface::{GlobeView, SceneRenderer, SlidePanel};
/// # fn collaborators() -> (Box<dyn GlobeView>, Box<dyn SlidePanel>, Box<dyn SceneRenderer>) { unimplemented!() }
/// use tour_engine::StageBuilder;
///
/// let presentation = Presentation::from_json(r#"{ "route": [{ "action": "rotator" }] }"#)?;
/// let (globe, slides, renderer) = collaborators();
///
/// let stage = StageBuilder::new()
///     .with_fps(30.0)
///     .build(&presentation, globe, slides, renderer)?;
/// stage.play()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct StageBuilder {
    fps: f64,
    input_capacity: usize,
    settings: StageSettings,
}

impl StageBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            fps: 60.0,
            input_capacity: 128,
            settings: StageSettings::default(),
        }
    }

    /// Sets the frame rate [`Stage::play`] paces playback at.
    ///
    /// # Panics
    ///
    /// Panics if `fps <= 0.0`.
    pub fn with_fps(mut self, fps: f64) -> Self {
        assert!(fps > 0.0, "FPS must be positive, got {}", fps);
        self.fps = fps;
        self
    }

    /// Sets the capacity of the host → stage input channel.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_input_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Input capacity must be positive");
        self.input_capacity = capacity;
        self
    }

    /// Sets the map canvas width used to split seam-crossing paths.
    ///
    /// # Panics
    ///
    /// Panics if `width <= 0.0`.
    pub fn with_canvas_width(mut self, width: f64) -> Self {
        assert!(width > 0.0, "Canvas width must be positive, got {}", width);
        self.settings.canvas_width = width;
        self
    }

    pub fn with_rotator_step(mut self, step: f64) -> Self {
        self.settings.rotator_step = step;
        self
    }

    pub fn with_free_look_step(mut self, step: f64) -> Self {
        self.settings.free_look_step = step;
        self
    }

    /// Sets the pause before travelling back to the previous destination.
    pub fn with_back_travel_wait(mut self, wait: Duration) -> Self {
        self.settings.back_travel_wait = wait;
        self
    }

    /// Sets the X rotation applied to the globe before playback.
    pub fn with_initial_tilt(mut self, tilt: f64) -> Self {
        self.settings.initial_tilt = tilt;
        self
    }

    /// Validates `presentation` and builds a stage around the collaborators.
    ///
    /// Every configuration problem is reported here, before playback.
    pub fn build(
        self,
        presentation: &Presentation,
        mut globe: Box<dyn GlobeView>,
        slides: Box<dyn SlidePanel>,
        renderer: Box<dyn SceneRenderer>,
    ) -> Result<Stage, StageError> {
        let talk = presentation.validate()?;

        info!(
            target: "stage",
            "Building stage ({} slots, FPS: {}, input: {})",
            talk.slots.len(),
            self.fps,
            self.input_capacity
        );

        globe.rotate_by(self.settings.initial_tilt, 0.0);

        let (sender, receiver) = bounded(self.input_capacity);
        let context = StageContext::new(globe, slides, talk.destinations, self.settings);

        Ok(Stage {
            slots: talk.slots,
            current: None,
            session: None,
            context,
            input: InputCollector::new(receiver),
            sender: Some(sender),
            renderer,
            fps: self.fps,
        })
    }
}

impl Default for StageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== ActionSession =======================================================

/// The live action and what it declared when it was constructed.
struct ActionSession {
    index: usize,
    action: Box<dyn Action>,
    caps: Capabilities,
}

//=== Stage ===============================================================

/// Plays a validated talk.
///
/// Exactly one action is active at a time. Switching is atomic within a
/// tick: the old action is unsubscribed and finished before the new one
/// is built, subscribed and initialised.
pub struct Stage {
    slots: Vec<RouteSlot>,
    current: Option<usize>,
    session: Option<ActionSession>,
    context: StageContext,
    input: InputCollector,
    sender: Option<Sender<InputEvent>>,
    renderer: Box<dyn SceneRenderer>,
    fps: f64,
}

impl Stage {
    //--- Accessors --------------------------------------------------------

    /// A sender the host uses to deliver input events.
    ///
    /// Playback ends once every sender handed out here has been dropped.
    pub fn input_sender(&self) -> Option<Sender<InputEvent>> {
        self.sender.clone()
    }

    /// Index of the active slot, `None` before the first switch.
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Capabilities of the active action.
    pub fn active_capabilities(&self) -> Option<Capabilities> {
        self.session.as_ref().map(|s| s.caps)
    }

    pub fn context(&self) -> &StageContext {
        &self.context
    }

    //--- Sequencing -------------------------------------------------------

    /// Slot a transition leads to, clamped to the route.
    pub fn pick_index(&self, transition: Transition) -> usize {
        let current = self.current.map_or(-1, |index| index as isize);
        let last = self.slots.len() as isize - 1;

        let index = match transition {
            Transition::Next => current + 1,
            Transition::Prev => current - 1,
        };
        index.clamp(0, last.max(0)) as usize
    }

    /// Switches to the slot `transition` leads to.
    ///
    /// Does nothing when the index would not change, so bouncing against
    /// either end of the route never re-initialises the active action.
    pub fn pick_action(&mut self, transition: Transition) -> Result<(), StageError> {
        let index = self.pick_index(transition);
        if self.current == Some(index) {
            return Ok(());
        }

        let kind = self.slots[index].kind;
        let action = kind.instantiate(transition);
        let caps = action.capabilities();

        if let Some(mut old) = self.session.take() {
            if old.caps.handler {
                self.input.unsubscribe();
            }
            if old.caps.fini {
                old.action.fini(&mut self.context);
            }
        }

        info!(target: "stage", "Switching to slot {} ({}) via {}", index, kind, transition);

        let mut session = ActionSession {
            index,
            action,
            caps,
        };

        if caps.handler {
            self.input.subscribe();
        }
        if caps.init {
            if let Err(err) = session.action.init(&mut self.context, &self.slots[index].args) {
                // The old action is already gone; `current` stays put so the
                // next start retries this slot.
                if caps.handler {
                    self.input.unsubscribe();
                }
                warn!(target: "stage", "Slot {} ({}) failed to initialise: {}", index, kind, err);
                return Err(err);
            }
        }

        self.current = Some(index);
        self.session = Some(session);
        Ok(())
    }

    /// Parses a textual transition signal and switches accordingly.
    pub fn pick_signal(&mut self, signal: &str) -> Result<(), StageError> {
        let transition = signal.parse::<Transition>()?;
        self.pick_action(transition)
    }

    /// Activates the first slot.
    pub fn start(&mut self) -> Result<(), StageError> {
        self.pick_action(Transition::Next)
    }

    //--- Frame ------------------------------------------------------------

    /// Runs one frame: input, animate, switch, render.
    pub fn tick(&mut self) -> Result<TickControl, StageError> {
        if self.session.is_none() {
            self.start()?;
        }

        if let TickControl::Exit = self.input.collect_frame() {
            info!(target: "stage", "Input source closed");
            return Ok(TickControl::Exit);
        }
        let events = self.input.take_events();

        let transition = match self.session.as_mut() {
            Some(session) => {
                if session.caps.handler {
                    for event in &events {
                        session.action.handle(&self.context, event);
                    }
                }
                session.action.animate(&mut self.context)
            }
            None => {
                warn!(target: "stage", "No active action");
                None
            }
        };

        if let Some(transition) = transition {
            self.pick_action(transition)?;
        }

        let render = self.session.as_ref().is_some_and(|s| !s.caps.no_render);
        if render {
            self.renderer.render();
        }

        Ok(TickControl::Continue)
    }

    /// Plays the talk until `scheduler` or the input source stops it.
    ///
    /// The first error halts playback and is returned.
    pub fn run<S: FrameScheduler>(mut self, scheduler: &mut S) -> Result<(), StageError> {
        // Only senders held by the host keep playback alive.
        self.sender = None;

        info!(target: "stage", "Starting playback");
        self.start()?;

        loop {
            if let TickControl::Exit = self.tick()? {
                break;
            }
            if let TickControl::Exit = scheduler.schedule_next_frame() {
                break;
            }
        }

        info!(
            target: "stage",
            "Playback stopped at slot {:?}",
            self.session.as_ref().map(|s| s.index)
        );
        Ok(())
    }

    /// Plays the talk at the configured frame rate.
    pub fn play(self) -> Result<(), StageError> {
        let mut scheduler = FixedRateScheduler::new(self.fps);
        self.run(&mut scheduler)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
