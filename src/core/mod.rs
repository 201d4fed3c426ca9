//=========================================================================
// Presentation Core
//
// Everything the stage needs to play a talk, independent of any window,
// renderer or document.
//
// Responsibilities:
// - Journey planning: routes, paths and goal orientations between
//   destinations on a wrapping map
// - Actions: the pluggable behaviours bound to route slots
// - Input: key events, held-key tracking and the transition mailbox
// - Config: presentation data and its load-time validation
// - Collaborator traits the host implements, plus a headless globe model
//
// Notes:
// Nothing here is global. Actions receive a `StageContext` on every call
// and the journey history lives inside its `JourneyPlanner`.
//
//=========================================================================

//=== Public Modules ======================================================

pub mod action;
pub mod config;
pub mod context;
pub mod error;
pub mod globe;
pub mod input;
pub mod interface;
pub mod journey;
pub mod math;
pub mod scheduler;
pub mod timer;

#[cfg(test)]
pub(crate) mod testing;

//=== Re-exports ==========================================================

pub use action::{Action, ActionArgs, ActionKind, Capabilities, Transition};
pub use config::{Presentation, Talk};
pub use context::{StageContext, StageSettings};
pub use error::{ConfigError, StageError};
pub use globe::{GlobeModel, MapCanvas};
pub use interface::{FrameScheduler, GlobeView, SceneRenderer, SlidePanel, TickControl};
