//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use tour_engine::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Stage
pub use crate::stage::{Stage, StageBuilder};

// Configuration and errors
pub use crate::core::config::Presentation;
pub use crate::core::error::{ConfigError, StageError};

// Collaborators
pub use crate::core::globe::{GlobeModel, MapCanvas};
pub use crate::core::interface::{FrameScheduler, GlobeView, SceneRenderer, SlidePanel, TickControl};
pub use crate::core::scheduler::FixedRateScheduler;

// Input
pub use crate::core::input::{InputEvent, KeyCode};
pub use crate::platform::KeyForwarder;

// Journey
pub use crate::core::journey::{Destination, TravelColor, Trip};
