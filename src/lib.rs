//=========================================================================
// Tour Engine Library Root
//
// A data-driven presentation engine: a talk is a route of actions
// played over a travelling globe and a 2D slide deck.
//
// Responsibilities:
// - Expose the stage (`Stage`, `StageBuilder`) as the main entry point
// - Expose the presentation core (actions, journey, config, input)
// - Provide Winit key mapping for hosts built on Winit
//
// Typical usage:
// ```no_run
// use tour_engine::prelude::*;
//
// fn play(
//     json: &str,
//     globe: Box<dyn GlobeView>,
//     slides: Box<dyn SlidePanel>,
//     renderer: Box<dyn SceneRenderer>,
// ) -> Result<(), Box<dyn std::error::Error>> {
//     let presentation = Presentation::from_json(json)?;
//     StageBuilder::new()
//         .build(&presentation, globe, slides, renderer)?
//         .play()?;
//     Ok(())
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the sequencing-independent pieces: journey planning,
// actions, input, configuration and the collaborator traits.
//
// `platform` converts Winit keyboard events into stage input.
//
// `stage` defines the action sequencer and its builder.
//
pub mod core;
pub mod platform;
pub mod prelude;
pub mod stage;

//--- Public Exports ------------------------------------------------------
//
// Re-exports the stage so hosts can simply `use tour_engine::Stage;`.
//
pub use stage::{Stage, StageBuilder};
