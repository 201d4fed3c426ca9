//=========================================================================
// Collaborator Interface
//=========================================================================
//
// The contract between the presentation core and the host's rendering,
// slide and scheduling backends.
//
// The core never draws or touches a document itself. Hosts implement
// these traits (or use `GlobeModel` for the globe) and hand them to the
// `StageBuilder`.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use crate::core::journey::Trip;

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Exit,
}

//=== GlobeView ===========================================================

/// The rotating globe as seen by the actions.
pub trait GlobeView {
    /// Adds `(dx, dy)` radians to the globe's X/Y rotation.
    fn rotate_by(&mut self, dx: f64, dy: f64);

    /// Starts animating `trip` over `duration`.
    fn begin_travel(&mut self, trip: &Trip, duration: Duration);

    /// Advances the current travel by one frame.
    ///
    /// Returns `true` once the travel step, settle delay included, is
    /// complete. Without a travel in progress this only refreshes the view.
    fn advance_travel(&mut self) -> bool;

    /// Copies the flattened map over the whole display.
    fn flatten_to_overlay(&mut self);

    /// Paints over the flattened map overlay.
    fn clear_overlay(&mut self);

    /// Current `(x, y)` rotation in radians, for diagnostics.
    fn current_rotation(&self) -> (f64, f64);
}

//=== SlidePanel ==========================================================

/// The 2D slide deck.
pub trait SlidePanel {
    fn show_slide(&mut self, id: &str);
    fn hide_slide(&mut self, id: &str);
    fn set_deck_visible(&mut self, visible: bool);
}

//=== SceneRenderer =======================================================

/// Renders the 3D scene once per frame, unless the active action opts out.
pub trait SceneRenderer {
    fn render(&mut self);
}

//=== FrameScheduler ======================================================

/// Host frame pacing.
///
/// Called once per tick after the stage has updated; returns when the
/// next frame is due, or `Exit` to stop playback.
pub trait FrameScheduler {
    fn schedule_next_frame(&mut self) -> TickControl;
}
