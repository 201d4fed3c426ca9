//=========================================================================
// Globe Model
//=========================================================================
//
// Headless `GlobeView`: keeps the globe's orientation and drives travel
// animations onto a map canvas the host renders from.
//
// Travel timeline (per begin_travel):
// ```text
//   0 ───────────── duration ────────── duration + settle
//   │ slerp start→goal, trace paths  │ target markers │ step complete
// ```
//
// The settle delay gives the stage a moment to show the arrival before
// the traveler hands off.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use glam::{DQuat, DVec2};
use log::trace;

//=== Internal Dependencies ===============================================

use crate::core::interface::GlobeView;
use crate::core::journey::{orientation_from_angles, Destination, Segment, TravelColor, Trip};
use crate::core::timer::PhaseTimer;

//=== MapCanvas ===========================================================

/// The drawing surface textured onto the globe.
///
/// Coordinates are map-canvas pixels. Backends decide how a marker or a
/// stroke looks; `color` only tells forward and backward travel apart.
pub trait MapCanvas {
    /// Strokes a straight line.
    fn stroke_segment(&mut self, from: DVec2, to: DVec2, color: TravelColor);

    /// Draws a filled place marker.
    fn fill_marker(&mut self, at: DVec2, color: TravelColor);

    /// Flags the texture for re-upload before the next render.
    fn mark_dirty(&mut self);

    /// Copies the map over the whole display.
    fn flatten_to_overlay(&mut self);

    /// Paints over the display overlay.
    fn clear_overlay(&mut self);

    /// Applies the globe orientation to the 3D model.
    fn set_orientation(&mut self, orientation: DQuat);
}

//=== Travel ==============================================================

#[derive(Debug)]
struct Travel {
    walk: PhaseTimer,
    step: PhaseTimer,
    start: DQuat,
    goal: DQuat,
    goal_angles: DVec2,
    color: TravelColor,
    paths: Vec<Segment>,
    target: Option<Destination>,
    arrived: bool,
}

//=== GlobeModel ==========================================================

/// Reference globe implementation over any `MapCanvas`.
#[derive(Debug)]
pub struct GlobeModel<C: MapCanvas> {
    canvas: C,
    rotation: DVec2,
    orientation: DQuat,
    settle_delay: Duration,
    travel: Option<Travel>,
}

impl<C: MapCanvas> GlobeModel<C> {
    /// Pause after a travel before the step reports completion.
    pub const SETTLE_DELAY: Duration = Duration::from_millis(200);

    pub fn new(canvas: C) -> Self {
        Self {
            canvas,
            rotation: DVec2::ZERO,
            orientation: DQuat::IDENTITY,
            settle_delay: Self::SETTLE_DELAY,
            travel: None,
        }
    }

    /// Overrides the settle delay.
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    pub fn orientation(&self) -> DQuat {
        self.orientation
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    fn apply_orientation(&mut self, orientation: DQuat) {
        self.orientation = orientation;
        self.canvas.set_orientation(orientation);
        self.canvas.mark_dirty();
    }

    fn mark_steps(canvas: &mut C, place: Option<&Destination>, color: TravelColor) {
        for step in place.into_iter().flat_map(|p| p.steps.iter()) {
            canvas.fill_marker(*step, color);
        }
    }
}

impl<C: MapCanvas> GlobeView for GlobeModel<C> {
    fn rotate_by(&mut self, dx: f64, dy: f64) {
        self.rotation += DVec2::new(dx, dy);
        let orientation = orientation_from_angles(self.rotation.x, self.rotation.y);
        self.apply_orientation(orientation);
    }

    fn begin_travel(&mut self, trip: &Trip, duration: Duration) {
        let goal_angles = trip
            .target
            .as_ref()
            .map_or(DVec2::ZERO, |t| DVec2::new(t.rx, t.ry));

        Self::mark_steps(&mut self.canvas, trip.source.as_ref(), trip.color);
        self.canvas.mark_dirty();

        trace!(target: "globe", "Travel begins: {} segments over {:?}", trip.paths.len(), duration);

        self.travel = Some(Travel {
            walk: PhaseTimer::new(duration),
            step: PhaseTimer::new(duration + self.settle_delay),
            start: self.orientation,
            goal: trip.goal,
            goal_angles,
            color: trip.color,
            paths: trip.paths.clone(),
            target: trip.target.clone(),
            arrived: false,
        });
    }

    fn advance_travel(&mut self) -> bool {
        let Some(travel) = self.travel.as_mut() else {
            self.canvas.mark_dirty();
            return false;
        };

        let alpha = travel.walk.progress().min(1.0);
        let current = travel.start.slerp(travel.goal, alpha);

        for segment in &travel.paths {
            self.canvas.stroke_segment(segment.start, segment.lerp(alpha), travel.color);
        }

        if travel.walk.elapsed() && !travel.arrived {
            travel.arrived = true;
            self.rotation = travel.goal_angles;
            Self::mark_steps(&mut self.canvas, travel.target.as_ref(), travel.color);
        }

        let complete = travel.step.elapsed();
        self.apply_orientation(current);
        complete
    }

    fn flatten_to_overlay(&mut self) {
        self.canvas.flatten_to_overlay();
    }

    fn clear_overlay(&mut self) {
        self.canvas.clear_overlay();
    }

    fn current_rotation(&self) -> (f64, f64) {
        (self.rotation.x, self.rotation.y)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
