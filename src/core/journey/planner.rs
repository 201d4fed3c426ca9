//=========================================================================
// Journey Planner
//=========================================================================
//
// Single entry point for travelling between destinations.
//
// Architecture:
//   prepare_trip(destination?)
//     ├─ find_route()        → Route      (mutates history)
//     ├─ PathBuilder::build  → paths
//     └─ goal_orientation()  → goal
//   → Trip
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::DQuat;
use log::info;

//=== Internal Dependencies ===============================================

use super::destination::{Destination, TravelColor};
use super::orientation::goal_orientation;
use super::path::{PathBuilder, Segment};
use super::route::{find_route, JourneyHistory};

//=== Trip ================================================================

/// Everything the globe animator needs for one travel step.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub source: Option<Destination>,
    pub target: Option<Destination>,
    pub color: TravelColor,
    pub paths: Vec<Segment>,
    pub goal: DQuat,
}

//=== JourneyPlanner ======================================================

/// Owns the journey history and turns travel requests into trips.
#[derive(Debug, Clone, Default)]
pub struct JourneyPlanner {
    history: JourneyHistory,
    paths: PathBuilder,
}

impl JourneyPlanner {
    pub fn new(paths: PathBuilder) -> Self {
        Self {
            history: JourneyHistory::new(),
            paths,
        }
    }

    /// Plans the next trip.
    ///
    /// `Some(destination)` travels forward to it; `None` travels back to
    /// the previous place. With nowhere to go at all, the trip keeps the
    /// identity orientation and draws nothing.
    pub fn prepare_trip(&mut self, destination: Option<Destination>) -> Trip {
        let route = find_route(&mut self.history, destination);
        let paths = self.paths.build(&route);
        let goal = route
            .target
            .as_ref()
            .map_or(DQuat::IDENTITY, goal_orientation);

        info!(
            target: "journey",
            "Trip prepared towards {:?} ({} path segments)",
            route.target.as_ref().map(|d| d.name.as_str()),
            paths.len()
        );

        Trip {
            source: route.source,
            target: route.target,
            color: route.color,
            paths,
            goal,
        }
    }

    /// Read-only view of the places visited so far.
    pub fn history(&self) -> &JourneyHistory {
        &self.history
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
