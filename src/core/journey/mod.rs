//=========================================================================
// Journey System
//=========================================================================
//
// Route and path finding between named destinations on a wrapping map.
//
// Architecture:
//   JourneyPlanner
//     ├─ history: JourneyHistory (stack of Destination)
//     └─ paths: PathBuilder (canvas width)
//
// Flow:
//   prepare_trip() → find_route() → build() + goal_orientation() → Trip
//
//=========================================================================

//=== Module Declarations =================================================

mod destination;
mod orientation;
mod path;
mod planner;
mod route;

//=== Public API ==========================================================

pub use destination::{Destination, Direction, TravelColor, WrapFlag};
pub use orientation::{goal_orientation, orientation_from_angles};
pub use path::{PathBuilder, Segment};
pub use planner::{JourneyPlanner, Trip};
pub use route::{find_route, JourneyHistory, Route};
