//=========================================================================
// Route Finder
//=========================================================================
//
// Resolves where the next travel step goes, given the places visited so
// far and an optional new destination.
//
// Flow:
//   Some(destination) → push onto history → source = previous top
//   None              → pop history        → target = new top
//   target missing    → swap (stay where we are)
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::destination::{Destination, Direction, TravelColor};
use crate::core::math::normalize_angle;

//=== JourneyHistory ======================================================

/// Stack of visited destinations, most recent last.
#[derive(Debug, Clone, Default)]
pub struct JourneyHistory {
    places: Vec<Destination>,
}

impl JourneyHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// The current position, if any.
    pub fn top(&self) -> Option<&Destination> {
        self.places.last()
    }

    /// Visited places, oldest first.
    pub fn places(&self) -> &[Destination] {
        &self.places
    }

    fn push(&mut self, destination: Destination) {
        self.places.push(destination);
    }

    fn pop(&mut self) -> Option<Destination> {
        self.places.pop()
    }
}

//=== Route ===============================================================

/// A resolved travel step.
///
/// `target` is only absent when the history was empty and no destination
/// was requested.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub source: Option<Destination>,
    pub target: Option<Destination>,
    pub color: TravelColor,
    pub direction: Direction,
}

//=== find_route() ========================================================

/// Resolves the next route and updates `history` accordingly.
///
/// Forward travel normalizes the destination's rotation angles before
/// recording it. Backward travel from a single-place history yields
/// `source = None, target = <that place>`.
pub fn find_route(history: &mut JourneyHistory, destination: Option<Destination>) -> Route {
    let (source, target, color, direction) = match destination {
        Some(mut destination) => {
            destination.rx = normalize_angle(destination.rx);
            destination.ry = normalize_angle(destination.ry);

            let source = history.top().cloned();
            history.push(destination.clone());
            (source, Some(destination), TravelColor::Forward, Direction::Forward)
        }
        None => {
            let source = history.pop();
            let target = history.top().cloned();
            (source, target, TravelColor::Backward, Direction::Backward)
        }
    };

    let (source, target) = match target {
        Some(target) => (source, Some(target)),
        None => (None, source),
    };

    debug!(
        target: "journey",
        "Route {:?}: {:?} -> {:?} (history depth {})",
        direction,
        source.as_ref().map(|d| d.name.as_str()),
        target.as_ref().map(|d| d.name.as_str()),
        history.len()
    );

    Route {
        source,
        target,
        color,
        direction,
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::journey::destination::WrapFlag;
    use glam::DVec2;
    use std::f64::consts::PI;

    fn place(name: &str) -> Destination {
        Destination::new(name, vec![DVec2::ZERO], 0.1, 0.2, WrapFlag::NONE)
    }

    fn names(route: &Route) -> (Option<&str>, Option<&str>) {
        (
            route.source.as_ref().map(|d| d.name.as_str()),
            route.target.as_ref().map(|d| d.name.as_str()),
        )
    }

    #[test]
    fn first_forward_step_has_no_source() {
        let mut history = JourneyHistory::new();
        let route = find_route(&mut history, Some(place("paris")));

        assert_eq!(names(&route), (None, Some("paris")));
        assert_eq!(route.direction, Direction::Forward);
        assert_eq!(route.color, TravelColor::Forward);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn forward_then_backward_walk() {
        let mut history = JourneyHistory::new();

        let route = find_route(&mut history, Some(place("d1")));
        assert_eq!(names(&route), (None, Some("d1")));

        let route = find_route(&mut history, Some(place("d2")));
        assert_eq!(names(&route), (Some("d1"), Some("d2")));

        let route = find_route(&mut history, None);
        assert_eq!(names(&route), (Some("d2"), Some("d1")));
        assert_eq!(route.direction, Direction::Backward);
        assert_eq!(route.color, TravelColor::Backward);

        // Swap rule: nothing left behind d1, stay put
        let route = find_route(&mut history, None);
        assert_eq!(names(&route), (None, Some("d1")));
        assert!(history.is_empty());
    }

    #[test]
    fn backward_from_empty_history_resolves_nothing() {
        let mut history = JourneyHistory::new();
        let route = find_route(&mut history, None);

        assert_eq!(names(&route), (None, None));
        assert_eq!(route.direction, Direction::Backward);
    }

    #[test]
    fn forward_normalizes_rotation_angles() {
        let mut history = JourneyHistory::new();
        let mut far = place("far");
        far.rx = 3.5 * PI;
        far.ry = -2.5 * PI;

        let route = find_route(&mut history, Some(far));
        let target = route.target.unwrap();

        assert!((-PI..PI).contains(&target.rx));
        assert!((-PI..PI).contains(&target.ry));
        assert!((target.rx + 0.5 * PI).abs() < 1e-9);
        assert!((target.ry + 0.5 * PI).abs() < 1e-9);
        assert_eq!(history.top().unwrap().rx, target.rx);
    }
}
