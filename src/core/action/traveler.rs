//=========================================================================
// Traveler
//=========================================================================
//
// Moves the globe from the current place to the next destination, or
// back to the previous one when arriving through `Prev`.
//
// Phases:
//   waiting   entry timer running, globe only refreshed
//   departed  begin_travel() called once, globe animated each frame
//   arrived   globe reports step complete → hand off with the arrival
//             transition, so the talk keeps moving the same way
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::debug;

//=== Internal Dependencies ===============================================

use super::{Action, ActionArgs, ActionKind, Capabilities, Transition};
use crate::core::context::StageContext;
use crate::core::error::StageError;
use crate::core::journey::Trip;
use crate::core::timer::PhaseTimer;

//=== TravelPlan ==========================================================

#[derive(Debug)]
struct TravelPlan {
    timer: PhaseTimer,
    duration: Duration,
    trip: Trip,
    departed: bool,
}

//=== Traveler ============================================================

/// Travels to a destination, then hands off.
#[derive(Debug)]
pub struct Traveler {
    arrival: Transition,
    plan: Option<TravelPlan>,
}

impl Traveler {
    pub fn new(arrival: Transition) -> Self {
        Self {
            arrival,
            plan: None,
        }
    }
}

impl Action for Traveler {
    fn capabilities(&self) -> Capabilities {
        Capabilities::NONE.with_init()
    }

    fn init(&mut self, context: &mut StageContext, args: &ActionArgs) -> Result<(), StageError> {
        let args = args.travel().ok_or(StageError::MismatchedArgs {
            action: ActionKind::Traveler.name(),
            expected: "travel",
        })?;

        // Arriving backwards retraces the last leg instead of the configured one.
        let (destination, wait) = match self.arrival {
            Transition::Prev => (None, context.settings.back_travel_wait),
            Transition::Next => {
                let destination = context
                    .destinations
                    .get(&args.destination)
                    .cloned()
                    .ok_or_else(|| StageError::UnknownDestination(args.destination.clone()))?;
                (Some(destination), args.wait)
            }
        };

        let trip = context.journey.prepare_trip(destination);
        debug!(
            target: "stage",
            "Traveler waiting {:?} before a {:?} trip",
            wait, args.duration
        );

        self.plan = Some(TravelPlan {
            timer: PhaseTimer::new(wait),
            duration: args.duration,
            trip,
            departed: false,
        });
        Ok(())
    }

    fn animate(&mut self, context: &mut StageContext) -> Option<Transition> {
        let plan = self.plan.as_mut()?;

        if !plan.timer.elapsed() {
            context.globe.advance_travel();
            return None;
        }

        if !plan.departed {
            context.globe.begin_travel(&plan.trip, plan.duration);
            plan.departed = true;
        }

        if context.globe.advance_travel() {
            Some(self.arrival)
        } else {
            None
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::TravelArgs;
    use crate::core::testing::{count, mock_context, Call};
    use std::thread;

    fn travel_to(destination: &str, wait: Duration) -> ActionArgs {
        ActionArgs::Travel(TravelArgs {
            destination: destination.into(),
            wait,
            duration: Duration::from_millis(500),
        })
    }

    fn begins(log: &crate::core::testing::CallLog) -> usize {
        count(log, |c| matches!(c, Call::BeginTravel { .. }))
    }

    #[test]
    fn waits_before_departing() {
        let (mut context, harness) = mock_context();
        let mut traveler = Traveler::new(Transition::Next);
        traveler
            .init(&mut context, &travel_to("paris", Duration::from_secs(60)))
            .unwrap();

        assert_eq!(traveler.animate(&mut context), None);
        assert_eq!(traveler.animate(&mut context), None);

        assert_eq!(begins(&harness.log), 0);
        assert_eq!(*harness.log.borrow(), vec![Call::AdvanceTravel, Call::AdvanceTravel]);
    }

    #[test]
    fn departs_once_then_hands_off_on_arrival() {
        let (mut context, harness) = mock_context();
        let mut traveler = Traveler::new(Transition::Next);
        traveler
            .init(&mut context, &travel_to("paris", Duration::ZERO))
            .unwrap();
        thread::sleep(Duration::from_millis(2));

        assert_eq!(traveler.animate(&mut context), None);
        assert_eq!(traveler.animate(&mut context), None);
        assert_eq!(begins(&harness.log), 1);
        assert_eq!(
            harness.log.borrow()[0],
            Call::BeginTravel {
                target: Some("paris".into()),
                duration: Duration::from_millis(500),
            }
        );

        harness.travel_complete.set(true);
        assert_eq!(traveler.animate(&mut context), Some(Transition::Next));
        assert_eq!(begins(&harness.log), 1);
        assert_eq!(context.journey.history().len(), 1);
    }

    #[test]
    fn arriving_backwards_retraces_last_leg() {
        let (mut context, harness) = mock_context();
        context.settings.back_travel_wait = Duration::ZERO;
        let paris = context.destinations["paris"].clone();
        context.journey.prepare_trip(Some(paris));

        let mut traveler = Traveler::new(Transition::Prev);
        traveler
            .init(&mut context, &travel_to("tokyo", Duration::from_secs(60)))
            .unwrap();
        assert!(context.journey.history().is_empty());

        thread::sleep(Duration::from_millis(2));
        harness.travel_complete.set(true);
        assert_eq!(traveler.animate(&mut context), Some(Transition::Prev));
        assert_eq!(
            harness.log.borrow()[0],
            Call::BeginTravel {
                target: Some("paris".into()),
                duration: Duration::from_millis(500),
            }
        );
    }

    #[test]
    fn unknown_destination_fails_init() {
        let (mut context, _harness) = mock_context();
        let mut traveler = Traveler::new(Transition::Next);

        assert_eq!(
            traveler.init(&mut context, &travel_to("atlantis", Duration::ZERO)),
            Err(StageError::UnknownDestination("atlantis".into()))
        );
        assert!(context.journey.history().is_empty());
    }

    #[test]
    fn rejects_slide_args() {
        let (mut context, _harness) = mock_context();
        let mut traveler = Traveler::new(Transition::Next);

        let result = traveler.init(&mut context, &ActionArgs::Slides(vec!["intro".into()]));
        assert!(matches!(result, Err(StageError::MismatchedArgs { .. })));
    }

    #[test]
    fn animate_before_init_is_inert() {
        let (mut context, harness) = mock_context();
        let mut traveler = Traveler::new(Transition::Next);

        assert_eq!(traveler.animate(&mut context), None);
        assert!(harness.log.borrow().is_empty());
    }
}
