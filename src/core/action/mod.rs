//=========================================================================
// Talk Actions
//=========================================================================
//
// Pluggable behaviours bound to the slots of a talk's route.
//
// Architecture:
//   ActionKind (closed set) ──factory()──► Box<dyn Action>
//                                              │
//   Stage ── capabilities() once at switch ────┘
//         ├─ init(args)      if declared
//         ├─ handle(event)   if declared (input subscribed)
//         ├─ animate()       every tick → Option<Transition>
//         └─ fini()          if declared
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

//=== Internal Dependencies ===============================================

use crate::core::context::StageContext;
use crate::core::error::StageError;
use crate::core::input::InputEvent;
use crate::core::journey::Direction;

//=== Module Declarations =================================================

mod free_look;
mod idler;
mod map_view;
mod rotator;
mod slide_deck;
mod traveler;

//=== Public API ==========================================================

pub use free_look::FreeLook;
pub use idler::Idler;
pub use map_view::MapView;
pub use rotator::Rotator;
pub use slide_deck::SlideDeck;
pub use traveler::Traveler;

//=== Transition ==========================================================

/// Hand-off requested by an action: move to the next or previous slot.
///
/// "No transition" is expressed as `None` wherever a signal is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    Next,
    Prev,
}

impl Transition {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Prev => "prev",
        }
    }

    /// Travel direction implied by arriving through this transition.
    pub const fn direction(self) -> Direction {
        match self {
            Self::Next => Direction::Forward,
            Self::Prev => Direction::Backward,
        }
    }
}

impl FromStr for Transition {
    type Err = StageError;

    /// Parses a textual signal; anything but `next`/`prev` is invalid.
    fn from_str(signal: &str) -> Result<Self, Self::Err> {
        match signal {
            "next" => Ok(Self::Next),
            "prev" => Ok(Self::Prev),
            other => Err(StageError::InvalidTransition(other.to_string())),
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//=== Capabilities ========================================================

/// Optional hooks an action implements, fixed when it is constructed.
///
/// The stage consults this descriptor instead of calling every hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// Receives route args after construction.
    pub init: bool,

    /// Cleans up when switched away from.
    pub fini: bool,

    /// Receives input events while active.
    pub handler: bool,

    /// Skips the 3D render step while active.
    pub no_render: bool,
}

impl Capabilities {
    /// Animate only.
    pub const NONE: Self = Self {
        init: false,
        fini: false,
        handler: false,
        no_render: false,
    };

    pub const fn with_init(mut self) -> Self {
        self.init = true;
        self
    }

    pub const fn with_fini(mut self) -> Self {
        self.fini = true;
        self
    }

    pub const fn with_handler(mut self) -> Self {
        self.handler = true;
        self
    }

    pub const fn without_render(mut self) -> Self {
        self.no_render = true;
        self
    }
}

//=== Action Trait ========================================================

/// Behaviour bound to one slot of the talk.
///
/// Only `capabilities()` and `animate()` are required. The other hooks are
/// called only when the matching capability is declared.
pub trait Action {
    /// Hooks this action implements.
    fn capabilities(&self) -> Capabilities;

    /// Called once after construction with the route entry's args.
    fn init(&mut self, _context: &mut StageContext, _args: &ActionArgs) -> Result<(), StageError> {
        Ok(())
    }

    /// Called once when the stage switches away, even mid-animation.
    fn fini(&mut self, _context: &mut StageContext) {}

    /// Called for each input event while the action is active.
    ///
    /// Handlers only latch state; drawing happens in `animate`.
    fn handle(&mut self, _context: &StageContext, _event: &InputEvent) {}

    /// Called every tick. Returns the transition to perform, if any.
    fn animate(&mut self, context: &mut StageContext) -> Option<Transition>;
}

//=== Action Args =========================================================

/// Travel parameters of a traveler slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelArgs {
    /// Destination name, resolved against the loaded destinations.
    pub destination: String,

    /// Pause before the globe starts moving.
    pub wait: Duration,

    /// Length of the rotation/path animation.
    pub duration: Duration,
}

/// Validated, typed args of a route entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActionArgs {
    #[default]
    None,
    Travel(TravelArgs),
    Slides(Vec<String>),
}

impl ActionArgs {
    pub fn travel(&self) -> Option<&TravelArgs> {
        match self {
            Self::Travel(args) => Some(args),
            _ => None,
        }
    }

    pub fn slides(&self) -> Option<&[String]> {
        match self {
            Self::Slides(ids) => Some(ids),
            _ => None,
        }
    }
}

//=== ActionKind ==========================================================

/// Constructor of an action, given the transition the stage arrived with.
pub type ActionFactory = fn(Transition) -> Box<dyn Action>;

/// The closed set of actions a route can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Rotator,
    Traveler,
    MapView,
    FreeLook,
    SlideDeck,
    Idler,
}

impl ActionKind {
    pub const ALL: [Self; 6] = [
        Self::Rotator,
        Self::Traveler,
        Self::MapView,
        Self::FreeLook,
        Self::SlideDeck,
        Self::Idler,
    ];

    /// Name used in route entries.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rotator => "rotator",
            Self::Traveler => "traveler",
            Self::MapView => "map_view",
            Self::FreeLook => "free_look",
            Self::SlideDeck => "slide_deck",
            Self::Idler => "idler",
        }
    }

    /// Looks up a kind by its route name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Registry entry for this kind.
    pub fn factory(self) -> ActionFactory {
        match self {
            Self::Rotator => |arrival: Transition| -> Box<dyn Action> {
                Box::new(Rotator::new(arrival))
            },
            Self::Traveler => |arrival: Transition| -> Box<dyn Action> {
                Box::new(Traveler::new(arrival))
            },
            Self::MapView => |arrival: Transition| -> Box<dyn Action> {
                Box::new(MapView::new(arrival))
            },
            Self::FreeLook => |arrival: Transition| -> Box<dyn Action> {
                Box::new(FreeLook::new(arrival))
            },
            Self::SlideDeck => |arrival: Transition| -> Box<dyn Action> {
                Box::new(SlideDeck::new(arrival))
            },
            Self::Idler => |arrival: Transition| -> Box<dyn Action> {
                Box::new(Idler::new(arrival))
            },
        }
    }

    /// Builds a fresh action of this kind.
    pub fn instantiate(self, arrival: Transition) -> Box<dyn Action> {
        (self.factory())(arrival)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_parses_known_signals() {
        assert_eq!("next".parse::<Transition>(), Ok(Transition::Next));
        assert_eq!("prev".parse::<Transition>(), Ok(Transition::Prev));
    }

    #[test]
    fn transition_rejects_unknown_signal() {
        assert_eq!(
            "unknown".parse::<Transition>(),
            Err(StageError::InvalidTransition("unknown".into()))
        );
        assert!("".parse::<Transition>().is_err());
        assert!("Next".parse::<Transition>().is_err());
    }

    #[test]
    fn transition_direction() {
        assert_eq!(Transition::Next.direction(), Direction::Forward);
        assert_eq!(Transition::Prev.direction(), Direction::Backward);
        assert_eq!(Transition::Prev.to_string(), "prev");
    }

    #[test]
    fn capabilities_builder() {
        let caps = Capabilities::NONE.with_init().with_handler();
        assert!(caps.init && caps.handler);
        assert!(!caps.fini && !caps.no_render);
        assert_eq!(Capabilities::default(), Capabilities::NONE);
    }

    #[test]
    fn kinds_round_trip_through_names() {
        for kind in ActionKind::ALL {
            assert_eq!(ActionKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(ActionKind::from_name("teleporter"), None);
    }

    #[test]
    fn registry_builds_actions_with_declared_capabilities() {
        let deck = ActionKind::SlideDeck.instantiate(Transition::Next);
        let caps = deck.capabilities();
        assert!(caps.init && caps.fini && caps.handler && caps.no_render);

        let rotator = ActionKind::Rotator.instantiate(Transition::Next);
        assert_eq!(rotator.capabilities(), Capabilities::NONE.with_handler());

        let traveler = ActionKind::Traveler.instantiate(Transition::Prev);
        assert_eq!(traveler.capabilities(), Capabilities::NONE.with_init());
    }

    #[test]
    fn every_kind_has_a_factory() {
        let expected = [
            (ActionKind::Rotator, Capabilities::NONE.with_handler()),
            (ActionKind::Traveler, Capabilities::NONE.with_init()),
            (
                ActionKind::MapView,
                Capabilities::NONE
                    .with_init()
                    .with_fini()
                    .with_handler()
                    .without_render(),
            ),
            (ActionKind::FreeLook, Capabilities::NONE.with_handler()),
            (
                ActionKind::SlideDeck,
                Capabilities::NONE
                    .with_init()
                    .with_fini()
                    .with_handler()
                    .without_render(),
            ),
            (ActionKind::Idler, Capabilities::NONE.with_handler()),
        ];
        assert_eq!(expected.len(), ActionKind::ALL.len());

        for (kind, caps) in expected {
            assert!(ActionKind::ALL.contains(&kind));
            let action = (kind.factory())(Transition::Next);
            assert_eq!(action.capabilities(), caps, "{}", kind);
        }
    }

    #[test]
    fn args_accessors() {
        let slides = ActionArgs::Slides(vec!["intro".into()]);
        assert_eq!(slides.slides(), Some(&["intro".to_string()][..]));
        assert!(slides.travel().is_none());
        assert!(ActionArgs::None.slides().is_none());
    }
}
