//=========================================================================
// Presentation Config
//=========================================================================
//
// The data a talk is made of, and its load-time validation.
//
// Architecture:
//   JSON ──serde──► Presentation ──validate()──► Talk
//                   (raw, args as Value)         (ActionKind + ActionArgs,
//                                                 Destination by name)
//
// Everything that can be wrong with the data is caught here, before the
// stage starts playing.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use glam::DVec2;
use log::debug;
use serde::Deserialize;
use serde_json::Value;

//=== Internal Dependencies ===============================================

use crate::core::action::{ActionArgs, ActionKind, TravelArgs};
use crate::core::error::ConfigError;
use crate::core::journey::{Destination, WrapFlag};

//=== Raw Presentation ====================================================

/// One slot of the route as written in the presentation file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RouteEntry {
    /// Action kind name, e.g. `"traveler"`.
    pub action: String,

    /// Free-form args, interpreted by the action kind.
    #[serde(default)]
    pub args: Value,
}

/// A pixel position on the map canvas.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct MapStep {
    pub cx: f64,
    pub cy: f64,
}

/// A destination as written in the presentation file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DestinationSpec {
    pub steps: Vec<MapStep>,
    pub rx: f64,
    pub ry: f64,
    #[serde(default)]
    pub bx: WrapFlag,
}

/// A whole talk: its route and the places it visits.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Presentation {
    pub route: Vec<RouteEntry>,

    #[serde(default)]
    pub destinations: BTreeMap<String, DestinationSpec>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTravelArgs {
    destination: String,
    #[serde(default)]
    wait: u64,
    duration: u64,
}

impl Presentation {
    /// Parses a presentation from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|e| ConfigError::Malformed(e.to_string()))
    }

    /// Parses a presentation from an already decoded JSON value.
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        serde_json::from_value(value).map_err(|e| ConfigError::Malformed(e.to_string()))
    }

    /// Checks the whole presentation and resolves it into a playable talk.
    pub fn validate(&self) -> Result<Talk, ConfigError> {
        if self.route.is_empty() {
            return Err(ConfigError::EmptyRoute);
        }

        let destinations = self
            .destinations
            .iter()
            .map(|(name, spec)| validate_destination(name, spec).map(|d| (name.clone(), d)))
            .collect::<Result<HashMap<_, _>, _>>()?;

        let slots = self
            .route
            .iter()
            .enumerate()
            .map(|(index, entry)| validate_entry(index, entry, &destinations))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            target: "stage",
            "Presentation validated: {} slots, {} destinations",
            slots.len(),
            destinations.len()
        );

        Ok(Talk {
            slots,
            destinations,
        })
    }
}

//=== Talk ================================================================

/// A validated route slot.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSlot {
    pub kind: ActionKind,
    pub args: ActionArgs,
}

/// A validated presentation, ready to be played by a `Stage`.
#[derive(Debug, Clone, PartialEq)]
pub struct Talk {
    pub slots: Vec<RouteSlot>,
    pub destinations: HashMap<String, Destination>,
}

//=== Validation ==========================================================

fn validate_destination(name: &str, spec: &DestinationSpec) -> Result<Destination, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidDestination {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if spec.steps.is_empty() {
        return Err(invalid("no steps"));
    }
    if !spec.rx.is_finite() || !spec.ry.is_finite() {
        return Err(invalid("rotation angles must be finite"));
    }
    if spec.steps.iter().any(|s| !s.cx.is_finite() || !s.cy.is_finite()) {
        return Err(invalid("step coordinates must be finite"));
    }

    let steps = spec.steps.iter().map(|s| DVec2::new(s.cx, s.cy)).collect();
    Ok(Destination::new(name, steps, spec.rx, spec.ry, spec.bx))
}

fn validate_entry(
    index: usize,
    entry: &RouteEntry,
    destinations: &HashMap<String, Destination>,
) -> Result<RouteSlot, ConfigError> {
    let kind = ActionKind::from_name(&entry.action).ok_or_else(|| ConfigError::UnknownAction {
        index,
        name: entry.action.clone(),
    })?;

    let invalid = |reason: String| ConfigError::InvalidArgs {
        index,
        action: kind.name().to_string(),
        reason,
    };

    let args = match kind {
        ActionKind::Traveler => {
            let raw: RawTravelArgs =
                serde_json::from_value(entry.args.clone()).map_err(|e| invalid(e.to_string()))?;
            if !destinations.contains_key(&raw.destination) {
                return Err(ConfigError::UnknownDestination {
                    index,
                    name: raw.destination,
                });
            }
            ActionArgs::Travel(TravelArgs {
                destination: raw.destination,
                wait: Duration::from_millis(raw.wait),
                duration: Duration::from_millis(raw.duration),
            })
        }
        ActionKind::SlideDeck => {
            let slides: Vec<String> =
                serde_json::from_value(entry.args.clone()).map_err(|e| invalid(e.to_string()))?;
            if slides.is_empty() {
                return Err(invalid("a slide deck needs at least one slide".into()));
            }
            ActionArgs::Slides(slides)
        }
        // The remaining kinds take no args; whatever the route passes is ignored.
        ActionKind::Rotator | ActionKind::MapView | ActionKind::FreeLook | ActionKind::Idler => {
            ActionArgs::None
        }
    };

    Ok(RouteSlot { kind, args })
}

//=========================================================================
// Unit Tests
//=========================================================================
