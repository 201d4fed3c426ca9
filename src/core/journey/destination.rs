//=========================================================================
// Destinations
//=========================================================================
//
// Named places on the equirectangular map, plus the small value types
// the journey planner threads through routes and trips.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

use glam::DVec2;
use serde::Deserialize;

//=== Internal Dependencies ===============================================

use crate::core::error::ConfigError;

//=== WrapFlag ============================================================

/// Marks whether reaching a destination crosses the map seam.
///
/// `-1` and `1` name the travel direction that crosses the left/right edge
/// of the flattened map. `0` never crosses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "i64")]
pub struct WrapFlag(i8);

impl WrapFlag {
    pub const NEGATIVE: Self = Self(-1);
    pub const NONE: Self = Self(0);
    pub const POSITIVE: Self = Self(1);

    /// Signed value in `{-1, 0, 1}`.
    #[inline]
    pub const fn sign(self) -> i8 {
        self.0
    }

    /// Returns `true` when travelling in `direction` crosses the seam.
    #[inline]
    pub fn crossed_by(self, direction: Direction) -> bool {
        self.0 == direction.sign()
    }
}

impl TryFrom<i64> for WrapFlag {
    type Error = ConfigError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::NEGATIVE),
            0 => Ok(Self::NONE),
            1 => Ok(Self::POSITIVE),
            other => Err(ConfigError::InvalidWrapFlag(other)),
        }
    }
}

//=== Direction ===========================================================

/// Travel direction through the journey history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards a new destination (history grows).
    Forward,

    /// Back to the previous destination (history shrinks).
    Backward,
}

impl Direction {
    /// `+1` forward, `-1` backward.
    #[inline]
    pub const fn sign(self) -> i8 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

//=== TravelColor =========================================================

/// Marker colour used to draw a travel path and its arrival markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TravelColor {
    Forward,
    Backward,
}

impl TravelColor {
    /// CSS colour name a canvas backend can use directly.
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::Forward => "red",
            Self::Backward => "yellow",
        }
    }
}

impl fmt::Display for TravelColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Forward => "forward-marker",
            Self::Backward => "backward-marker",
        })
    }
}

//=== Destination =========================================================

/// A named point of interest.
///
/// `steps` are pixel positions on the map canvas. Several steps describe a
/// multi-stop region; paths are drawn between every pair of steps.
/// `rx`/`ry` are the globe rotation angles that bring the place into view.
#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    pub name: String,
    pub steps: Vec<DVec2>,
    pub rx: f64,
    pub ry: f64,
    pub wrap: WrapFlag,
}

impl Destination {
    /// Creates a destination from its parts.
    pub fn new(
        name: impl Into<String>,
        steps: Vec<DVec2>,
        rx: f64,
        ry: f64,
        wrap: WrapFlag,
    ) -> Self {
        Self {
            name: name.into(),
            steps,
            rx,
            ry,
            wrap,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
