//! The catalogue of celestial object types a user can pick

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Named category of celestial body driving a preset
///
/// Serialized and parsed by display name ("Neutron Star", "Gas Planet", ...),
/// which is what the edit surface shows in its picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum ObjectType {
    #[serde(rename = "Star")]
    Star,
    #[serde(rename = "Neutron Star")]
    NeutronStar,
    #[serde(rename = "Asteroid")]
    Asteroid,
    #[serde(rename = "Shooting Star (Comet)")]
    Comet,
    #[serde(rename = "Moon")]
    Moon,
    #[serde(rename = "Rocky Planet")]
    RockyPlanet,
    #[serde(rename = "Liquid Planet")]
    LiquidPlanet,
    #[serde(rename = "Aquaplanet")]
    Aquaplanet,
    #[serde(rename = "Gas Planet")]
    GasPlanet,
}

impl ObjectType {
    /// Every object type, in picker order
    pub const ALL: [ObjectType; 9] = [
        Self::Star,
        Self::NeutronStar,
        Self::Asteroid,
        Self::Comet,
        Self::Moon,
        Self::RockyPlanet,
        Self::LiquidPlanet,
        Self::Aquaplanet,
        Self::GasPlanet,
    ];

    /// Human-readable name, also the identifier used by the edit surface
    pub fn name(&self) -> &'static str {
        match self {
            Self::Star => "Star",
            Self::NeutronStar => "Neutron Star",
            Self::Asteroid => "Asteroid",
            Self::Comet => "Shooting Star (Comet)",
            Self::Moon => "Moon",
            Self::RockyPlanet => "Rocky Planet",
            Self::LiquidPlanet => "Liquid Planet",
            Self::Aquaplanet => "Aquaplanet",
            Self::GasPlanet => "Gas Planet",
        }
    }

    /// Parse a display name; unknown names yield `None`
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    /// Display names of every object type, in picker order
    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.into_iter().map(|t| t.name())
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
