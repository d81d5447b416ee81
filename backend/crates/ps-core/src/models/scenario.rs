use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// The fixed set of disaster scenarios a policy can be analyzed against.
///
/// Serialized form (API and database) is the human-readable label, which is
/// also what the analysis prompt embeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scenario {
    #[serde(rename = "Burst Pipe / Interior Water Leak")]
    BurstPipe,
    #[serde(rename = "Roof Hail Damage")]
    RoofHail,
    #[serde(rename = "Basement Flood (Groundwater Seepage)")]
    BasementFlood,
    #[serde(rename = "Fence Wind Damage")]
    FenceWind,
    #[serde(rename = "Tree Damage to Dwelling")]
    TreeDamage,
    #[serde(rename = "Appliance Power Surge")]
    PowerSurge,
    #[serde(rename = "Hurricane")]
    Hurricane,
    #[serde(rename = "Fire")]
    Fire,
    #[serde(rename = "Theft")]
    Theft,
}

impl Scenario {
    /// All scenarios, in the order the picker presents them.
    pub const ALL: [Scenario; 9] = [
        Self::BurstPipe,
        Self::RoofHail,
        Self::BasementFlood,
        Self::FenceWind,
        Self::TreeDamage,
        Self::PowerSurge,
        Self::Hurricane,
        Self::Fire,
        Self::Theft,
    ];

    /// Display label, also the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BurstPipe => "Burst Pipe / Interior Water Leak",
            Self::RoofHail => "Roof Hail Damage",
            Self::BasementFlood => "Basement Flood (Groundwater Seepage)",
            Self::FenceWind => "Fence Wind Damage",
            Self::TreeDamage => "Tree Damage to Dwelling",
            Self::PowerSurge => "Appliance Power Surge",
            Self::Hurricane => "Hurricane",
            Self::Fire => "Fire",
            Self::Theft => "Theft",
        }
    }
}

impl FromStr for Scenario {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "Burst Pipe / Interior Water Leak" => Ok(Self::BurstPipe),
            "Roof Hail Damage" => Ok(Self::RoofHail),
            "Basement Flood (Groundwater Seepage)" => Ok(Self::BasementFlood),
            "Fence Wind Damage" => Ok(Self::FenceWind),
            "Tree Damage to Dwelling" => Ok(Self::TreeDamage),
            "Appliance Power Surge" => Ok(Self::PowerSurge),
            "Hurricane" => Ok(Self::Hurricane),
            "Fire" => Ok(Self::Fire),
            "Theft" => Ok(Self::Theft),
            _ => Err(CoreError::UnknownScenario {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
