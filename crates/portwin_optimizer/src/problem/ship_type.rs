use std::{fmt::Display, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ProblemError;

#[derive(
    Deserialize, Serialize, JsonSchema, Debug, Clone, Copy, PartialEq, Eq, Hash, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum ShipType {
    #[default]
    Container,
    Bulk,
    Tanker,
    General,
    Passenger,
    Mixed,
    Roro,
    Other,
}

impl ShipType {
    pub const ALL: [ShipType; 8] = [
        ShipType::Container,
        ShipType::Bulk,
        ShipType::Tanker,
        ShipType::General,
        ShipType::Passenger,
        ShipType::Mixed,
        ShipType::Roro,
        ShipType::Other,
    ];

    /// Handling effort relative to a container vessel of the same workload.
    pub fn handling_factor(&self) -> f64 {
        match self {
            ShipType::Container => 1.0,
            ShipType::Bulk => 1.5,
            ShipType::Tanker => 1.3,
            ShipType::General => 1.2,
            ShipType::Passenger => 0.8,
            ShipType::Mixed | ShipType::Roro | ShipType::Other => 1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShipType::Container => "container",
            ShipType::Bulk => "bulk",
            ShipType::Tanker => "tanker",
            ShipType::General => "general",
            ShipType::Passenger => "passenger",
            ShipType::Mixed => "mixed",
            ShipType::Roro => "roro",
            ShipType::Other => "other",
        }
    }
}

impl Display for ShipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShipType {
    type Err = ProblemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        ShipType::ALL
            .into_iter()
            .find(|ship_type| ship_type.as_str() == normalized)
            .ok_or_else(|| ProblemError::UnknownShipType(s.to_owned()))
    }
}
