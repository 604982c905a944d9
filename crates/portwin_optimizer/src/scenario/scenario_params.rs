use std::{fmt::Display, str::FromStr};

use serde::Serialize;

use crate::{problem::ship_type::ShipType, scenario::error::ScenarioError};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    #[default]
    Baseline,
    PeakSeason,
    Typhoon,
    Expansion,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Scenario::Baseline,
        Scenario::PeakSeason,
        Scenario::Typhoon,
        Scenario::Expansion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Baseline => "baseline",
            Scenario::PeakSeason => "peak_season",
            Scenario::Typhoon => "typhoon",
            Scenario::Expansion => "expansion",
        }
    }

    pub fn params(&self) -> ScenarioParams {
        match self {
            Scenario::Baseline => ScenarioParams {
                name: self.as_str(),
                description: "Regular operations",
                arrival_rate_per_hour: 0.5,
                ship_type_mix: vec![
                    (ShipType::Container, 0.6),
                    (ShipType::Bulk, 0.15),
                    (ShipType::Tanker, 0.1),
                    (ShipType::General, 0.1),
                    (ShipType::Passenger, 0.05),
                ],
                priority_weights: [0.8, 0.15, 0.05],
                berth_count: 6,
                cranes_per_berth: 3,
                berth_capacity: 6000.0,
                container_shape: 2.0,
                container_scale: 150.0,
                processing_efficiency: 1.0,
                berth_unavailable_probability: 0.05,
                wait_time_mean_hours: 2.0,
            },
            Scenario::PeakSeason => ScenarioParams {
                name: self.as_str(),
                description: "Seasonal surge in container traffic",
                arrival_rate_per_hour: 0.9,
                ship_type_mix: vec![
                    (ShipType::Container, 0.7),
                    (ShipType::Bulk, 0.1),
                    (ShipType::Tanker, 0.08),
                    (ShipType::General, 0.1),
                    (ShipType::Passenger, 0.02),
                ],
                priority_weights: [0.7, 0.2, 0.1],
                berth_count: 6,
                cranes_per_berth: 3,
                berth_capacity: 6000.0,
                container_shape: 2.5,
                container_scale: 180.0,
                processing_efficiency: 0.9,
                berth_unavailable_probability: 0.05,
                wait_time_mean_hours: 4.0,
            },
            Scenario::Typhoon => ScenarioParams {
                name: self.as_str(),
                description: "Severe weather, reduced crane productivity and closed berths",
                arrival_rate_per_hour: 0.3,
                ship_type_mix: vec![
                    (ShipType::Container, 0.55),
                    (ShipType::Bulk, 0.2),
                    (ShipType::Tanker, 0.15),
                    (ShipType::General, 0.1),
                ],
                priority_weights: [0.6, 0.25, 0.15],
                berth_count: 6,
                cranes_per_berth: 2,
                berth_capacity: 6000.0,
                container_shape: 2.0,
                container_scale: 150.0,
                processing_efficiency: 0.6,
                berth_unavailable_probability: 0.4,
                wait_time_mean_hours: 8.0,
            },
            Scenario::Expansion => ScenarioParams {
                name: self.as_str(),
                description: "Additional berths and cranes after terminal expansion",
                arrival_rate_per_hour: 0.7,
                ship_type_mix: vec![
                    (ShipType::Container, 0.6),
                    (ShipType::Bulk, 0.15),
                    (ShipType::Tanker, 0.1),
                    (ShipType::General, 0.1),
                    (ShipType::Passenger, 0.05),
                ],
                priority_weights: [0.8, 0.15, 0.05],
                berth_count: 9,
                cranes_per_berth: 4,
                berth_capacity: 8000.0,
                container_shape: 2.0,
                container_scale: 150.0,
                processing_efficiency: 1.2,
                berth_unavailable_probability: 0.03,
                wait_time_mean_hours: 1.5,
            },
        }
    }
}

impl Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Scenario {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");

        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.as_str() == normalized)
            .ok_or_else(|| ScenarioError::UnknownScenario(s.to_owned()))
    }
}

/// Operating conditions a synthetic port problem is drawn from.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ScenarioParams {
    pub name: &'static str,
    pub description: &'static str,

    /// Mean ship arrivals per hour.
    pub arrival_rate_per_hour: f64,
    /// Relative weights, they do not need to sum to one.
    pub ship_type_mix: Vec<(ShipType, f64)>,
    /// Weights of normal, high and urgent priority.
    pub priority_weights: [f64; 3],

    pub berth_count: usize,
    pub cranes_per_berth: u32,
    pub berth_capacity: f64,

    /// Gamma distribution of the container moves of a container ship.
    pub container_shape: f64,
    pub container_scale: f64,

    /// Multiplier on crane productivity.
    pub processing_efficiency: f64,
    pub berth_unavailable_probability: f64,
    pub wait_time_mean_hours: f64,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Scenario::Baseline.params()
    }
}
