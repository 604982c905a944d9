use jiff::SignedDuration;

use crate::scenario::scenario_params::ScenarioParams;

/// Tunable constants shared by the berth allocator and the crane scheduler.
///
/// Durations that feed back into timestamps are `SignedDuration`s, everything
/// reported as a metric is expressed in fractional hours.
#[derive(Clone, Debug, PartialEq)]
pub struct OptimizerParams {
    /// Fixed mooring, inspection and unmooring time added to every call.
    pub base_service_hours: f64,
    pub minimum_service_hours: f64,
    pub moves_per_crane_hour: f64,
    /// Ship sizes are divided by this before scaling handling time.
    pub size_factor_unit: f64,

    /// Free-at offset for an unavailable berth without a known release time.
    pub unavailable_berth_delay: SignedDuration,
    pub utilization_window_hours: f64,

    pub waiting_time_weight: f64,
    pub utilization_weight: f64,
    pub utilization_penalty_scale: f64,

    pub max_cranes_per_ship: u32,
    pub minimum_handling_hours: f64,
}

impl Default for OptimizerParams {
    fn default() -> Self {
        Self {
            base_service_hours: 2.0,
            minimum_service_hours: 0.5,
            moves_per_crane_hour: 30.0,
            size_factor_unit: 1000.0,

            unavailable_berth_delay: SignedDuration::from_hours(4),
            utilization_window_hours: 24.0,

            waiting_time_weight: 0.7,
            utilization_weight: 0.3,
            utilization_penalty_scale: 10.0,

            max_cranes_per_ship: 4,
            minimum_handling_hours: 0.5,
        }
    }
}

impl OptimizerParams {
    /// Default parameters with crane productivity scaled by the scenario's efficiency.
    pub fn for_scenario(scenario: &ScenarioParams) -> Self {
        let defaults = Self::default();
        Self {
            moves_per_crane_hour: defaults.moves_per_crane_hour * scenario.processing_efficiency,
            ..defaults
        }
    }
}
