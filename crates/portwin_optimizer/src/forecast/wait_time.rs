use rand::Rng;
use rand_distr::{Distribution, Exp, Gamma};

use crate::scenario::{error::ScenarioError, scenario_params::ScenarioParams};

const DEFAULT_CONGESTION_THRESHOLD: f64 = 0.8;
const DEFAULT_CONGESTION_MULTIPLIER: f64 = 2.5;
const DEFAULT_GAMMA_SHAPE: f64 = 2.0;

/// Waiting time at anchorage, exponential below the congestion threshold and
/// gamma distributed with a heavier mean above it.
pub struct WaitTimeModel {
    mean_wait_hours: f64,
    congestion_threshold: f64,
    congestion_multiplier: f64,
    uncongested: Exp<f64>,
    congested: Gamma<f64>,
}

impl WaitTimeModel {
    pub fn new(mean_wait_hours: f64) -> Result<Self, ScenarioError> {
        Self::with_congestion(
            mean_wait_hours,
            DEFAULT_CONGESTION_THRESHOLD,
            DEFAULT_CONGESTION_MULTIPLIER,
        )
    }

    pub fn with_congestion(
        mean_wait_hours: f64,
        congestion_threshold: f64,
        congestion_multiplier: f64,
    ) -> Result<Self, ScenarioError> {
        let uncongested = Exp::new(1.0 / mean_wait_hours)
            .map_err(|error| ScenarioError::Distribution(error.to_string()))?;
        let congested = Gamma::new(
            DEFAULT_GAMMA_SHAPE,
            mean_wait_hours * congestion_multiplier / DEFAULT_GAMMA_SHAPE,
        )
        .map_err(|error| ScenarioError::Distribution(error.to_string()))?;

        Ok(Self {
            mean_wait_hours,
            congestion_threshold,
            congestion_multiplier,
            uncongested,
            congested,
        })
    }

    pub fn from_scenario(params: &ScenarioParams) -> Result<Self, ScenarioError> {
        Self::new(params.wait_time_mean_hours)
    }

    pub fn is_congested(&self, utilization: f64) -> bool {
        utilization >= self.congestion_threshold
    }

    pub fn expected_wait(&self, utilization: f64) -> f64 {
        if self.is_congested(utilization) {
            self.mean_wait_hours * self.congestion_multiplier
        } else {
            self.mean_wait_hours
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, utilization: f64, rng: &mut R) -> f64 {
        if self.is_congested(utilization) {
            self.congested.sample(rng)
        } else {
            self.uncongested.sample(rng)
        }
    }
}
