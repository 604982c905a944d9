use thiserror::Error;

use crate::error::ProblemError;

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("Unknown scenario `{0}`, expected one of baseline, peak_season, typhoon, expansion")]
    UnknownScenario(String),
    #[error("Arrival rate must be positive, got {0}")]
    InvalidArrivalRate(f64),
    #[error("Invalid distribution parameters: {0}")]
    Distribution(String),
    #[error("Invalid sampling weights: {0}")]
    Weights(String),
    #[error(transparent)]
    Problem(#[from] ProblemError),
}
