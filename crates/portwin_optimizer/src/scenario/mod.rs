pub mod error;
pub mod generator;
pub mod scenario_params;
