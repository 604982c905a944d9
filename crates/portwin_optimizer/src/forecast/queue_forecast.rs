use jiff::Timestamp;
use serde::Serialize;

use crate::{
    forecast::{arrival_forecast::ArrivalForecaster, wait_time::WaitTimeModel},
    scenario::{error::ScenarioError, scenario_params::ScenarioParams},
};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct QueueForecastPoint {
    pub hour_start: Timestamp,
    pub expected_arrivals: f64,
    pub expected_wait_hours: f64,
    /// Ships at anchorage, arrival rate times expected wait.
    pub expected_queue_length: f64,
}

pub struct QueueForecast {
    arrivals: ArrivalForecaster,
    wait_time: WaitTimeModel,
}

impl QueueForecast {
    pub fn new(arrivals: ArrivalForecaster, wait_time: WaitTimeModel) -> Self {
        Self {
            arrivals,
            wait_time,
        }
    }

    pub fn from_scenario(params: &ScenarioParams) -> Result<Self, ScenarioError> {
        Ok(Self::new(
            ArrivalForecaster::from_scenario(params),
            WaitTimeModel::from_scenario(params)?,
        ))
    }

    pub fn forecast(
        &self,
        start: Timestamp,
        hours: usize,
        utilization: f64,
    ) -> Vec<QueueForecastPoint> {
        let expected_wait_hours = self.wait_time.expected_wait(utilization);

        self.arrivals
            .forecast(start, hours)
            .into_iter()
            .map(|hour| QueueForecastPoint {
                hour_start: hour.hour_start,
                expected_arrivals: hour.expected_arrivals,
                expected_wait_hours,
                expected_queue_length: hour.expected_arrivals * expected_wait_hours,
            })
            .collect()
    }
}

/// Hour with the longest expected queue, the earliest one on ties.
pub fn peak(points: &[QueueForecastPoint]) -> Option<&QueueForecastPoint> {
    points.iter().reduce(|busiest, point| {
        if point.expected_queue_length > busiest.expected_queue_length {
            point
        } else {
            busiest
        }
    })
}
