use jiff::{SignedDuration, Timestamp, tz::TimeZone};
use serde::Serialize;

use crate::scenario::scenario_params::ScenarioParams;

/// Multiplicative arrival ratios by month, weekday and hour of day, all in UTC.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SeasonalProfile {
    pub monthly: [f64; 12],
    /// Monday first.
    pub weekday: [f64; 7],
    pub hourly: [f64; 24],
}

impl Default for SeasonalProfile {
    fn default() -> Self {
        let mut hourly = [0.8; 24];
        hourly[6..18].fill(1.2);

        Self {
            monthly: [
                0.9, 0.8, 0.95, 1.0, 1.0, 1.05, 1.05, 1.1, 1.2, 1.2, 1.15, 0.9,
            ],
            weekday: [1.1, 1.05, 1.0, 1.0, 1.05, 0.9, 0.9],
            hourly,
        }
    }
}

impl SeasonalProfile {
    pub fn flat() -> Self {
        Self {
            monthly: [1.0; 12],
            weekday: [1.0; 7],
            hourly: [1.0; 24],
        }
    }

    pub fn ratio(&self, at: Timestamp) -> f64 {
        let zoned = at.to_zoned(TimeZone::UTC);
        let month = zoned.month() as usize - 1;
        let weekday = zoned.weekday().to_monday_zero_offset() as usize;
        let hour = zoned.hour() as usize;

        self.monthly[month] * self.weekday[weekday] * self.hourly[hour]
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HourlyArrivals {
    pub hour_start: Timestamp,
    pub expected_arrivals: f64,
}

pub struct ArrivalForecaster {
    base_rate_per_hour: f64,
    profile: SeasonalProfile,
}

impl ArrivalForecaster {
    pub fn new(base_rate_per_hour: f64, profile: SeasonalProfile) -> Self {
        Self {
            base_rate_per_hour,
            profile,
        }
    }

    pub fn from_scenario(params: &ScenarioParams) -> Self {
        Self::new(params.arrival_rate_per_hour, SeasonalProfile::default())
    }

    /// Expected arrivals during the hour starting at `at`.
    pub fn expected_arrivals(&self, at: Timestamp) -> f64 {
        self.base_rate_per_hour * self.profile.ratio(at)
    }

    /// Hourly series from `start`. It stops early at the last representable hour.
    pub fn forecast(&self, start: Timestamp, hours: usize) -> Vec<HourlyArrivals> {
        (0..hours)
            .map_while(|hour| {
                let offset = SignedDuration::from_hours(i64::try_from(hour).ok()?);
                let hour_start = start.checked_add(offset).ok()?;
                Some(HourlyArrivals {
                    hour_start,
                    expected_arrivals: self.expected_arrivals(hour_start),
                })
            })
            .collect()
    }

    pub fn expected_total(&self, start: Timestamp, hours: usize) -> f64 {
        self.forecast(start, hours)
            .iter()
            .map(|hour| hour.expected_arrivals)
            .sum()
    }
}
