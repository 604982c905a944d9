use fxhash::FxHashMap;
use jiff::Timestamp;
use serde::Serialize;

use crate::problem::ship_type::ShipType;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ScheduleEntry {
    pub ship_id: String,
    pub berth_id: String,
    pub arrival_time: Timestamp,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    /// Hours between arrival and the start of service.
    pub waiting_time: f64,
    /// Hours the ship occupies the berth.
    pub service_time: f64,
    pub ship_type: ShipType,
    pub priority: u8,
}

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct OptimizationResult {
    pub ship_berth_assignments: FxHashMap<String, String>,
    pub total_waiting_time: f64,
    pub average_waiting_time: f64,
    pub berth_utilization: FxHashMap<String, f64>,
    pub average_utilization: f64,
    /// Lower is better.
    pub optimization_score: f64,
    pub schedule: Vec<ScheduleEntry>,
    pub unassigned_ships: Vec<String>,
}

impl OptimizationResult {
    pub fn assigned_count(&self) -> usize {
        self.schedule.len()
    }

    pub fn berth_of(&self, ship_id: &str) -> Option<&str> {
        self.ship_berth_assignments
            .get(ship_id)
            .map(|berth_id| berth_id.as_str())
    }

    pub fn entry(&self, ship_id: &str) -> Option<&ScheduleEntry> {
        self.schedule.iter().find(|entry| entry.ship_id == ship_id)
    }

    pub fn entries_for_berth<'a>(
        &'a self,
        berth_id: &'a str,
    ) -> impl Iterator<Item = &'a ScheduleEntry> + 'a {
        self.schedule
            .iter()
            .filter(move |entry| entry.berth_id == berth_id)
    }

    /// End of the last scheduled service, if anything was scheduled.
    pub fn completion_time(&self) -> Option<Timestamp> {
        self.schedule.iter().map(|entry| entry.end_time).max()
    }
}
