use fxhash::FxHashMap;
use jiff::Timestamp;
use serde::Serialize;
use serde_with::{DisplayFromStr, serde_as};
use tracing::{Level, info, instrument};

use crate::{
    problem::{berth::Berth, port_problem::PortProblem, ship::Ship, ship_type::ShipType},
    solver::{
        berth_allocation::{estimate_service_hours, optimize},
        crane_scheduler::ContainerHandlingScheduler,
        optimization_result::OptimizationResult,
        optimizer_params::OptimizerParams,
    },
    timer_debug,
};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ShipImprovement {
    pub ship_id: String,
    pub berth_id: String,
    pub allocated_cranes: u32,
    pub original_service_time: f64,
    pub optimized_service_time: f64,
    pub time_saved: f64,
}

#[serde_as]
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ResourceAllocationResult {
    pub berth_allocation: OptimizationResult,
    pub crane_allocation: FxHashMap<String, u32>,
    pub ship_improvements: Vec<ShipImprovement>,
    pub total_time_saved: f64,
    pub available_cranes: u32,
    pub allocated_cranes: u32,
    pub crane_utilization: f64,
    pub total_waiting_time: f64,
    pub average_waiting_time: f64,

    #[serde_as(as = "FxHashMap<DisplayFromStr, _>")]
    pub cranes_by_ship_type: FxHashMap<ShipType, u32>,
}

/// Berth allocation followed by crane allocation over the assigned ships.
#[derive(Default)]
pub struct ResourceAllocationOptimizer {
    params: OptimizerParams,
    crane_scheduler: ContainerHandlingScheduler,
}

impl ResourceAllocationOptimizer {
    pub fn new(params: OptimizerParams) -> Self {
        Self {
            crane_scheduler: ContainerHandlingScheduler::new(params.clone()),
            params,
        }
    }

    pub fn optimize_problem(
        &self,
        problem: &PortProblem,
        current_time: Timestamp,
        available_cranes: Option<u32>,
    ) -> ResourceAllocationResult {
        self.optimize_resources(
            problem.ships(),
            problem.berths(),
            current_time,
            available_cranes,
        )
    }

    /// The crane pool defaults to the cranes installed on all berths.
    #[instrument(skip_all, level = Level::DEBUG)]
    pub fn optimize_resources(
        &self,
        ships: &[Ship],
        berths: &[Berth],
        current_time: Timestamp,
        available_cranes: Option<u32>,
    ) -> ResourceAllocationResult {
        let berth_allocation = timer_debug!(
            "Berth allocation",
            optimize(ships, berths, current_time, &self.params)
        );

        let ships_by_id = ships
            .iter()
            .map(|ship| (ship.id(), ship))
            .collect::<FxHashMap<&str, &Ship>>();

        let assigned = berth_allocation
            .schedule
            .iter()
            .filter_map(|entry| ships_by_id.get(entry.ship_id.as_str()).copied())
            .collect::<Vec<&Ship>>();

        let available_cranes = available_cranes
            .unwrap_or_else(|| berths.iter().map(Berth::crane_count).sum::<u32>());

        let crane_allocation = timer_debug!(
            "Crane allocation",
            self.crane_scheduler
                .optimize_crane_allocation(&assigned, available_cranes)
        );

        let ship_improvements = berth_allocation
            .schedule
            .iter()
            .filter_map(|entry| {
                let ship = ships_by_id.get(entry.ship_id.as_str())?;
                let allocated_cranes = crane_allocation.get(ship.id()).copied().unwrap_or(0);
                let optimized_service_time = if allocated_cranes > 0 {
                    estimate_service_hours(ship, allocated_cranes, &self.params)
                } else {
                    entry.service_time
                };

                Some(ShipImprovement {
                    ship_id: entry.ship_id.clone(),
                    berth_id: entry.berth_id.clone(),
                    allocated_cranes,
                    original_service_time: entry.service_time,
                    optimized_service_time,
                    time_saved: entry.service_time - optimized_service_time,
                })
            })
            .collect::<Vec<_>>();

        let mut cranes_by_ship_type = FxHashMap::default();
        for ship in &assigned {
            if let Some(&cranes) = crane_allocation.get(ship.id()) {
                *cranes_by_ship_type.entry(ship.ship_type()).or_insert(0) += cranes;
            }
        }

        let allocated_cranes = crane_allocation.values().sum::<u32>();
        let crane_utilization = if available_cranes > 0 {
            allocated_cranes as f64 / available_cranes as f64
        } else {
            0.0
        };
        let total_time_saved = ship_improvements
            .iter()
            .map(|improvement| improvement.time_saved)
            .sum::<f64>();

        info!(
            "Resource allocation: assigned = {}, cranes = {}/{}, time saved = {:.2}h",
            assigned.len(),
            allocated_cranes,
            available_cranes,
            total_time_saved
        );

        ResourceAllocationResult {
            total_waiting_time: berth_allocation.total_waiting_time,
            average_waiting_time: berth_allocation.average_waiting_time,
            berth_allocation,
            crane_allocation,
            ship_improvements,
            total_time_saved,
            available_cranes,
            allocated_cranes,
            crane_utilization,
            cranes_by_ship_type,
        }
    }
}
