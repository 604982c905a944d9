use std::borrow::Borrow;

use fxhash::FxHashMap;
use tracing::{Level, debug, instrument};

use crate::{problem::ship::Ship, solver::optimizer_params::OptimizerParams};

/// Splits a pool of quay cranes across ships proportionally to their workload.
#[derive(Default)]
pub struct ContainerHandlingScheduler {
    params: OptimizerParams,
}

impl ContainerHandlingScheduler {
    pub fn new(params: OptimizerParams) -> Self {
        Self { params }
    }

    /// Maps ship ids to allocated cranes. Ships left without cranes are omitted.
    #[instrument(skip_all, level = Level::DEBUG, fields(ships = ships.len(), available_cranes = available_cranes))]
    pub fn optimize_crane_allocation<S>(
        &self,
        ships: &[S],
        available_cranes: u32,
    ) -> FxHashMap<String, u32>
    where
        S: Borrow<Ship>,
    {
        let mut allocation = FxHashMap::default();
        if ships.is_empty() || available_cranes == 0 {
            return allocation;
        }

        let mut order = ships
            .iter()
            .map(|ship| <S as Borrow<Ship>>::borrow(ship))
            .collect::<Vec<&Ship>>();
        order.sort_by(|a, b| {
            b.priority()
                .cmp(&a.priority())
                .then_with(|| b.total_containers().cmp(&a.total_containers()))
        });

        let total_workload = order.iter().map(|ship| ship.total_containers()).sum::<u64>();
        let max_cranes = self.params.max_cranes_per_ship;
        let mut remaining = available_cranes;

        for ship in &order {
            if remaining == 0 {
                break;
            }

            let mut cranes = if total_workload > 0 {
                (u64::from(available_cranes) * ship.total_containers() / total_workload) as u32
            } else {
                0
            };

            if ship.is_prioritized() {
                cranes = cranes.max(1);
            }

            let cranes = cranes.min(max_cranes).min(remaining);
            if cranes > 0 {
                allocation.insert(ship.id().to_owned(), cranes);
                remaining -= cranes;
            }
        }

        while remaining > 0 {
            let Some(ship) = highest_workload_below_cap(&order, &allocation, max_cranes) else {
                break;
            };

            *allocation.entry(ship.id().to_owned()).or_insert(0) += 1;
            remaining -= 1;
        }

        debug!(
            "Allocated {} of {} cranes",
            available_cranes - remaining,
            available_cranes
        );

        allocation
    }

    /// Hours to move a ship's containers with `allocated_cranes`, infinite without cranes.
    pub fn estimate_handling_time(&self, ship: &Ship, allocated_cranes: u32) -> f64 {
        if allocated_cranes == 0 {
            return f64::INFINITY;
        }

        let hours = ship.total_containers() as f64
            / (allocated_cranes as f64 * self.params.moves_per_crane_hour);

        hours.max(self.params.minimum_handling_hours)
    }
}

/// Ship with containers left to move and room under the cap, the first in
/// scheduling order on ties.
fn highest_workload_below_cap<'a>(
    order: &[&'a Ship],
    allocation: &FxHashMap<String, u32>,
    max_cranes: u32,
) -> Option<&'a Ship> {
    order
        .iter()
        .copied()
        .filter(|ship| ship.total_containers() > 0)
        .filter(|ship| allocation.get(ship.id()).copied().unwrap_or(0) < max_cranes)
        .fold(None::<&'a Ship>, |best, ship| match best {
            Some(best) if best.total_containers() >= ship.total_containers() => Some(best),
            _ => Some(ship),
        })
}
