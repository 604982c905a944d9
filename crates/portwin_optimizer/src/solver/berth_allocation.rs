use jiff::Timestamp;
use tracing::{Level, debug, instrument, warn};

use crate::{
    error::ProblemError,
    problem::{
        berth::{Berth, BerthIdx},
        ship::{Ship, ShipIdx},
    },
    solver::{
        optimization_result::{OptimizationResult, ScheduleEntry},
        optimizer_params::OptimizerParams,
    },
    utils::{
        enumerate_idx::EnumerateIdx,
        time::{as_hours, from_hours, saturating_add},
    },
};

/// Greedy berth allocator.
///
/// Ships and berths are accumulated with [`add_ship`](Self::add_ship) and
/// [`add_berth`](Self::add_berth), the allocation itself is delegated to
/// [`optimize`], which keeps no state between calls.
#[derive(Default)]
pub struct BerthAllocationOptimizer {
    ships: Vec<Ship>,
    berths: Vec<Berth>,
    params: OptimizerParams,
}

impl BerthAllocationOptimizer {
    pub fn new(params: OptimizerParams) -> Self {
        Self {
            ships: Vec::new(),
            berths: Vec::new(),
            params,
        }
    }

    pub fn params(&self) -> &OptimizerParams {
        &self.params
    }

    /// Rejects a ship whose id is already queued.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), ProblemError> {
        if self.ships.iter().any(|queued| queued.id() == ship.id()) {
            return Err(ProblemError::DuplicateShipId(ship.id().to_owned()));
        }

        self.ships.push(ship);
        Ok(())
    }

    /// Rejects a berth whose id is already registered.
    pub fn add_berth(&mut self, berth: Berth) -> Result<(), ProblemError> {
        if self.berths.iter().any(|known| known.id() == berth.id()) {
            return Err(ProblemError::DuplicateBerthId(berth.id().to_owned()));
        }

        self.berths.push(berth);
        Ok(())
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn berths(&self) -> &[Berth] {
        &self.berths
    }

    pub fn clear(&mut self) {
        self.ships.clear();
        self.berths.clear();
    }

    pub fn estimate_service_time(&self, ship: &Ship, berth: &Berth) -> f64 {
        estimate_service_hours(ship, berth.crane_count(), &self.params)
    }

    pub fn is_berth_suitable(&self, ship: &Ship, berth: &Berth) -> bool {
        is_berth_suitable(ship, berth)
    }

    /// Allocates the accumulated ships, `current_time` defaults to the wall clock.
    pub fn optimize_berth_allocation(&self, current_time: Option<Timestamp>) -> OptimizationResult {
        let current_time = current_time.unwrap_or_else(Timestamp::now);
        optimize(&self.ships, &self.berths, current_time, &self.params)
    }
}

/// Hours a ship occupies a berth served by `crane_count` cranes.
///
/// A base time plus the container moves spread over the cranes, scaled by the
/// ship size and type. Without cranes only the base time remains.
pub fn estimate_service_hours(ship: &Ship, crane_count: u32, params: &OptimizerParams) -> f64 {
    let handling_hours = if crane_count > 0 {
        let size_factor = (ship.size() / params.size_factor_unit).max(1.0);
        let crane_hours =
            ship.total_containers() as f64 / (crane_count as f64 * params.moves_per_crane_hour);

        crane_hours * size_factor * ship.ship_type().handling_factor()
    } else {
        0.0
    };

    (params.base_service_hours + handling_hours).max(params.minimum_service_hours)
}

pub fn is_berth_suitable(ship: &Ship, berth: &Berth) -> bool {
    if ship.size() > berth.capacity() {
        return false;
    }

    berth.accepts(ship.ship_type())
}

struct BerthSlot {
    free_at: Timestamp,
    service_hours: f64,
}

struct BerthCandidate {
    berth_id: BerthIdx,
    start_time: Timestamp,
    waiting_time: f64,
}

fn initial_free_at(berth: &Berth, current_time: Timestamp, params: &OptimizerParams) -> Timestamp {
    if berth.is_available() {
        current_time
    } else {
        berth
            .available_from()
            .unwrap_or_else(|| saturating_add(current_time, params.unavailable_berth_delay))
    }
}

/// Queue order: higher priority first, then earlier arrival. Stable for ties.
fn queue_order(ships: &[Ship]) -> Vec<ShipIdx> {
    let mut order = (0..ships.len()).map(ShipIdx::new).collect::<Vec<_>>();
    order.sort_by(|&a, &b| {
        let (ship_a, ship_b) = (&ships[a], &ships[b]);
        ship_b
            .priority()
            .cmp(&ship_a.priority())
            .then_with(|| ship_a.arrival_time().cmp(&ship_b.arrival_time()))
    });
    order
}

/// Suitable berth with the least waiting time, the first one scanned wins ties.
fn select_berth(ship: &Ship, berths: &[Berth], slots: &[BerthSlot]) -> Option<BerthCandidate> {
    let mut best: Option<BerthCandidate> = None;

    for (berth_id, berth) in berths.iter().enumerate_idx::<BerthIdx>() {
        if !is_berth_suitable(ship, berth) {
            continue;
        }

        let start_time = ship.arrival_time().max(slots[berth_id.get()].free_at);
        let waiting_time = as_hours(start_time.duration_since(ship.arrival_time()));

        if best
            .as_ref()
            .is_none_or(|current| waiting_time < current.waiting_time)
        {
            best = Some(BerthCandidate {
                berth_id,
                start_time,
                waiting_time,
            });
        }
    }

    best
}

#[instrument(skip_all, level = Level::DEBUG, fields(ships = ships.len(), berths = berths.len()))]
pub fn optimize(
    ships: &[Ship],
    berths: &[Berth],
    current_time: Timestamp,
    params: &OptimizerParams,
) -> OptimizationResult {
    let mut slots = berths
        .iter()
        .map(|berth| BerthSlot {
            free_at: initial_free_at(berth, current_time, params),
            service_hours: 0.0,
        })
        .collect::<Vec<_>>();

    let mut result = OptimizationResult::default();

    for ship_id in queue_order(ships) {
        let ship = &ships[ship_id];

        let Some(candidate) = select_berth(ship, berths, &slots) else {
            warn!(
                "No suitable berth for ship {} (type = {}, size = {})",
                ship.id(),
                ship.ship_type(),
                ship.size()
            );
            result.unassigned_ships.push(ship.id().to_owned());
            continue;
        };

        let berth = &berths[candidate.berth_id];
        let service_time = estimate_service_hours(ship, berth.crane_count(), params);
        // Extreme sizes or arrivals near the end of time pin the berth at Timestamp::MAX.
        let end_time = saturating_add(candidate.start_time, from_hours(service_time));

        let slot = &mut slots[candidate.berth_id.get()];
        slot.free_at = end_time;
        slot.service_hours += service_time;

        debug!(
            "Assigned ship {} to berth {}: start = {}, waiting = {:.2}h, service = {:.2}h",
            ship.id(),
            berth.id(),
            candidate.start_time,
            candidate.waiting_time,
            service_time
        );

        result.total_waiting_time += candidate.waiting_time;
        result
            .ship_berth_assignments
            .insert(ship.id().to_owned(), berth.id().to_owned());
        result.schedule.push(ScheduleEntry {
            ship_id: ship.id().to_owned(),
            berth_id: berth.id().to_owned(),
            arrival_time: ship.arrival_time(),
            start_time: candidate.start_time,
            end_time,
            waiting_time: candidate.waiting_time,
            service_time,
            ship_type: ship.ship_type(),
            priority: ship.priority(),
        });
    }

    for (berth, slot) in berths.iter().zip(&slots) {
        let utilization = (slot.service_hours / params.utilization_window_hours).min(1.0);
        result
            .berth_utilization
            .insert(berth.id().to_owned(), utilization);
    }

    result.average_waiting_time = if ships.is_empty() {
        0.0
    } else {
        result.total_waiting_time / ships.len() as f64
    };

    result.average_utilization = if berths.is_empty() {
        0.0
    } else {
        slots
            .iter()
            .map(|slot| (slot.service_hours / params.utilization_window_hours).min(1.0))
            .sum::<f64>()
            / berths.len() as f64
    };

    result.optimization_score = params.waiting_time_weight * result.average_waiting_time
        + params.utilization_weight
            * (1.0 - result.average_utilization)
            * params.utilization_penalty_scale;

    debug!(
        "Berth allocation finished: assigned = {}, unassigned = {}, score = {:.3}",
        result.schedule.len(),
        result.unassigned_ships.len(),
        result.optimization_score
    );

    result
}

#[cfg(test)]
mod tests {
    use crate::{
        problem::{ship::ShipBuilder, ship_type::ShipType},
        test_utils::{self, assert_close},
    };

    use super::*;

    #[test]
    fn test_service_time_base_only_without_containers() {
        let params = OptimizerParams::default();
        let small = test_utils::create_ship("S1", ShipType::Container, 500.0, 1, 0, 0);
        let huge = test_utils::create_ship("S2", ShipType::Container, 90_000.0, 1, 0, 0);

        assert_eq!(estimate_service_hours(&small, 3, &params), 2.0);
        assert_eq!(estimate_service_hours(&huge, 3, &params), 2.0);
    }

    #[test]
    fn test_service_time_scales_with_size_and_type() {
        let params = OptimizerParams::default();
        // 90 moves on 3 cranes = 1h, doubled by size 2000, times 1.5 for bulk.
        let bulk = test_utils::create_ship("S1", ShipType::Bulk, 2000.0, 1, 90, 0);
        assert_close(estimate_service_hours(&bulk, 3, &params), 2.0 + 3.0);

        // Sizes under the unit never shrink the handling time.
        let container = test_utils::create_ship("S2", ShipType::Container, 200.0, 1, 90, 0);
        assert_close(estimate_service_hours(&container, 3, &params), 3.0);

        let passenger = test_utils::create_ship("S3", ShipType::Passenger, 1000.0, 1, 90, 0);
        assert_close(estimate_service_hours(&passenger, 3, &params), 2.8);
    }

    #[test]
    fn test_service_time_floor() {
        let params = OptimizerParams {
            base_service_hours: 0.0,
            ..OptimizerParams::default()
        };
        let ship = test_utils::create_ship("S1", ShipType::Container, 1000.0, 1, 3, 0);

        assert_eq!(estimate_service_hours(&ship, 3, &params), 0.5);
    }

    #[test]
    fn test_is_berth_suitable() {
        let berth = test_utils::create_berth("B1", 3000.0, 2, &[ShipType::Container]);
        let fits = test_utils::create_ship("S1", ShipType::Container, 3000.0, 1, 10, 0);
        let too_big = test_utils::create_ship("S2", ShipType::Container, 3000.5, 1, 10, 0);
        let wrong_type = test_utils::create_ship("S3", ShipType::Tanker, 1000.0, 1, 10, 0);

        assert!(is_berth_suitable(&fits, &berth));
        assert!(!is_berth_suitable(&too_big, &berth));
        assert!(!is_berth_suitable(&wrong_type, &berth));
    }

    #[test]
    fn test_single_ship_no_wait() {
        let mut optimizer = BerthAllocationOptimizer::default();
        let berth = test_utils::create_berth("B1", 5000.0, 2, &[]);
        let ship = test_utils::create_ship("S1", ShipType::Container, 1000.0, 1, 60, 0);
        optimizer.add_berth(berth).unwrap();
        optimizer.add_ship(ship).unwrap();

        let result = optimizer.optimize_berth_allocation(Some(test_utils::base_time()));
        let entry = result.entry("S1").unwrap();

        assert_eq!(entry.waiting_time, 0.0);
        assert_eq!(entry.start_time, entry.arrival_time);
        assert_eq!(result.berth_of("S1"), Some("B1"));
        assert!(result.unassigned_ships.is_empty());
    }

    #[test]
    fn test_priority_ship_served_first() {
        let mut optimizer = BerthAllocationOptimizer::default();
        let berth = test_utils::create_berth("B1", 6000.0, 3, &[ShipType::Container]);
        let ship_a = test_utils::create_ship("A", ShipType::Container, 2000.0, 1, 100, 0);
        let ship_b = test_utils::create_ship("B", ShipType::Container, 1800.0, 3, 80, 0);
        optimizer.add_berth(berth).unwrap();
        optimizer.add_ship(ship_a).unwrap();
        optimizer.add_ship(ship_b).unwrap();

        let result = optimizer.optimize_berth_allocation(Some(test_utils::base_time()));

        assert_eq!(result.schedule[0].ship_id, "B");
        assert_eq!(result.schedule[1].ship_id, "A");

        // 80 moves on 3 cranes, scaled by 1.8 for a 1800 sized ship.
        let ship_b = result.entry("B").unwrap();
        assert_eq!(ship_b.waiting_time, 0.0);
        assert_close(ship_b.service_time, 2.0 + 1.8 * 80.0 / 90.0);

        let ship_a = result.entry("A").unwrap();
        assert_close(ship_a.waiting_time, 2.0 + 1.8 * 80.0 / 90.0);
        assert_eq!(ship_a.start_time, ship_b.end_time);
        // 100 moves on 3 cranes, doubled for a 2000 sized ship.
        assert_close(ship_a.service_time, 2.0 + 200.0 / 90.0);
    }

    #[test]
    fn test_urgent_ship_service_without_size_scaling() {
        let berths = vec![test_utils::create_berth(
            "B1",
            6000.0,
            3,
            &[ShipType::Container],
        )];
        let ships = vec![
            test_utils::create_ship("A", ShipType::Container, 1000.0, 1, 100, 0),
            test_utils::create_ship("B", ShipType::Container, 900.0, 3, 80, 0),
        ];

        let result = optimize(
            &ships,
            &berths,
            test_utils::base_time(),
            &OptimizerParams::default(),
        );

        let ship_b = result.entry("B").unwrap();
        assert_close(ship_b.service_time, 2.0 + 80.0 / 90.0);
        assert!((ship_b.service_time - 2.89).abs() < 0.01);
        assert_close(result.entry("A").unwrap().waiting_time, ship_b.service_time);
    }

    #[test]
    fn test_equal_priority_ordered_by_arrival() {
        let berths = vec![test_utils::create_berth("B1", 5000.0, 2, &[])];
        let ships = vec![
            test_utils::create_ship("late", ShipType::Container, 1000.0, 2, 60, 1),
            test_utils::create_ship("early", ShipType::Container, 1000.0, 2, 60, 0),
        ];

        let result = optimize(
            &ships,
            &berths,
            test_utils::base_time(),
            &OptimizerParams::default(),
        );

        assert_eq!(result.schedule[0].ship_id, "early");
        assert_eq!(result.schedule[1].ship_id, "late");
    }

    #[test]
    fn test_never_violates_capacity_or_type() {
        let berths = vec![
            test_utils::create_berth("small", 1000.0, 2, &[]),
            test_utils::create_berth("tanker", 8000.0, 1, &[ShipType::Tanker]),
            test_utils::create_berth("container", 8000.0, 4, &[ShipType::Container]),
        ];
        let ships = vec![
            test_utils::create_ship("T1", ShipType::Tanker, 5000.0, 1, 10, 0),
            test_utils::create_ship("C1", ShipType::Container, 4000.0, 2, 300, 0),
            test_utils::create_ship("C2", ShipType::Container, 800.0, 1, 50, 1),
            test_utils::create_ship("G1", ShipType::General, 3000.0, 3, 20, 0),
            test_utils::create_ship("B1", ShipType::Bulk, 900.0, 1, 20, 2),
        ];

        let result = optimize(
            &ships,
            &berths,
            test_utils::base_time(),
            &OptimizerParams::default(),
        );

        assert!(result.ship_berth_assignments.len() <= ships.len());
        for (ship_id, berth_id) in &result.ship_berth_assignments {
            let ship = ships.iter().find(|ship| ship.id() == ship_id).unwrap();
            let berth = berths.iter().find(|berth| berth.id() == berth_id).unwrap();
            assert!(ship.size() <= berth.capacity());
            assert!(berth.accepts(ship.ship_type()));
        }

        assert_eq!(result.unassigned_ships, vec![String::from("G1")]);
        assert_eq!(result.berth_of("G1"), None);
        assert_eq!(result.berth_of("T1"), Some("tanker"));
        assert_eq!(result.berth_of("B1"), Some("small"));
    }

    #[test]
    fn test_unassigned_ships_count_in_average_wait() {
        let berths = vec![test_utils::create_berth("B1", 5000.0, 3, &[])];
        let ships = vec![
            test_utils::create_ship("S1", ShipType::Container, 1000.0, 1, 0, 0),
            test_utils::create_ship("S2", ShipType::Container, 1000.0, 1, 0, 0),
            test_utils::create_ship("S3", ShipType::Container, 9000.0, 1, 0, 0),
        ];

        let result = optimize(
            &ships,
            &berths,
            test_utils::base_time(),
            &OptimizerParams::default(),
        );

        // S2 waits for the 2h base service of S1.
        assert_close(result.total_waiting_time, 2.0);
        assert_close(result.average_waiting_time, 2.0 / 3.0);
        assert_eq!(result.assigned_count(), 2);
    }

    #[test]
    fn test_waiting_picks_least_busy_berth_and_first_on_ties() {
        let berths = vec![
            test_utils::create_berth("B1", 5000.0, 1, &[]),
            test_utils::create_berth("B2", 5000.0, 1, &[]),
        ];
        let ships = vec![
            test_utils::create_ship("S1", ShipType::Container, 1000.0, 3, 30, 0),
            test_utils::create_ship("S2", ShipType::Container, 1000.0, 2, 30, 0),
            test_utils::create_ship("S3", ShipType::Container, 1000.0, 1, 30, 0),
        ];

        let result = optimize(
            &ships,
            &berths,
            test_utils::base_time(),
            &OptimizerParams::default(),
        );

        assert_eq!(result.berth_of("S1"), Some("B1"));
        assert_eq!(result.berth_of("S2"), Some("B2"));
        // Both berths free up after 3h, the first scanned wins.
        assert_eq!(result.berth_of("S3"), Some("B1"));
        assert_close(result.entry("S3").unwrap().waiting_time, 3.0);
    }

    #[test]
    fn test_unavailable_berths() {
        let release = test_utils::hours_after_base(1);
        let berths = vec![
            test_utils::create_busy_berth("released", 5000.0, 2, Some(release)),
            test_utils::create_busy_berth("unknown", 5000.0, 2, None),
        ];
        let ships = vec![
            test_utils::create_ship("S1", ShipType::Container, 1000.0, 1, 0, 0),
            test_utils::create_ship("S2", ShipType::Container, 1000.0, 1, 0, 0),
        ];

        let result = optimize(
            &ships,
            &berths,
            test_utils::base_time(),
            &OptimizerParams::default(),
        );

        let first = result.entry("S1").unwrap();
        assert_eq!(first.berth_id, "released");
        assert_eq!(first.start_time, release);
        assert_close(first.waiting_time, 1.0);

        // "released" is busy until 3h, "unknown" frees at the 4h default.
        let second = result.entry("S2").unwrap();
        assert_eq!(second.berth_id, "released");
        assert_close(second.waiting_time, 3.0);
    }

    #[test]
    fn test_utilization_and_score() {
        let berths = vec![
            test_utils::create_berth("B1", 5000.0, 1, &[]),
            test_utils::create_berth("B2", 5000.0, 1, &[ShipType::Bulk]),
        ];
        // 30 moves on a single crane: 2h base + 1h handling.
        let ships = vec![test_utils::create_ship(
            "S1",
            ShipType::Container,
            1000.0,
            1,
            30,
            0,
        )];

        let result = optimize(
            &ships,
            &berths,
            test_utils::base_time(),
            &OptimizerParams::default(),
        );

        assert_eq!(result.berth_utilization["B1"], 3.0 / 24.0);
        assert_eq!(result.berth_utilization["B2"], 0.0);
        assert_close(result.average_utilization, 0.0625);
        assert_close(result.optimization_score, 0.3 * (1.0 - 0.0625) * 10.0);
    }

    #[test]
    fn test_utilization_capped_at_one() {
        let berths = vec![test_utils::create_berth("B1", 5000.0, 1, &[])];
        let ships = (0..5)
            .map(|index| {
                test_utils::create_ship(
                    &format!("S{index}"),
                    ShipType::Container,
                    1000.0,
                    1,
                    300,
                    0,
                )
            })
            .collect::<Vec<_>>();

        let result = optimize(
            &ships,
            &berths,
            test_utils::base_time(),
            &OptimizerParams::default(),
        );

        assert_eq!(result.berth_utilization["B1"], 1.0);
        assert_eq!(result.average_utilization, 1.0);
    }

    #[test]
    fn test_berth_free_time_never_decreases() {
        let berths = vec![test_utils::create_berth("B1", 5000.0, 2, &[])];
        let ships = vec![
            test_utils::create_ship("S1", ShipType::Container, 1000.0, 1, 40, 5),
            test_utils::create_ship("S2", ShipType::Container, 1000.0, 3, 40, 8),
            test_utils::create_ship("S3", ShipType::Container, 1000.0, 2, 40, 0),
        ];

        let result = optimize(
            &ships,
            &berths,
            test_utils::base_time(),
            &OptimizerParams::default(),
        );

        let entries = result.entries_for_berth("B1").collect::<Vec<_>>();
        assert_eq!(entries.len(), 3);
        for window in entries.windows(2) {
            assert!(window[1].start_time >= window[0].end_time);
        }
    }

    #[test]
    fn test_empty_inputs() {
        let result = optimize(&[], &[], test_utils::base_time(), &OptimizerParams::default());

        assert_eq!(result.average_waiting_time, 0.0);
        assert_eq!(result.average_utilization, 0.0);
        assert_close(result.optimization_score, 3.0);
        assert!(result.schedule.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let mut optimizer = BerthAllocationOptimizer::default();
        let berths = [
            test_utils::create_berth("B1", 6000.0, 3, &[]),
            test_utils::create_berth("B2", 3000.0, 2, &[ShipType::Bulk]),
        ];
        for berth in berths {
            optimizer.add_berth(berth).unwrap();
        }
        for (index, ship_type) in [ShipType::Container, ShipType::Bulk, ShipType::Tanker]
            .into_iter()
            .enumerate()
        {
            let ship = test_utils::create_ship(
                &format!("S{index}"),
                ship_type,
                1500.0,
                (index % 3) as u8 + 1,
                50,
                index as i64,
            );
            optimizer.add_ship(ship).unwrap();
        }

        let now = Some(test_utils::base_time());
        assert_eq!(
            optimizer.optimize_berth_allocation(now),
            optimizer.optimize_berth_allocation(now)
        );
    }

    #[test]
    fn test_clear() {
        let mut optimizer = BerthAllocationOptimizer::default();
        let berth = test_utils::create_berth("B1", 6000.0, 3, &[]);
        let ship = test_utils::create_ship("S1", ShipType::Container, 1000.0, 1, 10, 0);
        optimizer.add_berth(berth).unwrap();
        optimizer.add_ship(ship).unwrap();

        optimizer.clear();

        assert!(optimizer.ships().is_empty());
        assert!(optimizer.berths().is_empty());
        let result = optimizer.optimize_berth_allocation(Some(test_utils::base_time()));
        assert!(result.ship_berth_assignments.is_empty());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let mut optimizer = BerthAllocationOptimizer::default();
        let berth = test_utils::create_berth("B1", 6000.0, 3, &[]);
        let ship = test_utils::create_ship("S1", ShipType::Container, 1000.0, 1, 10, 0);
        optimizer.add_berth(berth.clone()).unwrap();
        optimizer.add_ship(ship.clone()).unwrap();

        assert_eq!(
            optimizer.add_ship(ship),
            Err(ProblemError::DuplicateShipId(String::from("S1")))
        );
        assert_eq!(
            optimizer.add_berth(berth),
            Err(ProblemError::DuplicateBerthId(String::from("B1")))
        );

        let result = optimizer.optimize_berth_allocation(Some(test_utils::base_time()));
        assert_eq!(result.schedule.len(), 1);
        assert_eq!(result.ship_berth_assignments.len(), 1);
    }

    #[test]
    fn test_huge_service_time_saturates_end_time() {
        let berths = vec![test_utils::create_berth("B1", 1e16, 3, &[])];
        let ships = vec![
            test_utils::create_ship("giant", ShipType::Container, 1e15, 2, 1000, 0),
            test_utils::create_ship("next", ShipType::Container, 1000.0, 1, 10, 1),
        ];

        let result = optimize(
            &ships,
            &berths,
            test_utils::base_time(),
            &OptimizerParams::default(),
        );

        let giant = result.entry("giant").unwrap();
        assert_eq!(giant.end_time, Timestamp::MAX);
        assert!(giant.service_time.is_finite());

        let next = result.entry("next").unwrap();
        assert_eq!(next.start_time, Timestamp::MAX);
        assert_eq!(next.end_time, Timestamp::MAX);
    }

    #[test]
    fn test_arrival_near_end_of_time() {
        let arrival: Timestamp = "9999-12-30T21:00:00Z".parse().unwrap();
        let berths = vec![test_utils::create_berth("B1", 5000.0, 2, &[])];
        let mut builder = ShipBuilder::default();
        builder
            .set_id(String::from("late"))
            .set_arrival_time(arrival)
            .set_ship_type(ShipType::Container)
            .set_size(1000.0)
            .set_containers_to_load(3000);
        let ships = vec![builder.build().unwrap()];

        let result = optimize(&ships, &berths, arrival, &OptimizerParams::default());

        // 52h of service run past the last representable instant.
        let entry = result.entry("late").unwrap();
        assert_eq!(entry.start_time, arrival);
        assert_eq!(entry.end_time, Timestamp::MAX);
        assert_close(entry.service_time, 52.0);
    }
}
