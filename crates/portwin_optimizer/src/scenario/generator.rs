use jiff::{SignedDuration, Timestamp};
use rand::{Rng, SeedableRng, rngs::SmallRng, seq::IndexedRandom};
use rand_distr::{Distribution, Exp, Gamma};
use tracing::{Level, debug, instrument};

use crate::{
    problem::{
        berth::{Berth, BerthBuilder},
        port_problem::{PortProblem, PortProblemBuilder},
        ship::{HIGH_PRIORITY, NORMAL_PRIORITY, Ship, ShipBuilder, URGENT_PRIORITY},
        ship_type::ShipType,
    },
    scenario::{error::ScenarioError, scenario_params::ScenarioParams},
    utils::time::{from_hours, saturating_add},
};

/// Berth type restrictions, assigned round robin. The last one accepts every type.
const BERTH_PATTERNS: [&[ShipType]; 5] = [
    &[ShipType::Container],
    &[ShipType::Container, ShipType::Mixed],
    &[ShipType::Bulk, ShipType::General],
    &[ShipType::Tanker],
    &[],
];

fn size_range(ship_type: ShipType) -> (f64, f64) {
    match ship_type {
        ShipType::Container => (1000.0, 5000.0),
        ShipType::Bulk => (1500.0, 4000.0),
        ShipType::Tanker => (2000.0, 5500.0),
        ShipType::General => (500.0, 2500.0),
        ShipType::Passenger => (800.0, 3000.0),
        ShipType::Mixed | ShipType::Roro | ShipType::Other => (500.0, 2000.0),
    }
}

/// Share of the gamma-distributed container moves a ship type carries.
fn container_share(ship_type: ShipType) -> f64 {
    match ship_type {
        ShipType::Container => 1.0,
        ShipType::Mixed | ShipType::Roro => 0.6,
        ShipType::General => 0.4,
        ShipType::Bulk | ShipType::Tanker | ShipType::Passenger | ShipType::Other => 0.1,
    }
}

fn id_prefix(ship_type: ShipType) -> &'static str {
    match ship_type {
        ShipType::Container => "CNT",
        ShipType::Bulk => "BLK",
        ShipType::Tanker => "TNK",
        ShipType::General => "GEN",
        ShipType::Passenger => "PAX",
        ShipType::Mixed => "MIX",
        ShipType::Roro => "RRO",
        ShipType::Other => "OTH",
    }
}

/// Seeded generator of synthetic port problems. Equal seeds yield equal problems.
pub struct ScenarioGenerator {
    params: ScenarioParams,
    rng: SmallRng,
    inter_arrival: Exp<f64>,
    containers: Gamma<f64>,
}

impl ScenarioGenerator {
    pub fn new(params: ScenarioParams, seed: u64) -> Result<Self, ScenarioError> {
        if !params.arrival_rate_per_hour.is_finite() || params.arrival_rate_per_hour <= 0.0 {
            return Err(ScenarioError::InvalidArrivalRate(
                params.arrival_rate_per_hour,
            ));
        }

        let inter_arrival = Exp::new(params.arrival_rate_per_hour)
            .map_err(|error| ScenarioError::Distribution(error.to_string()))?;
        let containers = Gamma::new(params.container_shape, params.container_scale)
            .map_err(|error| ScenarioError::Distribution(error.to_string()))?;

        Ok(Self {
            params,
            rng: SmallRng::seed_from_u64(seed),
            inter_arrival,
            containers,
        })
    }

    #[instrument(skip(self), level = Level::DEBUG, fields(scenario = self.params.name))]
    pub fn generate(
        &mut self,
        ship_count: usize,
        start: Timestamp,
    ) -> Result<PortProblem, ScenarioError> {
        let ships = self.generate_ships(ship_count, start)?;
        let berths = self.generate_berths(start)?;

        debug!(
            "Generated {} ships and {} berths",
            ships.len(),
            berths.len()
        );

        let mut builder = PortProblemBuilder::default();
        builder
            .set_id(format!("{}-{}", self.params.name, start.as_second()))
            .set_ships(ships)
            .set_berths(berths);

        Ok(builder.build()?)
    }

    /// Ships with Poisson arrivals from `start`, sorted by arrival.
    pub fn generate_ships(
        &mut self,
        ship_count: usize,
        start: Timestamp,
    ) -> Result<Vec<Ship>, ScenarioError> {
        let mut elapsed_hours = 0.0;
        let mut ships = Vec::with_capacity(ship_count);
        let priorities = [NORMAL_PRIORITY, HIGH_PRIORITY, URGENT_PRIORITY]
            .into_iter()
            .zip(self.params.priority_weights)
            .collect::<Vec<_>>();

        for index in 0..ship_count {
            elapsed_hours += self.inter_arrival.sample(&mut self.rng);

            let ship_type = self
                .params
                .ship_type_mix
                .choose_weighted(&mut self.rng, |(_, weight)| *weight)
                .map_err(|error| ScenarioError::Weights(error.to_string()))?
                .0;

            let priority = priorities
                .choose_weighted(&mut self.rng, |(_, weight)| *weight)
                .map_err(|error| ScenarioError::Weights(error.to_string()))?
                .0;

            let (min_size, max_size) = size_range(ship_type);
            let size = self
                .rng
                .random_range(min_size..max_size)
                .min(self.params.berth_capacity)
                .round();

            let moves = (self.containers.sample(&mut self.rng) * container_share(ship_type))
                .round()
                .max(0.0) as u32;
            let load_share = self.rng.random_range(0.3..0.7);
            let containers_to_load = (moves as f64 * load_share).round() as u32;

            let mut builder = ShipBuilder::default();
            builder
                .set_id(format!("{}-{:03}", id_prefix(ship_type), index + 1))
                .set_arrival_time(saturating_add(start, from_hours(elapsed_hours)))
                .set_ship_type(ship_type)
                .set_size(size)
                .set_priority(priority)
                .set_containers_to_load(containers_to_load)
                .set_containers_to_unload(moves - containers_to_load);

            ships.push(builder.build()?);
        }

        Ok(ships)
    }

    /// Berths with round robin type restrictions, some of them occupied at `start`.
    pub fn generate_berths(&mut self, start: Timestamp) -> Result<Vec<Berth>, ScenarioError> {
        (0..self.params.berth_count)
            .map(|index| -> Result<Berth, ScenarioError> {
                let mut builder = BerthBuilder::default();
                builder
                    .set_id(format!("B{:02}", index + 1))
                    .set_capacity(self.params.berth_capacity)
                    .set_crane_count(self.params.cranes_per_berth)
                    .set_suitable_ship_types(
                        BERTH_PATTERNS[index % BERTH_PATTERNS.len()].iter().copied(),
                    );

                if self
                    .rng
                    .random_bool(self.params.berth_unavailable_probability.clamp(0.0, 1.0))
                {
                    let busy_hours = self.rng.random_range(1..=12);
                    builder
                        .set_available(false)
                        .set_current_ship(format!("MOORED-{:02}", index + 1))
                        .set_available_from(saturating_add(
                            start,
                            SignedDuration::from_hours(busy_hours),
                        ));
                }

                Ok(builder.build()?)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::{scenario::scenario_params::Scenario, test_utils};

    use super::*;

    #[test]
    fn test_same_seed_same_problem() {
        let start = test_utils::base_time();
        let mut first = ScenarioGenerator::new(Scenario::PeakSeason.params(), 42).unwrap();
        let mut second = ScenarioGenerator::new(Scenario::PeakSeason.params(), 42).unwrap();

        let first = first.generate(30, start).unwrap();
        let second = second.generate(30, start).unwrap();

        assert_eq!(first.ships(), second.ships());
        assert_eq!(first.berths(), second.berths());
    }

    #[test]
    fn test_different_seeds_differ() {
        let start = test_utils::base_time();
        let mut first = ScenarioGenerator::new(Scenario::Baseline.params(), 1).unwrap();
        let mut second = ScenarioGenerator::new(Scenario::Baseline.params(), 2).unwrap();

        assert_ne!(
            first.generate_ships(20, start).unwrap(),
            second.generate_ships(20, start).unwrap()
        );
    }

    #[test]
    fn test_generated_ships_are_valid() {
        let start = test_utils::base_time();
        let params = Scenario::Typhoon.params();
        let mut generator = ScenarioGenerator::new(params.clone(), 7).unwrap();

        let problem = generator.generate(50, start).unwrap();

        assert_eq!(problem.ships().len(), 50);
        assert_eq!(problem.berths().len(), params.berth_count);
        assert_eq!(
            problem.total_cranes(),
            params.cranes_per_berth * params.berth_count as u32
        );

        for window in problem.ships().windows(2) {
            assert!(window[0].arrival_time() <= window[1].arrival_time());
        }

        for ship in problem.ships() {
            assert!(ship.arrival_time() > start);
            assert!(ship.size() <= params.berth_capacity);
            assert!(
                params
                    .ship_type_mix
                    .iter()
                    .any(|(ship_type, _)| *ship_type == ship.ship_type())
            );
        }

        assert!(
            problem
                .berths()
                .iter()
                .any(|berth| berth.suitable_ship_types().is_empty())
        );
        for berth in problem.berths().iter().filter(|berth| !berth.is_available()) {
            assert!(berth.available_from().unwrap() > start);
        }
    }

    #[test]
    fn test_invalid_arrival_rate() {
        let params = ScenarioParams {
            arrival_rate_per_hour: 0.0,
            ..ScenarioParams::default()
        };

        assert!(matches!(
            ScenarioGenerator::new(params, 0),
            Err(ScenarioError::InvalidArrivalRate(_))
        ));
    }

    #[test]
    fn test_invalid_weights() {
        let params = ScenarioParams {
            ship_type_mix: vec![(ShipType::Container, 0.0)],
            ..ScenarioParams::default()
        };
        let mut generator = ScenarioGenerator::new(params, 0).unwrap();

        assert!(matches!(
            generator.generate_ships(1, test_utils::base_time()),
            Err(ScenarioError::Weights(_))
        ));
    }
}
