use fxhash::FxHashSet;

use crate::{
    error::ProblemError,
    problem::{
        berth::{Berth, BerthIdx},
        ship::{Ship, ShipIdx},
    },
};

/// A validated set of ships waiting for service and the berths able to serve them.
#[derive(Debug, Clone)]
pub struct PortProblem {
    id: Option<String>,
    ships: Vec<Ship>,
    berths: Vec<Berth>,
}

impl PortProblem {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, ship_id: ShipIdx) -> &Ship {
        &self.ships[ship_id]
    }

    pub fn berths(&self) -> &[Berth] {
        &self.berths
    }

    pub fn berth(&self, berth_id: BerthIdx) -> &Berth {
        &self.berths[berth_id]
    }

    pub fn total_cranes(&self) -> u32 {
        self.berths.iter().map(Berth::crane_count).sum()
    }
}

#[derive(Default)]
pub struct PortProblemBuilder {
    id: Option<String>,
    ships: Option<Vec<Ship>>,
    berths: Option<Vec<Berth>>,
}

impl PortProblemBuilder {
    pub fn set_id(&mut self, id: String) -> &mut PortProblemBuilder {
        self.id = Some(id);
        self
    }

    pub fn set_ships(&mut self, ships: Vec<Ship>) -> &mut PortProblemBuilder {
        self.ships = Some(ships);
        self
    }

    pub fn add_ship(&mut self, ship: Ship) -> &mut PortProblemBuilder {
        self.ships.get_or_insert_with(Vec::new).push(ship);
        self
    }

    pub fn set_berths(&mut self, berths: Vec<Berth>) -> &mut PortProblemBuilder {
        self.berths = Some(berths);
        self
    }

    pub fn add_berth(&mut self, berth: Berth) -> &mut PortProblemBuilder {
        self.berths.get_or_insert_with(Vec::new).push(berth);
        self
    }

    pub fn build(self) -> Result<PortProblem, ProblemError> {
        let ships = self.ships.unwrap_or_default();
        let berths = self.berths.unwrap_or_default();

        let mut ship_ids = FxHashSet::default();
        for ship in &ships {
            if !ship_ids.insert(ship.id()) {
                return Err(ProblemError::DuplicateShipId(ship.id().to_owned()));
            }
        }

        let mut berth_ids = FxHashSet::default();
        for berth in &berths {
            if !berth_ids.insert(berth.id()) {
                return Err(ProblemError::DuplicateBerthId(berth.id().to_owned()));
            }
        }

        Ok(PortProblem {
            id: self.id,
            ships,
            berths,
        })
    }
}
