use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::instrument;

use crate::problem::{
    berth::{Berth, BerthBuilder},
    port_problem::{PortProblem, PortProblemBuilder},
    ship::{Ship, ShipBuilder},
    ship_type::ShipType,
};

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "PortProblem")]
pub struct JsonPortProblem {
    pub id: Option<String>,
    pub ships: Vec<JsonShip>,
    pub berths: Vec<JsonBerth>,
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Ship")]
pub struct JsonShip {
    pub id: String,
    pub arrival_time: Timestamp,
    pub size: f64,
    pub priority: Option<u8>,
    pub containers_to_load: Option<u32>,
    pub containers_to_unload: Option<u32>,

    #[serde(rename = "type")]
    pub ship_type: ShipType,
}

impl From<&Ship> for JsonShip {
    fn from(value: &Ship) -> Self {
        JsonShip {
            id: value.id().to_owned(),
            arrival_time: value.arrival_time(),
            size: value.size(),
            priority: Some(value.priority()),
            containers_to_load: Some(value.containers_to_load()),
            containers_to_unload: Some(value.containers_to_unload()),
            ship_type: value.ship_type(),
        }
    }
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Berth")]
pub struct JsonBerth {
    pub id: String,
    pub capacity: f64,
    pub crane_count: Option<u32>,
    pub suitable_ship_types: Option<SmallVec<[ShipType; 4]>>,
    pub is_available: Option<bool>,
    pub current_ship: Option<String>,
    pub available_from: Option<Timestamp>,
}

impl From<&Berth> for JsonBerth {
    fn from(value: &Berth) -> Self {
        JsonBerth {
            id: value.id().to_owned(),
            capacity: value.capacity(),
            crane_count: Some(value.crane_count()),
            suitable_ship_types: Some(value.suitable_ship_types().iter().copied().collect()),
            is_available: Some(value.is_available()),
            current_ship: value.current_ship().map(str::to_owned),
            available_from: value.available_from(),
        }
    }
}

impl From<&PortProblem> for JsonPortProblem {
    fn from(value: &PortProblem) -> Self {
        JsonPortProblem {
            id: value.id().map(str::to_owned),
            ships: value.ships().iter().map(JsonShip::from).collect(),
            berths: value.berths().iter().map(JsonBerth::from).collect(),
        }
    }
}

impl JsonPortProblem {
    #[instrument(skip_all, level = "debug")]
    pub fn build_problem(self) -> Result<PortProblem, anyhow::Error> {
        let mut builder = PortProblemBuilder::default();

        if let Some(id) = self.id {
            builder.set_id(id);
        }

        let ships = self
            .ships
            .into_iter()
            .map(|ship| {
                let mut builder = ShipBuilder::default();

                builder
                    .set_id(ship.id)
                    .set_arrival_time(ship.arrival_time)
                    .set_ship_type(ship.ship_type)
                    .set_size(ship.size);

                if let Some(priority) = ship.priority {
                    builder.set_priority(priority);
                }

                if let Some(containers) = ship.containers_to_load {
                    builder.set_containers_to_load(containers);
                }

                if let Some(containers) = ship.containers_to_unload {
                    builder.set_containers_to_unload(containers);
                }

                builder.build()
            })
            .collect::<Result<Vec<_>, _>>()?;

        builder.set_ships(ships);

        let berths = self
            .berths
            .into_iter()
            .map(|berth| {
                let mut builder = BerthBuilder::default();

                builder.set_id(berth.id).set_capacity(berth.capacity);

                if let Some(crane_count) = berth.crane_count {
                    builder.set_crane_count(crane_count);
                }

                if let Some(ship_types) = berth.suitable_ship_types {
                    builder.set_suitable_ship_types(ship_types);
                }

                if let Some(is_available) = berth.is_available {
                    builder.set_available(is_available);
                }

                if let Some(current_ship) = berth.current_ship {
                    builder.set_current_ship(current_ship);
                }

                if let Some(available_from) = berth.available_from {
                    builder.set_available_from(available_from);
                }

                builder.build()
            })
            .collect::<Result<Vec<_>, _>>()?;

        builder.set_berths(berths);

        Ok(builder.build()?)
    }
}
