use jiff::Timestamp;
use serde::Serialize;
use smallvec::SmallVec;

use crate::{define_index_newtype, error::ProblemError, problem::ship_type::ShipType};

define_index_newtype!(BerthIdx, Berth);

pub type ShipTypes = SmallVec<[ShipType; 4]>;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Berth {
    id: String,
    capacity: f64,
    crane_count: u32,
    suitable_ship_types: ShipTypes,
    is_available: bool,
    current_ship: Option<String>,
    available_from: Option<Timestamp>,
}

impl Berth {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Largest ship size the berth can take.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn crane_count(&self) -> u32 {
        self.crane_count
    }

    pub fn suitable_ship_types(&self) -> &[ShipType] {
        &self.suitable_ship_types
    }

    pub fn is_available(&self) -> bool {
        self.is_available
    }

    pub fn current_ship(&self) -> Option<&str> {
        self.current_ship.as_deref()
    }

    pub fn available_from(&self) -> Option<Timestamp> {
        self.available_from
    }

    /// An empty type list means the berth takes every ship type.
    pub fn accepts(&self, ship_type: ShipType) -> bool {
        self.suitable_ship_types.is_empty() || self.suitable_ship_types.contains(&ship_type)
    }
}

#[derive(Default)]
pub struct BerthBuilder {
    id: Option<String>,
    capacity: Option<f64>,
    crane_count: Option<u32>,
    suitable_ship_types: Option<ShipTypes>,
    is_available: Option<bool>,
    current_ship: Option<String>,
    available_from: Option<Timestamp>,
}

impl BerthBuilder {
    pub fn set_id(&mut self, id: String) -> &mut BerthBuilder {
        self.id = Some(id);
        self
    }

    pub fn set_capacity(&mut self, capacity: f64) -> &mut BerthBuilder {
        self.capacity = Some(capacity);
        self
    }

    pub fn set_crane_count(&mut self, crane_count: u32) -> &mut BerthBuilder {
        self.crane_count = Some(crane_count);
        self
    }

    pub fn set_suitable_ship_types(
        &mut self,
        ship_types: impl IntoIterator<Item = ShipType>,
    ) -> &mut BerthBuilder {
        self.suitable_ship_types = Some(ship_types.into_iter().collect());
        self
    }

    pub fn set_available(&mut self, is_available: bool) -> &mut BerthBuilder {
        self.is_available = Some(is_available);
        self
    }

    pub fn set_current_ship(&mut self, ship_id: String) -> &mut BerthBuilder {
        self.current_ship = Some(ship_id);
        self
    }

    pub fn set_available_from(&mut self, available_from: Timestamp) -> &mut BerthBuilder {
        self.available_from = Some(available_from);
        self
    }

    pub fn build(self) -> Result<Berth, ProblemError> {
        let id = self
            .id
            .filter(|id| !id.is_empty())
            .ok_or(ProblemError::MissingField {
                entity: "berth",
                field: "id",
            })?;

        let capacity = self.capacity.ok_or(ProblemError::MissingField {
            entity: "berth",
            field: "capacity",
        })?;

        if !capacity.is_finite() || capacity < 0.0 {
            return Err(ProblemError::InvalidCapacity {
                berth_id: id,
                capacity,
            });
        }

        Ok(Berth {
            id,
            capacity,
            crane_count: self.crane_count.unwrap_or(0),
            suitable_ship_types: self.suitable_ship_types.unwrap_or_default(),
            is_available: self.is_available.unwrap_or(true),
            current_ship: self.current_ship,
            available_from: self.available_from,
        })
    }
}
