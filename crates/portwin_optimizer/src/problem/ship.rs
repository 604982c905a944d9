use jiff::Timestamp;
use serde::Serialize;

use crate::{define_index_newtype, error::ProblemError, problem::ship_type::ShipType};

define_index_newtype!(ShipIdx, Ship);

pub const NORMAL_PRIORITY: u8 = 1;
pub const HIGH_PRIORITY: u8 = 2;
pub const URGENT_PRIORITY: u8 = 3;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Ship {
    id: String,
    arrival_time: Timestamp,
    ship_type: ShipType,
    size: f64,
    priority: u8,
    containers_to_load: u32,
    containers_to_unload: u32,
}

impl Ship {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn arrival_time(&self) -> Timestamp {
        self.arrival_time
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    /// Size in capacity units, compared against a berth's capacity.
    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn priority(&self) -> u8 {
        self.priority
    }

    pub fn is_prioritized(&self) -> bool {
        self.priority > NORMAL_PRIORITY
    }

    pub fn containers_to_load(&self) -> u32 {
        self.containers_to_load
    }

    pub fn containers_to_unload(&self) -> u32 {
        self.containers_to_unload
    }

    /// Container moves needed to serve the ship.
    pub fn total_containers(&self) -> u64 {
        u64::from(self.containers_to_load) + u64::from(self.containers_to_unload)
    }
}

#[derive(Default)]
pub struct ShipBuilder {
    id: Option<String>,
    arrival_time: Option<Timestamp>,
    ship_type: Option<ShipType>,
    size: Option<f64>,
    priority: Option<u8>,
    containers_to_load: Option<u32>,
    containers_to_unload: Option<u32>,
}

impl ShipBuilder {
    pub fn set_id(&mut self, id: String) -> &mut ShipBuilder {
        self.id = Some(id);
        self
    }

    pub fn set_arrival_time(&mut self, arrival_time: Timestamp) -> &mut ShipBuilder {
        self.arrival_time = Some(arrival_time);
        self
    }

    pub fn set_ship_type(&mut self, ship_type: ShipType) -> &mut ShipBuilder {
        self.ship_type = Some(ship_type);
        self
    }

    pub fn set_size(&mut self, size: f64) -> &mut ShipBuilder {
        self.size = Some(size);
        self
    }

    pub fn set_priority(&mut self, priority: u8) -> &mut ShipBuilder {
        self.priority = Some(priority);
        self
    }

    pub fn set_containers_to_load(&mut self, containers: u32) -> &mut ShipBuilder {
        self.containers_to_load = Some(containers);
        self
    }

    pub fn set_containers_to_unload(&mut self, containers: u32) -> &mut ShipBuilder {
        self.containers_to_unload = Some(containers);
        self
    }

    pub fn build(self) -> Result<Ship, ProblemError> {
        let id = self
            .id
            .filter(|id| !id.is_empty())
            .ok_or(ProblemError::MissingField {
                entity: "ship",
                field: "id",
            })?;

        let arrival_time = self.arrival_time.ok_or(ProblemError::MissingField {
            entity: "ship",
            field: "arrival_time",
        })?;

        let size = self.size.unwrap_or(0.0);
        if !size.is_finite() || size < 0.0 {
            return Err(ProblemError::InvalidSize { ship_id: id, size });
        }

        let priority = self.priority.unwrap_or(NORMAL_PRIORITY);
        if !(NORMAL_PRIORITY..=URGENT_PRIORITY).contains(&priority) {
            return Err(ProblemError::InvalidPriority {
                ship_id: id,
                priority,
            });
        }

        Ok(Ship {
            id,
            arrival_time,
            ship_type: self.ship_type.unwrap_or_default(),
            size,
            priority,
            containers_to_load: self.containers_to_load.unwrap_or(0),
            containers_to_unload: self.containers_to_unload.unwrap_or(0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arrival() -> Timestamp {
        "2025-06-10T08:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        let mut builder = ShipBuilder::default();
        builder
            .set_id(String::from("MSC-1"))
            .set_arrival_time(arrival())
            .set_containers_to_load(40)
            .set_containers_to_unload(60);

        let ship = builder.build().unwrap();

        assert_eq!(ship.id(), "MSC-1");
        assert_eq!(ship.ship_type(), ShipType::Container);
        assert_eq!(ship.priority(), NORMAL_PRIORITY);
        assert!(!ship.is_prioritized());
        assert_eq!(ship.total_containers(), 100);
    }

    #[test]
    fn test_builder_rejects_priority_out_of_range() {
        let mut builder = ShipBuilder::default();
        builder
            .set_id(String::from("MSC-2"))
            .set_arrival_time(arrival())
            .set_priority(4);

        assert_eq!(
            builder.build(),
            Err(ProblemError::InvalidPriority {
                ship_id: String::from("MSC-2"),
                priority: 4
            })
        );
    }

    #[test]
    fn test_builder_requires_id_and_arrival() {
        let mut builder = ShipBuilder::default();
        builder.set_arrival_time(arrival());
        assert!(matches!(
            builder.build(),
            Err(ProblemError::MissingField { field: "id", .. })
        ));

        let mut builder = ShipBuilder::default();
        builder.set_id(String::from("MSC-3"));
        assert!(matches!(
            builder.build(),
            Err(ProblemError::MissingField {
                field: "arrival_time",
                ..
            })
        ));
    }

    #[test]
    fn test_builder_rejects_negative_size() {
        let mut builder = ShipBuilder::default();
        builder
            .set_id(String::from("MSC-4"))
            .set_arrival_time(arrival())
            .set_size(-10.0);

        assert!(matches!(
            builder.build(),
            Err(ProblemError::InvalidSize { .. })
        ));
    }
}
