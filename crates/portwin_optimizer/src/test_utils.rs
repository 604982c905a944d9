use jiff::{SignedDuration, Timestamp};

use crate::problem::{
    berth::{Berth, BerthBuilder},
    ship::{Ship, ShipBuilder},
    ship_type::ShipType,
};

pub const EPSILON: f64 = 1e-6;

/// Fixed reference instant used as "now" throughout the tests.
pub fn base_time() -> Timestamp {
    "2025-06-10T08:00:00Z".parse().unwrap()
}

pub fn hours_after_base(hours: i64) -> Timestamp {
    base_time() + SignedDuration::from_hours(hours)
}

pub fn create_ship(
    id: &str,
    ship_type: ShipType,
    size: f64,
    priority: u8,
    containers: u32,
    arrival_hours: i64,
) -> Ship {
    let mut builder = ShipBuilder::default();
    builder
        .set_id(id.to_owned())
        .set_arrival_time(hours_after_base(arrival_hours))
        .set_ship_type(ship_type)
        .set_size(size)
        .set_priority(priority)
        .set_containers_to_load(containers);
    builder.build().unwrap()
}

pub fn create_berth(id: &str, capacity: f64, crane_count: u32, ship_types: &[ShipType]) -> Berth {
    let mut builder = BerthBuilder::default();
    builder
        .set_id(id.to_owned())
        .set_capacity(capacity)
        .set_crane_count(crane_count)
        .set_suitable_ship_types(ship_types.iter().copied());
    builder.build().unwrap()
}

pub fn create_busy_berth(
    id: &str,
    capacity: f64,
    crane_count: u32,
    available_from: Option<Timestamp>,
) -> Berth {
    let mut builder = BerthBuilder::default();
    builder
        .set_id(id.to_owned())
        .set_capacity(capacity)
        .set_crane_count(crane_count)
        .set_available(false)
        .set_current_ship(String::from("occupant"));

    if let Some(available_from) = available_from {
        builder.set_available_from(available_from);
    }

    builder.build().unwrap()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}
