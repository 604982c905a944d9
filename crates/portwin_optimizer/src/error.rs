use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProblemError {
    #[error("Missing required field `{field}` on {entity}")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },
    #[error("Ship {ship_id} has priority {priority}, expected a value between 1 and 3")]
    InvalidPriority { ship_id: String, priority: u8 },
    #[error("Ship {ship_id} has an invalid size {size}")]
    InvalidSize { ship_id: String, size: f64 },
    #[error("Berth {berth_id} has an invalid capacity {capacity}")]
    InvalidCapacity { berth_id: String, capacity: f64 },
    #[error("Duplicate ship id {0}")]
    DuplicateShipId(String),
    #[error("Duplicate berth id {0}")]
    DuplicateBerthId(String),
    #[error("Unknown ship type {0}")]
    UnknownShipType(String),
}
