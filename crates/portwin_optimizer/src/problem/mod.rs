pub mod berth;
pub mod port_problem;
pub mod ship;
pub mod ship_type;
