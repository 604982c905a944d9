pub mod berth_allocation;
pub mod crane_scheduler;
pub mod optimization_result;
pub mod optimizer_params;
pub mod resource_allocation;
