pub mod arrival_forecast;
pub mod queue_forecast;
pub mod wait_time;
