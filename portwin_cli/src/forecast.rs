use anyhow::bail;
use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL};
use jiff::{SignedDuration, Timestamp};
use portwin_optimizer::{
    forecast::queue_forecast::{QueueForecast, peak},
    scenario::scenario_params::Scenario,
};
use tracing::info;

use crate::parsers;

/// One leap year of hourly points.
const MAX_HORIZON_HOURS: usize = 366 * 24;

#[derive(Args)]
pub struct ForecastArgs {
    #[arg(long, short = 's', env = "PORTWIN_SCENARIO", default_value = "baseline")]
    scenario: Scenario,

    /// Forecast start (RFC 3339 or "now")
    #[arg(long, value_parser = parsers::parse_timestamp, default_value = "now")]
    start: Timestamp,

    /// Forecast horizon (e.g., "24h", "3d", "PT12H")
    #[arg(long, value_parser = parsers::parse_duration, default_value = "24h")]
    horizon: SignedDuration,

    /// Expected berth utilization over the horizon
    #[arg(long, short = 'u', default_value_t = 0.6)]
    utilization: f64,

    /// Print the forecast as JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn run(args: ForecastArgs) -> anyhow::Result<()> {
    let params = args.scenario.params();
    let forecast = QueueForecast::from_scenario(&params)?;
    let hours = (args.horizon.as_secs() / 3600).max(0) as usize;
    if hours > MAX_HORIZON_HOURS {
        bail!("Forecast horizon of {hours}h exceeds the {MAX_HORIZON_HOURS}h limit");
    }

    let points = forecast.forecast(args.start, hours, args.utilization);

    info!(
        "Forecast for {} ({}): hours = {}, utilization = {:.2}",
        args.scenario, params.description, hours, args.utilization
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&points)?);
    } else {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_header(vec!["Hour", "Arrivals", "Wait (h)", "Queue"]);

        for point in &points {
            table.add_row(vec![
                point.hour_start.to_string(),
                format!("{:.2}", point.expected_arrivals),
                format!("{:.2}", point.expected_wait_hours),
                format!("{:.2}", point.expected_queue_length),
            ]);
        }

        println!("{table}");
    }

    if let Some(busiest) = peak(&points) {
        info!(
            "Longest queue at {}: {:.2} ships",
            busiest.hour_start, busiest.expected_queue_length
        );
    }

    Ok(())
}
