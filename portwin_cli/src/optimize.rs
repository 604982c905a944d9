use std::{fs::File, io::BufReader, path::PathBuf};

use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL};
use jiff::Timestamp;
use portwin_optimizer::{
    json::types::JsonPortProblem,
    scenario::scenario_params::Scenario,
    solver::{
        optimizer_params::OptimizerParams,
        resource_allocation::{ResourceAllocationOptimizer, ResourceAllocationResult},
    },
};
use tracing::info;

use crate::parsers;

#[derive(Args)]
pub struct OptimizeArgs {
    /// The problem file to optimize
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Planning start (RFC 3339 or "now")
    #[arg(long, value_parser = parsers::parse_timestamp, default_value = "now")]
    now: Timestamp,

    /// Operating conditions scaling crane productivity
    #[arg(long, short = 's', env = "PORTWIN_SCENARIO")]
    scenario: Option<Scenario>,

    /// Crane pool to share between ships (default: cranes installed on all berths)
    #[arg(short, long)]
    cranes: Option<u32>,

    /// Output file for the JSON result
    #[arg(long, short = 'o')]
    out: Option<PathBuf>,
}

pub fn run(args: OptimizeArgs) -> anyhow::Result<()> {
    let f = File::open(&args.input)?;
    let content: JsonPortProblem = serde_json::from_reader(BufReader::new(f))?;
    let problem = content.build_problem()?;

    info!(
        "Optimizing {:?}: ships = {}, berths = {}",
        args.input,
        problem.ships().len(),
        problem.berths().len()
    );

    let params = args
        .scenario
        .map(|scenario| OptimizerParams::for_scenario(&scenario.params()))
        .unwrap_or_default();
    let optimizer = ResourceAllocationOptimizer::new(params);
    let result = optimizer.optimize_problem(&problem, args.now, args.cranes);

    println!("{}", schedule_table(&result));

    if let Some(completion_time) = result.berth_allocation.completion_time() {
        info!("Last ship leaves at {}", completion_time);
    }

    info!(
        "Finished: assigned = {}, unassigned = {}, average wait = {:.2}h, utilization = {:.1}%, score = {:.3}",
        result.berth_allocation.assigned_count(),
        result.berth_allocation.unassigned_ships.len(),
        result.average_waiting_time,
        result.berth_allocation.average_utilization * 100.0,
        result.berth_allocation.optimization_score,
    );

    if let Some(out) = args.out {
        if let Some(parent) = out.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&out, serde_json::to_string_pretty(&result)?)?;
        info!("Result written to {:?}", out);
    }

    Ok(())
}

pub fn schedule_table(result: &ResourceAllocationResult) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Ship", "Type", "Priority", "Berth", "Start", "End", "Wait (h)", "Cranes", "Saved (h)",
    ]);

    for (entry, improvement) in result
        .berth_allocation
        .schedule
        .iter()
        .zip(&result.ship_improvements)
    {
        table.add_row(vec![
            entry.ship_id.clone(),
            entry.ship_type.to_string(),
            entry.priority.to_string(),
            entry.berth_id.clone(),
            entry.start_time.to_string(),
            entry.end_time.to_string(),
            format!("{:.2}", entry.waiting_time),
            improvement.allocated_cranes.to_string(),
            format!("{:.2}", improvement.time_saved),
        ]);
    }

    for ship_id in &result.berth_allocation.unassigned_ships {
        table.add_row(vec![
            ship_id.clone(),
            String::new(),
            String::new(),
            String::from("unassigned"),
        ]);
    }

    table
}
