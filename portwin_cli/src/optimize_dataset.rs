use std::{fs::File, io::BufReader, path::PathBuf};

use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL};
use jiff::Timestamp;
use portwin_optimizer::{
    json::types::JsonPortProblem,
    solver::resource_allocation::{ResourceAllocationOptimizer, ResourceAllocationResult},
};
use tracing::{info, warn};

use crate::{file_utils::read_folder, parsers};

#[derive(Args)]
pub struct OptimizeDatasetArgs {
    /// A problem file or a folder of problem files
    #[arg(short, long)]
    dataset: PathBuf,

    /// Planning start (RFC 3339 or "now")
    #[arg(long, value_parser = parsers::parse_timestamp, default_value = "now")]
    now: Timestamp,

    #[arg(short, long)]
    cranes: Option<u32>,

    /// Output folder for .result.json files
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn run(args: OptimizeDatasetArgs) -> Result<(), anyhow::Error> {
    info!("Optimizing dataset {:?}", args.dataset);
    let paths = if args.dataset.is_file() {
        vec![args.dataset]
    } else {
        read_folder(&args.dataset)?
    };

    let optimizer = ResourceAllocationOptimizer::default();
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "File",
        "Assigned",
        "Unassigned",
        "Avg wait (h)",
        "Utilization",
        "Saved (h)",
        "Score",
    ]);

    for path in paths {
        let result = match optimize_file(&optimizer, &path, args.now, args.cranes) {
            Ok(result) => result,
            Err(error) => {
                warn!("Skipping {:?}: {}", path, error);
                continue;
            }
        };

        table.add_row(vec![
            path.display().to_string(),
            result.berth_allocation.assigned_count().to_string(),
            result.berth_allocation.unassigned_ships.len().to_string(),
            format!("{:.2}", result.average_waiting_time),
            format!("{:.1}%", result.berth_allocation.average_utilization * 100.0),
            format!("{:.2}", result.total_time_saved),
            format!("{:.3}", result.berth_allocation.optimization_score),
        ]);

        if let Some(output) = &args.output {
            std::fs::create_dir_all(output)?;
            let stem = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
            std::fs::write(
                output.join(format!("{stem}.result.json")),
                serde_json::to_string_pretty(&result)?,
            )?;
        }
    }

    println!("{table}");

    Ok(())
}

pub fn optimize_file(
    optimizer: &ResourceAllocationOptimizer,
    path: &PathBuf,
    now: Timestamp,
    cranes: Option<u32>,
) -> Result<ResourceAllocationResult, anyhow::Error> {
    let f = File::open(path)?;
    let content: JsonPortProblem = serde_json::from_reader(BufReader::new(f))?;
    let problem = content.build_problem()?;

    Ok(optimizer.optimize_problem(&problem, now, cranes))
}
