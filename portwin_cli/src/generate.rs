use std::path::{Path, PathBuf};

use clap::Subcommand;
use jiff::Timestamp;
use portwin_optimizer::{
    json::types::JsonPortProblem,
    scenario::{generator::ScenarioGenerator, scenario_params::Scenario},
};
use tracing::info;

use crate::parsers;

#[derive(Subcommand)]
pub enum GenerateSubcommands {
    JsonSchema {
        /// Output file for the schema
        #[arg(long, short = 'o')]
        out: PathBuf,
    },
    Scenario {
        #[arg(long, short = 's', env = "PORTWIN_SCENARIO", default_value = "baseline")]
        scenario: Scenario,

        /// Number of ships to generate
        #[arg(long, short = 'n', default_value_t = 20)]
        ships: usize,

        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// First possible arrival (RFC 3339 or "now")
        #[arg(long, value_parser = parsers::parse_timestamp, default_value = "now")]
        start: Timestamp,

        /// Output file for the problem
        #[arg(long, short = 'o')]
        out: PathBuf,
    },
}

pub fn run(subcommand: GenerateSubcommands) -> Result<(), anyhow::Error> {
    match subcommand {
        GenerateSubcommands::JsonSchema { out } => {
            let schema = portwin_optimizer::json::schema::generate_json_schema()?;
            write_file(&out, schema)?;
        }
        GenerateSubcommands::Scenario {
            scenario,
            ships,
            seed,
            start,
            out,
        } => {
            let mut generator = ScenarioGenerator::new(scenario.params(), seed)?;
            let problem = generator.generate(ships, start)?;

            info!(
                "Generated {} scenario: ships = {}, berths = {}, seed = {}",
                scenario,
                problem.ships().len(),
                problem.berths().len(),
                seed
            );

            let json = serde_json::to_string_pretty(&JsonPortProblem::from(&problem))?;
            write_file(&out, json)?;
        }
    }

    Ok(())
}

fn write_file(out: &Path, content: String) -> Result<(), std::io::Error> {
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(out, content)
}
