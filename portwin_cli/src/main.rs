use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{
    forecast::ForecastArgs, generate::GenerateSubcommands, optimize::OptimizeArgs,
    optimize_dataset::OptimizeDatasetArgs,
};

mod file_utils;
mod forecast;
mod generate;
mod optimize;
mod optimize_dataset;
mod parsers;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    Optimize {
        #[command(flatten)]
        args: OptimizeArgs,
    },
    OptimizeDataset {
        #[command(flatten)]
        args: OptimizeDatasetArgs,
    },
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
    Forecast {
        #[command(flatten)]
        args: ForecastArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::Optimize { args }) => optimize::run(args)?,
        Some(Commands::OptimizeDataset { args }) => optimize_dataset::run(args)?,
        Some(Commands::Generate { commands }) => generate::run(commands)?,
        Some(Commands::Forecast { args }) => forecast::run(args)?,
        None => {}
    }

    Ok(())
}
