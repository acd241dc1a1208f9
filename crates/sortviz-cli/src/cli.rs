use clap::{Parser, Subcommand};

use crate::error::Result;
use crate::list::{ListArgs, run_list};
use crate::logging::{self, LogFormat};
use crate::run::{RunArgs, run_animation};
use crate::trace::{TraceArgs, run_trace};

#[derive(Debug, Parser)]
#[command(
    name = "sortviz",
    about = "Step-by-step sorting algorithm visualizer",
    version
)]
pub struct Cli {
    /// Emit logs as JSON on stderr.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Animate a sort as a bar chart.
    Run(RunArgs),

    /// Print every step (or a summary) as JSON lines.
    Trace(TraceArgs),

    /// Print the algorithm catalogue.
    List(ListArgs),
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    logging::init(if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Text
    });
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run(args) => run_animation(args),
        Commands::Trace(args) => run_trace(args),
        Commands::List(args) => run_list(args),
    }
}
