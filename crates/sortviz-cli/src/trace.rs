//! `sortviz trace`: dump the step sequence as JSON lines.

use std::io::{self, BufWriter, Write};

use clap::Args;
use serde::Serialize;
use sortviz_core::{Algorithm, Step};
use sortviz_runtime::Session;

use crate::config::SortArgs;
use crate::error::Result;

#[derive(Debug, Clone, Args)]
pub struct TraceArgs {
    #[command(flatten)]
    pub sort: SortArgs,

    /// Print one summary object instead of every step.
    #[arg(long)]
    pub summary: bool,
}

#[derive(Debug, Serialize)]
struct TraceLine<'a> {
    index: usize,
    terminal: bool,
    #[serde(flatten)]
    step: &'a Step,
}

#[derive(Debug, Serialize)]
struct TraceSummary {
    algorithm: Algorithm,
    name: &'static str,
    seed: u64,
    size: usize,
    steps: usize,
    input: Vec<u32>,
    output: Vec<u32>,
    time_complexity: &'static str,
    space_complexity: &'static str,
}

pub fn run_trace(args: TraceArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_trace(&args, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Generate the configured array, sort it and write the trace to `out`.
pub fn write_trace<W: Write>(args: &TraceArgs, out: &mut W) -> Result<()> {
    let config = args.sort.session_config()?;
    let session = Session::new(config);
    let input = session.array();
    let run = config.algorithm.run(input);
    tracing::info!(
        algorithm = run.algorithm.key(),
        seed = config.seed,
        steps = run.len(),
        "trace recorded"
    );

    if args.summary {
        let summary = TraceSummary {
            algorithm: run.algorithm,
            name: run.algorithm.name(),
            seed: config.seed,
            size: input.len(),
            steps: run.len(),
            input: input.iter().map(|e| e.value).collect(),
            output: run.final_step().map(Step::values).unwrap_or_default(),
            time_complexity: run.algorithm.time_complexity(),
            space_complexity: run.algorithm.space_complexity(),
        };
        serde_json::to_writer(&mut *out, &summary)?;
        writeln!(out)?;
        return Ok(());
    }

    for (index, step) in run.steps.iter().enumerate() {
        let line = TraceLine {
            index,
            terminal: step.is_terminal(),
            step,
        };
        serde_json::to_writer(&mut *out, &line)?;
        writeln!(out)?;
    }
    Ok(())
}
