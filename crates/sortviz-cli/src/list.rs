//! `sortviz list`: the algorithm catalogue.

use std::io::{self, Write};

use clap::Args;
use serde::Serialize;
use sortviz_core::Algorithm;

use crate::error::Result;

#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Emit JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CatalogueEntry {
    key: &'static str,
    name: &'static str,
    time_complexity: &'static str,
    space_complexity: &'static str,
    stable: bool,
}

impl From<Algorithm> for CatalogueEntry {
    fn from(algorithm: Algorithm) -> Self {
        Self {
            key: algorithm.key(),
            name: algorithm.name(),
            time_complexity: algorithm.time_complexity(),
            space_complexity: algorithm.space_complexity(),
            stable: algorithm.is_stable(),
        }
    }
}

pub fn run_list(args: ListArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_list(&args, &mut out)
}

pub fn write_list<W: Write>(args: &ListArgs, out: &mut W) -> Result<()> {
    let entries: Vec<CatalogueEntry> = Algorithm::ALL.into_iter().map(Into::into).collect();
    if args.json {
        serde_json::to_writer_pretty(&mut *out, &entries)?;
        writeln!(out)?;
        return Ok(());
    }
    writeln!(out, "{:<10} {:<15} {:<11} {:<9} STABLE", "KEY", "NAME", "TIME", "SPACE")?;
    for entry in &entries {
        writeln!(
            out,
            "{:<10} {:<15} {:<11} {:<9} {}",
            entry.key,
            entry.name,
            entry.time_complexity,
            entry.space_complexity,
            if entry.stable { "yes" } else { "no" }
        )?;
    }
    Ok(())
}
