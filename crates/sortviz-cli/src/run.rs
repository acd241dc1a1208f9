//! `sortviz run`: animate a sort in the terminal.

use std::io::{self, Write};

use clap::Args;
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use sortviz_runtime::{PlaybackOutcome, Session};

use crate::config::SortArgs;
use crate::error::Result;
use crate::render::{draw_frame, legend, render_rows, status_line};

#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub sort: SortArgs,

    /// Chart height in terminal rows.
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u16).range(4..=200))]
    pub height: u16,

    /// Draw role glyphs instead of colours. Also honoured via $NO_COLOR.
    #[arg(long)]
    pub no_color: bool,
}

impl RunArgs {
    fn color(&self) -> bool {
        !self.no_color && std::env::var_os("NO_COLOR").is_none()
    }
}

pub fn run_animation(args: RunArgs) -> Result<()> {
    let config = args.sort.session_config()?;
    let mut session = Session::new(config);
    let mut handle = session.start()?;

    #[cfg(unix)]
    let _signals = crate::signals::SignalGuard::install(handle.canceller())?;

    let color = args.color();
    let height = usize::from(args.height);
    let algorithm = handle.algorithm();
    let total = handle.playback.len();
    let canceller = handle.canceller();
    let key = legend(color);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute!(out, Hide)?;

    let mut failure: Option<io::Error> = None;
    let outcome = handle.play(|index, step| {
        if failure.is_some() {
            return;
        }
        let rows = render_rows(step, height, color);
        let status = format!("{}\n{key}", status_line(algorithm, index, total, step));
        if let Err(err) = draw_frame(&mut out, &rows, &status) {
            failure = Some(err);
            canceller.cancel();
        }
    });

    execute!(out, Show)?;
    session.finish(&handle, outcome)?;
    if let Some(err) = failure {
        return Err(err.into());
    }

    let seed = session.config().seed;
    match outcome {
        PlaybackOutcome::Completed { played } => {
            writeln!(out, "{algorithm}: {played} steps (seed {seed})")?;
        }
        PlaybackOutcome::Cancelled { played } => {
            writeln!(out, "{algorithm}: cancelled after {played} of {total} steps (seed {seed})")?;
        }
    }
    Ok(())
}
