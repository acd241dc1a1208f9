//! Bar-chart rendering of a step.
//!
//! [`render_rows`] is pure and returns the chart top row first; [`draw_frame`]
//! writes rows plus a status line to a terminal with crossterm.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, Stylize, style};
use crossterm::terminal::{Clear, ClearType};
use sortviz_core::{Algorithm, Role, Step};

/// Glyph used for every bar cell in colour mode.
pub const BAR: char = '█';

#[must_use]
pub const fn role_color(role: Role) -> Color {
    match role {
        Role::Default => Color::Blue,
        Role::Comparing => Color::Yellow,
        Role::Swapping => Color::Red,
        Role::Sorted => Color::Green,
        Role::Pivot => Color::Magenta,
    }
}

/// Per-role glyph for monochrome output.
#[must_use]
pub const fn role_glyph(role: Role) -> char {
    match role {
        Role::Default => '|',
        Role::Comparing => 'c',
        Role::Swapping => 'x',
        Role::Sorted => '#',
        Role::Pivot => 'p',
    }
}

/// Bar height in rows: proportional to `value / max`, rounded up so every
/// non-zero value stays visible.
#[must_use]
pub fn bar_height(value: u32, max: u32, height: usize) -> usize {
    if max == 0 {
        return 0;
    }
    let scaled = u64::from(value.min(max)) * height as u64;
    usize::try_from(scaled.div_ceil(u64::from(max))).unwrap_or(height)
}

/// Render `step` as `height` text rows, one column per element.
#[must_use]
pub fn render_rows(step: &Step, height: usize, color: bool) -> Vec<String> {
    let elements = step.elements();
    let max = elements.iter().map(|e| e.value).max().unwrap_or(0);
    let bars: Vec<usize> = elements
        .iter()
        .map(|e| bar_height(e.value, max, height))
        .collect();

    (0..height)
        .map(|row| {
            let threshold = height - row;
            let mut line = String::with_capacity(elements.len());
            for (element, &bar) in elements.iter().zip(&bars) {
                if bar < threshold {
                    line.push(' ');
                } else if color {
                    line.push_str(&style(BAR).with(role_color(element.role)).to_string());
                } else {
                    line.push(role_glyph(element.role));
                }
            }
            line
        })
        .collect()
}

/// One-line description of the step being shown.
#[must_use]
pub fn status_line(algorithm: Algorithm, index: usize, total: usize, step: &Step) -> String {
    let mut line = format!("{algorithm}  step {}/{total}", index + 1);
    if step.is_terminal() {
        line.push_str("  sorted");
        return line;
    }
    if !step.comparing().is_empty() {
        line.push_str(&format!("  comparing {:?}", step.comparing()));
    }
    if !step.swapping().is_empty() {
        line.push_str(&format!("  swapping {:?}", step.swapping()));
    }
    if let Some(pivot) = step.pivot() {
        line.push_str(&format!("  pivot {pivot}"));
    }
    line
}

/// Key explaining the colours or glyphs.
#[must_use]
pub fn legend(color: bool) -> String {
    Role::ALL
        .into_iter()
        .map(|role| {
            let mark = if color {
                style(BAR).with(role_color(role)).to_string()
            } else {
                role_glyph(role).to_string()
            };
            format!("{mark} {}", role.label())
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Clear the screen and draw one frame.
pub fn draw_frame<W: Write>(out: &mut W, rows: &[String], status: &str) -> io::Result<()> {
    queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
    for row in rows {
        queue!(out, Print(row), Print("\n"))?;
    }
    queue!(out, Print(status), Print("\n"))?;
    out.flush()
}
