// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Plain-text rendering of the fretboard and scale information.
//!
//! The highest string is printed on top, as on a tab staff. Every column is
//! padded to the widest label so frets line up across strings.

use super::grid::{FretCell, FretboardGrid};
use super::view::FretboardView;

/// Display toggles that do not affect the grid itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Show octave numbers after note names
    pub show_octaves: bool,
    /// Show interval labels instead of note names
    pub show_intervals: bool,
    /// Only draw highlighted notes and frets
    pub focus_mode: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_octaves: true,
            show_intervals: false,
            focus_mode: false,
        }
    }
}

const HIDDEN: &str = "-";
const UNFOCUSED: &str = "·";

fn cell_label(cell: &FretCell, options: &RenderOptions) -> String {
    if cell.hidden {
        return HIDDEN.to_string();
    }
    if options.focus_mode && !cell.highlighted && !cell.fret_highlighted {
        return UNFOCUSED.to_string();
    }

    let mut text = if options.show_intervals {
        cell.interval.short_name().to_string()
    } else if options.show_octaves {
        cell.note.to_string()
    } else {
        cell.note.name.to_string()
    };
    if cell.root {
        text.insert(0, '*');
    }

    if cell.highlighted {
        format!("[{}]", text)
    } else if cell.is_diatonic_only() {
        format!("({})", text)
    } else {
        text
    }
}

fn fret_label(grid: &FretboardGrid, fret: usize) -> String {
    let highlighted = grid
        .rows()
        .first()
        .and_then(|row| row.cells.iter().find(|c| c.fret == fret))
        .is_some_and(|c| c.fret_highlighted);
    if highlighted {
        format!("{}^", fret)
    } else {
        fret.to_string()
    }
}

/// Render the grid as fixed-width text, one line per string
pub fn render_grid(grid: &FretboardGrid, options: &RenderOptions) -> String {
    let labels: Vec<Vec<String>> = grid
        .rows()
        .iter()
        .map(|row| row.cells.iter().map(|c| cell_label(c, options)).collect())
        .collect();
    let frets: Vec<String> = grid.frets().iter().map(|&f| fret_label(grid, f)).collect();

    let width = labels
        .iter()
        .flatten()
        .chain(frets.iter())
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(1);

    let prefix_width = 8;
    let header: String = std::iter::once(" ".repeat(prefix_width))
        .chain(frets.iter().map(|f| format!(" {:^width$}", f)))
        .collect();

    let string_count = grid.rows().len();
    let mut lines = vec![header.trim_end().to_string()];
    for (index, (row, row_labels)) in grid.rows().iter().zip(&labels).enumerate().rev() {
        let mut line = format!("{:>2} {:<5}", string_count - index, row.open.to_string());
        for label in row_labels {
            line.push_str(&format!("|{:^width$}", label));
        }
        line.push('|');
        lines.push(line);
    }
    lines.push(header.trim_end().to_string());

    let mut legend = String::from("* root  (x) diatonic only  [x] highlighted  - hidden");
    if options.focus_mode {
        legend.push_str("  · not in focus");
    }
    lines.push(legend);

    lines.join("\n")
}

/// Render the interval pattern, scale spellings and relative-major prose
pub fn render_scale_info(view: &FretboardView) -> String {
    let mut lines = vec![
        format!("Key: {} {}", view.key, view.mode.name()),
        format!("Tuning: {}", view.tuning),
        format!("Intervals: {}", view.pattern),
        format!("Diatonic: {}", view.scale),
        format!("Pentatonic: {}", view.pentatonic),
    ];
    if let Some(major) = view.analysis.relative_major() {
        lines.push(format!("Relative major: {}", major));
    }
    let prose = view.analysis.describe();
    if !prose.is_empty() {
        lines.push(String::new());
        lines.extend(prose);
    }
    lines.join("\n")
}
