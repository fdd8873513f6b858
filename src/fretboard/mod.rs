// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Fretboard layout for FRETS.
//!
//! This module maps a spelled scale onto the strings and frets of an
//! instrument, and renders the result as text.

pub mod grid;
pub mod render;
pub mod tuning;
pub mod view;

pub use grid::{build_fretboard, FretCell, FretboardGrid, Handedness, Highlights, NoteFilter, StringRow};
pub use render::{render_grid, render_scale_info, RenderOptions};
pub use tuning::Tuning;
pub use view::{FretboardView, Selection, FRET_COUNTS, MAX_FRETS};
