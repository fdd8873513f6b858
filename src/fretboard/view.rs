// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Full derivation for one set of user selections.

use tracing::debug;

use super::grid::{build_fretboard, FretboardGrid, Handedness, Highlights, NoteFilter};
use super::tuning::Tuning;
use crate::music::{
    analyze_relative_major, derive_pentatonic, spell_scale, IntervalPattern, Key, Mode,
    PentatonicSubset, RelativeMajorResult, ScaleSpelling,
};

/// Fret counts offered for selection
pub const FRET_COUNTS: [usize; 3] = [12, 15, 27];

/// Largest fret count accepted from configuration
pub const MAX_FRETS: usize = 36;

/// Everything the user has selected
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub key: Key,
    pub mode: Mode,
    pub tuning: Tuning,
    pub fret_count: usize,
    pub filter: NoteFilter,
    pub handedness: Handedness,
    pub highlights: Highlights,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            key: Key::default(),
            mode: Mode::Ionian,
            tuning: Tuning::standard(),
            fret_count: 27,
            filter: NoteFilter::Pentatonic,
            handedness: Handedness::Right,
            highlights: Highlights::new(),
        }
    }
}

/// Derived data handed to the display
#[derive(Debug, Clone)]
pub struct FretboardView {
    pub key: Key,
    pub mode: Mode,
    pub tuning: Tuning,
    pub pattern: IntervalPattern,
    pub scale: ScaleSpelling,
    pub pentatonic: PentatonicSubset,
    pub analysis: RelativeMajorResult,
    pub grid: FretboardGrid,
}

impl FretboardView {
    /// Recompute everything from the current selection
    pub fn compute(selection: &Selection) -> Self {
        let pattern = selection.mode.pattern();
        let scale = spell_scale(selection.key, &pattern);
        let pentatonic = derive_pentatonic(&scale, selection.mode);
        let analysis = analyze_relative_major(selection.key, selection.mode, &scale);
        let grid = build_fretboard(
            &selection.tuning,
            &scale,
            selection.fret_count,
            &pentatonic,
            selection.handedness,
            selection.filter,
            &selection.highlights,
        );

        debug!(
            key = %selection.key,
            mode = selection.mode.id(),
            scale = %scale,
            pentatonic = %pentatonic,
            relative_major = ?analysis.relative_major().map(|n| n.to_string()),
            "computed fretboard view"
        );

        Self {
            key: selection.key,
            mode: selection.mode,
            tuning: selection.tuning.clone(),
            pattern,
            scale,
            pentatonic,
            analysis,
            grid,
        }
    }
}
