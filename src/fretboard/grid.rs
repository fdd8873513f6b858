// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Fretboard note grid.
//!
//! Each string walks the chromatic table from its open note, one semitone
//! per fret, wrapping as often as the fret count needs. Pitches in the key
//! take the scale's spelling. The octave number rises when a fret lands on
//! B#/C.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::tuning::Tuning;
use crate::music::note::chromatic_from;
use crate::music::{Interval, PentatonicSubset, PitchClass, ScaleSpelling, SpelledNote};

/// Which notes the display should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteFilter {
    All,
    Diatonic,
    #[default]
    Pentatonic,
}

impl FromStr for NoteFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(NoteFilter::All),
            "diatonic" => Ok(NoteFilter::Diatonic),
            "pentatonic" => Ok(NoteFilter::Pentatonic),
            _ => Err(format!("unknown note filter: {:?}", s)),
        }
    }
}

impl fmt::Display for NoteFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteFilter::All => f.write_str("All"),
            NoteFilter::Diatonic => f.write_str("Diatonic"),
            NoteFilter::Pentatonic => f.write_str("Pentatonic"),
        }
    }
}

/// Fret ordering across the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handedness {
    #[default]
    Right,
    /// Frets run right to left
    Left,
}

/// Notes and frets picked out by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlights {
    notes: HashSet<(usize, usize)>,
    frets: HashSet<usize>,
}

impl Highlights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the note at (string index, fret); returns the new state
    pub fn toggle_note(&mut self, string: usize, fret: usize) -> bool {
        if self.notes.remove(&(string, fret)) {
            false
        } else {
            self.notes.insert((string, fret));
            true
        }
    }

    /// Toggle a whole fret; returns the new state
    pub fn toggle_fret(&mut self, fret: usize) -> bool {
        if self.frets.remove(&fret) {
            false
        } else {
            self.frets.insert(fret);
            true
        }
    }

    pub fn is_note_highlighted(&self, string: usize, fret: usize) -> bool {
        self.notes.contains(&(string, fret))
    }

    pub fn is_fret_highlighted(&self, fret: usize) -> bool {
        self.frets.contains(&fret)
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty() && self.frets.is_empty()
    }
}

/// One position on the fretboard
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FretCell {
    /// Index into the tuning's strings
    pub string: usize,
    pub fret: usize,
    pub note: SpelledNote,
    pub pitch: PitchClass,
    /// Interval above the tonic
    pub interval: Interval,
    pub in_key: bool,
    pub pentatonic: bool,
    pub root: bool,
    pub highlighted: bool,
    pub fret_highlighted: bool,
    pub hidden: bool,
}

impl FretCell {
    /// In the key but not part of the pentatonic subset
    pub fn is_diatonic_only(&self) -> bool {
        self.in_key && !self.pentatonic
    }

    pub fn frequency(&self) -> f64 {
        self.note.frequency()
    }
}

/// All frets of one string, in display order
#[derive(Debug, Clone, PartialEq)]
pub struct StringRow {
    pub open: SpelledNote,
    pub cells: Vec<FretCell>,
}

/// Notes laid out across every string and fret
#[derive(Debug, Clone, PartialEq)]
pub struct FretboardGrid {
    handedness: Handedness,
    frets: Vec<usize>,
    rows: Vec<StringRow>,
}

impl FretboardGrid {
    /// Fret numbers in display order
    pub fn frets(&self) -> &[usize] {
        &self.frets
    }

    /// Rows in tuning order, lowest string first
    pub fn rows(&self) -> &[StringRow] {
        &self.rows
    }

    pub fn handedness(&self) -> Handedness {
        self.handedness
    }

    pub fn fret_count(&self) -> usize {
        self.frets.len().saturating_sub(1)
    }

    /// Cell by string index and fret number, independent of handedness
    pub fn cell(&self, string: usize, fret: usize) -> Option<&FretCell> {
        let row = self.rows.get(string)?;
        let column = match self.handedness {
            Handedness::Right => fret,
            Handedness::Left => self.fret_count().checked_sub(fret)?,
        };
        row.cells.get(column)
    }

    /// Cell by string number as printed (1 = highest string) and fret number
    pub fn cell_by_number(&self, number: usize, fret: usize) -> Option<&FretCell> {
        if number == 0 {
            return None;
        }
        let string = self.rows.len().checked_sub(number)?;
        self.cell(string, fret)
    }

    pub fn cells(&self) -> impl Iterator<Item = &FretCell> {
        self.rows.iter().flat_map(|row| row.cells.iter())
    }
}

/// Lay the scale out over every string of `tuning`, frets 0 to `fret_count`
pub fn build_fretboard(
    tuning: &Tuning,
    scale: &ScaleSpelling,
    fret_count: usize,
    pentatonic: &PentatonicSubset,
    handedness: Handedness,
    filter: NoteFilter,
    highlights: &Highlights,
) -> FretboardGrid {
    let tonic = scale.tonic().pitch_class();

    let rows = tuning
        .strings()
        .iter()
        .enumerate()
        .map(|(string, &open)| {
            let mut cells: Vec<FretCell> = string_notes(open, scale, fret_count)
                .into_iter()
                .enumerate()
                .map(|(fret, note)| {
                    let pitch = note.pitch_class();
                    let in_key = scale.contains_pitch(pitch);
                    let in_pentatonic = pentatonic.contains_pitch(pitch);
                    FretCell {
                        string,
                        fret,
                        note,
                        pitch,
                        interval: Interval::between(tonic, pitch),
                        in_key,
                        pentatonic: in_pentatonic,
                        root: pitch == tonic,
                        highlighted: highlights.is_note_highlighted(string, fret),
                        fret_highlighted: highlights.is_fret_highlighted(fret),
                        hidden: is_hidden(in_key, in_pentatonic, filter),
                    }
                })
                .collect();
            if handedness == Handedness::Left {
                cells.reverse();
            }
            StringRow { open, cells }
        })
        .collect();

    let mut frets: Vec<usize> = (0..=fret_count).collect();
    if handedness == Handedness::Left {
        frets.reverse();
    }

    debug!(
        tuning = tuning.id(),
        strings = tuning.string_count(),
        fret_count,
        ?handedness,
        ?filter,
        "built fretboard grid"
    );

    FretboardGrid {
        handedness,
        frets,
        rows,
    }
}

/// Spelled notes of one string from the open note up to `fret_count`
fn string_notes(open: SpelledNote, scale: &ScaleSpelling, fret_count: usize) -> Vec<SpelledNote> {
    let ordered = chromatic_from(open.pitch_class());
    let mut octave = open.octave;
    ordered
        .iter()
        .cycle()
        .take(fret_count + 1)
        .enumerate()
        .map(|(fret, &pitch)| {
            if fret > 0 && pitch == PitchClass::OCTAVE_PIVOT {
                octave = octave.saturating_add(1);
            }
            let name = scale
                .spelling_of(pitch)
                .unwrap_or_else(|| pitch.entry().natural_or_sharp());
            SpelledNote::new(name, octave)
        })
        .collect()
}

fn is_hidden(in_key: bool, in_pentatonic: bool, filter: NoteFilter) -> bool {
    (!in_key && filter != NoteFilter::All) || (!in_pentatonic && filter == NoteFilter::Pentatonic)
}
