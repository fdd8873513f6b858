// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory core for FRETS.
//!
//! This module provides the chromatic note model, mode interval patterns,
//! scale spelling, pentatonic selection, relative-major analysis and the
//! note-to-frequency mapping that the fretboard is built from.

pub mod frequency;
pub mod interval;
pub mod mode;
pub mod note;
pub mod relative;
pub mod scale;

pub use frequency::{note_frequency, pitch_frequency};
pub use interval::Interval;
pub use mode::{IntervalPattern, Mode, Step};
pub use note::{Accidental, ChromaticEntry, Letter, NoteName, PitchClass, SpelledNote, CHROMATIC};
pub use relative::{analyze_relative_major, Alteration, DegreeDifference, RelativeMajorResult};
pub use scale::{derive_pentatonic, spell_scale, Key, PentatonicSubset, ScaleSpelling};

use thiserror::Error;

/// Errors raised by the theory core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// Text that is not a note name at all
    #[error("unknown note name: {0:?}")]
    UnknownNote(String),
    /// A note name that cannot be used as a key
    #[error("unknown key: {0}")]
    UnknownKey(String),
    /// A mode name outside the supported set
    #[error("unknown mode: {0:?}")]
    UnknownMode(String),
    /// A note name with no entry in the chromatic table
    #[error("unresolvable pitch class for note {0}")]
    UnresolvablePitch(String),
    /// Rotation offset outside 0..=6
    #[error("invalid rotation offset {0} (expected 0..=6)")]
    InvalidRotation(usize),
    /// Missing or malformed octave number
    #[error("invalid octave in {0:?}")]
    InvalidOctave(String),
}
