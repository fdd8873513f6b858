// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale spelling and pentatonic selection.
//!
//! A scale is spelled by walking the chromatic table from the key along the
//! mode's interval pattern. Each degree takes the entry's sharp spelling
//! unless that letter is already in use, in which case it takes the flat.
//! When the table offers neither spelling on the next letter in order, the
//! degree is respelled on that letter (C♭, F♭, double accidentals), so a
//! seven-note scale always uses each letter exactly once.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use super::mode::{IntervalPattern, Mode, DEGREES};
use super::note::{chromatic_from, Letter, NoteName, PitchClass};
use super::TheoryError;

/// A tonic note that resolves to a chromatic table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    name: NoteName,
    pitch: PitchClass,
}

impl Key {
    /// The twelve keys offered for selection
    pub const CATALOG: [&'static str; 12] = [
        "A♭", "A", "B♭", "B", "C", "C#", "D", "E♭", "E", "F", "F#", "G",
    ];

    /// Create a key from a note name spelled as in the chromatic table
    pub fn new(name: NoteName) -> Result<Self, TheoryError> {
        let pitch =
            PitchClass::lookup(name).ok_or_else(|| TheoryError::UnknownKey(name.to_string()))?;
        Ok(Self { name, pitch })
    }

    /// A key on any spelling, including ones outside the table (F♭, C♭)
    pub(crate) fn respelled(name: NoteName) -> Self {
        Self {
            name,
            pitch: name.pitch_class(),
        }
    }

    pub fn name(&self) -> NoteName {
        self.name
    }

    pub fn pitch_class(&self) -> PitchClass {
        self.pitch
    }
}

impl Default for Key {
    /// C
    fn default() -> Self {
        Self {
            name: NoteName::natural(Letter::C),
            pitch: PitchClass::OCTAVE_PIVOT,
        }
    }
}

impl FromStr for Key {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name: NoteName = s
            .parse()
            .map_err(|_| TheoryError::UnknownKey(s.trim().to_string()))?;
        Key::new(name)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The spelled degrees of a scale, tonic first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleSpelling {
    notes: Vec<NoteName>,
}

impl ScaleSpelling {
    pub fn notes(&self) -> &[NoteName] {
        &self.notes
    }

    pub fn tonic(&self) -> NoteName {
        self.notes[0]
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// A spelling always holds at least the tonic
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Note at a 1-based scale degree
    pub fn degree(&self, degree: usize) -> Option<NoteName> {
        degree.checked_sub(1).and_then(|i| self.notes.get(i).copied())
    }

    pub fn contains_pitch(&self, pitch: PitchClass) -> bool {
        self.spelling_of(pitch).is_some()
    }

    /// The scale's spelling of `pitch`, if it is a degree of this scale
    pub fn spelling_of(&self, pitch: PitchClass) -> Option<NoteName> {
        self.notes.iter().copied().find(|n| n.pitch_class() == pitch)
    }
}

impl fmt::Display for ScaleSpelling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.notes.iter().map(|n| n.to_string()).collect();
        write!(f, "{}", names.join(" "))
    }
}

/// Five degrees of a diatonic scale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PentatonicSubset {
    notes: Vec<NoteName>,
}

impl PentatonicSubset {
    pub fn notes(&self) -> &[NoteName] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn contains_pitch(&self, pitch: PitchClass) -> bool {
        self.notes.iter().any(|n| n.pitch_class() == pitch)
    }
}

impl fmt::Display for PentatonicSubset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.notes.iter().map(|n| n.to_string()).collect();
        write!(f, "{}", names.join(" "))
    }
}

/// Spell the scale of `key` built on `pattern`.
///
/// The walk stops early if the accumulated steps run past the octave,
/// returning the degrees spelled so far.
pub fn spell_scale(key: Key, pattern: &IntervalPattern) -> ScaleSpelling {
    let ordered = chromatic_from(key.pitch_class());
    let mut notes = Vec::with_capacity(DEGREES);
    notes.push(key.name());

    let mut position = 0usize;
    for step in pattern.steps() {
        position += step.semitones() as usize;
        let Some(&pitch) = ordered.get(position) else {
            if notes.len() < DEGREES {
                debug!(
                    key = %key,
                    pattern = %pattern,
                    degrees = notes.len(),
                    "interval pattern overran the octave, truncating scale"
                );
            }
            break;
        };
        let expected = notes[notes.len() - 1].letter.next();
        let note = spell_degree(pitch, expected, &notes);
        notes.push(note);
    }

    ScaleSpelling { notes }
}

fn spell_degree(pitch: PitchClass, expected: Letter, so_far: &[NoteName]) -> NoteName {
    let entry = pitch.entry();
    let letter_used = so_far.iter().any(|n| n.letter == entry.sharp.letter);
    let preferred = match entry.flat {
        Some(flat) if letter_used => flat,
        _ => entry.sharp,
    };
    if preferred.letter == expected {
        return preferred;
    }

    entry
        .spellings()
        .find(|n| n.letter == expected)
        .or_else(|| NoteName::on_letter(expected, pitch))
        .unwrap_or(preferred)
}

/// Select the mode's pentatonic degrees from a spelled scale
pub fn derive_pentatonic(scale: &ScaleSpelling, mode: Mode) -> PentatonicSubset {
    let notes = mode
        .pentatonic_degrees()
        .iter()
        .filter_map(|&degree| scale.degree(degree))
        .collect();
    PentatonicSubset { notes }
}
