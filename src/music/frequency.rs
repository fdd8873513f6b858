// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Note name to frequency mapping.
//!
//! Notes are numbered as keys of an 88-key piano (A0 = key 1, A4 = key 49)
//! and tuned in twelve-tone equal temperament against A4 = 440 Hz. The
//! chromatic table starts at A while octave numbers change at C, so A, A#
//! and B belong to the key range of the following C.

use super::note::{NoteName, PitchClass};
use super::TheoryError;

/// Concert pitch of A4 in Hz
pub const REFERENCE_HZ: f64 = 440.0;

/// Piano key number of A4
pub const REFERENCE_KEY: i32 = 49;

/// Piano key number of a pitch class in a C-anchored octave
pub fn key_number(pitch: PitchClass, octave: i8) -> i32 {
    let index = pitch.index() as i32;
    let octave_base = (octave as i32 - 1) * 12 + 1;
    if pitch < PitchClass::OCTAVE_PIVOT {
        index + 12 + octave_base
    } else {
        index + octave_base
    }
}

/// Frequency in Hz of a pitch class in the given octave
pub fn pitch_frequency(pitch: PitchClass, octave: i8) -> f64 {
    let key = key_number(pitch, octave);
    REFERENCE_HZ * 2f64.powf((key - REFERENCE_KEY) as f64 / 12.0)
}

/// Frequency in Hz of a note spelled as in the chromatic table.
///
/// Names that match neither spelling of any table entry are rejected.
pub fn note_frequency(name: NoteName, octave: i8) -> Result<f64, TheoryError> {
    let pitch =
        PitchClass::lookup(name).ok_or_else(|| TheoryError::UnresolvablePitch(name.to_string()))?;
    Ok(pitch_frequency(pitch, octave))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::note::SpelledNote;

    fn freq(name: &str, octave: i8) -> f64 {
        note_frequency(name.parse().unwrap(), octave).unwrap()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn test_reference_pitch() {
        assert_eq!(freq("A", 4), 440.0);
        assert_eq!(freq("A", 5), 880.0);
        assert_eq!(freq("A", 3), 220.0);
    }

    #[test]
    fn test_c4() {
        assert!(approx(freq("C", 4), 261.63));
        assert!(approx(freq("B#", 4), 261.63));
    }

    #[test]
    fn test_octave_anchored_at_c() {
        // B4 sits just above A4, B3 an octave below it
        assert!(approx(freq("B", 4), 493.88));
        assert!(approx(freq("B", 3), 246.94));
        assert!(freq("B", 3) < freq("C", 4));
        assert!(freq("C", 4) < freq("C#", 4));
    }

    #[test]
    fn test_key_numbers() {
        let a = PitchClass::new(0);
        assert_eq!(key_number(a, 4), 49);
        assert_eq!(key_number(a, 0), 1);
        assert_eq!(key_number(PitchClass::OCTAVE_PIVOT, 8), 88);
    }

    #[test]
    fn test_guitar_open_strings() {
        assert!(approx(freq("E", 2), 82.41));
        assert!(approx(freq("E", 4), 329.63));
        assert!(approx(freq("G", 3), 196.00));
    }

    #[test]
    fn test_enharmonic_spellings_agree() {
        assert_eq!(freq("A#", 2), freq("B♭", 2));
        assert_eq!(freq("G#", 3), freq("A♭", 3));
    }

    #[test]
    fn test_unresolvable_pitch() {
        let result = note_frequency("Cb".parse().unwrap(), 4);
        assert!(matches!(result, Err(TheoryError::UnresolvablePitch(_))));
    }

    #[test]
    fn test_spelled_note_frequency() {
        let note: SpelledNote = "A4".parse().unwrap();
        assert_eq!(note.frequency(), 440.0);
        let respelled: SpelledNote = "C♭3".parse().unwrap();
        assert_eq!(respelled.frequency(), freq("B", 3));
    }
}
