// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Modes and their interval patterns.
//!
//! The seven diatonic modes are left rotations of the Ionian pattern.
//! Melodic and harmonic minor carry their own patterns and have no
//! rotation offset.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::TheoryError;

/// Number of steps in a diatonic interval pattern
pub const DEGREES: usize = 7;

/// One step of an interval pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    Semitone,
    Tone,
    /// Augmented second, found in harmonic minor
    ToneSemitone,
}

impl Step {
    pub fn semitones(self) -> u8 {
        match self {
            Step::Semitone => 1,
            Step::Tone => 2,
            Step::ToneSemitone => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Step::Semitone => "Semitone",
            Step::Tone => "Tone",
            Step::ToneSemitone => "Tone + Semitone",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

use self::Step::{Semitone as S, Tone as T, ToneSemitone as TS};

/// Seven steps spanning an octave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntervalPattern([Step; DEGREES]);

impl IntervalPattern {
    /// The major scale: T T S T T T S
    pub const IONIAN: IntervalPattern = IntervalPattern([T, T, S, T, T, T, S]);

    pub const fn new(steps: [Step; DEGREES]) -> Self {
        Self(steps)
    }

    pub fn steps(&self) -> &[Step; DEGREES] {
        &self.0
    }

    /// Left-rotate the pattern: the steps from `offset` onward, then the head
    pub fn rotated(&self, offset: usize) -> Result<Self, TheoryError> {
        if offset >= DEGREES {
            return Err(TheoryError::InvalidRotation(offset));
        }
        let mut steps = self.0;
        steps.rotate_left(offset);
        Ok(Self(steps))
    }

    /// Total span in semitones
    pub fn semitones(&self) -> u32 {
        self.0.iter().map(|s| s.semitones() as u32).sum()
    }
}

impl fmt::Display for IntervalPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(|s| s.name()).collect();
        write!(f, "{}", names.join(", "))
    }
}

/// Supported modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Ionian,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Aeolian,
    Locrian,
    MelodicMinor,
    HarmonicMinor,
}

impl Mode {
    /// All modes in menu order
    pub const ALL: [Mode; 9] = [
        Mode::Ionian,
        Mode::Dorian,
        Mode::Phrygian,
        Mode::Lydian,
        Mode::Mixolydian,
        Mode::Aeolian,
        Mode::Locrian,
        Mode::MelodicMinor,
        Mode::HarmonicMinor,
    ];

    /// Rotation offset from Ionian, for the seven diatonic modes
    pub fn rotation(self) -> Option<usize> {
        match self {
            Mode::Ionian => Some(0),
            Mode::Dorian => Some(1),
            Mode::Phrygian => Some(2),
            Mode::Lydian => Some(3),
            Mode::Mixolydian => Some(4),
            Mode::Aeolian => Some(5),
            Mode::Locrian => Some(6),
            Mode::MelodicMinor | Mode::HarmonicMinor => None,
        }
    }

    /// Interval pattern for this mode.
    ///
    /// The seven diatonic modes are rotations of the major pattern; the two
    /// minors are stored directly.
    pub fn pattern(self) -> IntervalPattern {
        match self {
            Mode::MelodicMinor => IntervalPattern::new([T, S, T, T, T, T, S]),
            Mode::HarmonicMinor => IntervalPattern::new([T, S, T, T, S, TS, S]),
            diatonic => diatonic
                .rotation()
                .and_then(|offset| IntervalPattern::IONIAN.rotated(offset).ok())
                .unwrap_or(IntervalPattern::IONIAN),
        }
    }

    /// 1-based scale degrees that make up the pentatonic subset
    pub fn pentatonic_degrees(self) -> [usize; 5] {
        match self {
            Mode::Ionian => [1, 2, 3, 5, 6],
            Mode::Dorian => [1, 3, 4, 5, 6],
            Mode::Phrygian => [1, 2, 4, 6, 7],
            Mode::Lydian => [1, 2, 3, 4, 6],
            Mode::Mixolydian => [1, 2, 3, 5, 7],
            Mode::Aeolian | Mode::Locrian | Mode::MelodicMinor | Mode::HarmonicMinor => {
                [1, 3, 4, 5, 7]
            }
        }
    }

    /// Identifier used in configuration files
    pub fn id(self) -> &'static str {
        match self {
            Mode::Ionian => "ionian",
            Mode::Dorian => "dorian",
            Mode::Phrygian => "phrygian",
            Mode::Lydian => "lydian",
            Mode::Mixolydian => "mixolydian",
            Mode::Aeolian => "aeolian",
            Mode::Locrian => "locrian",
            Mode::MelodicMinor => "melodic_minor",
            Mode::HarmonicMinor => "harmonic_minor",
        }
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            Mode::Ionian => "Ionian (Major)",
            Mode::Dorian => "Dorian",
            Mode::Phrygian => "Phrygian",
            Mode::Lydian => "Lydian",
            Mode::Mixolydian => "Mixolydian",
            Mode::Aeolian => "Aeolian (Natural Minor)",
            Mode::Locrian => "Locrian",
            Mode::MelodicMinor => "Melodic Minor",
            Mode::HarmonicMinor => "Harmonic Minor",
        }
    }
}

impl FromStr for Mode {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-', '_'], "");
        match normalized.as_str() {
            "ionian" | "major" => Ok(Mode::Ionian),
            "dorian" => Ok(Mode::Dorian),
            "phrygian" => Ok(Mode::Phrygian),
            "lydian" => Ok(Mode::Lydian),
            "mixolydian" => Ok(Mode::Mixolydian),
            "aeolian" | "minor" | "naturalminor" => Ok(Mode::Aeolian),
            "locrian" => Ok(Mode::Locrian),
            "melodicminor" => Ok(Mode::MelodicMinor),
            "harmonicminor" => Ok(Mode::HarmonicMinor),
            _ => Err(TheoryError::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diatonic_patterns_come_from_rotation() {
        use super::Step::{Semitone as S, Tone as T};
        let expected = [
            (Mode::Ionian, [T, T, S, T, T, T, S]),
            (Mode::Dorian, [T, S, T, T, T, S, T]),
            (Mode::Phrygian, [S, T, T, T, S, T, T]),
            (Mode::Lydian, [T, T, T, S, T, T, S]),
            (Mode::Mixolydian, [T, T, S, T, T, S, T]),
            (Mode::Aeolian, [T, S, T, T, S, T, T]),
            (Mode::Locrian, [S, T, T, S, T, T, T]),
        ];
        for (mode, steps) in expected {
            assert_eq!(mode.pattern(), IntervalPattern::new(steps), "{}", mode);
        }
    }

    #[test]
    fn test_melodic_minor_pattern() {
        let pattern = Mode::MelodicMinor.pattern();
        assert!(Mode::MelodicMinor.rotation().is_none());
        assert_eq!(pattern.steps()[1], Step::Semitone);
        assert_eq!(pattern.steps()[6], Step::Semitone);
        assert_ne!(pattern, Mode::Dorian.pattern());
    }

    #[test]
    fn test_rotation_round_trip() {
        for k in 1..DEGREES {
            let there = IntervalPattern::IONIAN.rotated(k).unwrap();
            let back = there.rotated(DEGREES - k).unwrap();
            assert_eq!(back, IntervalPattern::IONIAN);
        }
        assert_eq!(
            IntervalPattern::IONIAN.rotated(0).unwrap(),
            IntervalPattern::IONIAN
        );
    }

    #[test]
    fn test_rotation_rejects_out_of_range_offset() {
        assert_eq!(
            IntervalPattern::IONIAN.rotated(7),
            Err(TheoryError::InvalidRotation(7))
        );
    }

    #[test]
    fn test_all_patterns_span_an_octave() {
        for mode in Mode::ALL {
            assert_eq!(mode.pattern().semitones(), 12, "{}", mode);
        }
    }

    #[test]
    fn test_harmonic_minor_has_augmented_second() {
        let steps = Mode::HarmonicMinor.pattern();
        assert_eq!(steps.steps()[5], Step::ToneSemitone);
        assert_eq!(steps.steps()[5].semitones(), 3);
        assert!(Mode::HarmonicMinor.rotation().is_none());
    }

    #[test]
    fn test_pentatonic_degrees_are_distinct_and_in_range() {
        for mode in Mode::ALL {
            let degrees = mode.pentatonic_degrees();
            assert_eq!(degrees[0], 1);
            assert!(degrees.windows(2).all(|w| w[0] < w[1]));
            assert!(degrees.iter().all(|&d| (1..=DEGREES).contains(&d)));
        }
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("dorian".parse::<Mode>(), Ok(Mode::Dorian));
        assert_eq!("Major".parse::<Mode>(), Ok(Mode::Ionian));
        assert_eq!("natural minor".parse::<Mode>(), Ok(Mode::Aeolian));
        assert_eq!("harmonic_minor".parse::<Mode>(), Ok(Mode::HarmonicMinor));
        assert_eq!("melodicminor".parse::<Mode>(), Ok(Mode::MelodicMinor));
        assert!("bebop".parse::<Mode>().is_err());
    }

    #[test]
    fn test_mode_ids_parse_back() {
        for mode in Mode::ALL {
            assert_eq!(mode.id().parse::<Mode>(), Ok(mode));
        }
    }

    #[test]
    fn test_pattern_display() {
        assert_eq!(
            Mode::HarmonicMinor.pattern().to_string(),
            "Tone, Semitone, Tone, Tone, Semitone, Tone + Semitone, Semitone"
        );
    }
}
