// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Interval labels relative to the tonic.

use std::fmt;

use super::note::PitchClass;

/// Simple intervals within one octave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interval {
    Root,
    MinorSecond,
    MajorSecond,
    MinorThird,
    MajorThird,
    PerfectFourth,
    Tritone,
    PerfectFifth,
    MinorSixth,
    MajorSixth,
    MinorSeventh,
    MajorSeventh,
}

impl Interval {
    const ALL: [Interval; 12] = [
        Interval::Root,
        Interval::MinorSecond,
        Interval::MajorSecond,
        Interval::MinorThird,
        Interval::MajorThird,
        Interval::PerfectFourth,
        Interval::Tritone,
        Interval::PerfectFifth,
        Interval::MinorSixth,
        Interval::MajorSixth,
        Interval::MinorSeventh,
        Interval::MajorSeventh,
    ];

    /// Interval from `tonic` up to `pitch`
    pub fn between(tonic: PitchClass, pitch: PitchClass) -> Self {
        Self::from_semitones(pitch.semitones_above(tonic))
    }

    /// Interval spanning `semitones`, reduced to one octave
    pub fn from_semitones(semitones: u8) -> Self {
        Self::ALL[(semitones % 12) as usize]
    }

    pub fn semitones(self) -> u8 {
        self as u8
    }

    /// Short label as shown on the fretboard
    pub fn short_name(self) -> &'static str {
        match self {
            Interval::Root => "R",
            Interval::MinorSecond => "m2",
            Interval::MajorSecond => "M2",
            Interval::MinorThird => "m3",
            Interval::MajorThird => "M3",
            Interval::PerfectFourth => "P4",
            Interval::Tritone => "TT",
            Interval::PerfectFifth => "P5",
            Interval::MinorSixth => "m6",
            Interval::MajorSixth => "M6",
            Interval::MinorSeventh => "m7",
            Interval::MajorSeventh => "M7",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::note::NoteName;

    fn pc(s: &str) -> PitchClass {
        s.parse::<NoteName>().unwrap().pitch_class()
    }

    #[test]
    fn test_interval_between() {
        assert_eq!(Interval::between(pc("C"), pc("C")), Interval::Root);
        assert_eq!(Interval::between(pc("C"), pc("E♭")), Interval::MinorThird);
        assert_eq!(Interval::between(pc("C"), pc("G")), Interval::PerfectFifth);
        assert_eq!(Interval::between(pc("E"), pc("D")), Interval::MinorSeventh);
        assert_eq!(Interval::between(pc("A"), pc("G#")), Interval::MajorSeventh);
    }

    #[test]
    fn test_semitones_round_trip() {
        for n in 0..12u8 {
            assert_eq!(Interval::from_semitones(n).semitones(), n);
        }
        assert_eq!(Interval::from_semitones(19), Interval::PerfectFifth);
    }

    #[test]
    fn test_short_names() {
        assert_eq!(Interval::Tritone.to_string(), "TT");
        assert_eq!(Interval::MajorSixth.short_name(), "M6");
    }
}
