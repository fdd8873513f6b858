// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chromatic note model.
//!
//! The octave-agnostic chromatic table starts at A, matching the 88-key
//! piano numbering the frequency mapper uses. Every table entry carries
//! its natural-or-sharp spelling and, where one exists, a flat (or natural)
//! alternative.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::TheoryError;

/// Natural note letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Letter {
    /// Pitch class of the unaltered letter
    pub fn natural_pitch(self) -> PitchClass {
        match self {
            Letter::A => PitchClass::new(0),
            Letter::B => PitchClass::new(2),
            Letter::C => PitchClass::new(3),
            Letter::D => PitchClass::new(5),
            Letter::E => PitchClass::new(7),
            Letter::F => PitchClass::new(8),
            Letter::G => PitchClass::new(10),
        }
    }

    /// The following letter, wrapping G to A
    pub fn next(self) -> Letter {
        match self {
            Letter::A => Letter::B,
            Letter::B => Letter::C,
            Letter::C => Letter::D,
            Letter::D => Letter::E,
            Letter::E => Letter::F,
            Letter::F => Letter::G,
            Letter::G => Letter::A,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            _ => None,
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Accidentals a spelled note can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accidental {
    DoubleFlat,
    Flat,
    Natural,
    Sharp,
    DoubleSharp,
}

impl Accidental {
    /// Semitone alteration relative to the natural letter
    pub fn semitones(self) -> i8 {
        match self {
            Accidental::DoubleFlat => -2,
            Accidental::Flat => -1,
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::DoubleSharp => 2,
        }
    }

    pub fn from_semitones(semitones: i8) -> Option<Self> {
        match semitones {
            -2 => Some(Accidental::DoubleFlat),
            -1 => Some(Accidental::Flat),
            0 => Some(Accidental::Natural),
            1 => Some(Accidental::Sharp),
            2 => Some(Accidental::DoubleSharp),
            _ => None,
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "" => Some(Accidental::Natural),
            "#" | "♯" => Some(Accidental::Sharp),
            "##" | "♯♯" | "x" | "𝄪" => Some(Accidental::DoubleSharp),
            "b" | "♭" => Some(Accidental::Flat),
            "bb" | "♭♭" | "𝄫" => Some(Accidental::DoubleFlat),
            _ => None,
        }
    }
}

impl fmt::Display for Accidental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Accidental::DoubleFlat => "♭♭",
            Accidental::Flat => "♭",
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "##",
        };
        f.write_str(symbol)
    }
}

/// A letter with an accidental, e.g. `C`, `F#`, `B♭`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteName {
    pub letter: Letter,
    pub accidental: Accidental,
}

impl NoteName {
    pub const fn new(letter: Letter, accidental: Accidental) -> Self {
        Self { letter, accidental }
    }

    pub const fn natural(letter: Letter) -> Self {
        Self::new(letter, Accidental::Natural)
    }

    pub const fn sharp(letter: Letter) -> Self {
        Self::new(letter, Accidental::Sharp)
    }

    pub const fn flat(letter: Letter) -> Self {
        Self::new(letter, Accidental::Flat)
    }

    /// Pitch class by letter arithmetic (valid for every spelling)
    pub fn pitch_class(self) -> PitchClass {
        self.letter
            .natural_pitch()
            .transpose(self.accidental.semitones() as i32)
    }

    /// Spell `pitch` on `letter`, if it lies within a double accidental
    pub fn on_letter(letter: Letter, pitch: PitchClass) -> Option<Self> {
        let mut diff = pitch.semitones_above(letter.natural_pitch()) as i8;
        if diff > 6 {
            diff -= 12;
        }
        Accidental::from_semitones(diff).map(|accidental| Self::new(letter, accidental))
    }

    pub fn is_natural(self) -> bool {
        self.accidental == Accidental::Natural
    }

    pub fn is_sharp(self) -> bool {
        matches!(self.accidental, Accidental::Sharp | Accidental::DoubleSharp)
    }

    pub fn is_flat(self) -> bool {
        matches!(self.accidental, Accidental::Flat | Accidental::DoubleFlat)
    }
}

impl FromStr for NoteName {
    type Err = TheoryError;

    /// Parse a note name (e.g. "C", "f#", "Bb", "A♭", "B♭♭")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars
            .next()
            .and_then(Letter::from_char)
            .ok_or_else(|| TheoryError::UnknownNote(s.to_string()))?;
        let accidental =
            Accidental::parse(chars.as_str()).ok_or_else(|| TheoryError::UnknownNote(s.to_string()))?;
        Ok(Self::new(letter, accidental))
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.accidental)
    }
}

/// Position in the A-based chromatic cycle (0 = A, 3 = B#/C, 11 = G#/A♭)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Number of pitch classes in the octave
    pub const COUNT: usize = 12;

    /// B#/C, where octave numbers change
    pub const OCTAVE_PIVOT: PitchClass = PitchClass(3);

    pub const fn new(index: u8) -> Self {
        PitchClass(index % 12)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Transpose by semitones, wrapping around the octave
    pub fn transpose(self, semitones: i32) -> Self {
        PitchClass((self.0 as i32 + semitones).rem_euclid(12) as u8)
    }

    /// Ascending distance in semitones from `tonic` to this pitch class
    pub fn semitones_above(self, tonic: PitchClass) -> u8 {
        (self.0 as i16 - tonic.0 as i16).rem_euclid(12) as u8
    }

    /// The chromatic table entry for this pitch class
    pub fn entry(self) -> &'static ChromaticEntry {
        &CHROMATIC[self.index()]
    }

    /// Find the table entry spelled `name` by either of its spellings
    pub fn lookup(name: NoteName) -> Option<Self> {
        CHROMATIC
            .iter()
            .position(|entry| entry.matches(name))
            .map(|i| PitchClass(i as u8))
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.entry())
    }
}

/// One row of the chromatic table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromaticEntry {
    /// Natural or sharp spelling
    pub sharp: NoteName,
    /// Flat spelling (the natural for B#/C and E#/F)
    pub flat: Option<NoteName>,
}

impl ChromaticEntry {
    const fn single(letter: Letter) -> Self {
        Self {
            sharp: NoteName::natural(letter),
            flat: None,
        }
    }

    const fn pair(sharp: NoteName, flat: NoteName) -> Self {
        Self {
            sharp,
            flat: Some(flat),
        }
    }

    /// Both spellings, sharp side first
    pub fn spellings(&self) -> impl Iterator<Item = NoteName> {
        std::iter::once(self.sharp).chain(self.flat)
    }

    pub fn matches(&self, name: NoteName) -> bool {
        self.spellings().any(|n| n == name)
    }

    /// Default display spelling for a note outside the key
    pub fn natural_or_sharp(&self) -> NoteName {
        self.spellings()
            .find(|n| n.is_natural())
            .unwrap_or(self.sharp)
    }
}

impl fmt::Display for ChromaticEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.flat {
            Some(flat) => write!(f, "{}/{}", self.sharp, flat),
            None => write!(f, "{}", self.sharp),
        }
    }
}

/// The chromatic table, A first
pub const CHROMATIC: [ChromaticEntry; 12] = [
    ChromaticEntry::single(Letter::A),
    ChromaticEntry::pair(NoteName::sharp(Letter::A), NoteName::flat(Letter::B)),
    ChromaticEntry::single(Letter::B),
    ChromaticEntry::pair(NoteName::sharp(Letter::B), NoteName::natural(Letter::C)),
    ChromaticEntry::pair(NoteName::sharp(Letter::C), NoteName::flat(Letter::D)),
    ChromaticEntry::single(Letter::D),
    ChromaticEntry::pair(NoteName::sharp(Letter::D), NoteName::flat(Letter::E)),
    ChromaticEntry::single(Letter::E),
    ChromaticEntry::pair(NoteName::sharp(Letter::E), NoteName::natural(Letter::F)),
    ChromaticEntry::pair(NoteName::sharp(Letter::F), NoteName::flat(Letter::G)),
    ChromaticEntry::single(Letter::G),
    ChromaticEntry::pair(NoteName::sharp(Letter::G), NoteName::flat(Letter::A)),
];

/// The twelve pitch classes rotated to begin at `start`
pub fn chromatic_from(start: PitchClass) -> [PitchClass; 12] {
    let mut ordered: [PitchClass; 12] = std::array::from_fn(|i| PitchClass(i as u8));
    ordered.rotate_left(start.index());
    ordered
}

/// A note name with an octave number, e.g. `E2`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpelledNote {
    pub name: NoteName,
    pub octave: i8,
}

impl SpelledNote {
    pub const fn new(name: NoteName, octave: i8) -> Self {
        Self { name, octave }
    }

    pub fn pitch_class(self) -> PitchClass {
        self.name.pitch_class()
    }

    /// Equal-tempered frequency in Hz
    pub fn frequency(self) -> f64 {
        super::frequency::pitch_frequency(self.pitch_class(), self.octave)
    }
}

impl FromStr for SpelledNote {
    type Err = TheoryError;

    /// Parse a note with octave (e.g. "E2", "A♭3", "C#-1")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .char_indices()
            .skip(1)
            .find(|(_, c)| c.is_ascii_digit() || *c == '-')
            .map(|(i, _)| i)
            .ok_or_else(|| TheoryError::InvalidOctave(s.to_string()))?;
        let (name, octave) = s.split_at(split);
        let name = name.parse()?;
        let octave = octave
            .parse()
            .map_err(|_| TheoryError::InvalidOctave(s.to_string()))?;
        Ok(Self::new(name, octave))
    }
}

impl fmt::Display for SpelledNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.octave)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> NoteName {
        s.parse().unwrap()
    }

    #[test]
    fn test_note_name_parse() {
        assert_eq!(name("C"), NoteName::natural(Letter::C));
        assert_eq!(name("f#"), NoteName::sharp(Letter::F));
        assert_eq!(name("Bb"), NoteName::flat(Letter::B));
        assert_eq!(name("A♭"), NoteName::flat(Letter::A));
        assert_eq!(name("B♭♭"), NoteName::new(Letter::B, Accidental::DoubleFlat));
        assert!("H".parse::<NoteName>().is_err());
        assert!("C#b".parse::<NoteName>().is_err());
        assert!("".parse::<NoteName>().is_err());
    }

    #[test]
    fn test_note_name_display() {
        assert_eq!(name("Bb").to_string(), "B♭");
        assert_eq!(name("F#").to_string(), "F#");
        assert_eq!(name("Ebb").to_string(), "E♭♭");
    }

    #[test]
    fn test_pitch_class_by_letter() {
        assert_eq!(name("A").pitch_class(), PitchClass::new(0));
        assert_eq!(name("C").pitch_class(), PitchClass::OCTAVE_PIVOT);
        assert_eq!(name("B#").pitch_class(), PitchClass::OCTAVE_PIVOT);
        assert_eq!(name("Cb").pitch_class(), name("B").pitch_class());
        assert_eq!(name("G#").pitch_class(), name("Ab").pitch_class());
        assert_eq!(name("Bbb").pitch_class(), name("A").pitch_class());
    }

    #[test]
    fn test_table_lookup_matches_either_spelling() {
        assert_eq!(PitchClass::lookup(name("A#")), Some(PitchClass::new(1)));
        assert_eq!(PitchClass::lookup(name("Bb")), Some(PitchClass::new(1)));
        assert_eq!(PitchClass::lookup(name("E#")), Some(PitchClass::new(8)));
        assert_eq!(PitchClass::lookup(name("F")), Some(PitchClass::new(8)));
        assert_eq!(PitchClass::lookup(name("Cb")), None);
        assert_eq!(PitchClass::lookup(name("F##")), None);
    }

    #[test]
    fn test_table_has_five_black_keys() {
        let black_keys = CHROMATIC
            .iter()
            .filter(|e| e.flat.map_or(false, |f| f.is_flat()))
            .count();
        assert_eq!(black_keys, 5);
        assert_eq!(CHROMATIC[3].to_string(), "B#/C");
        assert_eq!(CHROMATIC[11].to_string(), "G#/A♭");
    }

    #[test]
    fn test_natural_or_sharp() {
        assert_eq!(CHROMATIC[3].natural_or_sharp(), name("C"));
        assert_eq!(CHROMATIC[8].natural_or_sharp(), name("F"));
        assert_eq!(CHROMATIC[6].natural_or_sharp(), name("D#"));
        assert_eq!(CHROMATIC[10].natural_or_sharp(), name("G"));
    }

    #[test]
    fn test_chromatic_from() {
        let ordered = chromatic_from(name("E").pitch_class());
        assert_eq!(ordered[0], PitchClass::new(7));
        assert_eq!(ordered[5], PitchClass::new(0));
        assert_eq!(ordered[8], PitchClass::OCTAVE_PIVOT);
        assert_eq!(ordered[11], PitchClass::new(6));
    }

    #[test]
    fn test_semitones_above_wraps() {
        let c = name("C").pitch_class();
        assert_eq!(name("B").pitch_class().semitones_above(c), 11);
        assert_eq!(name("E").pitch_class().semitones_above(c), 4);
        assert_eq!(c.semitones_above(c), 0);
    }

    #[test]
    fn test_on_letter() {
        let b = name("B").pitch_class();
        assert_eq!(NoteName::on_letter(Letter::C, b), Some(name("Cb")));
        assert_eq!(NoteName::on_letter(Letter::A, b), Some(name("A##")));
        assert_eq!(NoteName::on_letter(Letter::F, b), None);
    }

    #[test]
    fn test_spelled_note_parse() {
        let e2: SpelledNote = "E2".parse().unwrap();
        assert_eq!(e2, SpelledNote::new(name("E"), 2));

        let ab3: SpelledNote = "A♭3".parse().unwrap();
        assert_eq!(ab3.name, name("Ab"));
        assert_eq!(ab3.octave, 3);

        let low: SpelledNote = "C#-1".parse().unwrap();
        assert_eq!(low.octave, -1);

        assert_eq!(e2.to_string(), "E2");
        assert!("E".parse::<SpelledNote>().is_err());
        assert!("E2x".parse::<SpelledNote>().is_err());
        assert!("H2".parse::<SpelledNote>().is_err());
    }
}
