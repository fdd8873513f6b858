// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Instrument tunings.

use std::fmt;

use crate::music::{Letter, NoteName, SpelledNote, TheoryError};

/// Open-string notes of an instrument, lowest string first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tuning {
    id: String,
    label: String,
    strings: Vec<SpelledNote>,
}

const fn open(letter: Letter, octave: i8) -> SpelledNote {
    SpelledNote::new(NoteName::natural(letter), octave)
}

impl Tuning {
    pub fn new(id: impl Into<String>, label: impl Into<String>, strings: Vec<SpelledNote>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            strings,
        }
    }

    /// Build a tuning from note strings such as `["E2", "A2"]`
    pub fn parse<S: AsRef<str>>(
        id: impl Into<String>,
        label: impl Into<String>,
        strings: &[S],
    ) -> Result<Self, TheoryError> {
        let strings = strings
            .iter()
            .map(|s| s.as_ref().parse())
            .collect::<Result<Vec<SpelledNote>, _>>()?;
        Ok(Self::new(id, label, strings))
    }

    /// Guitar in standard tuning (E2 A2 D3 G3 B3 E4)
    pub fn standard() -> Self {
        use Letter::*;
        Self::new(
            "eadgbe",
            "Guitar (Standard Tuning)",
            vec![open(E, 2), open(A, 2), open(D, 3), open(G, 3), open(B, 3), open(E, 4)],
        )
    }

    pub fn drop_d() -> Self {
        use Letter::*;
        Self::new(
            "dadgbe",
            "Guitar (Drop D Tuning)",
            vec![open(D, 2), open(A, 2), open(D, 3), open(G, 3), open(B, 3), open(E, 4)],
        )
    }

    pub fn dadgad() -> Self {
        use Letter::*;
        Self::new(
            "dadgad",
            "Guitar (DADGAD Tuning)",
            vec![open(D, 2), open(A, 2), open(D, 3), open(G, 3), open(A, 3), open(D, 4)],
        )
    }

    /// Four-string bass (E1 A1 D2 G2)
    pub fn bass() -> Self {
        use Letter::*;
        Self::new(
            "bass",
            "Bass Guitar (Standard Tuning)",
            vec![open(E, 1), open(A, 1), open(D, 2), open(G, 2)],
        )
    }

    /// Every built-in tuning
    pub fn catalog() -> Vec<Tuning> {
        vec![Self::standard(), Self::drop_d(), Self::dadgad(), Self::bass()]
    }

    /// Look up a built-in tuning by id
    pub fn by_id(id: &str) -> Option<Tuning> {
        let id = id.trim().to_lowercase();
        Self::catalog().into_iter().find(|t| t.id == id)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn strings(&self) -> &[SpelledNote] {
        &self.strings
    }

    pub fn string_count(&self) -> usize {
        self.strings.len()
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Tuning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let notes: Vec<String> = self.strings.iter().map(|n| n.to_string()).collect();
        write!(f, "{} [{}]", self.label, notes.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_tuning() {
        let tuning = Tuning::standard();
        assert_eq!(tuning.string_count(), 6);
        let names: Vec<String> = tuning.strings().iter().map(|n| n.to_string()).collect();
        assert_eq!(names, vec!["E2", "A2", "D3", "G3", "B3", "E4"]);
    }

    #[test]
    fn test_catalog_lookup() {
        assert_eq!(Tuning::by_id("bass").unwrap().string_count(), 4);
        assert_eq!(Tuning::by_id("DADGAD").unwrap().label(), "Guitar (DADGAD Tuning)");
        assert_eq!(Tuning::by_id("dadgbe").unwrap().strings()[0].to_string(), "D2");
        assert!(Tuning::by_id("banjo").is_none());
    }

    #[test]
    fn test_parse_custom_tuning() {
        let tuning = Tuning::parse("open-g", "Open G", &["D2", "G2", "D3", "G3", "B3", "D4"]).unwrap();
        assert_eq!(tuning.id(), "open-g");
        assert_eq!(tuning.strings()[1].to_string(), "G2");

        let bad = Tuning::parse("bad", "Bad", &["E2", "Q2"]);
        assert!(bad.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Tuning::bass().to_string(),
            "Bass Guitar (Standard Tuning) [E1 A1 D2 G2]"
        );
    }
}
