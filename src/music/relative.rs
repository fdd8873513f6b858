// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Relative-major analysis.
//!
//! Relates a mode to the major scale that shares its notes and lists the
//! degrees where the mode departs from the major scale on the same tonic.

use std::fmt;

use super::mode::{IntervalPattern, Mode};
use super::note::NoteName;
use super::scale::{spell_scale, Key, ScaleSpelling};

/// Direction a degree is altered relative to the major scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alteration {
    Raised,
    Lowered,
}

impl fmt::Display for Alteration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alteration::Raised => f.write_str("raised"),
            Alteration::Lowered => f.write_str("lowered"),
        }
    }
}

/// A scale degree that differs from the major scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegreeDifference {
    /// 1-based degree number
    pub degree: usize,
    pub alteration: Alteration,
    /// The mode's spelling of the degree
    pub note: NoteName,
}

impl fmt::Display for DegreeDifference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.alteration, ordinal(self.degree), self.note)
    }
}

/// Outcome of comparing a mode with its major counterparts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativeMajorResult {
    key: Key,
    mode: Mode,
    relative_major: Option<NoteName>,
    differences: Vec<DegreeDifference>,
    unshared: Vec<NoteName>,
}

impl RelativeMajorResult {
    /// Tonic of the major scale sharing this mode's notes
    pub fn relative_major(&self) -> Option<NoteName> {
        self.relative_major
    }

    /// Which degree of the relative major the mode starts on
    pub fn mode_degree(&self) -> Option<usize> {
        self.relative_major
            .and(self.mode.rotation())
            .map(|offset| offset + 1)
    }

    pub fn differences(&self) -> &[DegreeDifference] {
        &self.differences
    }

    /// Mode notes missing from the relative major scale (empty when it exists)
    pub fn unshared_notes(&self) -> &[NoteName] {
        &self.unshared
    }

    /// Differences as list phrases, the last joined with "and"
    pub fn difference_phrases(&self) -> Vec<String> {
        let count = self.differences.len();
        self.differences
            .iter()
            .enumerate()
            .map(|(i, diff)| {
                if count > 1 && i == count - 1 {
                    format!("and {}", diff)
                } else {
                    diff.to_string()
                }
            })
            .collect()
    }

    /// Explanatory sentences for display.
    ///
    /// Only modes with a relative major (Dorian through Aeolian) are
    /// explained; the rest yield no sentences.
    pub fn describe(&self) -> Vec<String> {
        let mut lines = Vec::new();
        let (Some(major), Some(degree)) = (self.relative_major, self.mode_degree()) else {
            return lines;
        };
        let subject = format!("{} {}", self.key, self.mode.name());

        lines.push(format!(
            "{} is the {} degree of the {} Major scale and contains the same notes.",
            subject,
            ordinal(degree),
            major
        ));
        lines.push(format!(
            "This means you can play the {} Major scale over a chord progression in {}, \
             using {} as the tonic.",
            major, subject, self.key
        ));

        if !self.differences.is_empty() {
            let phrases = self.difference_phrases().join(", ");
            lines.push(format!(
                "{} differs from its Major counterpart ({} {}) because of its {}.",
                subject,
                self.key,
                Mode::Ionian.name(),
                phrases
            ));
            lines.push(format!(
                "To get the {} sound, pay particular attention to the {} along with \
                 the focus on {} as the tonic.",
                self.mode.name(),
                phrases,
                self.key
            ));
        }

        lines
    }
}

/// Compare `scale` (the `mode` of `key`) with the major scales it relates to.
///
/// The relative major is reported for Dorian through Aeolian. Degree
/// differences against the major scale on the same tonic are reported for
/// every mode.
pub fn analyze_relative_major(key: Key, mode: Mode, scale: &ScaleSpelling) -> RelativeMajorResult {
    let relative_major = mode
        .rotation()
        .filter(|offset| (1..=5).contains(offset))
        .and_then(|offset| {
            let index = scale.len().saturating_sub(offset);
            scale.notes().get(index).copied()
        });

    let unshared = match relative_major {
        Some(tonic) => {
            let relative = spell_scale(Key::respelled(tonic), &IntervalPattern::IONIAN);
            scale
                .notes()
                .iter()
                .copied()
                .filter(|n| !relative.contains_pitch(n.pitch_class()))
                .collect()
        }
        None => Vec::new(),
    };

    let major = spell_scale(key, &IntervalPattern::IONIAN);
    let tonic = key.pitch_class();
    let differences = major
        .notes()
        .iter()
        .zip(scale.notes())
        .enumerate()
        .filter_map(|(i, (major_note, mode_note))| {
            let major_offset = major_note.pitch_class().semitones_above(tonic);
            let mode_offset = mode_note.pitch_class().semitones_above(tonic);
            if mode_offset == major_offset {
                return None;
            }
            let alteration = if mode_offset > major_offset {
                Alteration::Raised
            } else {
                Alteration::Lowered
            };
            Some(DegreeDifference {
                degree: i + 1,
                alteration,
                note: *mode_note,
            })
        })
        .collect();

    RelativeMajorResult {
        key,
        mode,
        relative_major,
        differences,
        unshared,
    }
}

/// English ordinal: 1st, 2nd, 3rd, 4th, 11th, 21st
pub fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(k: &str, mode: Mode) -> RelativeMajorResult {
        let key: Key = k.parse().unwrap();
        let scale = spell_scale(key, &mode.pattern());
        analyze_relative_major(key, mode, &scale)
    }

    #[test]
    fn test_ordinal() {
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(4), "4th");
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(12), "12th");
        assert_eq!(ordinal(21), "21st");
    }

    #[test]
    fn test_c_dorian() {
        let result = analyze("C", Mode::Dorian);
        assert_eq!(result.relative_major().map(|n| n.to_string()), Some("B♭".to_string()));
        assert_eq!(result.mode_degree(), Some(2));

        let diffs = result.differences();
        assert_eq!(diffs.len(), 2);
        assert_eq!(diffs[0].degree, 3);
        assert_eq!(diffs[0].alteration, Alteration::Lowered);
        assert_eq!(diffs[1].degree, 7);
        assert_eq!(diffs[1].alteration, Alteration::Lowered);
        assert_eq!(
            result.difference_phrases(),
            vec!["lowered 3rd (E♭)", "and lowered 7th (B♭)"]
        );
    }

    #[test]
    fn test_a_aeolian() {
        let result = analyze("A", Mode::Aeolian);
        assert_eq!(result.relative_major().map(|n| n.to_string()), Some("C".to_string()));
        assert_eq!(result.mode_degree(), Some(6));
        // Same notes as C major; against A major the 3rd, 6th and 7th are flat
        assert!(result.unshared_notes().is_empty());
        assert_eq!(result.differences().len(), 3);
    }

    #[test]
    fn test_relative_major_always_shares_notes() {
        for k in Key::CATALOG {
            for mode in [Mode::Dorian, Mode::Phrygian, Mode::Lydian, Mode::Mixolydian, Mode::Aeolian] {
                let result = analyze(k, mode);
                assert!(result.relative_major().is_some());
                assert!(result.unshared_notes().is_empty(), "{} {}", k, mode);
            }
        }
    }

    #[test]
    fn test_relative_major_of_each_mode_of_c_major() {
        let cases = [
            ("D", Mode::Dorian),
            ("E", Mode::Phrygian),
            ("F", Mode::Lydian),
            ("G", Mode::Mixolydian),
            ("A", Mode::Aeolian),
        ];
        for (k, mode) in cases {
            let result = analyze(k, mode);
            assert_eq!(
                result.relative_major().map(|n| n.to_string()),
                Some("C".to_string()),
                "{} {}",
                k,
                mode
            );
        }
    }

    #[test]
    fn test_lydian_raises_fourth() {
        let result = analyze("C", Mode::Lydian);
        assert_eq!(result.differences().len(), 1);
        assert_eq!(result.differences()[0].alteration, Alteration::Raised);
        assert_eq!(result.difference_phrases(), vec!["raised 4th (F#)"]);
    }

    #[test]
    fn test_ionian_and_locrian_have_no_relative_major() {
        let ionian = analyze("C", Mode::Ionian);
        assert_eq!(ionian.relative_major(), None);
        assert!(ionian.differences().is_empty());
        assert!(ionian.describe().is_empty());

        let locrian = analyze("B", Mode::Locrian);
        assert_eq!(locrian.relative_major(), None);
        assert_eq!(locrian.mode_degree(), None);
        assert_eq!(locrian.differences().len(), 5);
        assert!(locrian.describe().is_empty());
    }

    #[test]
    fn test_harmonic_minor_differences() {
        let result = analyze("A", Mode::HarmonicMinor);
        assert_eq!(result.relative_major(), None);
        assert_eq!(
            result.difference_phrases(),
            vec!["lowered 3rd (C)", "and lowered 6th (F)"]
        );
        assert!(result.describe().is_empty());
    }

    #[test]
    fn test_describe_mentions_relative_major() {
        let lines = analyze("C", Mode::Dorian).describe();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "C Dorian is the 2nd degree of the B♭ Major scale and contains the same notes."
        );
        assert!(lines[2].contains("lowered 3rd (E♭), and lowered 7th (B♭)"));
    }
}
