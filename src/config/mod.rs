// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration system for FRETS.
//!
//! A view file stores the user's selections: key, mode, instrument, fret
//! count, note filter, handedness, display toggles and highlights. Files are
//! YAML or TOML, chosen by extension. Values are kept as loose strings here
//! and checked by [`ViewConfig::resolve`].

pub mod watcher;

pub use watcher::{validate_config, ConfigEvent, ConfigWatcher};

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::fretboard::{Handedness, Highlights, NoteFilter, RenderOptions, Selection, Tuning, MAX_FRETS};
use crate::music::{Key, Mode, TheoryError};

/// Errors found while resolving a view configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Theory(#[from] TheoryError),
    #[error("unknown instrument: {0:?}")]
    UnknownInstrument(String),
    #[error("fret count {0} out of range (expected 1..={max})", max = MAX_FRETS)]
    InvalidFretCount(usize),
    #[error("highlight at string {string}, fret {fret} is off the fretboard")]
    InvalidHighlight { string: usize, fret: usize },
}

/// Root of a view file
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct ViewFile {
    #[serde(default)]
    pub view: ViewConfig,
}

impl ViewFile {
    /// Load a view file, YAML or TOML by extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml(&contents),
            _ => Self::from_yaml(&contents),
        }
    }

    /// Parse a view file from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Parse a view file from TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML configuration")
    }
}

/// User selections as written in a view file
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ViewConfig {
    /// Key name (e.g., "C", "B♭", "F#")
    #[serde(default = "default_key")]
    pub key: String,
    /// Mode name (e.g., "ionian", "dorian", "harmonic_minor")
    #[serde(default = "default_mode")]
    pub mode: String,
    /// Built-in tuning id (eadgbe, dadgbe, dadgad, bass)
    #[serde(default = "default_instrument")]
    pub instrument: String,
    /// Custom open-string notes, lowest first; overrides `instrument`
    #[serde(default)]
    pub tuning: Option<Vec<String>>,
    /// Highest fret shown
    #[serde(default = "default_fret_count")]
    pub fret_count: usize,
    /// Which notes to show
    #[serde(default)]
    pub notes: NoteFilter,
    #[serde(default)]
    pub left_handed: bool,
    #[serde(default = "default_true")]
    pub show_octaves: bool,
    #[serde(default)]
    pub show_intervals: bool,
    /// Only draw highlighted notes and frets
    #[serde(default)]
    pub focus_mode: bool,
    /// Highlighted notes as [string index, fret]
    #[serde(default)]
    pub highlight_notes: Vec<[usize; 2]>,
    #[serde(default)]
    pub highlight_frets: Vec<usize>,
}

fn default_key() -> String {
    "C".to_string()
}
fn default_mode() -> String {
    "ionian".to_string()
}
fn default_instrument() -> String {
    "eadgbe".to_string()
}
fn default_fret_count() -> usize {
    27
}
fn default_true() -> bool {
    true
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            key: default_key(),
            mode: default_mode(),
            instrument: default_instrument(),
            tuning: None,
            fret_count: default_fret_count(),
            notes: NoteFilter::default(),
            left_handed: false,
            show_octaves: default_true(),
            show_intervals: false,
            focus_mode: false,
            highlight_notes: Vec::new(),
            highlight_frets: Vec::new(),
        }
    }
}

impl ViewConfig {
    /// Check every field and build a typed selection
    pub fn resolve(&self) -> Result<Selection, ConfigError> {
        let key: Key = self.key.parse()?;
        let mode: Mode = self.mode.parse()?;

        let tuning = match &self.tuning {
            Some(strings) => Tuning::parse("custom", "Custom Tuning", strings.as_slice())?,
            None => Tuning::by_id(&self.instrument)
                .ok_or_else(|| ConfigError::UnknownInstrument(self.instrument.clone()))?,
        };

        if self.fret_count == 0 || self.fret_count > MAX_FRETS {
            return Err(ConfigError::InvalidFretCount(self.fret_count));
        }

        let mut highlights = Highlights::new();
        for &[string, fret] in &self.highlight_notes {
            if string >= tuning.string_count() || fret > self.fret_count {
                return Err(ConfigError::InvalidHighlight { string, fret });
            }
            if !highlights.is_note_highlighted(string, fret) {
                highlights.toggle_note(string, fret);
            }
        }
        for &fret in &self.highlight_frets {
            if fret > self.fret_count {
                return Err(ConfigError::InvalidHighlight { string: 0, fret });
            }
            if !highlights.is_fret_highlighted(fret) {
                highlights.toggle_fret(fret);
            }
        }

        if self.focus_mode && highlights.is_empty() {
            warn!("focus mode is on but no notes or frets are highlighted");
        }

        let handedness = if self.left_handed {
            Handedness::Left
        } else {
            Handedness::Right
        };

        Ok(Selection {
            key,
            mode,
            tuning,
            fret_count: self.fret_count,
            filter: self.notes,
            handedness,
            highlights,
        })
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            show_octaves: self.show_octaves,
            show_intervals: self.show_intervals,
            focus_mode: self.focus_mode,
        }
    }
}
