// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! FRETS - Fretboard scale explorer.
//!
//! Spells the modes of any key, derives their pentatonic subsets, explains
//! how each mode relates to its major counterparts, and lays the result out
//! over the strings and frets of a guitar or bass.

pub mod config;
pub mod fretboard;
pub mod music;
