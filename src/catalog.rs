//! Catalog loading and instrument filtering.

use std::fs;
use std::str::FromStr;

use crate::error::Result;
use crate::models::{Instrument, SongRecord};

/// Load the song catalog from a JSON file, optionally keeping only songs
/// that chart the given instrument.
///
/// Wrapping double quotes around the path are stripped (pasted Windows
/// paths often carry them). An unrecognized instrument name fails with
/// `UnknownInstrument` instead of silently skipping the filter. Source
/// order is preserved.
pub fn load(path: &str, instrument_filter: Option<&str>) -> Result<Vec<SongRecord>> {
    let path = path.trim().trim_matches('"');
    let raw = fs::read_to_string(path)?;
    let mut catalog: Vec<SongRecord> = serde_json::from_str(&raw)?;

    if let Some(name) = instrument_filter {
        let mask = Instrument::from_str(name)?.mask();
        catalog.retain(|song| song.charts_available & mask != 0);
    }

    Ok(catalog)
}
