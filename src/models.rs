//! Core data models for the song picker.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::error::Error;

// ============================================================================
// Song Records
// ============================================================================

/// One song entry from the catalog JSON.
///
/// The catalog root is an array of objects keyed the way the scanner writes
/// them (`Name`, `Artist`, ...). `Year` stays a string on purpose: year
/// queries compare by exact string equality, never numerically.
#[derive(Clone, Debug, Deserialize)]
pub struct SongRecord {
    #[serde(rename = "Name")]
    pub title: String,

    #[serde(rename = "Artist")]
    pub artist: String,

    #[serde(rename = "Year")]
    pub year: String,

    #[serde(rename = "Genre")]
    pub genre: String,

    /// Charter handle, used as the short display name.
    #[serde(rename = "Charter")]
    pub charter: String,

    /// Difficulty-presence bitmask: one 4-bit slot per instrument.
    #[serde(
        rename = "chartsAvailable",
        default,
        deserialize_with = "lenient_bitmask"
    )]
    pub charts_available: u64,
}

/// The bitmask field is written by several scanner versions; tolerate plain
/// numbers, numeric strings, and garbage (garbage counts as "no charts").
fn lenient_bitmask<'de, D>(de: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(de)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_u64().unwrap_or(0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

// ============================================================================
// Instruments
// ============================================================================

/// Instruments in `chartsAvailable` slot order.
///
/// Each instrument owns a 4-bit difficulty slot, so slot `i` is selected by
/// `0xF << (4 * i)`. The ordering is fixed by the catalog format and must
/// not change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instrument {
    Guitar,
    Bass,
    Rhythm,
    GuitarCoop,
    GhlGuitar,
    GhlBass,
    Drums,
    Keys,
    Band,
    ProDrums,
}

impl Instrument {
    /// All instruments in slot order.
    pub const ALL: [Instrument; 10] = [
        Instrument::Guitar,
        Instrument::Bass,
        Instrument::Rhythm,
        Instrument::GuitarCoop,
        Instrument::GhlGuitar,
        Instrument::GhlBass,
        Instrument::Drums,
        Instrument::Keys,
        Instrument::Band,
        Instrument::ProDrums,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Instrument::Guitar => "guitar",
            Instrument::Bass => "bass",
            Instrument::Rhythm => "rhythm",
            Instrument::GuitarCoop => "guitar_coop",
            Instrument::GhlGuitar => "ghl_guitar",
            Instrument::GhlBass => "ghl_bass",
            Instrument::Drums => "drums",
            Instrument::Keys => "keys",
            Instrument::Band => "band",
            Instrument::ProDrums => "pro_drums",
        }
    }

    /// Slot index within `chartsAvailable`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Mask selecting this instrument's 4-bit difficulty slot.
    pub fn mask(self) -> u64 {
        0xF_u64 << (4 * self.index())
    }
}

impl FromStr for Instrument {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Instrument::ALL
            .iter()
            .copied()
            .find(|i| i.name() == s)
            .ok_or_else(|| Error::UnknownInstrument(s.to_string()))
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Samplable Fields
// ============================================================================

/// Record fields the sampling engine can draw distinct values from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Title,
    Artist,
    Year,
    Genre,
    Charter,
}

impl Field {
    pub fn get(self, song: &SongRecord) -> &str {
        match self {
            Field::Title => &song.title,
            Field::Artist => &song.artist,
            Field::Year => &song.year,
            Field::Genre => &song.genre,
            Field::Charter => &song.charter,
        }
    }
}

// ============================================================================
// Fuzzy Match Results
// ============================================================================

/// One ranked fuzzy-search candidate. Transient: produced for display and
/// confirmation, never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchCandidate {
    pub title: String,
    pub artist: String,
    pub charter: String,
    /// Similarity score on the 0-100 scale.
    pub score: i32,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_song_record_from_json() {
        let song: SongRecord = serde_json::from_str(
            r#"{"Name":"Song A","Artist":"X","Year":"2000","Genre":"Rock","Charter":"c1","chartsAvailable":15}"#,
        )
        .unwrap();
        assert_eq!(song.title, "Song A");
        assert_eq!(song.year, "2000");
        assert_eq!(song.charts_available, 15);
    }

    #[test]
    fn test_bitmask_coercion() {
        // Numeric string
        let song: SongRecord = serde_json::from_str(
            r#"{"Name":"a","Artist":"b","Year":"c","Genre":"d","Charter":"e","chartsAvailable":"240"}"#,
        )
        .unwrap();
        assert_eq!(song.charts_available, 240);

        // Absent field defaults to 0
        let song: SongRecord = serde_json::from_str(
            r#"{"Name":"a","Artist":"b","Year":"c","Genre":"d","Charter":"e"}"#,
        )
        .unwrap();
        assert_eq!(song.charts_available, 0);

        // Non-numeric garbage coerces to 0
        let song: SongRecord = serde_json::from_str(
            r#"{"Name":"a","Artist":"b","Year":"c","Genre":"d","Charter":"e","chartsAvailable":"n/a"}"#,
        )
        .unwrap();
        assert_eq!(song.charts_available, 0);
    }

    #[test]
    fn test_instrument_slot_order() {
        assert_eq!(Instrument::Guitar.index(), 0);
        assert_eq!(Instrument::Drums.index(), 6);
        assert_eq!(Instrument::ProDrums.index(), 9);
    }

    #[test]
    fn test_instrument_masks() {
        assert_eq!(Instrument::Guitar.mask(), 0xF);
        assert_eq!(Instrument::Bass.mask(), 0xF0);
        assert_eq!(Instrument::ProDrums.mask(), 0xF_u64 << 36);
    }

    #[test]
    fn test_instrument_from_str() {
        for instrument in Instrument::ALL {
            assert_eq!(instrument.name().parse::<Instrument>().unwrap(), instrument);
        }
        assert!(matches!(
            "kazoo".parse::<Instrument>(),
            Err(Error::UnknownInstrument(_))
        ));
    }

    #[test]
    fn test_field_accessors() {
        let song: SongRecord = serde_json::from_str(
            r#"{"Name":"t","Artist":"a","Year":"y","Genre":"g","Charter":"c","chartsAvailable":1}"#,
        )
        .unwrap();
        assert_eq!(Field::Title.get(&song), "t");
        assert_eq!(Field::Artist.get(&song), "a");
        assert_eq!(Field::Year.get(&song), "y");
        assert_eq!(Field::Genre.get(&song), "g");
        assert_eq!(Field::Charter.get(&song), "c");
    }
}
