//! Structured query dispatch.
//!
//! A query either carries a recognized prefix (`genre:`, `year:`), is the
//! literal keyword `csv`, or falls through to fuzzy ranking. Dispatch is
//! pure: the caller renders the result and does any random picking.

use crate::models::{MatchCandidate, SongRecord};
use crate::scoring;

/// What a query resolved to.
#[derive(Debug)]
pub enum Resolution<'a> {
    /// Case-insensitive substring matches on the genre field.
    Genre(Vec<&'a SongRecord>),
    /// Exact string-equality matches on the year field.
    Year(Vec<&'a SongRecord>),
    /// The `csv` keyword: caller draws one random song from the catalog.
    DirectRandom,
    /// Free text: ranked fuzzy candidates against title and artist.
    Fuzzy(Vec<MatchCandidate>),
    /// A structured query matched no records.
    NoMatch,
}

/// Resolve a query against the catalog. Rules are checked in order:
/// `genre:` prefix, `year:` prefix, the `csv` keyword, fuzzy fallback.
pub fn resolve<'a>(catalog: &'a [SongRecord], query: &str, top_n: usize) -> Resolution<'a> {
    if let Some(rest) = query.strip_prefix("genre:") {
        let needle = rest.trim().to_lowercase();
        let matches: Vec<&SongRecord> = catalog
            .iter()
            .filter(|song| song.genre.to_lowercase().contains(&needle))
            .collect();
        return if matches.is_empty() {
            Resolution::NoMatch
        } else {
            Resolution::Genre(matches)
        };
    }

    if let Some(rest) = query.strip_prefix("year:") {
        let needle = rest.trim();
        let matches: Vec<&SongRecord> = catalog
            .iter()
            .filter(|song| song.year == needle)
            .collect();
        return if matches.is_empty() {
            Resolution::NoMatch
        } else {
            Resolution::Year(matches)
        };
    }

    if query == "csv" {
        return Resolution::DirectRandom;
    }

    Resolution::Fuzzy(scoring::rank(catalog, query, top_n))
}
