//! Uniform random sampling over an immutable catalog.
//!
//! Every function takes the RNG as a parameter so tests can seed a
//! deterministic generator; the binary passes `thread_rng`. Empty results
//! come back as `None`, never as errors.

use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashSet;

use crate::models::{Field, SongRecord};

/// Pick one value uniformly from the **distinct** values of `field`.
///
/// Duplicates collapse before the draw: a year with two hundred songs is no
/// more likely to come up than a year with one. Distinct values are kept in
/// first-occurrence order so a seeded RNG is reproducible.
pub fn random_distinct_value<'a, R: Rng>(
    catalog: &'a [SongRecord],
    field: Field,
    rng: &mut R,
) -> Option<&'a str> {
    let mut seen = FxHashSet::default();
    let mut values: Vec<&str> = Vec::new();
    for song in catalog {
        let value = field.get(song);
        if seen.insert(value) {
            values.push(value);
        }
    }
    values.choose(rng).copied()
}

/// One record uniformly at random from the full catalog (not deduplicated).
pub fn random_song<'a, R: Rng>(
    catalog: &'a [SongRecord],
    rng: &mut R,
) -> Option<(&'a str, &'a str)> {
    catalog
        .choose(rng)
        .map(|song| (song.title.as_str(), song.artist.as_str()))
}

/// Like [`random_song`] but also returns the charter short name.
pub fn random_song_full<'a, R: Rng>(
    catalog: &'a [SongRecord],
    rng: &mut R,
) -> Option<(&'a str, &'a str, &'a str)> {
    catalog.choose(rng).map(|song| {
        (
            song.title.as_str(),
            song.artist.as_str(),
            song.charter.as_str(),
        )
    })
}

/// One song uniformly at random among those by `artist` (exact,
/// case-sensitive match). `None` when the artist has no songs.
pub fn random_song_by_artist<'a, R: Rng>(
    catalog: &'a [SongRecord],
    artist: &str,
    rng: &mut R,
) -> Option<(&'a str, &'a str)> {
    let matches: Vec<&SongRecord> = catalog.iter().filter(|s| s.artist == artist).collect();
    matches
        .choose(rng)
        .map(|song| (song.title.as_str(), song.artist.as_str()))
}
