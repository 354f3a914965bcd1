//! Fuzzy similarity scoring and ranking over catalog records.
//!
//! Scores live on a 0-100 integer scale. Per record exactly one comparison
//! is made per field (title, artist) and the higher of the two wins.

use rustc_hash::FxHashSet;
use strsim::normalized_levenshtein;

use crate::models::{MatchCandidate, SongRecord};
use crate::normalize::normalize;

/// Ranked lists are cut to this length unless the caller asks otherwise.
pub const DEFAULT_TOP_N: usize = 5;

fn ratio(a: &str, b: &str) -> f64 {
    normalized_levenshtein(a, b)
}

/// Tokens of an already-normalized string, sorted and re-joined.
fn sort_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn join_tokens(base: &str, rest: &str) -> String {
    match (base.is_empty(), rest.is_empty()) {
        (true, _) => rest.to_string(),
        (_, true) => base.to_string(),
        _ => format!("{} {}", base, rest),
    }
}

/// Token-set ratio over two normalized strings: split into shared and
/// unshared tokens, then compare the sorted recombinations. A string whose
/// tokens are a subset of the other's scores 1.0.
fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a: FxHashSet<&str> = a.split_whitespace().collect();
    let tokens_b: FxHashSet<&str> = b.split_whitespace().collect();

    let mut common: Vec<&str> = tokens_a.intersection(&tokens_b).copied().collect();
    common.sort_unstable();
    let mut only_a: Vec<&str> = tokens_a.difference(&tokens_b).copied().collect();
    only_a.sort_unstable();
    let mut only_b: Vec<&str> = tokens_b.difference(&tokens_a).copied().collect();
    only_b.sort_unstable();

    let base = common.join(" ");
    let combined_a = join_tokens(&base, &only_a.join(" "));
    let combined_b = join_tokens(&base, &only_b.join(" "));

    let mut best = ratio(&combined_a, &combined_b);
    if !base.is_empty() {
        best = best
            .max(ratio(&base, &combined_a))
            .max(ratio(&base, &combined_b));
    }
    best
}

/// Similarity of two strings on the 0-100 scale, case- and punctuation-
/// insensitive. Takes the best of the plain, joined, token-sort, and
/// token-set ratios so word order, extra tokens, and punctuation-only
/// splits ("acdc" vs "AC/DC") do not sink obvious matches.
pub fn similarity(a: &str, b: &str) -> i32 {
    let norm_a = normalize(a);
    let norm_b = normalize(b);

    if norm_a.is_empty() || norm_b.is_empty() {
        return if norm_a == norm_b { 100 } else { 0 };
    }

    let plain = ratio(&norm_a, &norm_b);
    // Punctuation normalizes to a space, so "AC/DC" becomes "ac dc";
    // comparing with spaces removed keeps it equal to "acdc".
    let joined = ratio(&norm_a.replace(' ', ""), &norm_b.replace(' ', ""));
    let token_sort = ratio(&sort_tokens(&norm_a), &sort_tokens(&norm_b));
    let token_set = token_set_ratio(&norm_a, &norm_b);

    (plain.max(joined).max(token_sort).max(token_set) * 100.0).round() as i32
}

/// Score one record against a query: one comparison per field, best wins.
pub fn score_record(query: &str, song: &SongRecord) -> i32 {
    similarity(query, &song.title).max(similarity(query, &song.artist))
}

/// Rank the whole catalog against a free-text query.
///
/// Sorted by score descending; `sort_by` is stable, so equal scores keep
/// their catalog order. Truncated to `top_n`.
pub fn rank(catalog: &[SongRecord], query: &str, top_n: usize) -> Vec<MatchCandidate> {
    let mut scored: Vec<MatchCandidate> = catalog
        .iter()
        .map(|song| MatchCandidate {
            title: song.title.clone(),
            artist: song.artist.clone(),
            charter: song.charter.clone(),
            score: score_record(query, song),
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(top_n);
    scored
}

// ============================================================================
// Confirmation Decision Table
// ============================================================================

/// Outcome of the confirmation prompt shown under a ranked list of `n`
/// candidates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Accept the highest-scoring candidate.
    Best,
    /// Abort the search, no result.
    Abort,
    /// Accept the candidate at this zero-based rank.
    Pick(usize),
    /// Unrecognized input; no result, no state change.
    Invalid,
}

impl Selection {
    /// `"y"` → best, `"n"` → abort, a digit `1..=n` → that candidate,
    /// anything else → invalid.
    pub fn parse(input: &str, n: usize) -> Selection {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("y") {
            return Selection::Best;
        }
        if trimmed.eq_ignore_ascii_case("n") {
            return Selection::Abort;
        }
        if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(i) = trimmed.parse::<usize>() {
                if (1..=n).contains(&i) {
                    return Selection::Pick(i - 1);
                }
            }
        }
        Selection::Invalid
    }
}

// ============================================================================
// Tests
// ============================================================================
