//! Text folding shared by the fuzzy scorer.
//!
//! Queries and catalog fields are folded to lowercase ASCII words before
//! similarity scoring, so "AC/DC" and "acdc  " compare equal.

use any_ascii::any_ascii;
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Runs of anything that is not a lowercase ASCII letter or digit.
static NON_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Check if a character is a Unicode combining mark (diacritical mark).
/// Used to filter out accents during normalization.
pub fn is_combining_mark(c: char) -> bool {
    matches!(c as u32, 0x0300..=0x036F | 0x1AB0..=0x1AFF | 0x1DC0..=0x1DFF | 0xFE20..=0xFE2F)
}

/// Fold Unicode text to ASCII by applying NFKD decomposition and removing
/// combining marks, e.g. "Beyoncé" → "beyonce", "Motörhead" → "motorhead".
pub fn fold_to_ascii(s: &str) -> String {
    // First strip diacritics via NFKD decomposition
    let stripped: String = s.nfkd().filter(|c| !is_combining_mark(*c)).collect();
    // Then transliterate any remaining non-ASCII (Cyrillic, CJK, etc.)
    any_ascii(&stripped).to_lowercase()
}

/// Normalize a string for similarity scoring: ASCII-fold, then collapse all
/// punctuation and whitespace into single spaces.
pub fn normalize(s: &str) -> String {
    let folded = fold_to_ascii(s);
    NON_ALNUM.replace_all(&folded, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_to_ascii() {
        assert_eq!(fold_to_ascii("Björk"), "bjork");
        assert_eq!(fold_to_ascii("Motörhead"), "motorhead");
        assert_eq!(fold_to_ascii("Beyoncé"), "beyonce");
    }

    #[test]
    fn test_normalize_strips_punctuation() {
        assert_eq!(normalize("AC/DC"), "ac dc");
        assert_eq!(normalize("Don't Stop Me Now!"), "don t stop me now");
        assert_eq!(normalize("  Thunderstruck  "), "thunderstruck");
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("a   b\t c"), "a b c");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("!!!"), "");
    }
}
