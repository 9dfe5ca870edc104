//! Free-text normalization for country-name comparison.
//!
//! Both alias keys and player keystrokes pass through `normalize`, so the
//! two sides can never disagree on casing, spacing, or accents. Folding
//! diacritics here is what makes "São Tomé and Príncipe",
//! "Sao Tome and Principe" and "sao-tome-and-principe" produce one key.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonicalizes a name into a comparison key.
///
/// Trims, lowercases, expands ligatures, strips combining marks after NFD
/// decomposition, and removes all whitespace and hyphens. Pure and total:
/// any input yields a key, possibly the empty string.
pub fn normalize(input: &str) -> String {
    input
        .trim()
        .to_lowercase()
        .replace('ß', "ss")
        .replace('æ', "ae")
        .replace('œ', "oe")
        .replace('\u{2019}', "'")
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}
