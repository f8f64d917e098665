//! Offensive-word screening for generated parts.
//!
//! A generated part must never spell an offensive four-letter word, with or
//! without the usual digit-for-letter substitutions. The list is kept
//! ROT13-encoded in source so the plaintext words do not appear in the
//! repository; it is decoded and normalized once, on first use, and shared
//! read-only by all callers afterwards.
//!
//! The encoding is not a security measure, just a reversible transform to
//! keep the literal words out of source control.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::alphabet;

/// The denylist, ROT13-encoded.
const ENCODED_WORDS: &[&str] = &[
    "SHPX", "PHAG", "JNAX", "JNAT", "CVFF", "PBPX", "FUVG", "GJNG", "GVGF",
    "SNEG", "URYY", "ZHSS", "QVPX", "XABO", "NEFR", "FUNT", "GBFF", "FYHG",
    "GHEQ", "FYNT", "PENC", "CBBC", "OHGG", "SRPX", "OBBO", "WVFZ", "WVMM",
    "CUNG",
];

/// Decoded and normalized denylist, built once on first use.
static DENYLIST: LazyLock<HashSet<String>> = LazyLock::new(|| {
    ENCODED_WORDS
        .iter()
        .map(|word| alphabet::normalize(&rot13(word), true, false))
        .collect()
});

/// Rotates every Latin letter 13 positions, preserving case and leaving
/// other characters unchanged. Applying it twice returns the input.
#[must_use]
pub fn rot13(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'A'..='Z' => (((c as u8 - b'A' + 13) % 26) + b'A') as char,
            'a'..='z' => (((c as u8 - b'a' + 13) % 26) + b'a') as char,
            _ => c,
        })
        .collect()
}

/// Returns whether a candidate part is denylisted.
///
/// The candidate is normalized (case folded, confusables substituted)
/// before the membership test, so `"shag"`, `"SHAG"` and `"5HAG"` all
/// match the same entry.
#[must_use]
pub fn is_bad_word(candidate: &str) -> bool {
    DENYLIST.contains(&alphabet::normalize(candidate, true, false))
}
