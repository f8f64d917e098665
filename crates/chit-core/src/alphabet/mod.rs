//! The code alphabet and input normalization.
//!
//! Codes are built from a fixed 31-character alphabet that excludes
//! characters which are easily confused when read aloud or transcribed:
//!
//! - Valid characters: `0-9`, `A-H`, `J`, `K`, `M`, `N`, `P-R`, `T-Y`
//! - Excluded: `I`, `L`, `O`, `S`, `Z` (confusable with `1`, `1`, `0`,
//!   `5`, `2`)
//!
//! Normalization maps arbitrary user input into this alphabet: casing is
//! folded, the excluded look-alikes are substituted for the symbol they are
//! usually mistaken for, and anything else can be stripped. Every code
//! comparison in this crate runs on normalized text.

use std::sync::LazyLock;

use crate::error::{Error, Result};

/// The ordered character set codes are built from.
///
/// The position of each character is its symbol index; the checksum and the
/// digest projection both depend on this exact ordering.
pub const ALPHABET: &str = "0123456789ABCDEFGHJKMNPQRTUVWXY";

/// Number of symbols in [`ALPHABET`].
pub const ALPHABET_LEN: usize = 31;

/// Symbol index lookup table, built once from [`ALPHABET`].
static SYMBOL_INDEX: LazyLock<[Option<u8>; 128]> = LazyLock::new(|| {
    let mut table = [None; 128];
    for (i, b) in ALPHABET.bytes().enumerate() {
        table[usize::from(b)] = Some(u8::try_from(i).expect("alphabet index fits in u8"));
    }
    table
});

/// Returns the zero-based index of an alphabet symbol.
///
/// # Errors
///
/// Returns [`Error::InvalidSymbol`] if the character is not in the
/// alphabet. Callers are expected to [`normalize`] input first.
pub fn symbol_index(c: char) -> Result<usize> {
    if c.is_ascii() {
        if let Some(i) = SYMBOL_INDEX[c as usize] {
            return Ok(usize::from(i));
        }
    }
    Err(Error::InvalidSymbol(c))
}

/// Returns the alphabet symbol at the given index.
///
/// # Panics
///
/// Panics if `index >= ALPHABET_LEN`. Internal callers always derive the
/// index modulo the alphabet size.
#[must_use]
pub fn symbol(index: usize) -> char {
    ALPHABET.as_bytes()[index] as char
}

/// Returns whether a character is an alphabet symbol.
#[must_use]
pub fn is_symbol(c: char) -> bool {
    symbol_index(c).is_ok()
}

/// Substitutes a commonly-confused character with its canonical symbol.
///
/// `I`→`1`, `O`→`0`, `S`→`5`, `Z`→`2`, matched case-insensitively; any
/// other character is returned unchanged.
#[must_use]
pub const fn fold_confusable(c: char) -> char {
    match c {
        'I' | 'i' => '1',
        'O' | 'o' => '0',
        'S' | 's' => '5',
        'Z' | 'z' => '2',
        _ => c,
    }
}

/// Normalize text towards the code alphabet.
///
/// Uppercases the input (if `case_fold`), substitutes confusable
/// characters, and removes everything outside the alphabet (if
/// `strip_invalid`). Never fails; the result may be empty.
#[must_use]
pub fn normalize(text: &str, case_fold: bool, strip_invalid: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        let c = if case_fold { c.to_ascii_uppercase() } else { c };
        let c = fold_confusable(c);
        if strip_invalid && !is_symbol(c) {
            continue;
        }
        out.push(c);
    }
    out
}
