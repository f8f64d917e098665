//! Per-part check digit computation.
//!
//! Every part of a code ends in one checksum symbol derived from the part's
//! 1-based position and its data symbols:
//!
//! ```text
//! acc = part_number
//! for each data symbol: acc = acc * 19 + index(symbol)
//! check = ALPHABET[acc mod 30]
//! ```
//!
//! The modulus is one less than the alphabet size, so the final alphabet
//! symbol (`Y`) never appears as a check digit. Seeding the accumulator
//! with the part number makes parts position-dependent: swapping two whole
//! valid parts invalidates the code. Swapping two characters *within* a
//! part is not guaranteed to be caught; that is a long-standing property of
//! the algorithm and is kept for compatibility with existing codes.

use crate::alphabet;
use crate::error::Result;

/// Multiplier applied to the accumulator for each data symbol.
pub const CHECKSUM_MULTIPLIER: usize = 19;

/// Modulus for the final check symbol, one less than the alphabet size.
pub const CHECKSUM_MODULUS: usize = alphabet::ALPHABET_LEN - 1;

/// Computes the check symbol for one part of a code.
///
/// `part_number` is the part's 1-based position within the code and `data`
/// its symbols without the trailing check character.
///
/// # Errors
///
/// Returns [`Error::InvalidSymbol`](crate::Error::InvalidSymbol) if `data`
/// contains a character outside the alphabet; callers must normalize
/// first.
pub fn checkdigit(part_number: usize, data: &str) -> Result<char> {
    // Reducing the accumulator every step leaves the final residue
    // unchanged and keeps the arithmetic overflow-free for any data length.
    let mut acc = part_number % CHECKSUM_MODULUS;
    for c in data.chars() {
        acc = (acc * CHECKSUM_MULTIPLIER + alphabet::symbol_index(c)?) % CHECKSUM_MODULUS;
    }
    Ok(alphabet::symbol(acc))
}
