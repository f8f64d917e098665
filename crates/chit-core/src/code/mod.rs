//! Code schema, generation, validation and display formatting.
//!
//! This module turns seed bytes into finished coupon codes and checks codes
//! typed back in by users.
//!
//! ## Code Format
//!
//! A code is `parts` groups of `part_length` characters joined by a
//! separator, optionally preceded by a literal prefix token:
//!
//! ```text
//! [PREFIX-]XXXC-XXXC-XXXC
//! ```
//!
//! where `X` is a data symbol and `C` the group's check digit. With the
//! default schema (3 parts of 4 characters) a code carries three data
//! symbols per group drawn from the 31-symbol alphabet.
//!
//! ## Generation
//!
//! Seed bytes are expanded through a 160-bit SHA-1 digest, each digest byte
//! is projected onto the alphabet (`byte mod 31`), and the resulting symbol
//! stream is sliced into groups. Each group gets its check digit appended
//! and is screened against the offensive-word denylist; a rejected group is
//! discarded and the stream advances, so the digest must hold enough
//! symbols for the configured shape plus any skips. SHA-1 is used as a
//! deterministic expander here, not for collision resistance.
//!
//! ## Example
//!
//! ```rust,ignore
//! use chit_core::CodeSchema;
//!
//! let schema = CodeSchema::default();
//! let code = schema.generate_from_seed(b"123456890")?;
//! assert_eq!(code, "82EK-76V6-417V");
//! assert!(schema.validate("82ek-76v6-4i7v"));
//! ```

use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};

use crate::alphabet;
use crate::checksum;
use crate::denylist;
use crate::error::{Error, Result};

/// Shape of the codes a schema produces: part count, part width, separator
/// and an optional literal prefix.
///
/// A schema is immutable after construction and cheap to share; all
/// generation and validation methods take `&self`. Construct with
/// [`CodeSchema::new`] to have the values checked, or rely on
/// [`CodeSchema::default`] for the standard 3×4 shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeSchema {
    /// Literal prefix token prepended to every code, empty for none
    pub prefix: String,
    /// Separator between the prefix and the parts
    pub separator: char,
    /// Number of checksum-terminated parts
    pub parts: usize,
    /// Characters per part, including the trailing check digit
    pub part_length: usize,
}

impl Default for CodeSchema {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            separator: crate::DEFAULT_SEPARATOR,
            parts: crate::DEFAULT_PARTS,
            part_length: crate::DEFAULT_PART_LENGTH,
        }
    }
}

impl CodeSchema {
    /// Create a schema, validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSchema`] if `parts` is zero, `part_length`
    /// is below 2, the separator could be mistaken for an alphabet symbol,
    /// or the prefix contains the separator.
    pub fn new(
        prefix: impl Into<String>,
        separator: char,
        parts: usize,
        part_length: usize,
    ) -> Result<Self> {
        let schema = Self {
            prefix: prefix.into(),
            separator,
            parts,
            part_length,
        };
        schema.check()?;
        Ok(schema)
    }

    /// Validates the schema fields.
    fn check(&self) -> Result<()> {
        if self.parts == 0 {
            return Err(Error::InvalidSchema {
                field: "parts",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.part_length < 2 {
            return Err(Error::InvalidSchema {
                field: "part_length",
                reason: "must be at least 2 (one data symbol plus the check digit)".to_string(),
            });
        }
        // Normalization would swallow a separator that reads as a symbol,
        // making codes ambiguous to re-slice.
        if alphabet::is_symbol(alphabet::fold_confusable(
            self.separator.to_ascii_uppercase(),
        )) {
            return Err(Error::InvalidSchema {
                field: "separator",
                reason: format!("'{}' reads as a code symbol", self.separator),
            });
        }
        if self.prefix.contains(self.separator) {
            return Err(Error::InvalidSchema {
                field: "prefix",
                reason: "must not contain the separator".to_string(),
            });
        }
        Ok(())
    }

    /// Generate a code from fresh OS randomness.
    ///
    /// Draws [`SEED_BYTES`](crate::SEED_BYTES) bytes from the system's
    /// secure random source and derives the code from them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RandomSourceUnavailable`] if the random source
    /// fails, or any error of [`generate_from_seed`](Self::generate_from_seed).
    pub fn generate(&self) -> Result<String> {
        let mut seed = [0u8; crate::SEED_BYTES];
        rand::rngs::OsRng
            .try_fill_bytes(&mut seed)
            .map_err(|e| Error::RandomSourceUnavailable(e.to_string()))?;
        self.generate_from_seed(&seed)
    }

    /// Generate a code deterministically from caller-supplied seed bytes.
    ///
    /// The same seed and schema always produce the same code, byte for
    /// byte, which is what makes independently-built systems agree on
    /// derived codes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSchema`] for an unusable schema, or
    /// [`Error::InsufficientEntropy`] if the digest's 20 symbols run out
    /// before every part is filled, either because the configured shape is
    /// too large or because denylist skips consumed the tail. The caller
    /// may retry with a fresh seed; a partial code is never returned.
    pub fn generate_from_seed(&self, seed: &[u8]) -> Result<String> {
        self.check()?;

        let digest = Sha1::digest(seed);
        let symbols: Vec<char> = digest
            .iter()
            .map(|&b| alphabet::symbol(usize::from(b) % alphabet::ALPHABET_LEN))
            .collect();

        let data_len = self.part_length - 1;
        let mut cursor = 0;
        let mut accepted: Vec<String> = Vec::with_capacity(self.parts);

        while accepted.len() < self.parts {
            let end = cursor + data_len;
            if end > symbols.len() {
                return Err(Error::InsufficientEntropy {
                    needed: end,
                    available: symbols.len(),
                });
            }
            let data: String = symbols[cursor..end].iter().collect();
            cursor = end;

            let check = checksum::checkdigit(accepted.len() + 1, &data)?;
            let candidate = format!("{data}{check}");
            if denylist::is_bad_word(&data) || denylist::is_bad_word(&candidate) {
                // A discarded slice is wasted entropy; the part slot stays
                // open and the stream moves on.
                tracing::debug!("discarding denylisted candidate part '{candidate}'");
                continue;
            }
            accepted.push(candidate);
        }

        let sep = self.separator.to_string();
        let body = accepted.join(&sep);
        if self.prefix.is_empty() {
            Ok(body)
        } else {
            Ok(format!("{}{}{}", self.prefix, sep, body))
        }
    }

    /// Check a user-entered code against the schema.
    ///
    /// Input is forgiving: any casing, confusable characters and stray
    /// separators or spacing are normalized away before the per-part
    /// checksums are recomputed. Malformed input of any shape yields
    /// `false`, never an error.
    #[must_use]
    pub fn validate(&self, code: &str) -> bool {
        if self.check().is_err() {
            return false;
        }

        let body = if self.prefix.is_empty() {
            code
        } else {
            let tokens: Vec<&str> = code.split(self.separator).collect();
            if tokens.len() == self.parts + 1 {
                // A prefix token is present; it must match.
                if alphabet::normalize(tokens[0], true, true) != self.normalized_prefix() {
                    return false;
                }
                &code[tokens[0].len() + self.separator.len_utf8()..]
            } else {
                code
            }
        };

        let cleaned = alphabet::normalize(body, true, true);
        if cleaned.len() != self.parts * self.part_length {
            return false;
        }

        for (i, chunk) in cleaned.as_bytes().chunks(self.part_length).enumerate() {
            let chunk = std::str::from_utf8(chunk).expect("normalized code is ASCII");
            let (data, check) = chunk.split_at(self.part_length - 1);
            let Ok(expected) = checksum::checkdigit(i + 1, data) else {
                return false;
            };
            if check.chars().next() != Some(expected) {
                return false;
            }
        }
        true
    }

    /// Normalize a code to its canonical display form.
    ///
    /// Strips casing, confusables and stray characters, re-inserts the
    /// separator at fixed positions and re-applies the configured prefix.
    /// Checksums are not consulted; use [`validate`](Self::validate) or
    /// [`parse`](Self::parse) to check correctness.
    #[must_use]
    pub fn normalize(&self, code: &str) -> String {
        let body = match code.split_once(self.separator) {
            Some((head, rest))
                if !self.prefix.is_empty()
                    && alphabet::normalize(head, true, true) == self.normalized_prefix() =>
            {
                rest
            }
            _ => code,
        };

        let cleaned = alphabet::normalize(body, true, true);
        let width = self.part_length.max(1);
        let grouped: Vec<&str> = cleaned
            .as_bytes()
            .chunks(width)
            .map(|chunk| std::str::from_utf8(chunk).expect("normalized code is ASCII"))
            .collect();

        let sep = self.separator.to_string();
        let body = grouped.join(&sep);
        if self.prefix.is_empty() {
            body
        } else {
            format!("{}{}{}", self.prefix, sep, body)
        }
    }

    /// Parse and validate a code, returning it in canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCodeFormat`] if the code does not validate
    /// under this schema.
    pub fn parse(&self, input: &str) -> Result<Code> {
        if self.validate(input) {
            Ok(Code {
                code: self.normalize(input),
            })
        } else {
            Err(Error::InvalidCodeFormat(input.trim().to_string()))
        }
    }

    fn normalized_prefix(&self) -> String {
        alphabet::normalize(&self.prefix, true, true)
    }
}

/// A validated code in canonical form.
///
/// Obtained from [`CodeSchema::parse`]; the inner string is guaranteed to
/// have passed checksum validation under the schema that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code {
    code: String,
}

impl Code {
    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.code
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}
