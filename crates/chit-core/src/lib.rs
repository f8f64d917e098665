//! # Chit Core Library
//!
//! `chit-core` generates and validates short, human-typable coupon codes:
//! groups of characters separated by a delimiter (e.g. `82EK-76V6-417V`),
//! each group ending in a checksum character.
//!
//! ## Features
//!
//! - **Unambiguous alphabet**: 31 symbols with no `I`, `L`, `O`, `S` or `Z`,
//!   so codes survive being read aloud or retyped from paper
//! - **Per-part checksums**: a trailing check symbol per group catches
//!   mistyped characters and swapped groups
//! - **Forgiving input**: validation accepts any case and auto-corrects
//!   common confusions (`I`→`1`, `O`→`0`, `S`→`5`, `Z`→`2`)
//! - **Denylist screening**: generated groups are screened against a list of
//!   offensive letter sequences and regenerated when one is hit
//! - **Deterministic**: the same seed always produces the same code, so
//!   independent systems can derive identical codes
//!
//! ## Modules
//!
//! - [`alphabet`] - The code alphabet and input normalization
//! - [`checksum`] - Per-part check digit computation
//! - [`code`] - Code schema, generation, validation and display formatting
//! - [`denylist`] - Offensive-word screening for generated parts
//!
//! ## Example
//!
//! ```rust,ignore
//! use chit_core::CodeSchema;
//!
//! let schema = CodeSchema::default();
//! let code = schema.generate()?;
//! assert!(schema.validate(&code));
//!
//! // User input is normalized before checking
//! assert!(schema.validate("82ek-76v6-4i7v"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::must_use_candidate)]

pub mod alphabet;
pub mod checksum;
pub mod code;
pub mod denylist;
pub mod error;

pub use code::{Code, CodeSchema};
pub use error::{Error, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of parts in a code
pub const DEFAULT_PARTS: usize = 3;

/// Default length of each part, including its checksum character
pub const DEFAULT_PART_LENGTH: usize = 4;

/// Default separator between parts
pub const DEFAULT_SEPARATOR: char = '-';

/// Number of random bytes drawn when generating an unseeded code
pub const SEED_BYTES: usize = 8;
