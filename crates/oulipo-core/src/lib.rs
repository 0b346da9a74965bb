//! Core library for oulipo.
//!
//! Checks whether a text satisfies the formal writing constraints of the
//! Oulipo tradition (lipograms, palindromes, acrostics, anagrams, ...) and
//! scores texts with gematria tables.
//!
//! # Modules
//!
//! - [`normalize`] - Canonical letter form, word and line tokenization
//! - [`multiset`] - Letter and word multisets
//! - [`constraints`] - Constraint predicates and the [`evaluate`] registry
//! - [`gematria`] - Letter value tables and text scoring
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use oulipo_core::constraints::{anagrams, mirror};
//! use oulipo_core::gematria::{GematriaTable, TableName, gematria_total};
//!
//! assert!(mirror::is_palindrome("Ésope reste ici et se repose."));
//! assert!(anagrams::check_anagram("Sourient:", "Routines !"));
//!
//! let table = GematriaTable::named(TableName::FrenchRank);
//! assert_eq!(gematria_total("fenouil", table).unwrap(), 82);
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod constraints;
pub mod error;
pub mod gematria;
pub mod multiset;
pub mod normalize;
pub mod tables;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use constraints::{Constraint, ConstraintParams, ConstraintReport, evaluate, evaluate_all};
pub use error::{ConfigError, ConfigResult, ConstraintError, ConstraintResult};
pub use gematria::{GematriaTable, TableName};

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
