//! Constant character tables.
//!
//! Read-only data used by the normalizer, the constraint checks and the
//! gematria scorer. Everything here is built once behind a `LazyLock` and
//! never mutated. Letter tables use the canonical UPPERCASE form.

pub mod characters;
pub mod gematria;
pub mod letters;
