//! Serializable and source-text forms of a lookup table.
//!
//! Every target keeps the exact keys, the exact expression strings and the
//! sort-then-pack key rule, so an exported artifact answers lookups without
//! running the search again.

mod awk;
mod json;
mod rust_source;

pub use awk::{AwkScript, emit_awk};
pub use json::{ExportedTable, from_json, to_json};
pub use rust_source::{RustSource, emit_rust};

#[cfg(test)]
mod tests;
