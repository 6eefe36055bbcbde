//! Precomputed answers for every digit multiset

mod builder;
mod errors;
mod lookup;
mod query;

pub use builder::{CANONICAL_MULTISETS, TableBuilder, canonical_multisets};
pub use errors::TableError;
pub use lookup::LookupTable;
pub use query::TableQuery;
