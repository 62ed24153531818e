//! Extraction of the unique codes appearing in a coded dataset column.
//!
//! Coding studies store the codes assigned to an item as a single cell, with
//! several codes joined by semicolons (`"code1;code2"`). This crate splits
//! those cell groups apart and returns the set of distinct individual codes,
//! either from any iterable of cells ([`unique_codes`]) or straight from a
//! dataframe column by name ([`column_unique_codes`]).

pub mod error;
pub mod extract;

pub use error::{CodesError, Result};
pub use extract::{CODE_SEPARATOR, column_unique_codes, unique_codes};
