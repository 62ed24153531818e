use std::collections::HashSet;

use polars::prelude::{AnyValue, DataFrame};

use crate::error::{CodesError, Result};

/// Separator joining individual codes within a single cell.
pub const CODE_SEPARATOR: char = ';';

/// Collect the distinct codes appearing anywhere in the given cells.
///
/// Each cell may hold several codes joined by [`CODE_SEPARATOR`], e.g.
/// `"code1;code2"`. Tokens are kept verbatim: no trimming, no case folding,
/// and the empty tokens produced by empty cells or consecutive separators
/// are preserved. Cell order and duplication do not affect the result.
pub fn unique_codes<I, S>(cells: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut codes = HashSet::new();
    for cell in cells {
        for token in cell.as_ref().split(CODE_SEPARATOR) {
            if !codes.contains(token) {
                codes.insert(token.to_string());
            }
        }
    }
    codes
}

/// Collect the distinct codes of a dataframe column, by column name.
///
/// Null cells are skipped. Fails if the column is missing or if any cell
/// holds a non-string value.
pub fn column_unique_codes(df: &DataFrame, column: &str) -> Result<HashSet<String>> {
    let series = df.column(column).map_err(|_| CodesError::ColumnNotFound {
        name: column.to_string(),
    })?;
    let mut cells = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        match series.get(idx).unwrap_or(AnyValue::Null) {
            AnyValue::Null => continue,
            AnyValue::String(value) => cells.push(value.to_string()),
            AnyValue::StringOwned(value) => cells.push(value.to_string()),
            other => {
                return Err(CodesError::NotStringColumn {
                    name: column.to_string(),
                    dtype: other.dtype().to_string(),
                });
            }
        }
    }
    let codes = unique_codes(&cells);
    tracing::debug!(
        column,
        cells = cells.len(),
        codes = codes.len(),
        "extracted unique codes"
    );
    Ok(codes)
}
