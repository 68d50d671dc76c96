use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::{Amount, LineItem, ModelError};

/// Errors that can occur when reading a cart csv
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("failed to open {}: {source}", .path.display())]
    Open { path: PathBuf, source: csv::Error },

    #[error("line {line}: failed to parse row: {source}")]
    Parse { line: usize, source: csv::Error },

    #[error("line {line}: {source}")]
    InvalidItem { line: usize, source: ModelError },
}

#[derive(Debug, Deserialize)]
struct InputRow {
    product: String,
    quantity: u32,
    price: f64,
}

/// Read line items from a csv file with a `product,quantity,price` header.
///
/// Each row is parsed independently so callers can skip bad rows.
pub fn read_cart(
    path: impl AsRef<Path>,
) -> Result<impl Iterator<Item = Result<LineItem, CsvError>>, CsvError> {
    let path = path.as_ref();
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| CsvError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(reader
        .into_deserialize::<InputRow>()
        .enumerate()
        .map(|(idx, result)| {
            let line = idx + 2; // 1-indexed, skip header
            let row = result.map_err(|source| CsvError::Parse { line, source })?;
            let price = Amount::try_from_float(row.price).ok_or_else(|| {
                CsvError::InvalidItem {
                    line,
                    source: ModelError::InvalidAmount(row.price),
                }
            })?;
            LineItem::new(row.product, row.quantity, price)
                .map_err(|source| CsvError::InvalidItem { line, source })
        }))
}
