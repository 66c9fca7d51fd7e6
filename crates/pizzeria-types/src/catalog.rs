//! Pizza records and catalog parsing.
//!
//! A catalog is an ordered list of records decoded in one pass from a JSON
//! array. It is never partially populated: the parse either yields every
//! entry in file order or fails as a whole.

use serde::Deserialize;
use std::path::Path;

use crate::error::Result;

/// One menu entry: a pizza name and its price.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Pizza {
    pub name: String,
    pub price: f64,
}

/// Parse a catalog from raw bytes.
///
/// The buffer must hold a JSON array of `{name, price}` objects. Unknown
/// extra fields are ignored; a missing or mistyped field fails the whole
/// parse. File order is preserved.
pub fn parse_catalog(bytes: &[u8]) -> Result<Vec<Pizza>> {
    let pizzas = serde_json::from_slice(bytes)?;
    Ok(pizzas)
}

/// Read `path` and parse its contents as a catalog.
pub fn load_catalog(path: &Path) -> Result<Vec<Pizza>> {
    let bytes = std::fs::read(path)?;
    parse_catalog(&bytes)
}
