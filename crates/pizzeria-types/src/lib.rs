pub mod catalog;
pub mod error;

pub use catalog::{Pizza, load_catalog, parse_catalog};
pub use error::{Error, Result};
