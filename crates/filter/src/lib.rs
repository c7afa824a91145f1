mod catalog;
mod engine;
mod error;
mod item;
mod query;

pub use catalog::Catalog;
pub use engine::{apply_filter, compute_visibility, FilterEngine, FilterOutcome};
pub use error::{CatalogError, Result};
pub use item::{Card, DisplayItem};
pub use query::Query;
