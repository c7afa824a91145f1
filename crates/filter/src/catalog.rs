use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::item::DisplayItem;

/// The fixed card collection a filter runs over.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    #[serde(default)]
    pub cards: Vec<DisplayItem>,
}

impl Catalog {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_slice(&bytes)?;
        log::debug!(
            "loaded {} cards from {}",
            catalog.cards.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parse JSON (array or `{"cards": [...]}`), falling back to TOML
    /// (`[[cards]]`).
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let value = parse_value(bytes)?;
        let catalog = match value {
            serde_json::Value::Array(_) => {
                serde_json::from_value(value).map(|cards| Catalog { cards })
            }
            other => serde_json::from_value(other),
        };
        catalog.map_err(|err| CatalogError::Schema(err.to_string()))
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

fn parse_value(bytes: &[u8]) -> Result<serde_json::Value> {
    let json_err = match serde_json::from_slice::<serde_json::Value>(bytes) {
        Ok(value) => return Ok(value),
        Err(err) => err,
    };
    let parse_err = |toml: String| CatalogError::Parse {
        json: json_err.to_string(),
        toml,
    };
    let utf8 = std::str::from_utf8(bytes).map_err(|err| parse_err(err.to_string()))?;
    let table: toml::Table = toml::from_str(utf8).map_err(|err| parse_err(err.to_string()))?;
    serde_json::to_value(table).map_err(|err| CatalogError::Schema(err.to_string()))
}
