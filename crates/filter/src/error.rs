use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog is not valid JSON or TOML ({json}); TOML parse error: {toml}")]
    Parse { json: String, toml: String },

    #[error("catalog parse error: {0}")]
    Schema(String),
}
