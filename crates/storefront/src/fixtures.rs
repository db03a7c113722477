//! Mock catalog data standing in for a backend.
//!
//! A fixture is a YAML or JSON document (picked by file extension) holding the
//! lists every surface is mounted with.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};
use vitrine_core::{Address, FavoriteItem, LineItem, Product};

/// Errors raised while loading a fixture.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Failed to read fixture {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML fixture: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON fixture: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported fixture format '{0}' (expected .yaml, .yml or .json)")]
    UnsupportedExtension(String),
}

/// Everything the surfaces can be mounted with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogFixture {
    /// Cart drawer and cart card contents.
    pub cart: Vec<LineItem>,
    /// Order summary contents.
    pub order_summary: Vec<LineItem>,
    pub favorites: Vec<FavoriteItem>,
    /// Product shown on the detail page.
    pub product: Option<Product>,
    pub addresses: Vec<Address>,
}

impl CatalogFixture {
    /// Load a fixture from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an unknown extension,
    /// or does not parse.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let parse: fn(&str) -> Result<Self, FixtureError> = match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml,
            "json" => Self::from_json,
            other => return Err(FixtureError::UnsupportedExtension(other.to_string())),
        };

        let contents = fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let fixture = parse(&contents)?;

        debug!(
            cart = fixture.cart.len(),
            favorites = fixture.favorites.len(),
            addresses = fixture.addresses.len(),
            "fixture loaded"
        );
        Ok(fixture)
    }

    /// Parse a YAML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not describe a catalog.
    pub fn from_yaml(contents: &str) -> Result<Self, FixtureError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Parse a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not describe a catalog.
    pub fn from_json(contents: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(contents)?)
    }
}
