//! CLI subcommands and shared catalog loading.

pub mod catalog;
pub mod checkout;

use std::path::Path;

use hista_core::Product;
use hista_storefront::{Catalog, CatalogError};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while loading a product file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// The file is not valid YAML for a product list.
    #[error("invalid YAML catalog: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The products failed validation or JSON parsing.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Load the catalog from `path`, or the built-in catalog when `None`.
///
/// Files ending in `.yaml` or `.yml` are read as YAML, anything else as JSON.
///
/// # Errors
///
/// Returns `LoadError` if the file cannot be read, parsed or validated.
pub async fn load_catalog(path: Option<&Path>) -> Result<Catalog, LoadError> {
    let Some(path) = path else {
        return Ok(Catalog::builtin());
    };

    info!(path = %path.display(), "Loading catalog from file");

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;

    parse_catalog(&content, is_yaml(path))
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}

fn parse_catalog(content: &str, yaml: bool) -> Result<Catalog, LoadError> {
    if yaml {
        let products: Vec<Product> = serde_yaml::from_str(content)?;
        Ok(Catalog::new(products)?)
    } else {
        Ok(Catalog::from_json(content)?)
    }
}
