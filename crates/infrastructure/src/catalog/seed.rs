//! Catalog seed files.
//!
//! A seed file lists the products to serve. JSON files may hold either a bare
//! array or an object with a `products` array; TOML files use
//! `[[products]]` tables:
//!
//! ```toml
//! [[products]]
//! id = 1
//! title = "My Widget"
//! version = "2.3.1"
//! ```

use item_version_domain::{DomainError, Product, ProductId};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors raised while loading a seed file
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read catalog seed {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in catalog seed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML in catalog seed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported catalog seed format: {0} (expected .json or .toml)")]
    UnsupportedFormat(String),

    #[error("invalid product record: {0}")]
    InvalidProduct(#[from] DomainError),

    #[error("duplicate product id {0} in catalog seed")]
    DuplicateId(ProductId),

    #[error("catalog seed lists no products")]
    Empty,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SeedRecord {
    id: ProductId,
    title: String,
    #[serde(default)]
    version: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SeedDocument {
    products: Vec<SeedRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonSeed {
    List(Vec<SeedRecord>),
    Document(SeedDocument),
}

/// Load the products listed in `path`, keeping file order
pub fn load_seed_file(path: &Path) -> Result<Vec<Product>, SeedError> {
    let contents = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let products = match extension.as_str() {
        "json" => parse_json_seed(&contents)?,
        "toml" => parse_toml_seed(&contents)?,
        other => return Err(SeedError::UnsupportedFormat(other.to_string())),
    };

    info!(path = %path.display(), products = products.len(), "Loaded catalog seed");

    Ok(products)
}

/// Parse a JSON seed document
pub fn parse_json_seed(contents: &str) -> Result<Vec<Product>, SeedError> {
    let records = match serde_json::from_str::<JsonSeed>(contents)? {
        JsonSeed::List(records) => records,
        JsonSeed::Document(doc) => doc.products,
    };
    into_products(records)
}

/// Parse a TOML seed document
pub fn parse_toml_seed(contents: &str) -> Result<Vec<Product>, SeedError> {
    let doc: SeedDocument = toml::from_str(contents)?;
    into_products(doc.products)
}

fn into_products(records: Vec<SeedRecord>) -> Result<Vec<Product>, SeedError> {
    if records.is_empty() {
        return Err(SeedError::Empty);
    }

    let mut seen = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .map(|record| {
            if !seen.insert(record.id) {
                return Err(SeedError::DuplicateId(record.id));
            }
            Ok(Product::new(record.id, record.title, record.version)?)
        })
        .collect()
}
