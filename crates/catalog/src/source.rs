//! Where the catalog payload comes from.
//!
//! A payload is JSON: either an array of product records or an object with a
//! `products` array. Sources only fetch and parse; turning records into
//! products (and rejecting bad ones) is the store's job.

use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use storefront_products::ProductRecord;

use crate::error::LoadError;

/// Read-only origin of the raw product records, fetched once per session.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Human-readable location, used in logs and errors.
    fn describe(&self) -> String;

    async fn fetch(&self) -> Result<Vec<ProductRecord>, LoadError>;
}

/// Parse a catalog payload into raw records.
pub fn parse_payload(payload: &str) -> Result<Vec<ProductRecord>, LoadError> {
    let value: JsonValue =
        serde_json::from_str(payload).map_err(|e| LoadError::malformed(e.to_string()))?;

    let list = match value {
        JsonValue::Array(items) => JsonValue::Array(items),
        JsonValue::Object(mut map) => map
            .remove("products")
            .ok_or_else(|| LoadError::malformed("expected a `products` array"))?,
        other => {
            return Err(LoadError::malformed(format!(
                "expected an array of products, found {}",
                json_kind(&other)
            )));
        }
    };

    serde_json::from_value(list).map_err(|e| LoadError::malformed(e.to_string()))
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

/// Payload held in memory (embedded catalogs, tests).
#[derive(Debug, Clone)]
pub struct StaticSource {
    payload: String,
}

impl StaticSource {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

#[async_trait]
impl CatalogSource for StaticSource {
    fn describe(&self) -> String {
        "static payload".to_string()
    }

    async fn fetch(&self) -> Result<Vec<ProductRecord>, LoadError> {
        parse_payload(&self.payload)
    }
}

/// Payload read from a local file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<ProductRecord>, LoadError> {
        let payload = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| LoadError::unreachable(self.describe(), e))?;
        parse_payload(&payload)
    }
}

/// Payload served over HTTP(S), e.g. the static `products.json` next to a site.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

#[cfg(feature = "http")]
impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[cfg(feature = "http")]
#[async_trait]
impl CatalogSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Vec<ProductRecord>, LoadError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| LoadError::unreachable(self.describe(), e))?;

        let payload = response
            .text()
            .await
            .map_err(|e| LoadError::unreachable(self.describe(), e))?;
        parse_payload(&payload)
    }
}
