//! Environment-driven configuration.

use crate::error::LoadError;
use crate::filter::{ALL_CATEGORIES, DiscountFilter};
use crate::source::{CatalogSource, FileSource};

pub const CATALOG_VAR: &str = "STOREFRONT_CATALOG";
pub const CATEGORY_VAR: &str = "STOREFRONT_CATEGORY";
pub const DISCOUNT_VAR: &str = "STOREFRONT_DISCOUNT";

const DEFAULT_CATALOG: &str = "products.json";

/// Where to load the catalog from and which selection to start with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// File path or `http(s)://` URL.
    pub location: String,
    pub initial_category: String,
    pub discount_filter: DiscountFilter,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            location: DEFAULT_CATALOG.to_string(),
            initial_category: ALL_CATEGORIES.to_string(),
            discount_filter: DiscountFilter::All,
        }
    }
}

impl CatalogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the process environment in `from_env`).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let location = lookup(CATALOG_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| {
                tracing::warn!("{CATALOG_VAR} not set; using {DEFAULT_CATALOG}");
                defaults.location.clone()
            });

        let initial_category = lookup(CATEGORY_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.initial_category);

        let discount_filter = match lookup(DISCOUNT_VAR) {
            None => defaults.discount_filter,
            Some(raw) => raw.parse::<DiscountFilter>().unwrap_or_else(|err| {
                tracing::warn!(%err, "invalid {DISCOUNT_VAR}; showing all products");
                DiscountFilter::All
            }),
        };

        Self {
            location,
            initial_category,
            discount_filter,
        }
    }

    pub fn is_remote(&self) -> bool {
        self.location.starts_with("http://") || self.location.starts_with("https://")
    }

    /// Source matching `location`.
    pub fn source(&self) -> Result<Box<dyn CatalogSource>, LoadError> {
        if self.is_remote() {
            return self.remote_source();
        }
        Ok(Box::new(FileSource::new(&self.location)))
    }

    #[cfg(feature = "http")]
    fn remote_source(&self) -> Result<Box<dyn CatalogSource>, LoadError> {
        Ok(Box::new(crate::source::HttpSource::new(&self.location)))
    }

    #[cfg(not(feature = "http"))]
    fn remote_source(&self) -> Result<Box<dyn CatalogSource>, LoadError> {
        Err(LoadError::unreachable(
            &self.location,
            "built without the `http` feature",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(CatalogConfig::from_lookup(lookup(&[])), CatalogConfig::default());
    }

    #[test]
    fn reads_all_variables() {
        let config = CatalogConfig::from_lookup(lookup(&[
            (CATALOG_VAR, "https://shop.example/products.json"),
            (CATEGORY_VAR, " batik "),
            (DISCOUNT_VAR, "best-deals"),
        ]));
        assert_eq!(config.location, "https://shop.example/products.json");
        assert_eq!(config.initial_category, "batik");
        assert_eq!(config.discount_filter, DiscountFilter::BestDeals);
        assert!(config.is_remote());
    }

    #[test]
    fn unknown_discount_filter_falls_back_to_all() {
        let config = CatalogConfig::from_lookup(lookup(&[(DISCOUNT_VAR, "cheapest")]));
        assert_eq!(config.discount_filter, DiscountFilter::All);
    }

    #[test]
    fn local_paths_use_a_file_source() {
        let config = CatalogConfig::from_lookup(lookup(&[(CATALOG_VAR, "data/products.json")]));
        assert!(!config.is_remote());
        let source = config.source().unwrap();
        assert_eq!(source.describe(), "data/products.json");
    }
}
