//! Catalog store: loads a static product list and answers the view layer's
//! filter, selection and navigation requests.
//!
//! The store is an explicitly constructed value owned by the caller. It has no
//! awareness of any UI event model; views translate user input into
//! [`CatalogCommand`]s (or call the query/mutation methods directly).

pub mod command;
pub mod config;
pub mod error;
pub mod filter;
pub mod source;
pub mod store;

pub use command::{CatalogCommand, CatalogOutcome};
pub use config::CatalogConfig;
pub use error::LoadError;
pub use filter::{ALL_CATEGORIES, DiscountFilter};
pub use source::{CatalogSource, FileSource, StaticSource, parse_payload};
pub use store::{CatalogStatus, CatalogStore};

#[cfg(feature = "http")]
pub use source::HttpSource;
