//! Products domain module.
//!
//! This crate contains the product item as the catalog hands it to the view
//! layer: discount pricing, the image carousel, and normalization of the raw
//! records found in a static catalog file. Everything here is deterministic
//! domain logic (no IO, no rendering).

pub mod gallery;
pub mod pricing;
pub mod product;
pub mod record;

pub use gallery::{Direction, ImageGallery};
pub use pricing::{BEST_DEAL_THRESHOLD, Pricing};
pub use product::Product;
pub use record::{ImageRefs, ProductRecord};
