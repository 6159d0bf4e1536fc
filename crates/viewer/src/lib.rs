//! Terminal view layer for the catalog.

pub mod render;
