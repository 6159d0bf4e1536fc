use std::collections::HashSet;

use chrono::{DateTime, Utc};

use storefront_core::{DomainError, ProductId};
use storefront_products::{Direction, Product, ProductRecord};

use crate::error::LoadError;
use crate::filter::{ALL_CATEGORIES, DiscountFilter, in_category};
use crate::source::CatalogSource;

/// Load state of the catalog.
///
/// `Loaded { count: 0, .. }` (an empty catalog) and `Failed` (nothing could be
/// read) both leave the product list empty; this is how callers tell them apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogStatus {
    NotLoaded,
    Loaded {
        count: usize,
        loaded_at: DateTime<Utc>,
    },
    Failed(LoadError),
}

/// In-memory product catalog plus the session's selection state.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: Vec<Product>,
    status: CatalogStatus,
    active_category: String,
    selected: Option<usize>,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            status: CatalogStatus::NotLoaded,
            active_category: ALL_CATEGORIES.to_string(),
            selected: None,
        }
    }

    /// Start with a category chosen outside the store (e.g. a query parameter).
    pub fn with_active_category(mut self, label: impl Into<String>) -> Self {
        self.active_category = label.into();
        self
    }

    /// Fetch records from `source` and load them.
    pub async fn load_from(&mut self, source: &dyn CatalogSource) -> Result<usize, LoadError> {
        tracing::debug!(source = %source.describe(), "fetching catalog");
        match source.fetch().await {
            Ok(records) => self.load_records(records),
            Err(err) => self.fail(err),
        }
    }

    /// Parse and load a JSON payload.
    pub fn load_json(&mut self, payload: &str) -> Result<usize, LoadError> {
        match crate::source::parse_payload(payload) {
            Ok(records) => self.load_records(records),
            Err(err) => self.fail(err),
        }
    }

    /// Replace the catalog with `records`.
    ///
    /// All or nothing: one invalid record (or a repeated id) fails the whole
    /// load and leaves the store empty in the `Failed` state.
    pub fn load_records(
        &mut self,
        records: impl IntoIterator<Item = ProductRecord>,
    ) -> Result<usize, LoadError> {
        let products = match convert_records(records) {
            Ok(products) => products,
            Err(err) => return self.fail(err),
        };

        let count = products.len();
        self.products = products;
        self.selected = None;
        self.status = CatalogStatus::Loaded {
            count,
            loaded_at: Utc::now(),
        };
        tracing::info!(count, "catalog loaded");
        Ok(count)
    }

    fn fail(&mut self, err: LoadError) -> Result<usize, LoadError> {
        tracing::warn!(error = %err, "catalog load failed");
        self.products.clear();
        self.selected = None;
        self.status = CatalogStatus::Failed(err.clone());
        Err(err)
    }

    pub fn status(&self) -> &CatalogStatus {
        &self.status
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.status, CatalogStatus::Loaded { .. })
    }

    pub fn load_error(&self) -> Option<&LoadError> {
        match &self.status {
            CatalogStatus::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id() == id)
    }

    /// `"all"` followed by each category in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::from([ALL_CATEGORIES]);
        let mut categories = vec![ALL_CATEGORIES.to_string()];
        for product in &self.products {
            if seen.insert(product.category()) {
                categories.push(product.category().to_string());
            }
        }
        categories
    }

    /// Products in `label`, or every product for `"all"`. Unknown labels give
    /// an empty list.
    pub fn filter_by_category(&self, label: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| in_category(p, label))
            .collect()
    }

    /// Products in the active category that pass `filter`.
    pub fn filter_by_discount(&self, filter: DiscountFilter) -> Vec<&Product> {
        self.filter_by_category(&self.active_category)
            .into_iter()
            .filter(|p| filter.matches(p))
            .collect()
    }

    /// Products in the active category.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.filter_by_discount(DiscountFilter::All)
    }

    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    /// No validation against `categories()`; see `filter_by_category`.
    pub fn set_active_category(&mut self, label: impl Into<String>) {
        self.active_category = label.into();
        tracing::debug!(category = %self.active_category, "category selected");
    }

    pub fn next_category(&mut self) -> &str {
        self.cycle_category(Direction::Forward)
    }

    pub fn previous_category(&mut self) -> &str {
        self.cycle_category(Direction::Backward)
    }

    // An active label outside the set moves to the first (forward) or last
    // (backward) category.
    fn cycle_category(&mut self, direction: Direction) -> &str {
        let mut categories = self.categories();
        let count = categories.len();
        if count > 1 {
            let next = match categories.iter().position(|c| *c == self.active_category) {
                Some(index) => {
                    let step = direction.delta().rem_euclid(count as isize) as usize;
                    (index + step) % count
                }
                None => match direction {
                    Direction::Forward => 0,
                    Direction::Backward => count - 1,
                },
            };
            self.set_active_category(categories.swap_remove(next));
        }
        &self.active_category
    }

    /// Show the detail view for `id`, starting its carousel from the first image.
    pub fn open_detail(&mut self, id: &ProductId) -> Option<&Product> {
        let index = self.position(id)?;
        self.products[index].reset_image();
        self.selected = Some(index);
        tracing::debug!(product_id = %id, "detail opened");
        Some(&self.products[index])
    }

    pub fn selected(&self) -> Option<&Product> {
        self.selected.map(|index| &self.products[index])
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    /// Step the carousel of the product in the detail view.
    pub fn navigate_image(&mut self, direction: Direction) -> Option<&str> {
        let index = self.selected?;
        Some(self.products[index].advance_image(direction))
    }

    /// Step the carousel of any product (e.g. on its card).
    pub fn advance_image(&mut self, id: &ProductId, direction: Direction) -> Option<&str> {
        let index = self.position(id)?;
        Some(self.products[index].advance_image(direction))
    }
}

fn convert_records(
    records: impl IntoIterator<Item = ProductRecord>,
) -> Result<Vec<Product>, LoadError> {
    let mut seen = HashSet::new();
    let mut products = Vec::new();

    for (index, record) in records.into_iter().enumerate() {
        let product = Product::from_record(record)
            .map_err(|reason| LoadError::InvalidRecord { index, reason })?;
        if !seen.insert(product.id().clone()) {
            return Err(LoadError::InvalidRecord {
                index,
                reason: DomainError::conflict(format!("duplicate product id {}", product.id())),
            });
        }
        products.push(product);
    }
    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(categories: &[&str]) -> CatalogStore {
        let payload = categories
            .iter()
            .enumerate()
            .map(|(i, c)| {
                format!(r#"{{"id":{i},"name":"P{i}","price":1000,"category":"{c}","image":"p.jpg"}}"#)
            })
            .collect::<Vec<_>>()
            .join(",");
        let mut store = CatalogStore::new();
        store.load_json(&format!("[{payload}]")).unwrap();
        store
    }

    #[test]
    fn new_store_is_not_loaded() {
        let store = CatalogStore::new();
        assert_eq!(store.status(), &CatalogStatus::NotLoaded);
        assert_eq!(store.active_category(), ALL_CATEGORIES);
        assert_eq!(store.categories(), vec![ALL_CATEGORIES.to_string()]);
    }

    #[test]
    fn categories_keep_first_seen_order_without_duplicates() {
        let store = store_with(&["B", "A", "B", "C", "A"]);
        assert_eq!(store.categories(), vec!["all", "B", "A", "C"]);
    }

    #[test]
    fn product_labelled_all_does_not_duplicate_the_synthetic_label() {
        let store = store_with(&["all", "A"]);
        assert_eq!(store.categories(), vec!["all", "A"]);
    }

    #[test]
    fn unknown_category_yields_empty_result() {
        let mut store = store_with(&["A", "B"]);
        store.set_active_category("Z");
        assert!(store.visible_products().is_empty());
        assert!(store.filter_by_category("Z").is_empty());
    }

    #[test]
    fn next_category_wraps_to_all() {
        let mut store = store_with(&["A", "B", "C"]).with_active_category("C");
        assert_eq!(store.next_category(), "all");
        assert_eq!(store.next_category(), "A");
    }

    #[test]
    fn previous_category_wraps_to_last() {
        let mut store = store_with(&["A", "B", "C"]);
        assert_eq!(store.previous_category(), "C");
        assert_eq!(store.previous_category(), "B");
    }

    #[test]
    fn category_cycling_is_a_no_op_with_only_all() {
        let mut store = CatalogStore::new();
        assert_eq!(store.next_category(), "all");
        assert_eq!(store.previous_category(), "all");
    }

    #[test]
    fn cycling_from_unknown_category_enters_the_set() {
        let mut store = store_with(&["A", "B"]).with_active_category("Z");
        assert_eq!(store.next_category(), "all");
        store.set_active_category("Z");
        assert_eq!(store.previous_category(), "B");
    }

    #[test]
    fn failed_load_clears_previous_products() {
        let mut store = store_with(&["A"]);
        store.open_detail(&ProductId::from(0)).unwrap();
        assert!(store.load_json("not json").is_err());
        assert!(store.is_empty());
        assert!(store.selected().is_none());
        assert!(store.load_error().is_some());
        assert!(!store.is_loaded());
    }

    #[test]
    fn duplicate_ids_fail_the_whole_load() {
        let mut store = CatalogStore::new();
        let err = store
            .load_json(
                r#"[
                    {"id":1,"name":"First","price":10,"category":"A","image":"1.jpg"},
                    {"id":2,"name":"Other","price":10,"category":"A","image":"2.jpg"},
                    {"id":1,"name":"Second","price":10,"category":"B","image":"3.jpg"}
                ]"#,
            )
            .unwrap_err();

        match err {
            LoadError::InvalidRecord { index, reason: DomainError::Conflict(msg) } => {
                assert_eq!(index, 2);
                assert!(msg.contains("duplicate product id 1"));
            }
            other => panic!("Expected Conflict for duplicate id, got {other:?}"),
        }
        assert!(store.is_empty());
        assert!(store.load_error().is_some());
    }

    #[test]
    fn numeric_and_text_ids_with_same_spelling_are_distinct() {
        let mut store = CatalogStore::new();
        let count = store
            .load_json(
                r#"[
                    {"id":1,"name":"Numeric","price":10,"category":"A","image":"1.jpg"},
                    {"id":"1","name":"Text","price":10,"category":"A","image":"2.jpg"}
                ]"#,
            )
            .unwrap();
        assert_eq!(count, 2);
        assert_eq!(store.get(&ProductId::from("1")).unwrap().name(), "Text");
    }

    #[test]
    fn detail_view_navigation_wraps_and_resets_on_reopen() {
        let mut store = CatalogStore::new();
        store
            .load_json(r#"[{"id":"x","name":"X","price":10,"category":"A","images":["1.jpg","2.jpg","3.jpg"]}]"#)
            .unwrap();
        let id = ProductId::from("x");

        assert_eq!(store.navigate_image(Direction::Forward), None);
        store.open_detail(&id).unwrap();
        assert_eq!(store.navigate_image(Direction::Backward), Some("3.jpg"));
        assert_eq!(store.navigate_image(Direction::Forward), Some("1.jpg"));
        store.navigate_image(Direction::Forward);

        store.close_detail();
        assert!(store.selected().is_none());
        assert_eq!(store.get(&id).unwrap().current_image(), "2.jpg");

        let reopened = store.open_detail(&id).unwrap();
        assert_eq!(reopened.current_image(), "1.jpg");
    }

    #[test]
    fn advance_image_on_unknown_product_is_none() {
        let mut store = store_with(&["A"]);
        assert_eq!(store.advance_image(&ProductId::from(99), Direction::Forward), None);
        assert_eq!(store.advance_image(&ProductId::from(0), Direction::Forward), Some("p.jpg"));
    }
}
