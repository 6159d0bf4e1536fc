//! Command interface between a view layer and the store.

use serde::{Deserialize, Serialize};

use storefront_core::ProductId;
use storefront_products::Direction;

use crate::store::CatalogStore;

/// A user action, as translated by the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CatalogCommand {
    SelectCategory { label: String },
    NextCategory,
    PreviousCategory,
    OpenDetail { product_id: ProductId },
    CloseDetail,
    NavigateImage { direction: Direction },
}

/// What changed after a command, so the view knows what to redraw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CatalogOutcome {
    CategoryChanged { label: String },
    DetailOpened { product_id: ProductId },
    DetailClosed,
    ImageShown {
        product_id: ProductId,
        index: usize,
        image: String,
    },
    /// Nothing to do (unknown product, no detail view open).
    Ignored,
}

impl CatalogStore {
    /// Apply a user action. Commands never fail.
    pub fn execute(&mut self, command: CatalogCommand) -> CatalogOutcome {
        match command {
            CatalogCommand::SelectCategory { label } => {
                self.set_active_category(label);
                self.category_changed()
            }
            CatalogCommand::NextCategory => {
                self.next_category();
                self.category_changed()
            }
            CatalogCommand::PreviousCategory => {
                self.previous_category();
                self.category_changed()
            }
            CatalogCommand::OpenDetail { product_id } => match self.open_detail(&product_id) {
                Some(_) => CatalogOutcome::DetailOpened { product_id },
                None => CatalogOutcome::Ignored,
            },
            CatalogCommand::CloseDetail => {
                self.close_detail();
                CatalogOutcome::DetailClosed
            }
            CatalogCommand::NavigateImage { direction } => {
                if self.navigate_image(direction).is_none() {
                    return CatalogOutcome::Ignored;
                }
                match self.selected() {
                    Some(product) => CatalogOutcome::ImageShown {
                        product_id: product.id().clone(),
                        index: product.current_image_index(),
                        image: product.current_image().to_string(),
                    },
                    None => CatalogOutcome::Ignored,
                }
            }
        }
    }

    fn category_changed(&self) -> CatalogOutcome {
        CatalogOutcome::CategoryChanged {
            label: self.active_category().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"[
        {"id":1,"name":"Kebaya","price":100000,"category":"A","images":["k1.jpg","k2.jpg"]},
        {"id":2,"name":"Sarong","price":50000,"category":"B","image":"s.jpg","discount":50}
    ]"#;

    fn loaded() -> CatalogStore {
        let mut store = CatalogStore::new();
        store.load_json(PAYLOAD).unwrap();
        store
    }

    #[test]
    fn category_commands_report_the_new_label() {
        let mut store = loaded();
        assert_eq!(
            store.execute(CatalogCommand::NextCategory),
            CatalogOutcome::CategoryChanged { label: "A".to_string() }
        );
        assert_eq!(
            store.execute(CatalogCommand::SelectCategory { label: "B".to_string() }),
            CatalogOutcome::CategoryChanged { label: "B".to_string() }
        );
        assert_eq!(
            store.execute(CatalogCommand::PreviousCategory),
            CatalogOutcome::CategoryChanged { label: "A".to_string() }
        );
    }

    #[test]
    fn open_navigate_close() {
        let mut store = loaded();
        let id = ProductId::from(1);

        assert_eq!(
            store.execute(CatalogCommand::OpenDetail { product_id: id.clone() }),
            CatalogOutcome::DetailOpened { product_id: id.clone() }
        );
        assert_eq!(
            store.execute(CatalogCommand::NavigateImage { direction: Direction::Forward }),
            CatalogOutcome::ImageShown {
                product_id: id,
                index: 1,
                image: "k2.jpg".to_string(),
            }
        );
        assert_eq!(store.execute(CatalogCommand::CloseDetail), CatalogOutcome::DetailClosed);
        assert_eq!(
            store.execute(CatalogCommand::NavigateImage { direction: Direction::Backward }),
            CatalogOutcome::Ignored
        );
    }

    #[test]
    fn opening_unknown_product_is_ignored() {
        let mut store = loaded();
        assert_eq!(
            store.execute(CatalogCommand::OpenDetail { product_id: ProductId::from(42) }),
            CatalogOutcome::Ignored
        );
        assert!(store.selected().is_none());
    }

    #[test]
    fn commands_deserialize_from_tagged_json() {
        let command: CatalogCommand =
            serde_json::from_str(r#"{"type":"navigate_image","direction":"backward"}"#).unwrap();
        assert_eq!(command, CatalogCommand::NavigateImage { direction: Direction::Backward });

        let command: CatalogCommand =
            serde_json::from_str(r#"{"type":"open_detail","product_id":"kebaya-01"}"#).unwrap();
        assert_eq!(
            command,
            CatalogCommand::OpenDetail { product_id: ProductId::from("kebaya-01") }
        );
    }
}
