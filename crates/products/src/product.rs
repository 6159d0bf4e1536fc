use serde::Serialize;

use storefront_core::{DomainError, DomainResult, ProductId};

use crate::gallery::{Direction, ImageGallery};
use crate::pricing::Pricing;
use crate::record::ProductRecord;

/// A product as shown on a catalog card or in the detail popup.
///
/// Everything except the carousel position is fixed once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    category: String,
    pricing: Pricing,
    gallery: ImageGallery,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: impl Into<String>,
        pricing: Pricing,
        gallery: ImageGallery,
    ) -> DomainResult<Self> {
        let name = name.into();
        let category = category.into();

        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if category.trim().is_empty() {
            return Err(DomainError::validation("category cannot be empty"));
        }

        Ok(Self {
            id,
            name,
            description: String::new(),
            category,
            pricing,
            gallery,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Build a product from a raw catalog record.
    ///
    /// With a discount, the record's `price` is the pre-discount amount and the
    /// stored price is derived from the discount. `original_price` is never
    /// used for pricing; a value that disagrees with `price` is only logged.
    pub fn from_record(record: ProductRecord) -> DomainResult<Self> {
        let discount = u8::try_from(record.discount)
            .ok()
            .filter(|d| *d <= 100)
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "discount must be between 0 and 100 (got {})",
                    record.discount
                ))
            })?;

        let pricing = if discount > 0 {
            Pricing::discounted(record.price, discount)?
        } else {
            Pricing::list(record.price)
        };

        if let Some(original) = record.original_price.filter(|o| *o != record.price) {
            tracing::debug!(
                product_id = %record.id,
                original,
                price = record.price,
                "ignoring originalPrice that disagrees with price"
            );
        }

        let gallery = ImageGallery::new(record.images.into_vec())?;

        Ok(Self::new(record.id, record.name, record.category, pricing, gallery)?
            .with_description(record.description))
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn pricing(&self) -> &Pricing {
        &self.pricing
    }

    pub fn price(&self) -> u64 {
        self.pricing.price()
    }

    pub fn original_price(&self) -> u64 {
        self.pricing.original_price()
    }

    pub fn discount(&self) -> u8 {
        self.pricing.discount()
    }

    pub fn effective_price(&self) -> u64 {
        self.pricing.effective_price()
    }

    pub fn has_discount(&self) -> bool {
        self.pricing.has_discount()
    }

    pub fn is_best_deal(&self) -> bool {
        self.pricing.is_best_deal()
    }

    pub fn images(&self) -> &[String] {
        self.gallery.images()
    }

    pub fn has_multiple_images(&self) -> bool {
        self.gallery.has_multiple()
    }

    pub fn current_image(&self) -> &str {
        self.gallery.current()
    }

    pub fn current_image_index(&self) -> usize {
        self.gallery.current_index()
    }

    /// Move the carousel one step and return the image now on display.
    pub fn advance_image(&mut self, direction: Direction) -> &str {
        self.gallery.advance(direction)
    }

    pub fn reset_image(&mut self) {
        self.gallery.reset();
    }
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        Self::from_record(record)
    }
}
