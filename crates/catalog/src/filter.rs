//! Product filters.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use storefront_products::Product;

/// Synthetic category label matching every product.
pub const ALL_CATEGORIES: &str = "all";

/// Narrowing applied on top of the category selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiscountFilter {
    #[default]
    All,
    /// Any product with a discount.
    Discounted,
    /// Products discounted by at least `BEST_DEAL_THRESHOLD` percent.
    BestDeals,
}

impl DiscountFilter {
    pub fn matches(self, product: &Product) -> bool {
        match self {
            DiscountFilter::All => true,
            DiscountFilter::Discounted => product.has_discount(),
            DiscountFilter::BestDeals => product.is_best_deal(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DiscountFilter::All => "all",
            DiscountFilter::Discounted => "discounted",
            DiscountFilter::BestDeals => "best-deals",
        }
    }
}

impl core::fmt::Display for DiscountFilter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiscountFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" => Ok(DiscountFilter::All),
            "discounted" => Ok(DiscountFilter::Discounted),
            "best-deals" => Ok(DiscountFilter::BestDeals),
            other => Err(format!("unknown discount filter: {other}")),
        }
    }
}

/// True when `product` belongs to `label` (or `label` is the synthetic "all").
pub(crate) fn in_category(product: &Product, label: &str) -> bool {
    label == ALL_CATEGORIES || product.category() == label
}
