//! Discount pricing.

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, ValueObject};

/// Discount percentage from which a product counts as a best deal.
pub const BEST_DEAL_THRESHOLD: u8 = 30;

/// Price of a product, before and after its discount.
///
/// All amounts are in the same currency unit as the source catalog (the
/// catalog decides whether that is a minor or a major unit; it never mixes
/// them).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PricingState")]
pub struct Pricing {
    price: u64,
    original_price: u64,
    discount: u8,
}

impl ValueObject for Pricing {}

/// Unchecked wire shape of a `Pricing`.
#[derive(Deserialize)]
struct PricingState {
    price: u64,
    original_price: u64,
    discount: u8,
}

impl TryFrom<PricingState> for Pricing {
    type Error = DomainError;

    fn try_from(state: PricingState) -> Result<Self, Self::Error> {
        let pricing = Self::discounted(state.original_price, state.discount)?;
        if pricing.price != state.price {
            return Err(DomainError::validation(format!(
                "price {} does not match {} at {}% off",
                state.price, state.original_price, state.discount
            )));
        }
        Ok(pricing)
    }
}

impl Pricing {
    /// Undiscounted pricing: the original price is the price.
    pub fn list(price: u64) -> Self {
        Self {
            price,
            original_price: price,
            discount: 0,
        }
    }

    /// Pricing for `original` reduced by `discount` percent.
    ///
    /// The stored price is derived from the original, so `price()` and
    /// `effective_price()` always agree.
    pub fn discounted(original: u64, discount: u8) -> DomainResult<Self> {
        if discount > 100 {
            return Err(DomainError::validation(format!(
                "discount must be between 0 and 100 (got {discount})"
            )));
        }
        if discount == 0 {
            return Ok(Self::list(original));
        }

        Ok(Self {
            price: apply_discount(original, discount),
            original_price: original,
            discount,
        })
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn original_price(&self) -> u64 {
        self.original_price
    }

    pub fn discount(&self) -> u8 {
        self.discount
    }

    pub fn has_discount(&self) -> bool {
        self.discount > 0
    }

    /// Price the customer pays.
    pub fn effective_price(&self) -> u64 {
        if self.has_discount() {
            apply_discount(self.original_price, self.discount)
        } else {
            self.price
        }
    }

    /// Amount taken off the original price (zero without a discount).
    pub fn savings(&self) -> u64 {
        self.original_price.saturating_sub(self.effective_price())
    }

    pub fn is_best_deal(&self) -> bool {
        self.discount >= BEST_DEAL_THRESHOLD
    }
}

/// `round(original * (1 - discount / 100))`, rounding halves up.
///
/// Integer arithmetic keeps the result exact for every input; the widened
/// intermediate cannot overflow and the result never exceeds `original`.
fn apply_discount(original: u64, discount: u8) -> u64 {
    let kept = u128::from(100 - discount.min(100));
    ((u128::from(original) * kept + 50) / 100) as u64
}
