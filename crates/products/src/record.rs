//! Raw product records as they appear in a static catalog file.

use serde::{Deserialize, Serialize};

use storefront_core::ProductId;

/// One image reference or many.
///
/// Older catalog entries carry a single `image` string; newer ones a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageRefs {
    One(String),
    Many(Vec<String>),
}

impl ImageRefs {
    /// Normalize to a sequence; a single reference becomes a one-element list.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            ImageRefs::One(image) => vec![image],
            ImageRefs::Many(images) => images,
        }
    }
}

impl From<Vec<String>> for ImageRefs {
    fn from(value: Vec<String>) -> Self {
        Self::Many(value)
    }
}

impl From<&str> for ImageRefs {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

/// Product entry as stored in the catalog payload.
///
/// Amounts are whole numbers in the catalog's currency unit: cents for USD,
/// rupiah for IDR. A decimal amount such as `19.99` is a parse error, so a
/// catalog priced in major units with fractions must be converted to minor
/// units first.
///
/// When `discount > 0`, `price` is the pre-discount amount; see
/// `Product::from_record`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub price: u64,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(alias = "image")]
    pub images: ImageRefs,
    #[serde(default, alias = "original_price", skip_serializing_if = "Option::is_none")]
    pub original_price: Option<u64>,
    #[serde(default)]
    pub discount: u32,
}
