//! Plain-text product cards.

use storefront_products::Product;

/// Group digits in threes: `1250000` → `1.250.000`.
pub fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

pub fn render_card(product: &Product) -> String {
    let mut card = format!("[{}] {}\n", product.category(), product.name());

    if product.has_discount() {
        card.push_str(&format!(
            "  {}  (was {}, -{}%, save {})\n",
            format_amount(product.effective_price()),
            format_amount(product.original_price()),
            product.discount(),
            format_amount(product.pricing().savings())
        ));
    } else {
        card.push_str(&format!("  {}\n", format_amount(product.effective_price())));
    }

    if !product.description().is_empty() {
        card.push_str(&format!("  {}\n", product.description()));
    }

    let images = product.images().len();
    card.push_str(&format!(
        "  {} ({} image{})\n",
        product.current_image(),
        images,
        if images == 1 { "" } else { "s" }
    ));
    card
}

/// Category bar followed by one card per product.
pub fn render_catalog(categories: &[String], active: &str, products: &[&Product]) -> String {
    let bar: Vec<String> = categories
        .iter()
        .map(|c| if c == active { format!("*{c}*") } else { c.clone() })
        .collect();
    let mut out = format!("{}\n\n", bar.join(" | "));

    if products.is_empty() {
        out.push_str("No products found.\n");
        return out;
    }
    for product in products {
        out.push_str(&render_card(product));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_products::{ImageRefs, ProductRecord};

    fn product(discount: u32, images: Vec<&str>) -> Product {
        Product::from_record(ProductRecord {
            id: 1u64.into(),
            name: "Kebaya".to_string(),
            price: 150_000,
            description: String::new(),
            category: "A".to_string(),
            images: ImageRefs::from(images.into_iter().map(String::from).collect::<Vec<_>>()),
            original_price: None,
            discount,
        })
        .unwrap()
    }

    #[test]
    fn formats_amounts_with_thousand_separators() {
        assert_eq!(format_amount(0), "0");
        assert_eq!(format_amount(999), "999");
        assert_eq!(format_amount(1000), "1.000");
        assert_eq!(format_amount(1_250_000), "1.250.000");
    }

    #[test]
    fn discounted_card_shows_original_price() {
        let card = render_card(&product(50, vec!["a.jpg", "b.jpg"]));
        assert!(card.contains("75.000  (was 150.000, -50%, save 75.000)"));
        assert!(card.contains("a.jpg (2 images)"));
    }

    #[test]
    fn plain_card_shows_single_price() {
        let card = render_card(&product(0, vec!["a.jpg"]));
        assert!(card.contains("  150.000\n"));
        assert!(!card.contains("was"));
        assert!(card.contains("(1 image)"));
    }

    #[test]
    fn empty_selection_says_so() {
        let out = render_catalog(&["all".to_string(), "A".to_string()], "A", &[]);
        assert!(out.starts_with("all | *A*"));
        assert!(out.contains("No products found."));
    }
}
