use anyhow::Context;

use storefront_catalog::{CatalogConfig, CatalogStore};
use storefront_viewer::render;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let config = CatalogConfig::from_env();
    let source = config.source()?;

    let mut store = CatalogStore::new().with_active_category(config.initial_category.clone());
    store
        .load_from(source.as_ref())
        .await
        .with_context(|| format!("failed to load catalog from {}", source.describe()))?;

    let products = store.filter_by_discount(config.discount_filter);
    tracing::info!(
        category = store.active_category(),
        filter = %config.discount_filter,
        shown = products.len(),
        "rendering catalog"
    );

    print!(
        "{}",
        render::render_catalog(&store.categories(), store.active_category(), &products)
    );
    Ok(())
}
