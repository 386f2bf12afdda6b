//! Fixtures matching the documented request scenarios.

use crate::builders::ProductBuilder;
use item_version_common::MatchPolicy;
use item_version_domain::Product;
use item_version_infrastructure::InMemoryProductCatalog;

/// Display name used across scenarios
pub const MY_WIDGET: &str = "My Widget";

/// A name no catalog fixture contains
pub const GHOST_PLUGIN: &str = "Ghost Plugin";

/// Version published for [`MY_WIDGET`]
pub const MY_WIDGET_VERSION: &str = "2.3.1";

/// "My Widget" with version 2.3.1
pub fn versioned_widget() -> Product {
    ProductBuilder::new()
        .with_id(1)
        .with_title(MY_WIDGET)
        .with_version(MY_WIDGET_VERSION)
        .build()
}

/// "My Widget" without any version
pub fn unversioned_widget() -> Product {
    ProductBuilder::new()
        .with_id(1)
        .with_title(MY_WIDGET)
        .without_version()
        .build()
}

/// Catalog where "My Widget" has version 2.3.1
pub fn scenario_catalog() -> InMemoryProductCatalog {
    InMemoryProductCatalog::with_products(
        MatchPolicy::Exact,
        vec![
            versioned_widget(),
            ProductBuilder::new()
                .with_id(2)
                .with_title("Fish & Chips <Deluxe>")
                .with_version("0.9.0-beta")
                .build(),
        ],
    )
}

/// Catalog where "My Widget" exists without a version
pub fn unversioned_catalog() -> InMemoryProductCatalog {
    InMemoryProductCatalog::with_products(MatchPolicy::Exact, vec![unversioned_widget()])
}
