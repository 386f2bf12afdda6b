//! Tests for lookup outcomes and product records
//!
//! Covers the closed set of outcomes, error code parsing and identifier
//! parsing.

use item_version_domain::{DomainError, ErrorCode, LookupResult, Product, ProductId};
use proptest::prelude::*;

#[test]
fn test_exactly_one_outcome_per_result() {
    let mut results: Vec<LookupResult> = ErrorCode::ALL
        .into_iter()
        .map(LookupResult::failure)
        .collect();
    results.push(LookupResult::success(
        "2.3.1",
        "The current version for My Widget is 2.3.1.",
    ));

    let outcomes: Vec<&str> = results.iter().map(LookupResult::outcome).collect();
    assert_eq!(
        outcomes,
        vec!["NAME_MISSING", "INVALID_ITEM_NAME", "NO_VERSION", "SUCCESS"]
    );

    for result in &results {
        assert_eq!(result.is_success(), result.error_code().is_none());
        assert_eq!(result.is_success(), result.version().is_some());
    }
}

#[test]
fn test_failure_messages_are_fixed() {
    assert_eq!(
        LookupResult::failure(ErrorCode::NameMissing).message(),
        "The required item name was not provided."
    );
    assert_eq!(
        LookupResult::failure(ErrorCode::InvalidItemName).message(),
        "The item name provided does not exist."
    );
    assert_eq!(
        LookupResult::failure(ErrorCode::NoVersion).message(),
        "No version information was found."
    );
}

#[test]
fn test_unknown_error_code() {
    let err = "CATALOG_UNAVAILABLE".parse::<ErrorCode>().unwrap_err();
    assert_eq!(
        err,
        DomainError::UnknownErrorCode("CATALOG_UNAVAILABLE".to_string())
    );
    assert!("name_missing".parse::<ErrorCode>().is_err());
}

#[test]
fn test_product_id_parsing() {
    assert_eq!("42".parse::<ProductId>().unwrap(), ProductId::new(42));
    assert!("".parse::<ProductId>().is_err());
    assert!("-1".parse::<ProductId>().is_err());
    assert!("widget".parse::<ProductId>().is_err());
}

#[test]
fn test_product_seed_record_deserializes() {
    let product: Product =
        serde_json::from_str(r#"{"id": 7, "title": "Legacy Importer"}"#).unwrap();
    assert_eq!(product.id, ProductId::new(7));
    assert_eq!(product.published_version(), None);
}

proptest! {
    #[test]
    fn prop_product_id_display_round_trips(raw in any::<u64>()) {
        let id = ProductId::new(raw);
        prop_assert_eq!(id.to_string().parse::<ProductId>().unwrap(), id);
    }

    #[test]
    fn prop_blank_versions_are_unpublished(version in "[ \t\n]{0,8}") {
        let product = Product::new(ProductId::new(1), "My Widget", Some(version)).unwrap();
        prop_assert_eq!(product.published_version(), None);
    }
}
