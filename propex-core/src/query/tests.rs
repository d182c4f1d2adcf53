//! Tests for filter normalization and descriptor arithmetic.

use bigdecimal::BigDecimal;

use crate::error::CatalogError;
use crate::query::{
    normalize, ListingQuery, SearchFilter, SortField, SortOrder,
    DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};

fn price(n: i64) -> BigDecimal {
    BigDecimal::from(n)
}

#[test]
fn absent_request_yields_defaults() {
    let query = normalize(None).unwrap();

    assert_eq!(query, ListingQuery::default());
    assert_eq!(query.page, 1);
    assert_eq!(query.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(query.sort.field, SortField::CreatedAt);
    assert_eq!(query.sort.order, SortOrder::Descending);
    assert!(query.name.is_none());
    assert!(query.min_price.is_none());
}

#[test]
fn page_below_one_is_clamped_up() {
    for raw in [-10, 0, 1] {
        let query = normalize(Some(SearchFilter {
            page: Some(raw),
            ..Default::default()
        }))
        .unwrap();
        assert_eq!(query.page, raw.max(1));
    }
}

#[test]
fn page_size_is_clamped_into_range() {
    let cases = [
        (-5, 1),
        (0, 1),
        (1, 1),
        (10, 10),
        (100, 100),
        (101, MAX_PAGE_SIZE),
        (100_000, MAX_PAGE_SIZE),
    ];
    for (raw, expected) in cases {
        let query = normalize(Some(SearchFilter {
            page_size: Some(raw),
            ..Default::default()
        }))
        .unwrap();
        assert_eq!(query.page_size, expected, "pageSize={raw}");
    }
}

#[test]
fn blank_text_fragments_are_dropped() {
    let query = normalize(Some(SearchFilter {
        name: Some("   ".into()),
        address: Some(String::new()),
        ..Default::default()
    }))
    .unwrap();

    assert!(query.name.is_none());
    assert!(query.address.is_none());
}

#[test]
fn text_fragments_are_trimmed() {
    let query = normalize(Some(SearchFilter {
        name: Some("  Casa Norte  ".into()),
        address: Some("\tCalle 10 #5-20 ".into()),
        ..Default::default()
    }))
    .unwrap();

    assert_eq!(query.name.as_deref(), Some("Casa Norte"));
    assert_eq!(query.address.as_deref(), Some("Calle 10 #5-20"));
}

#[test]
fn over_long_fragments_are_rejected() {
    let err = normalize(Some(SearchFilter {
        name: Some("x".repeat(101)),
        ..Default::default()
    }))
    .unwrap_err();
    assert!(matches!(err, CatalogError::InvalidFilter(_)));

    let err = normalize(Some(SearchFilter {
        address: Some("y".repeat(121)),
        ..Default::default()
    }))
    .unwrap_err();
    assert!(matches!(err, CatalogError::InvalidFilter(_)));
}

#[test]
fn inverted_price_range_is_rejected() {
    let err = normalize(Some(SearchFilter {
        min_price: Some(price(500)),
        max_price: Some(price(100)),
        ..Default::default()
    }))
    .unwrap_err();

    assert!(matches!(err, CatalogError::InvalidRange { .. }));
}

#[test]
fn equal_or_ordered_price_bounds_pass() {
    let query = normalize(Some(SearchFilter {
        min_price: Some(price(100)),
        max_price: Some(price(100)),
        ..Default::default()
    }))
    .unwrap();
    assert_eq!(query.min_price, Some(price(100)));
    assert_eq!(query.max_price, Some(price(100)));

    // A single bound never trips the range check.
    assert!(normalize(Some(SearchFilter {
        min_price: Some(price(500)),
        ..Default::default()
    }))
    .is_ok());
    assert!(normalize(Some(SearchFilter {
        max_price: Some(price(100)),
        ..Default::default()
    }))
    .is_ok());
}

#[test]
fn sort_parsing_is_case_insensitive() {
    let cases = [
        ("price", "asc", SortField::Price, SortOrder::Ascending),
        ("Price", "ASC", SortField::Price, SortOrder::Ascending),
        ("NAME", "desc", SortField::Name, SortOrder::Descending),
        ("createdAt", "desc", SortField::CreatedAt, SortOrder::Descending),
    ];
    for (by, dir, field, order) in cases {
        let query = normalize(Some(SearchFilter {
            sort_by: Some(by.into()),
            sort_dir: Some(dir.into()),
            ..Default::default()
        }))
        .unwrap();
        assert_eq!(query.sort.field, field, "sortBy={by}");
        assert_eq!(query.sort.order, order, "sortDir={dir}");
    }
}

#[test]
fn unrecognized_sort_inputs_fall_back_to_defaults() {
    let query = normalize(Some(SearchFilter {
        sort_by: Some("popularity".into()),
        sort_dir: Some("sideways".into()),
        ..Default::default()
    }))
    .unwrap();

    assert_eq!(query.sort.field, SortField::CreatedAt);
    assert_eq!(query.sort.order, SortOrder::Descending);
}

#[test]
fn offset_and_limit_derive_from_clamped_values() {
    let query = normalize(Some(SearchFilter {
        page: Some(3),
        page_size: Some(20),
        ..Default::default()
    }))
    .unwrap();
    assert_eq!(query.offset(), 40);
    assert_eq!(query.limit(), 20);

    // Clamping happens before the arithmetic.
    let query = normalize(Some(SearchFilter {
        page: Some(-2),
        page_size: Some(500),
        ..Default::default()
    }))
    .unwrap();
    assert_eq!(query.offset(), 0);
    assert_eq!(query.limit(), MAX_PAGE_SIZE);
}
