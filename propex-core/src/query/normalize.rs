//! Filter normalization: raw wire input to canonical descriptor.

use crate::error::{CatalogError, Result};

use super::types::{
    ListingQuery, SearchFilter, SortCriteria, SortField, SortOrder,
    DEFAULT_PAGE_SIZE, MAX_ADDRESS_FILTER_LEN, MAX_NAME_FILTER_LEN,
    MAX_PAGE_SIZE,
};

/// Trim a text fragment, treating blank input as "not provided".
fn text_fragment(raw: Option<String>) -> Option<String> {
    raw.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Validate and canonicalize a raw search request.
///
/// Clamping policy: `page` below 1 is raised to 1 and `pageSize` is clamped
/// into `[1, MAX_PAGE_SIZE]` - out-of-range pagination never rejects the
/// request. The only rejected conditions are an inverted price range and an
/// over-long text fragment; both are detected here, before any store call.
pub fn normalize(filter: Option<SearchFilter>) -> Result<ListingQuery> {
    let filter = filter.unwrap_or_default();

    let name = text_fragment(filter.name);
    if let Some(name) = &name
        && name.chars().count() > MAX_NAME_FILTER_LEN
    {
        return Err(CatalogError::InvalidFilter(format!(
            "name filter is too long (max {MAX_NAME_FILTER_LEN})"
        )));
    }

    let address = text_fragment(filter.address);
    if let Some(address) = &address
        && address.chars().count() > MAX_ADDRESS_FILTER_LEN
    {
        return Err(CatalogError::InvalidFilter(format!(
            "address filter is too long (max {MAX_ADDRESS_FILTER_LEN})"
        )));
    }

    if let (Some(min), Some(max)) = (&filter.min_price, &filter.max_price)
        && min > max
    {
        return Err(CatalogError::InvalidRange {
            min: min.clone(),
            max: max.clone(),
        });
    }

    let page = filter.page.unwrap_or(1).max(1);
    let page_size = filter
        .page_size
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);

    let sort = SortCriteria {
        field: SortField::from_param(filter.sort_by.as_deref()),
        order: SortOrder::from_param(filter.sort_dir.as_deref()),
    };

    Ok(ListingQuery {
        name,
        address,
        min_price: filter.min_price,
        max_price: filter.max_price,
        page,
        page_size,
        sort,
    })
}
