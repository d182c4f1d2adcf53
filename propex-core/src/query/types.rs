use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// Page size applied when the request does not specify one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;
/// Hard upper bound on a page; larger requests are clamped, never rejected.
pub const MAX_PAGE_SIZE: i64 = 100;
/// Longest accepted name fragment.
pub const MAX_NAME_FILTER_LEN: usize = 100;
/// Longest accepted address fragment.
pub const MAX_ADDRESS_FILTER_LEN: usize = 120;

/// Raw, untrusted search request as it arrives on the wire.
///
/// Every field is optional; [`normalize`](super::normalize) turns this into
/// a [`ListingQuery`] or rejects it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilter {
    pub name: Option<String>,
    pub address: Option<String>,
    pub min_price: Option<BigDecimal>,
    pub max_price: Option<BigDecimal>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub sort_by: Option<String>,
    pub sort_dir: Option<String>,
}

/// Canonical, validated query descriptor.
///
/// Invariants held by construction: text fragments are trimmed and
/// non-empty, `min_price <= max_price` when both are present, `page >= 1`,
/// and `1 <= page_size <= MAX_PAGE_SIZE`.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingQuery {
    pub name: Option<String>,
    pub address: Option<String>,
    pub min_price: Option<BigDecimal>,
    pub max_price: Option<BigDecimal>,
    pub page: i64,
    pub page_size: i64,
    pub sort: SortCriteria,
}

impl ListingQuery {
    /// Rows to skip before the requested page.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.page_size
    }

    /// Rows to fetch for the requested page.
    pub fn limit(&self) -> i64 {
        self.page_size
    }
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            name: None,
            address: None,
            min_price: None,
            max_price: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            sort: SortCriteria::default(),
        }
    }
}

/// Sort criteria for listing queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortCriteria {
    pub field: SortField,
    pub order: SortOrder,
}

impl Default for SortCriteria {
    fn default() -> Self {
        Self {
            field: SortField::CreatedAt,
            order: SortOrder::Descending,
        }
    }
}

/// Fields available for sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Name,
    Price,
    CreatedAt,
}

impl SortField {
    /// Case-insensitive match against the wire parameter. Unrecognized or
    /// absent keys fall back to `CreatedAt`.
    pub fn from_param(param: Option<&str>) -> Self {
        match param.map(str::trim) {
            Some(s) if s.eq_ignore_ascii_case("name") => SortField::Name,
            Some(s) if s.eq_ignore_ascii_case("price") => SortField::Price,
            _ => SortField::CreatedAt,
        }
    }
}

/// Sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// Case-insensitive match against the wire parameter. Unrecognized or
    /// absent directions fall back to `Descending`.
    pub fn from_param(param: Option<&str>) -> Self {
        match param.map(str::trim) {
            Some(s) if s.eq_ignore_ascii_case("asc") => SortOrder::Ascending,
            _ => SortOrder::Descending,
        }
    }
}
