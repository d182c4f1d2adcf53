//! Public wire shapes produced by the catalog.

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use propex_model::{Listing, ListingId, OwnerId};
use serde::{Deserialize, Serialize};

/// Listing as exposed to callers.
///
/// `image_url` is always serialized: a listing without an enabled image
/// carries an explicit `null`, which is the "no image" marker - absence is a
/// normal result, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingView {
    pub id: ListingId,
    pub id_owner: OwnerId,
    pub name: String,
    pub address: String,
    pub price: BigDecimal,
    pub code_internal: String,
    pub year: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub image_url: Option<String>,
}

impl From<Listing> for ListingView {
    fn from(listing: Listing) -> Self {
        Self {
            id: listing.id,
            id_owner: listing.id_owner,
            name: listing.name,
            address: listing.address,
            price: listing.price,
            code_internal: listing.code_internal,
            year: listing.year,
            created_at: listing.created_at,
            updated_at: listing.updated_at,
            image_url: listing.image_url,
        }
    }
}

/// One page of results plus pagination metadata.
///
/// Constructed fresh per request; ordering and membership are frozen by the
/// time items reach this type - no further filtering or sorting happens
/// here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl<T> PagedResult<T> {
    /// Assemble a page. `page_size` must already be clamped to `>= 1`.
    pub fn new(items: Vec<T>, page: i64, page_size: i64, total: i64) -> Self {
        // Ceiling division; yields 0 pages for an empty result.
        let total_pages = (total + page_size - 1) / page_size;
        Self {
            items,
            page,
            page_size,
            total,
            total_pages,
        }
    }
}
