//! Listing and related-image entities as held by the store.

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{ImageId, ListingId, OwnerId};

/// A real-estate listing record.
///
/// `image_url` is not a persisted column on the listing itself: it is filled
/// in by the enrichment step from the related-image collection, and stays
/// `None` when the listing has no enabled image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub id_owner: OwnerId,
    pub name: String,
    pub address: String,
    /// Exact decimal price; never floating point.
    pub price: BigDecimal,
    /// Unique, immutable internal code.
    pub code_internal: String,
    pub year: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub image_url: Option<String>,
}

/// A related-image record. Only enabled rows participate in enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingImage {
    pub id: ImageId,
    /// The listing this image belongs to.
    pub id_property: ListingId,
    pub file: String,
    pub enabled: bool,
}
