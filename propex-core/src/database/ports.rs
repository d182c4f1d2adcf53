//! Repository ports: the opaque document-store contract the core depends on.
//!
//! Infrastructure adapters implement these traits; the catalog service only
//! ever sees the trait objects, injected once at process start and shared by
//! every request.

use std::collections::HashMap;

use async_trait::async_trait;
use propex_model::{Listing, ListingId};

use crate::error::Result;
use crate::query::ListingQuery;

/// Read access to the listing collection.
#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// Number of listings matching the descriptor's predicate, ignoring
    /// pagination.
    async fn count(&self, query: &ListingQuery) -> Result<i64>;

    /// One page of listings matching the descriptor, in the descriptor's
    /// order. Rows are returned without image enrichment.
    async fn find_page(&self, query: &ListingQuery) -> Result<Vec<Listing>>;

    /// A single listing by identifier, or `None` when absent.
    async fn find_by_id(&self, id: &ListingId) -> Result<Option<Listing>>;
}

/// Read access to the related-image collection.
#[async_trait]
pub trait ListingImageRepository: Send + Sync {
    /// File reference of one enabled image for the listing, or `None`.
    /// Zero enabled images is a normal result, never an error.
    async fn primary_image(&self, id: &ListingId) -> Result<Option<String>>;

    /// Batched variant for one page of listings: file references of one
    /// enabled image per listing, keyed by listing. Listings without an
    /// enabled image are simply absent from the map.
    async fn primary_images(
        &self,
        ids: &[ListingId],
    ) -> Result<HashMap<ListingId, String>>;
}
