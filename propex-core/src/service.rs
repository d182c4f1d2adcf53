//! Catalog service: the orchestrator behind both read operations.
//!
//! `search` runs normalize -> count -> page fetch -> batched image
//! enrichment -> page assembly. `get` validates the identifier shape first,
//! then resolves and enriches a single listing. Both paths are stateless;
//! the repository handles are injected once at process start and shared by
//! every request.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use propex_model::{Listing, ListingId};

use crate::api_types::{ListingView, PagedResult};
use crate::database::ports::{ListingImageRepository, ListingRepository};
use crate::error::Result;
use crate::query::{normalize, SearchFilter};

#[derive(Clone)]
pub struct ListingService {
    listings: Arc<dyn ListingRepository>,
    images: Arc<dyn ListingImageRepository>,
}

impl fmt::Debug for ListingService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListingService").finish_non_exhaustive()
    }
}

impl ListingService {
    pub fn new(
        listings: Arc<dyn ListingRepository>,
        images: Arc<dyn ListingImageRepository>,
    ) -> Self {
        Self { listings, images }
    }

    /// Execute a paged search.
    ///
    /// Validation failures short-circuit before the first store round-trip.
    /// An empty page with `total = 0` is a success, never an error.
    pub async fn search(
        &self,
        filter: Option<SearchFilter>,
    ) -> Result<PagedResult<ListingView>> {
        let query = normalize(filter)?;

        let total = self.listings.count(&query).await?;
        let mut page = self.listings.find_page(&query).await?;
        self.attach_images(&mut page).await?;

        debug!(total, returned = page.len(), "listing search executed");

        let items = page.into_iter().map(ListingView::from).collect();
        Ok(PagedResult::new(items, query.page, query.page_size, total))
    }

    /// Resolve a single listing by its textual identifier.
    ///
    /// Returns `Ok(None)` for a well-formed identifier with no matching
    /// record; the identifier shape is checked before any store call.
    pub async fn get(&self, raw_id: &str) -> Result<Option<ListingView>> {
        let id = ListingId::parse(raw_id)?;

        let Some(mut listing) = self.listings.find_by_id(&id).await? else {
            return Ok(None);
        };
        listing.image_url = self.images.primary_image(&id).await?;

        Ok(Some(listing.into()))
    }

    /// Attach the primary image to every row of an already-narrowed page
    /// with a single batched lookup.
    async fn attach_images(&self, page: &mut [Listing]) -> Result<()> {
        let ids: Vec<ListingId> =
            page.iter().map(|listing| listing.id.clone()).collect();
        let mut files = self.images.primary_images(&ids).await?;
        for listing in page {
            listing.image_url = files.remove(&listing.id);
        }
        Ok(())
    }
}
