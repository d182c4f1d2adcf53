use std::{fmt, sync::Arc};

use propex_core::database::{
    PostgresDatabase, PostgresListingImageRepository, PostgresListingRepository,
};
use propex_core::ListingService;

use crate::infra::config::Config;

/// Shared application state.
///
/// Built once at startup and cloned into every request; everything inside is
/// behind an `Arc`, so clones are cheap and no request-scoped setup exists.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PostgresDatabase>,
    pub listings: Arc<ListingService>,
    pub config: Arc<Config>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    /// Wire the catalog service onto the shared store handle.
    pub fn new(db: PostgresDatabase, config: Config) -> Self {
        let listings_repo =
            Arc::new(PostgresListingRepository::new(db.pool().clone()));
        let images_repo =
            Arc::new(PostgresListingImageRepository::new(db.pool().clone()));
        let listings =
            Arc::new(ListingService::new(listings_repo, images_repo));

        Self {
            db: Arc::new(db),
            listings,
            config: Arc::new(config),
        }
    }
}
