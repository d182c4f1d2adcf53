//! Listing search and lookup handlers.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use propex_core::{ListingView, PagedResult, SearchFilter};

use crate::{
    errors::{AppError, AppResult},
    AppState,
};

/// `GET /api/v1/listings` - paged search over the catalog.
pub async fn search_listings_handler(
    State(state): State<AppState>,
    Query(filter): Query<SearchFilter>,
) -> AppResult<Json<PagedResult<ListingView>>> {
    let page = state.listings.search(Some(filter)).await?;
    Ok(Json(page))
}

/// `GET /api/v1/listings/{id}` - resolve one listing by identifier.
///
/// A well-formed identifier with no matching record is a 404; a malformed
/// identifier is a 400 (mapped from the core error).
pub async fn get_listing_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ListingView>> {
    match state.listings.get(&id).await? {
        Some(view) => Ok(Json(view)),
        None => Err(AppError::not_found(format!("listing {id} not found"))),
    }
}
