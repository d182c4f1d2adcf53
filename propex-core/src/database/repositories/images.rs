//! Postgres adapter for the related-image collection.
//!
//! Enrichment only ever runs after a page (or a single lookup) has been
//! narrowed, so the queries here touch at most `page_size` listings. When
//! several enabled images exist for one listing, the lowest image id wins -
//! which image is "first" is a don't-care, but the choice must not move
//! between identical calls.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;

use propex_model::ListingId;

use crate::database::ports::ListingImageRepository;
use crate::error::{CatalogError, Result};

#[derive(Clone, Debug)]
pub struct PostgresListingImageRepository {
    pool: PgPool,
}

impl PostgresListingImageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ListingImageRepository for PostgresListingImageRepository {
    async fn primary_image(&self, id: &ListingId) -> Result<Option<String>> {
        let file = sqlx::query_scalar::<_, String>(
            "SELECT file FROM listing_images \
             WHERE id_property = $1 AND enabled = TRUE \
             ORDER BY id \
             LIMIT 1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(file)
    }

    async fn primary_images(
        &self,
        ids: &[ListingId],
    ) -> Result<HashMap<ListingId, String>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let id_params: Vec<String> =
            ids.iter().map(|id| id.as_str().to_owned()).collect();

        let rows = sqlx::query_as::<_, (String, String)>(
            "SELECT DISTINCT ON (id_property) id_property, file \
             FROM listing_images \
             WHERE id_property = ANY($1) AND enabled = TRUE \
             ORDER BY id_property, id",
        )
        .bind(&id_params)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|(id, file)| {
                let id = ListingId::parse(&id).map_err(|e| {
                    CatalogError::Internal(format!(
                        "stored image owner id is not canonical: {e}"
                    ))
                })?;
                Ok((id, file))
            })
            .collect()
    }
}
