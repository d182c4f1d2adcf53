//! Postgres adapter for the listing collection.
//!
//! The search predicate is composed dynamically: start from a match-all
//! base, then AND in one clause per present filter field. The same
//! predicate feeds both the count and the page fetch, so the two can never
//! disagree about membership.

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::debug;

use propex_model::{Listing, ListingId, OwnerId};

use crate::database::ports::ListingRepository;
use crate::error::{CatalogError, Result};
use crate::query::{ListingQuery, SortCriteria, SortField, SortOrder};

const LISTING_COLUMNS: &str = "id, id_owner, name, address, price, \
     code_internal, year, created_at, updated_at";

#[derive(Debug, sqlx::FromRow)]
struct ListingRow {
    id: String,
    id_owner: String,
    name: String,
    address: String,
    price: BigDecimal,
    code_internal: String,
    year: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ListingRow> for Listing {
    type Error = CatalogError;

    fn try_from(row: ListingRow) -> Result<Self> {
        let id = ListingId::parse(&row.id).map_err(|e| {
            CatalogError::Internal(format!("stored listing id is not canonical: {e}"))
        })?;
        let id_owner = OwnerId::parse(&row.id_owner).map_err(|e| {
            CatalogError::Internal(format!("stored owner id is not canonical: {e}"))
        })?;
        Ok(Listing {
            id,
            id_owner,
            name: row.name,
            address: row.address,
            price: row.price,
            code_internal: row.code_internal,
            year: row.year,
            created_at: row.created_at,
            updated_at: row.updated_at,
            image_url: None,
        })
    }
}

#[derive(Clone, Debug)]
pub struct PostgresListingRepository {
    pool: PgPool,
}

impl PostgresListingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// AND in one clause per present filter field; no field, no clause.
fn push_predicate(sql: &mut QueryBuilder<'_, Postgres>, query: &ListingQuery) {
    if let Some(name) = &query.name {
        sql.push(" AND name ILIKE ");
        sql.push_bind(substring_pattern(name));
        sql.push(" ESCAPE E'\\\\'");
    }
    if let Some(address) = &query.address {
        sql.push(" AND address ILIKE ");
        sql.push_bind(substring_pattern(address));
        sql.push(" ESCAPE E'\\\\'");
    }
    if let Some(min) = &query.min_price {
        sql.push(" AND price >= ");
        sql.push_bind(min.clone());
    }
    if let Some(max) = &query.max_price {
        sql.push(" AND price <= ");
        sql.push_bind(max.clone());
    }
}

/// Single-key ordering plus a trailing `id` key.
///
/// The trailing key does not change the requested ordering semantics; it
/// pins rows with equal primary keys to one order, so repeated identical
/// queries over unchanged data return identical pages.
fn push_order(sql: &mut QueryBuilder<'_, Postgres>, sort: SortCriteria) {
    sql.push(" ORDER BY ");
    sql.push(match sort.field {
        SortField::Name => "name",
        SortField::Price => "price",
        SortField::CreatedAt => "created_at",
    });
    sql.push(match sort.order {
        SortOrder::Ascending => " ASC",
        SortOrder::Descending => " DESC",
    });
    sql.push(", id ASC");
}

fn substring_pattern(fragment: &str) -> String {
    format!("%{}%", escape_like_literal(fragment))
}

fn escape_like_literal(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '%' => out.push_str("\\%"),
            '_' => out.push_str("\\_"),
            other => out.push(other),
        }
    }
    out
}

#[async_trait]
impl ListingRepository for PostgresListingRepository {
    async fn count(&self, query: &ListingQuery) -> Result<i64> {
        let mut sql = QueryBuilder::<Postgres>::new(
            "SELECT COUNT(*) FROM listings WHERE 1=1",
        );
        push_predicate(&mut sql, query);

        let total = sql
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    async fn find_page(&self, query: &ListingQuery) -> Result<Vec<Listing>> {
        let mut sql = QueryBuilder::<Postgres>::new(format!(
            "SELECT {LISTING_COLUMNS} FROM listings WHERE 1=1"
        ));
        push_predicate(&mut sql, query);
        push_order(&mut sql, query.sort);
        sql.push(" OFFSET ");
        sql.push_bind(query.offset());
        sql.push(" LIMIT ");
        sql.push_bind(query.limit());

        debug!(page = query.page, page_size = query.page_size, "fetching listing page");

        let rows = sql
            .build_query_as::<ListingRow>()
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Listing::try_from).collect()
    }

    async fn find_by_id(&self, id: &ListingId) -> Result<Option<Listing>> {
        let row = sqlx::query_as::<_, ListingRow>(&format!(
            "SELECT {LISTING_COLUMNS} FROM listings WHERE id = $1"
        ))
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Listing::try_from).transpose()
    }
}
