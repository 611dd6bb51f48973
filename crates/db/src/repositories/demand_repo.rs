//! Repository for the `demands` table.

use demandboard_core::demand::{Demand, DemandChanges, DemandFilter};
use demandboard_core::paging::Page;
use demandboard_core::types::Timestamp;
use sqlx::PgPool;

use crate::models::demand::DemandRow;

/// Column list for `demands` queries. `seq` is internal and never selected.
const COLUMNS: &str = "\
    id, description, priority, responsible, subgroup, category, \
    observation, delivery_date, created_at, updated_at";

/// Provides SQL operations for demands.
pub struct DemandRepo;

impl DemandRepo {
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM demands")
            .fetch_one(pool)
            .await
    }

    /// Insert a fully-formed demand. Fails with a unique violation on
    /// `uq_demands_id` if the identifier is already taken.
    pub async fn insert(pool: &PgPool, demand: &Demand) -> Result<DemandRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO demands \
                 (id, description, priority, responsible, subgroup, category, \
                  observation, delivery_date, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DemandRow>(&query)
            .bind(&demand.id)
            .bind(&demand.description)
            .bind(demand.priority.as_str())
            .bind(&demand.responsible)
            .bind(&demand.subgroup)
            .bind(demand.category.as_str())
            .bind(&demand.observation)
            .bind(demand.delivery_date.as_deref())
            .bind(demand.created_at)
            .bind(demand.updated_at)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<DemandRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM demands WHERE id = $1");
        sqlx::query_as::<_, DemandRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List demands in insertion order, with optional equality filters.
    pub async fn list(
        pool: &PgPool,
        filter: &DemandFilter,
        page: Page,
    ) -> Result<Vec<DemandRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM demands \
             WHERE ($1::TEXT IS NULL OR priority = $1) \
               AND ($2::TEXT IS NULL OR subgroup = $2) \
               AND ($3::TEXT IS NULL OR category = $3) \
             ORDER BY seq \
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, DemandRow>(&query)
            .bind(filter.priority.map(|p| p.as_str()))
            .bind(filter.subgroup.as_deref())
            .bind(filter.category.map(|c| c.as_str()))
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(pool)
            .await
    }

    /// Merge-patch an existing demand in one statement.
    ///
    /// A `NULL` parameter leaves its column as stored, so concurrent updates
    /// to different fields do not overwrite each other. `id` and `created_at`
    /// are never written. Returns `None` if no demand with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        changes: &DemandChanges,
        now: Timestamp,
    ) -> Result<Option<DemandRow>, sqlx::Error> {
        let query = format!(
            "UPDATE demands SET \
                 description = COALESCE($2, description), \
                 priority = COALESCE($3, priority), \
                 responsible = COALESCE($4, responsible), \
                 subgroup = COALESCE($5, subgroup), \
                 category = COALESCE($6, category), \
                 observation = COALESCE($7, observation), \
                 delivery_date = COALESCE($8, delivery_date), \
                 updated_at = $9 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DemandRow>(&query)
            .bind(id)
            .bind(changes.description.as_deref())
            .bind(changes.priority.map(|p| p.as_str()))
            .bind(changes.responsible.as_deref())
            .bind(changes.subgroup.as_deref())
            .bind(changes.category.map(|c| c.as_str()))
            .bind(changes.observation.as_deref())
            .bind(changes.delivery_date.as_deref())
            .bind(now)
            .fetch_optional(pool)
            .await
    }

    /// Delete a demand by id. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM demands WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every demand whose id is in `ids`. Returns the number removed.
    pub async fn delete_many(pool: &PgPool, ids: &[String]) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM demands WHERE id = ANY($1)")
            .bind(ids)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
