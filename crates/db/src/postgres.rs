use async_trait::async_trait;
use demandboard_core::demand::{Demand, DemandChanges, DemandFilter};
use demandboard_core::paging::Page;
use demandboard_core::types::Timestamp;

use crate::models::demand::into_demands;
use crate::repositories::DemandRepo;
use crate::store::{DemandStore, StoreError};
use crate::DbPool;

/// [`DemandStore`] backed by a PostgreSQL connection pool.
#[derive(Clone)]
pub struct PgDemandStore {
    pool: DbPool,
}

impl PgDemandStore {
    /// Wrap an existing pool. Migrations are assumed to be applied.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Connect, verify the database answers, and apply migrations.
    pub async fn open(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = crate::create_pool(database_url, max_connections).await?;
        tracing::info!(max_connections, "Database connection pool created");

        crate::health_check(&pool).await?;
        tracing::info!("Database health check passed");

        crate::run_migrations(&pool)
            .await
            .map_err(|e| StoreError::Database(e.into()))?;
        tracing::info!("Database migrations applied");

        Ok(Self { pool })
    }
}

#[async_trait]
impl DemandStore for PgDemandStore {
    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let count = DemandRepo::count(&self.pool).await?;
        Ok(count.max(0) as u64)
    }

    async fn insert(&self, demand: &Demand) -> Result<(), StoreError> {
        DemandRepo::insert(&self.pool, demand).await?;
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Option<Demand>, StoreError> {
        DemandRepo::find_by_id(&self.pool, id)
            .await?
            .map(Demand::try_from)
            .transpose()
    }

    async fn list(&self, filter: &DemandFilter, page: Page) -> Result<Vec<Demand>, StoreError> {
        let rows = DemandRepo::list(&self.pool, filter, page).await?;
        into_demands(rows)
    }

    async fn update(
        &self,
        id: &str,
        changes: &DemandChanges,
        now: Timestamp,
    ) -> Result<Option<Demand>, StoreError> {
        DemandRepo::update(&self.pool, id, changes, now)
            .await?
            .map(Demand::try_from)
            .transpose()
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        Ok(DemandRepo::delete(&self.pool, id).await?)
    }

    async fn delete_many(&self, ids: &[String]) -> Result<u64, StoreError> {
        if ids.is_empty() {
            return Ok(0);
        }
        Ok(DemandRepo::delete_many(&self.pool, ids).await?)
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database connection pool closed");
    }
}
