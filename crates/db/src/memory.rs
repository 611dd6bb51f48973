use async_trait::async_trait;
use demandboard_core::demand::{Demand, DemandChanges, DemandFilter};
use demandboard_core::paging::Page;
use demandboard_core::types::Timestamp;
use tokio::sync::RwLock;

use crate::store::{DemandStore, StoreError};

/// In-process [`DemandStore`] holding demands in insertion order.
///
/// Each call takes the lock for exactly one operation, matching the
/// per-operation atomicity of the database store.
#[derive(Default)]
pub struct MemoryDemandStore {
    demands: RwLock<Vec<Demand>>,
}

impl MemoryDemandStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DemandStore for MemoryDemandStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.demands.read().await.len() as u64)
    }

    async fn insert(&self, demand: &Demand) -> Result<(), StoreError> {
        let mut demands = self.demands.write().await;
        if demands.iter().any(|d| d.id == demand.id) {
            return Err(StoreError::Duplicate(demand.id.clone()));
        }
        demands.push(demand.clone());
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Option<Demand>, StoreError> {
        Ok(self
            .demands
            .read()
            .await
            .iter()
            .find(|d| d.id == id)
            .cloned())
    }

    async fn list(&self, filter: &DemandFilter, page: Page) -> Result<Vec<Demand>, StoreError> {
        Ok(self
            .demands
            .read()
            .await
            .iter()
            .filter(|d| filter.matches(d))
            .skip(page.offset as usize)
            .take(page.limit as usize)
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: &str,
        changes: &DemandChanges,
        now: Timestamp,
    ) -> Result<Option<Demand>, StoreError> {
        let mut demands = self.demands.write().await;
        let Some(stored) = demands.iter_mut().find(|d| d.id == id) else {
            return Ok(None);
        };
        stored.apply_changes(changes, now);
        Ok(Some(stored.clone()))
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut demands = self.demands.write().await;
        let before = demands.len();
        demands.retain(|d| d.id != id);
        Ok(demands.len() < before)
    }

    async fn delete_many(&self, ids: &[String]) -> Result<u64, StoreError> {
        let mut demands = self.demands.write().await;
        let before = demands.len();
        demands.retain(|d| !ids.contains(&d.id));
        Ok((before - demands.len()) as u64)
    }

    async fn close(&self) {}
}
