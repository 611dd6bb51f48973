use async_trait::async_trait;
use demandboard_core::demand::{Demand, DemandChanges, DemandFilter};
use demandboard_core::paging::Page;
use demandboard_core::types::Timestamp;

/// Errors raised by a [`DemandStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Another demand already holds this identifier.
    #[error("Duplicate demand id: {0}")]
    Duplicate(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// A stored row could not be decoded into a [`Demand`].
    #[error("Corrupt demand record: {0}")]
    Corrupt(String),
}

/// Persistence operations for demands, keyed by the `DMD-NNNN` identifier.
///
/// Every method is a single store round-trip. There is no cross-call locking,
/// so `count` followed by `insert` can race with another writer; `insert`
/// rejects a duplicate identifier instead of storing it twice. `update` is
/// atomic per record, so concurrent updates to different fields all land.
#[async_trait]
pub trait DemandStore: Send + Sync {
    /// Cheap reachability probe.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Number of demands currently stored.
    async fn count(&self) -> Result<u64, StoreError>;

    async fn insert(&self, demand: &Demand) -> Result<(), StoreError>;

    async fn find(&self, id: &str) -> Result<Option<Demand>, StoreError>;

    /// Demands matching `filter`, in insertion order.
    async fn list(&self, filter: &DemandFilter, page: Page) -> Result<Vec<Demand>, StoreError>;

    /// Write only the fields present in `changes` and stamp `updated_at`.
    ///
    /// Returns the merged record, or `None` if no demand has this id.
    async fn update(
        &self,
        id: &str,
        changes: &DemandChanges,
        now: Timestamp,
    ) -> Result<Option<Demand>, StoreError>;

    /// Returns `true` if a demand was removed.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;

    /// Remove every demand whose id is in `ids`. Unknown ids are ignored.
    ///
    /// Returns the number of demands actually removed.
    async fn delete_many(&self, ids: &[String]) -> Result<u64, StoreError>;

    /// Release underlying resources. Called once after the server stops.
    async fn close(&self);
}
