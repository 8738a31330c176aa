use crate::domain::LocationRecord;
use anyhow::Result;
use async_trait::async_trait;

pub mod mongo;

// the store is append-only: handlers only ever insert one record or read the
// whole log back, so this is the entire persistence contract.
// mongo-specific types stay behind "mongo.rs"; tests swap in an in-memory mock
#[async_trait]
pub trait LocationRepository: Send + Sync {
    async fn insert_location(&self, record: &LocationRecord) -> Result<()>;

    // newest first, the order the list page wants
    async fn get_locations_newest_first(&self) -> Result<Vec<LocationRecord>>;
}
