mod mongo;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::ReportRecord;

pub use mongo::MongoSink;

/// Destination for one record per successful calculation.
#[async_trait]
pub trait RecordSink: Send + Sync {
    async fn insert(&self, record: &ReportRecord) -> Result<()>;
}
