//! Audit queue port

use async_trait::async_trait;

use crate::events::AuditLogEntry;
use crate::traits::RepoResult;

/// Hand-off point to the asynchronous audit subsystem
///
/// `enqueue` resolves once the entry has been accepted by the queue, not when
/// it has been processed. Delivery and retries belong to the consumer.
#[async_trait]
pub trait AuditQueue: Send + Sync {
    async fn enqueue(&self, entry: AuditLogEntry) -> RepoResult<()>;
}
