//! Audit notification
//!
//! Hands audit entries to the configured queue. Enqueue failures are logged
//! and dropped: the mutation being audited has already happened and must
//! still be reported as successful.

use std::sync::Arc;

use crm_core::{AuditLogEntry, AuditQueue};
use tracing::{debug, instrument, warn};

/// Fire-and-forget front for an [`AuditQueue`]
#[derive(Clone)]
pub struct AuditNotifier {
    queue: Arc<dyn AuditQueue>,
}

impl AuditNotifier {
    pub fn new(queue: Arc<dyn AuditQueue>) -> Self {
        Self { queue }
    }

    /// Enqueue an audit entry; waits for queue acceptance only, never for processing
    #[instrument(skip(self, entry), fields(action = %entry.action, author_id = %entry.author_id))]
    pub async fn notify(&self, entry: AuditLogEntry) {
        match self.queue.enqueue(entry).await {
            Ok(()) => debug!("Audit log queued"),
            Err(e) => warn!(error = %e, "Failed to queue audit log"),
        }
    }
}

impl std::fmt::Debug for AuditNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuditNotifier")
            .field("queue", &"dyn AuditQueue")
            .finish()
    }
}
