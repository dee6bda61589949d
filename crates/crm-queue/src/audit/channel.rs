//! In-process audit queue backed by a tokio channel

use async_trait::async_trait;
use crm_core::{AuditLogEntry, AuditQueue, DomainError, RepoResult};
use tokio::sync::mpsc;

use super::job::AuditJob;

/// Sending half, handed to services as their [`AuditQueue`]
///
/// Unbounded: enqueueing never waits on the consumer.
#[derive(Debug, Clone)]
pub struct ChannelAuditQueue {
    sender: mpsc::UnboundedSender<AuditJob>,
}

/// Receiving half, owned by the audit consumer
#[derive(Debug)]
pub struct AuditJobReceiver {
    receiver: mpsc::UnboundedReceiver<AuditJob>,
}

impl ChannelAuditQueue {
    pub fn new() -> (Self, AuditJobReceiver) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, AuditJobReceiver { receiver })
    }

    /// True once the receiver has been dropped
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

#[async_trait]
impl AuditQueue for ChannelAuditQueue {
    async fn enqueue(&self, entry: AuditLogEntry) -> RepoResult<()> {
        let job = AuditJob::new(entry);
        let job_id = job.id;

        self.sender
            .send(job)
            .map_err(|_| DomainError::QueueError("audit consumer has shut down".to_string()))?;

        tracing::debug!(job_id = %job_id, "Audit job queued in-process");
        Ok(())
    }
}

impl AuditJobReceiver {
    /// Wait for the next job; `None` once every sender is gone
    pub async fn recv(&mut self) -> Option<AuditJob> {
        self.receiver.recv().await
    }

    /// Take a job if one is ready, without waiting
    pub fn try_recv(&mut self) -> Option<AuditJob> {
        self.receiver.try_recv().ok()
    }

    /// Take every job that is ready right now
    pub fn drain(&mut self) -> Vec<AuditJob> {
        std::iter::from_fn(|| self.try_recv()).collect()
    }
}
