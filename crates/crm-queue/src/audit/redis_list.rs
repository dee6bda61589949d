//! Redis list backed audit queue

use async_trait::async_trait;
use crm_core::{AuditLogEntry, AuditQueue, DomainError, RepoResult};
use redis::AsyncCommands;

use super::job::AuditJob;
use crate::pool::{RedisPool, RedisResult};

/// Pushes audit jobs onto a Redis list (`LPUSH`); workers consume with `RPOP`/`BRPOP`
#[derive(Debug, Clone)]
pub struct RedisAuditQueue {
    pool: RedisPool,
    key: String,
}

impl RedisAuditQueue {
    pub fn new(pool: RedisPool, key: impl Into<String>) -> Self {
        Self {
            pool,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Push a job, returning the queue length afterwards
    pub async fn push(&self, job: &AuditJob) -> RedisResult<u64> {
        let payload = job.to_json()?;
        let mut conn = self.pool.get().await?;
        let len: u64 = conn.lpush(&self.key, payload).await?;

        tracing::debug!(key = %self.key, job_id = %job.id, queue_len = len, "Audit job pushed");
        Ok(len)
    }

    /// Pop the oldest job, if any
    pub async fn pop(&self) -> RedisResult<Option<AuditJob>> {
        let mut conn = self.pool.get().await?;
        let payload: Option<String> = conn.rpop(&self.key, None).await?;
        Ok(match payload {
            Some(p) => Some(AuditJob::from_json(&p)?),
            None => None,
        })
    }

    /// Number of jobs waiting
    pub async fn pending(&self) -> RedisResult<u64> {
        let mut conn = self.pool.get().await?;
        Ok(conn.llen(&self.key).await?)
    }
}

#[async_trait]
impl AuditQueue for RedisAuditQueue {
    async fn enqueue(&self, entry: AuditLogEntry) -> RepoResult<()> {
        let job = AuditJob::new(entry);
        self.push(&job)
            .await
            .map(|_| ())
            .map_err(|e| DomainError::QueueError(e.to_string()))
    }
}
