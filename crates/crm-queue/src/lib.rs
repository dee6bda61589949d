//! # crm-queue
//!
//! Adapters that hand audit log entries to the asynchronous audit subsystem.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Redis queue**: jobs pushed onto a Redis list for an external worker
//! - **Channel queue**: in-process `mpsc` hand-off, drained by a local consumer
//!
//! Both implement [`crm_core::AuditQueue`] and wrap each entry in an
//! [`AuditJob`] envelope.
//!
//! ## Example
//!
//! ```ignore
//! use crm_queue::{ChannelAuditQueue, RedisAuditQueue, RedisPool, RedisPoolConfig};
//!
//! // In-process
//! let (queue, mut receiver) = ChannelAuditQueue::new();
//! tokio::spawn(async move {
//!     while let Some(job) = receiver.recv().await {
//!         store_audit_log(job).await;
//!     }
//! });
//!
//! // Redis-backed
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//! let queue = RedisAuditQueue::new(pool, "crm:queue:audit_logs");
//! ```

pub mod audit;
pub mod pool;

// Re-export pool types
pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};

// Re-export queue types
pub use audit::{AuditJob, AuditJobReceiver, ChannelAuditQueue, RedisAuditQueue};
