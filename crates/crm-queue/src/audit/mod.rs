//! Audit job queues

mod channel;
mod job;
mod redis_list;

pub use channel::{AuditJobReceiver, ChannelAuditQueue};
pub use job::AuditJob;
pub use redis_list::RedisAuditQueue;
