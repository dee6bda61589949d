//! Queued audit job envelope

use chrono::{DateTime, Utc};
use crm_core::AuditLogEntry;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One unit of work for the audit consumer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditJob {
    /// Unique per enqueue, lets consumers drop redeliveries
    pub id: Uuid,
    pub queued_at: DateTime<Utc>,
    #[serde(rename = "audit_log")]
    pub entry: AuditLogEntry,
}

impl AuditJob {
    pub fn new(entry: AuditLogEntry) -> Self {
        Self {
            id: Uuid::new_v4(),
            queued_at: Utc::now(),
            entry,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(payload)
    }
}
