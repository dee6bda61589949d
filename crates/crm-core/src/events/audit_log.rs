//! Audit log entries
//!
//! An entry describes one state-changing action. It is produced once by the
//! service that performed the mutation, handed to an [`AuditQueue`] and
//! consumed once by the audit subsystem; nothing here persists it.
//!
//! [`AuditQueue`]: crate::traits::AuditQueue

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::entities::{Company, User};
use crate::value_objects::Snowflake;

/// Audited action tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    CompanyCreated,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CompanyCreated => "company_created",
        }
    }

    /// Whether entries for this action are listed on the account dashboard
    pub fn appears_on_dashboard(&self) -> bool {
        match self {
            Self::CompanyCreated => true,
        }
    }
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable description of an audited mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub action: AuditAction,
    pub account_id: Snowflake,
    pub author_id: Snowflake,
    pub author_name: String,
    /// Contact the action concerns, if any
    pub about_contact_id: Option<Snowflake>,
    pub should_appear_on_dashboard: bool,
    pub audited_at: DateTime<Utc>,
    /// JSON-encoded snapshot of the fields relevant to the action
    pub objects: String,
}

impl AuditLogEntry {
    /// Entry for a freshly created company
    ///
    /// Only the company name goes into the snapshot. It is encoded by
    /// `serde_json`, which leaves `/` and non-ASCII characters unescaped;
    /// consumers should compare the decoded JSON, not the raw string.
    pub fn company_created(company: &Company, author: &User) -> Self {
        let action = AuditAction::CompanyCreated;
        Self {
            action,
            account_id: company.account_id,
            author_id: author.id,
            author_name: author.name(),
            about_contact_id: None,
            should_appear_on_dashboard: action.appears_on_dashboard(),
            audited_at: Utc::now(),
            objects: json!({ "name": company.name }).to_string(),
        }
    }

    /// Decode the snapshot back into structured JSON
    pub fn objects_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.objects)
    }
}
