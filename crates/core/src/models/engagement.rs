use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

/// A recorded piece of work an expert did (evaluation, consultation, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Engagement {
    pub id: DbId,
    pub expert_id: DbId,
    pub expert_name: String,
    pub title: String,
    pub description: String,
    pub engagement_type: String,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub project_name: String,
    pub organization_name: String,
    pub contact_person: String,
    pub contact_email: String,
    pub status: String,
    pub notes: Option<String>,
    pub request_id: Option<DbId>,
    pub created_at: Option<Timestamp>,
}

/// Result summary of a CSV engagement import.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportSummary {
    pub success: bool,
    pub message: String,
    pub imported: i64,
    pub failed: i64,
}
