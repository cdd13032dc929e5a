use serde::{Deserialize, Serialize};

use super::pagination::PaginationInfo;
use crate::types::{DbId, Timestamp};

/// Request status awaiting an admin decision.
pub const REQUEST_STATUS_PENDING: &str = "pending";

/// Request status once an admin approved it and an expert was created.
pub const REQUEST_STATUS_APPROVED: &str = "approved";

/// Request status once an admin rejected it.
pub const REQUEST_STATUS_REJECTED: &str = "rejected";

/// A submitted request to add a new expert, pending admin review.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExpertRequest {
    pub id: DbId,
    pub name: String,
    pub status: String,
    pub cv_path: String,
    pub approval_document_path: String,
    pub designation: String,
    pub institution: String,
    pub is_bahraini: bool,
    pub is_available: bool,
    pub rating: String,
    pub role: String,
    pub employment_type: String,
    pub general_area: DbId,
    pub specialized_area: String,
    pub is_trained: bool,
    pub phone: String,
    pub email: String,
    pub biography: String,
    pub skills: Vec<String>,
    pub is_published: bool,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    pub rejection_reason: Option<String>,
    pub created_by: Option<DbId>,
    pub reviewed_by: Option<DbId>,
    pub reviewed_at: Option<Timestamp>,
    pub expert_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestListResponse {
    pub requests: Vec<ExpertRequest>,
    pub pagination: PaginationInfo,
}

/// Per-request outcome inside a batch approval.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchApproveResult {
    pub id: DbId,
    /// `"success"` or `"failed"`.
    pub status: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BatchApproveResponse {
    pub results: Vec<BatchApproveResult>,
    pub approved_ids: Vec<DbId>,
    pub error_count: i64,
}
