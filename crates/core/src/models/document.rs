use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

/// Document type for CVs.
pub const DOCUMENT_TYPE_CV: &str = "cv";

/// Document type for approval letters attached to expert requests.
pub const DOCUMENT_TYPE_APPROVAL: &str = "approval";

/// A file stored against an expert.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Document {
    pub id: DbId,
    pub expert_id: DbId,
    pub document_type: String,
    pub file_path: String,
    pub original_filename: Option<String>,
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub size: Option<i64>,
    pub uploaded_at: Option<Timestamp>,
    pub created_at: Option<Timestamp>,
}

/// Response of the per-expert document listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocumentListResponse {
    pub expert_id: DbId,
    pub count: i64,
    pub documents: Vec<Document>,
}
