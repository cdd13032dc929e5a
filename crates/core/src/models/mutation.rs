use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// Acknowledgement returned by create/update/delete endpoints.
///
/// `id` is only present for creates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MutationResult {
    pub id: Option<DbId>,
    pub success: bool,
    pub message: String,
}
