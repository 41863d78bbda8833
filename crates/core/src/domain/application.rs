// Job Application Domain Model

use super::job::JobId;
use serde::{Deserialize, Serialize};

/// A user's application to a job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub username: String,
    pub job_id: JobId,
    pub applied_at: i64, // epoch ms
}
