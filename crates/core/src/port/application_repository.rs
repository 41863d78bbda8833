// Application Repository Port (Interface)

use crate::domain::{JobApplication, JobId};
use crate::error::Result;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Record an application.
    ///
    /// `NotFound` if the job does not exist, `AlreadyExists` if the user has
    /// already applied.
    async fn apply(&self, username: &str, job_id: JobId, applied_at: i64)
        -> Result<JobApplication>;

    /// Job ids the user has applied to, ascending
    async fn jobs_for_user(&self, username: &str) -> Result<Vec<JobId>>;
}
