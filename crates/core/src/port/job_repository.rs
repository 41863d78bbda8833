// Job Repository Port (Interface)

use crate::domain::{Job, JobFilter, JobId, JobUpdate, NewJob};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for Job persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Insert a new job.
    ///
    /// `NotFound` if the company does not exist, `AlreadyExists` if the
    /// company already has a job with this title.
    async fn create(&self, job: &NewJob) -> Result<Job>;

    /// All jobs ordered by title, narrowed by `filter`
    async fn find_all(&self, filter: &JobFilter) -> Result<Vec<Job>>;

    /// Find job by ID (`NotFound` if absent)
    async fn get(&self, id: JobId) -> Result<Job>;

    /// Apply a partial update and return the stored result.
    ///
    /// Supplied fields are assigned in `JobUpdate` declaration order
    /// (title, salary, equity, companyHandle), not the order they were set.
    ///
    /// `InvalidInput` for an empty update, `NotFound` for an unknown id.
    async fn update(&self, id: JobId, changes: &JobUpdate) -> Result<Job>;

    /// Delete job (`NotFound` if nothing was deleted)
    async fn remove(&self, id: JobId) -> Result<()>;
}
