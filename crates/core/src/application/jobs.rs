// Job Service - Core use cases for job postings

use crate::domain::{Job, JobFilter, JobId, JobUpdate, NewJob};
use crate::error::{AppError, Result};
use crate::port::JobRepository;
use std::sync::Arc;
use tracing::{debug, info};

/// Job use cases over an injected repository
///
/// Validates domain input before anything reaches storage; storage-level
/// failures (`NotFound`, `AlreadyExists`, `Database`) pass through unchanged.
pub struct JobService {
    job_repo: Arc<dyn JobRepository>,
}

impl JobService {
    pub fn new(job_repo: Arc<dyn JobRepository>) -> Self {
        Self { job_repo }
    }

    /// Create a job posting for an existing company
    pub async fn create(&self, new_job: NewJob) -> Result<Job> {
        new_job.validate()?;

        let job = self.job_repo.create(&new_job).await?;

        info!(
            job_id = job.id,
            title = %job.title,
            company = %job.company_handle,
            "Job created"
        );
        Ok(job)
    }

    /// List jobs ordered by title, narrowed by `filter`
    pub async fn list(&self, filter: &JobFilter) -> Result<Vec<Job>> {
        let jobs = self.job_repo.find_all(filter).await?;
        debug!(count = jobs.len(), ?filter, "Jobs listed");
        Ok(jobs)
    }

    pub async fn get(&self, id: JobId) -> Result<Job> {
        self.job_repo.get(id).await
    }

    /// Change only the supplied fields
    pub async fn update(&self, id: JobId, changes: JobUpdate) -> Result<Job> {
        // Reject before touching storage
        if changes.is_empty() {
            return Err(AppError::InvalidInput("No data".to_string()));
        }
        changes.validate()?;

        let job = self.job_repo.update(id, &changes).await?;

        info!(job_id = job.id, ?changes, "Job updated");
        Ok(job)
    }

    pub async fn remove(&self, id: JobId) -> Result<()> {
        self.job_repo.remove(id).await?;
        info!(job_id = id, "Job removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainError, Equity};
    use crate::port::job_repository::MockJobRepository;

    fn stored(id: JobId, new_job: &NewJob) -> Job {
        Job {
            id,
            title: new_job.title.clone(),
            salary: new_job.salary,
            equity: new_job.equity,
            company_handle: new_job.company_handle.clone(),
        }
    }

    #[tokio::test]
    async fn test_create_delegates_valid_job() {
        let mut repo = MockJobRepository::new();
        repo.expect_create()
            .times(1)
            .returning(|new_job| Ok(stored(1, new_job)));

        let service = JobService::new(Arc::new(repo));
        let new_job = NewJob::new("Product Manager", "c1")
            .with_salary(10_000)
            .with_equity(Equity::parse("0.002").unwrap());

        let job = service.create(new_job.clone()).await.unwrap();
        assert_eq!(job.id, 1);
        assert_eq!(job.title, new_job.title);
        assert_eq!(job.equity.unwrap().to_string(), "0.002");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_job_without_storage() {
        let mut repo = MockJobRepository::new();
        repo.expect_create().never();

        let service = JobService::new(Arc::new(repo));
        let err = service
            .create(NewJob::new("", "c1"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(DomainError::EmptyTitle)));
    }

    #[tokio::test]
    async fn test_create_passes_through_repository_errors() {
        let mut repo = MockJobRepository::new();
        repo.expect_create()
            .returning(|_| Err(AppError::NotFound("company not found: nope".into())));

        let service = JobService::new(Arc::new(repo));
        let err = service
            .create(NewJob::new("Engineer", "nope"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_empty_update_is_invalid_input_before_storage() {
        let mut repo = MockJobRepository::new();
        repo.expect_update().never();

        let service = JobService::new(Arc::new(repo));
        let err = service.update(1, JobUpdate::default()).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(msg) if msg == "No data"));
    }

    #[tokio::test]
    async fn test_update_forwards_changes() {
        let mut repo = MockJobRepository::new();
        repo.expect_update()
            .withf(|id, changes| *id == 3 && changes.title.as_deref() == Some("X"))
            .times(1)
            .returning(|id, changes| {
                Ok(Job {
                    id,
                    title: changes.title.clone().unwrap_or_default(),
                    salary: Some(1),
                    equity: None,
                    company_handle: "c1".to_string(),
                })
            });

        let service = JobService::new(Arc::new(repo));
        let job = service.update(3, JobUpdate::default().title("X")).await.unwrap();
        assert_eq!(job.id, 3);
        assert_eq!(job.title, "X");
    }

    #[tokio::test]
    async fn test_list_and_remove_delegate() {
        let mut repo = MockJobRepository::new();
        repo.expect_find_all().times(1).returning(|_| Ok(vec![]));
        repo.expect_remove()
            .times(1)
            .returning(|id| Err(AppError::NotFound(format!("No job: {}", id))));

        let service = JobService::new(Arc::new(repo));
        assert!(service.list(&JobFilter::default()).await.unwrap().is_empty());
        assert!(matches!(
            service.remove(9).await.unwrap_err(),
            AppError::NotFound(_)
        ));
    }
}
