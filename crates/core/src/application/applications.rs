// Application Service - users applying to jobs

use crate::domain::{DomainError, JobApplication, JobId};
use crate::error::Result;
use crate::port::{ApplicationRepository, TimeProvider};
use std::sync::Arc;
use tracing::info;

pub struct ApplicationService {
    application_repo: Arc<dyn ApplicationRepository>,
    time_provider: Arc<dyn TimeProvider>,
}

impl ApplicationService {
    pub fn new(
        application_repo: Arc<dyn ApplicationRepository>,
        time_provider: Arc<dyn TimeProvider>,
    ) -> Self {
        Self {
            application_repo,
            time_provider,
        }
    }

    /// Record that `username` applied to `job_id`, stamped with the current time
    pub async fn apply(&self, username: &str, job_id: JobId) -> Result<JobApplication> {
        if username.trim().is_empty() {
            return Err(DomainError::EmptyUsername.into());
        }

        let applied_at = self.time_provider.now_millis();
        let application = self
            .application_repo
            .apply(username, job_id, applied_at)
            .await?;

        info!(username = %username, job_id, "Application recorded");
        Ok(application)
    }

    pub async fn jobs_for_user(&self, username: &str) -> Result<Vec<JobId>> {
        self.application_repo.jobs_for_user(username).await
    }
}
