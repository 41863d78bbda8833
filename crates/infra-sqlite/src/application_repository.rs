// SQLite ApplicationRepository Implementation

use crate::error::map_sqlx_error;
use async_trait::async_trait;
use jobly_core::domain::{JobApplication, JobId};
use jobly_core::error::{AppError, Result};
use jobly_core::port::ApplicationRepository;
use sqlx::SqlitePool;

pub struct SqliteApplicationRepository {
    pool: SqlitePool,
}

impl SqliteApplicationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationRepository for SqliteApplicationRepository {
    async fn apply(
        &self,
        username: &str,
        job_id: JobId,
        applied_at: i64,
    ) -> Result<JobApplication> {
        // Inserting from the jobs table makes "job exists" part of the write
        let row = sqlx::query_as::<_, ApplicationRow>(
            r#"
            INSERT INTO applications (username, job_id, applied_at)
            SELECT $1, id, $2 FROM jobs WHERE id = $3
            RETURNING username, job_id, applied_at
            "#,
        )
        .bind(username)
        .bind(applied_at)
        .bind(job_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match map_sqlx_error(e) {
            AppError::AlreadyExists(_) => AppError::AlreadyExists(format!(
                "{} already applied to job {}",
                username, job_id
            )),
            other => other,
        })?;

        match row {
            Some(row) => Ok(JobApplication {
                username: row.username,
                job_id: row.job_id,
                applied_at: row.applied_at,
            }),
            None => Err(AppError::NotFound(format!("No job: {}", job_id))),
        }
    }

    async fn jobs_for_user(&self, username: &str) -> Result<Vec<JobId>> {
        sqlx::query_scalar("SELECT job_id FROM applications WHERE username = $1 ORDER BY job_id")
            .bind(username)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ApplicationRow {
    username: String,
    job_id: i64,
    applied_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_pool, run_migrations};

    async fn setup_test_db() -> (SqlitePool, JobId) {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        run_migrations(&pool).await.unwrap();
        sqlx::query("INSERT INTO companies (handle, name) VALUES ('c1', 'C1')")
            .execute(&pool)
            .await
            .unwrap();
        let job_id: i64 =
            sqlx::query_scalar("INSERT INTO jobs (title, company_handle) VALUES ('J1', 'c1') RETURNING id")
                .fetch_one(&pool)
                .await
                .unwrap();
        (pool, job_id)
    }

    #[tokio::test]
    async fn test_apply_and_list() {
        let (pool, job_id) = setup_test_db().await;
        let repo = SqliteApplicationRepository::new(pool);

        let application = repo.apply("u1", job_id, 1_000).await.unwrap();
        assert_eq!(
            application,
            JobApplication {
                username: "u1".to_string(),
                job_id,
                applied_at: 1_000,
            }
        );
        assert_eq!(repo.jobs_for_user("u1").await.unwrap(), vec![job_id]);
        assert!(repo.jobs_for_user("u2").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_apply_errors() {
        let (pool, job_id) = setup_test_db().await;
        let repo = SqliteApplicationRepository::new(pool);

        assert!(matches!(
            repo.apply("u1", job_id + 100, 0).await.unwrap_err(),
            AppError::NotFound(_)
        ));

        repo.apply("u1", job_id, 0).await.unwrap();
        assert!(matches!(
            repo.apply("u1", job_id, 5).await.unwrap_err(),
            AppError::AlreadyExists(_)
        ));
    }

    #[tokio::test]
    async fn test_applications_removed_with_job() {
        let (pool, job_id) = setup_test_db().await;
        let repo = SqliteApplicationRepository::new(pool.clone());

        repo.apply("u1", job_id, 0).await.unwrap();
        sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(job_id)
            .execute(&pool)
            .await
            .unwrap();

        assert!(repo.jobs_for_user("u1").await.unwrap().is_empty());
    }
}
