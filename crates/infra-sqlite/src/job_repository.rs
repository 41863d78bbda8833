// SQLite JobRepository Implementation

use crate::error::{constraint_violation, map_sqlx_error, ConstraintViolation};
use crate::partial_update::sql_for_partial_update;
use async_trait::async_trait;
use jobly_core::domain::{Equity, Job, JobFilter, JobId, JobUpdate, NewJob};
use jobly_core::error::{AppError, Result};
use jobly_core::port::JobRepository;
use sqlx::SqlitePool;
use std::collections::HashMap;
use tracing::debug;

const JOB_COLUMNS: &str = "id, title, salary, equity, company_handle";

/// Value bound to one SET placeholder
#[derive(Debug, Clone, PartialEq)]
enum SqlValue {
    Text(String),
    Integer(i64),
    Null,
}

pub struct SqliteJobRepository {
    pool: SqlitePool,
}

impl SqliteJobRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobRepository for SqliteJobRepository {
    async fn create(&self, job: &NewJob) -> Result<Job> {
        // Company check and insert are one statement: no row back means the
        // company is missing, and UNIQUE (title, company_handle) is the only
        // source of duplicates, so concurrent creates cannot both succeed.
        let row = sqlx::query_as::<_, JobRow>(&format!(
            r#"
            INSERT INTO jobs (title, salary, equity, company_handle)
            SELECT $1, $2, $3, handle FROM companies WHERE handle = $4
            RETURNING {}
            "#,
            JOB_COLUMNS
        ))
        .bind(&job.title)
        .bind(job.salary)
        .bind(job.equity.map(|e| e.to_string()))
        .bind(&job.company_handle)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match constraint_violation(&e) {
            Some(ConstraintViolation::Unique) => AppError::AlreadyExists(format!(
                "duplicate job for company: {} at {}",
                job.title, job.company_handle
            )),
            _ => map_sqlx_error(e),
        })?;

        match row {
            Some(row) => row.into_job(),
            None => Err(AppError::NotFound(format!(
                "company not found: {}",
                job.company_handle
            ))),
        }
    }

    async fn find_all(&self, filter: &JobFilter) -> Result<Vec<Job>> {
        // Full scan; the filter is applied in memory on the ordered result
        let rows: Vec<JobRow> = sqlx::query_as(&format!(
            "SELECT {} FROM jobs ORDER BY title",
            JOB_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let jobs = rows
            .into_iter()
            .map(JobRow::into_job)
            .collect::<Result<Vec<_>>>()?;
        let fetched = jobs.len();
        let jobs = filter.apply(jobs);

        debug!(fetched, matched = jobs.len(), "Filtered job listing");
        Ok(jobs)
    }

    async fn get(&self, id: JobId) -> Result<Job> {
        let row = sqlx::query_as::<_, JobRow>(&format!(
            "SELECT {} FROM jobs WHERE id = $1",
            JOB_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.ok_or_else(|| job_not_found(id))?.into_job()
    }

    async fn update(&self, id: JobId, changes: &JobUpdate) -> Result<Job> {
        let column_names = HashMap::from([("companyHandle", "company_handle")]);
        let update = sql_for_partial_update(update_fields(changes), &column_names)?;

        let sql = format!(
            "UPDATE jobs SET {} WHERE id = ${} RETURNING {}",
            update.set_cols,
            update.next_placeholder(),
            JOB_COLUMNS
        );
        debug!(job_id = id, sql = %sql, "Updating job");

        let mut query = sqlx::query_as::<_, JobRow>(&sql);
        for value in update.values {
            query = match value {
                SqlValue::Text(s) => query.bind(s),
                SqlValue::Integer(n) => query.bind(n),
                SqlValue::Null => query.bind(None::<String>),
            };
        }

        let row = query
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| match constraint_violation(&e) {
                Some(ConstraintViolation::Unique) => AppError::AlreadyExists(format!(
                    "duplicate job for company (job {})",
                    id
                )),
                Some(ConstraintViolation::ForeignKey) => AppError::NotFound(format!(
                    "company not found: {}",
                    changes.company_handle.as_deref().unwrap_or_default()
                )),
                _ => map_sqlx_error(e),
            })?;

        row.ok_or_else(|| job_not_found(id))?.into_job()
    }

    async fn remove(&self, id: JobId) -> Result<()> {
        let deleted: Option<i64> = sqlx::query_scalar("DELETE FROM jobs WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        match deleted {
            Some(_) => Ok(()),
            None => Err(job_not_found(id)),
        }
    }
}

fn job_not_found(id: JobId) -> AppError {
    AppError::NotFound(format!("No job: {}", id))
}

/// Supplied fields in a fixed order, keyed by their serialized names
fn update_fields(changes: &JobUpdate) -> Vec<(&'static str, SqlValue)> {
    let mut fields = Vec::new();
    if let Some(title) = &changes.title {
        fields.push(("title", SqlValue::Text(title.clone())));
    }
    if let Some(salary) = changes.salary {
        fields.push(("salary", salary.map_or(SqlValue::Null, SqlValue::Integer)));
    }
    if let Some(equity) = changes.equity {
        fields.push((
            "equity",
            equity.map_or(SqlValue::Null, |e| SqlValue::Text(e.to_string())),
        ));
    }
    if let Some(handle) = &changes.company_handle {
        fields.push(("companyHandle", SqlValue::Text(handle.clone())));
    }
    fields
}

/// SQLite row representation
#[derive(Debug, sqlx::FromRow)]
struct JobRow {
    id: i64,
    title: String,
    salary: Option<i64>,
    equity: Option<String>, // normalized decimal string
    company_handle: String,
}

impl JobRow {
    fn into_job(self) -> Result<Job> {
        let equity = self
            .equity
            .as_deref()
            .map(Equity::parse)
            .transpose()
            .map_err(|e| AppError::Database(format!("Invalid persisted job {}: {}", self.id, e)))?;

        Ok(Job {
            id: self.id,
            title: self.title,
            salary: self.salary,
            equity,
            company_handle: self.company_handle,
        })
    }
}
