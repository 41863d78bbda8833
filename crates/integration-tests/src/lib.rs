//! Shared fixtures for the end-to-end tests

use jobly_core::application::{CompanyService, JobService};
use jobly_core::domain::{Company, Equity, Job, NewJob};
use jobly_infra_sqlite::{
    create_pool, run_migrations, SqliteCompanyRepository, SqliteJobRepository,
};
use sqlx::SqlitePool;
use std::sync::Arc;

/// Migrated in-memory database
pub async fn memory_pool() -> SqlitePool {
    let pool = create_pool("sqlite::memory:").await.unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}

/// Migrated database file under the temp dir, recreated on every call
pub async fn file_pool(name: &str) -> SqlitePool {
    let path = std::env::temp_dir().join(format!("jobly_{}_{}.db", name, std::process::id()));
    for suffix in ["", "-wal", "-shm"] {
        let _ = std::fs::remove_file(format!("{}{}", path.display(), suffix));
    }

    let pool = create_pool(&path.display().to_string()).await.unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}

pub fn job_service(pool: &SqlitePool) -> JobService {
    JobService::new(Arc::new(SqliteJobRepository::new(pool.clone())))
}

/// Companies c1..c3 plus the three reference jobs
pub async fn seed(pool: &SqlitePool) -> Vec<Job> {
    let companies = CompanyService::new(Arc::new(SqliteCompanyRepository::new(pool.clone())));
    for (handle, name) in [("c1", "C1"), ("c2", "C2"), ("c3", "C3")] {
        companies.create(Company::new(handle, name)).await.unwrap();
    }

    let jobs = job_service(pool);
    let mut seeded = Vec::new();
    for (title, salary, equity, company) in [
        ("Software Engineer", 150_000, "0.01", "c1"),
        ("Quality Assurance", 120_000, "0", "c2"),
        ("Mechanic Engineer", 90_000, "0.05", "c3"),
    ] {
        let new_job = NewJob::new(title, company)
            .with_salary(salary)
            .with_equity(Equity::parse(equity).unwrap());
        seeded.push(jobs.create(new_job).await.unwrap());
    }
    seeded
}

pub async fn count_jobs(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM jobs")
        .fetch_one(pool)
        .await
        .unwrap()
}
