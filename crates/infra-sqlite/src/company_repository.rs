// SQLite CompanyRepository Implementation

use crate::error::map_sqlx_error;
use async_trait::async_trait;
use jobly_core::domain::Company;
use jobly_core::error::{AppError, Result};
use jobly_core::port::CompanyRepository;
use sqlx::SqlitePool;

pub struct SqliteCompanyRepository {
    pool: SqlitePool,
}

impl SqliteCompanyRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompanyRepository for SqliteCompanyRepository {
    async fn create(&self, company: &Company) -> Result<Company> {
        let row = sqlx::query_as::<_, CompanyRow>(
            r#"
            INSERT INTO companies (handle, name, description, num_employees, logo_url)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING handle, name, description, num_employees, logo_url
            "#,
        )
        .bind(&company.handle)
        .bind(&company.name)
        .bind(&company.description)
        .bind(company.num_employees)
        .bind(&company.logo_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match map_sqlx_error(e) {
            AppError::AlreadyExists(_) => {
                AppError::AlreadyExists(format!("Duplicate company: {}", company.handle))
            }
            other => other,
        })?;

        Ok(row.into())
    }

    async fn get(&self, handle: &str) -> Result<Company> {
        let row = sqlx::query_as::<_, CompanyRow>(
            r#"
            SELECT handle, name, description, num_employees, logo_url
            FROM companies
            WHERE handle = $1
            "#,
        )
        .bind(handle)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(Company::from)
            .ok_or_else(|| AppError::NotFound(format!("No company: {}", handle)))
    }

    async fn find_all(&self) -> Result<Vec<Company>> {
        let rows: Vec<CompanyRow> = sqlx::query_as(
            r#"
            SELECT handle, name, description, num_employees, logo_url
            FROM companies
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Company::from).collect())
    }

    async fn exists(&self, handle: &str) -> Result<bool> {
        let found: i64 =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM companies WHERE handle = $1)")
                .bind(handle)
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(found != 0)
    }
}

#[derive(Debug, sqlx::FromRow)]
struct CompanyRow {
    handle: String,
    name: String,
    description: String,
    num_employees: Option<i32>,
    logo_url: Option<String>,
}

impl From<CompanyRow> for Company {
    fn from(row: CompanyRow) -> Self {
        Company {
            handle: row.handle,
            name: row.name,
            description: row.description,
            num_employees: row.num_employees,
            logo_url: row.logo_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_pool, run_migrations};

    async fn setup_repo() -> SqliteCompanyRepository {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        run_migrations(&pool).await.unwrap();
        SqliteCompanyRepository::new(pool)
    }

    #[tokio::test]
    async fn test_create_get_exists() {
        let repo = setup_repo().await;

        let mut company = Company::new("anderson", "Anderson, Arias and Morrow");
        company.num_employees = Some(245);
        company.description = "Somebody program how I.".to_string();

        let created = repo.create(&company).await.unwrap();
        assert_eq!(created, company);
        assert_eq!(repo.get("anderson").await.unwrap(), company);
        assert!(repo.exists("anderson").await.unwrap());
        assert!(!repo.exists("nobody").await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_and_missing() {
        let repo = setup_repo().await;

        repo.create(&Company::new("c1", "C1")).await.unwrap();
        assert!(matches!(
            repo.create(&Company::new("c1", "Other")).await.unwrap_err(),
            AppError::AlreadyExists(_)
        ));
        assert!(matches!(
            repo.get("c9").await.unwrap_err(),
            AppError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_find_all_ordered_by_name() {
        let repo = setup_repo().await;
        repo.create(&Company::new("zeta", "Zeta")).await.unwrap();
        repo.create(&Company::new("alpha", "Alpha")).await.unwrap();

        let names: Vec<_> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Alpha", "Zeta"]);
    }
}
