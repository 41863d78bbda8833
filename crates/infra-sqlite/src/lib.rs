// Jobly Infrastructure - SQLite Adapter
// Implements: JobRepository, CompanyRepository, ApplicationRepository

mod application_repository;
mod company_repository;
mod connection;
mod error;
mod job_repository;
mod migration;
pub mod partial_update;

pub use application_repository::SqliteApplicationRepository;
pub use company_repository::SqliteCompanyRepository;
pub use connection::create_pool;
pub use job_repository::SqliteJobRepository;
pub use migration::run_migrations;
pub use partial_update::{sql_for_partial_update, PartialUpdate};

// Note: sqlx::Error conversion is handled by `error::map_sqlx_error`
// due to Rust's orphan rules (cannot implement From<sqlx::Error> for AppError here)
