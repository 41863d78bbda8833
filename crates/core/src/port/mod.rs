// Port Layer - Interfaces for external dependencies

pub mod application_repository;
pub mod company_repository;
pub mod job_repository;
pub mod time_provider; // For deterministic testing

// Re-exports
pub use application_repository::ApplicationRepository;
pub use company_repository::CompanyRepository;
pub use job_repository::JobRepository;
pub use time_provider::TimeProvider;
