// Domain Layer - Pure business logic and entities

pub mod application;
pub mod company;
pub mod equity;
pub mod error;
pub mod filter;
pub mod job;

// Re-exports
pub use application::JobApplication;
pub use company::{Company, CompanyHandle};
pub use equity::Equity;
pub use error::DomainError;
pub use filter::JobFilter;
pub use job::{Job, JobId, JobUpdate, NewJob, Salary};
