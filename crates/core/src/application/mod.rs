// Application Layer - Use Cases and Business Logic

pub mod applications;
pub mod companies;
pub mod jobs;

// Re-exports
pub use applications::ApplicationService;
pub use companies::CompanyService;
pub use jobs::JobService;
