// Company Repository Port (Interface)

use crate::domain::Company;
use crate::error::Result;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Insert a company (`AlreadyExists` on duplicate handle or name)
    async fn create(&self, company: &Company) -> Result<Company>;

    async fn get(&self, handle: &str) -> Result<Company>;

    /// All companies ordered by name
    async fn find_all(&self) -> Result<Vec<Company>>;

    async fn exists(&self, handle: &str) -> Result<bool>;
}
