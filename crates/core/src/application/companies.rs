// Company Service - seeding the foreign-key target for jobs

use crate::domain::Company;
use crate::error::Result;
use crate::port::CompanyRepository;
use std::sync::Arc;
use tracing::info;

pub struct CompanyService {
    company_repo: Arc<dyn CompanyRepository>,
}

impl CompanyService {
    pub fn new(company_repo: Arc<dyn CompanyRepository>) -> Self {
        Self { company_repo }
    }

    pub async fn create(&self, company: Company) -> Result<Company> {
        company.validate()?;
        let company = self.company_repo.create(&company).await?;
        info!(handle = %company.handle, name = %company.name, "Company created");
        Ok(company)
    }

    pub async fn list(&self) -> Result<Vec<Company>> {
        self.company_repo.find_all().await
    }

    pub async fn get(&self, handle: &str) -> Result<Company> {
        self.company_repo.get(handle).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::error::AppError;
    use crate::port::company_repository::MockCompanyRepository;

    #[tokio::test]
    async fn test_create_validates_first() {
        let mut repo = MockCompanyRepository::new();
        repo.expect_create().never();

        let service = CompanyService::new(Arc::new(repo));
        let mut company = Company::new("c1", "C1");
        company.num_employees = Some(-3);

        let err = service.create(company).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(DomainError::NegativeEmployees(-3))
        ));
    }

    #[tokio::test]
    async fn test_create_returns_stored_company() {
        let mut repo = MockCompanyRepository::new();
        repo.expect_create().returning(|c| Ok(c.clone()));

        let service = CompanyService::new(Arc::new(repo));
        let company = service.create(Company::new("c1", "C1")).await.unwrap();
        assert_eq!(company.handle, "c1");
    }
}
