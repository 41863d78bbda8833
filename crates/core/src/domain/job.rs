// Job Domain Model

use super::company::CompanyHandle;
use super::equity::Equity;
use super::error::{DomainError, Result};
use serde::{Deserialize, Deserializer, Serialize};

/// Job ID (assigned by storage)
pub type JobId = i64;

/// Salary (whole currency units, non-negative)
pub type Salary = i64;

/// Job Entity (as stored)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub salary: Option<Salary>,
    pub equity: Option<Equity>,
    pub company_handle: CompanyHandle,
}

/// Data for a job that does not exist yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub title: String,
    #[serde(default)]
    pub salary: Option<Salary>,
    #[serde(default)]
    pub equity: Option<Equity>,
    pub company_handle: CompanyHandle,
}

impl NewJob {
    pub fn new(title: impl Into<String>, company_handle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            salary: None,
            equity: None,
            company_handle: company_handle.into(),
        }
    }

    pub fn with_salary(mut self, salary: Salary) -> Self {
        self.salary = Some(salary);
        self
    }

    pub fn with_equity(mut self, equity: Equity) -> Self {
        self.equity = Some(equity);
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_title(&self.title)?;
        if let Some(salary) = self.salary {
            validate_salary(salary)?;
        }
        if self.company_handle.trim().is_empty() {
            return Err(DomainError::EmptyHandle);
        }
        Ok(())
    }
}

/// Partial update: `None` leaves a field alone.
///
/// For the nullable columns the inner option distinguishes "set to NULL"
/// (`Some(None)`) from "not supplied" (`None`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub salary: Option<Option<Salary>>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub equity: Option<Option<Equity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_handle: Option<CompanyHandle>,
}

impl JobUpdate {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn salary(mut self, salary: Option<Salary>) -> Self {
        self.salary = Some(salary);
        self
    }

    pub fn equity(mut self, equity: Option<Equity>) -> Self {
        self.equity = Some(equity);
        self
    }

    pub fn company_handle(mut self, handle: impl Into<String>) -> Self {
        self.company_handle = Some(handle.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.salary.is_none()
            && self.equity.is_none()
            && self.company_handle.is_none()
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        if let Some(Some(salary)) = self.salary {
            validate_salary(salary)?;
        }
        if matches!(&self.company_handle, Some(h) if h.trim().is_empty()) {
            return Err(DomainError::EmptyHandle);
        }
        Ok(())
    }
}

fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(DomainError::EmptyTitle);
    }
    Ok(())
}

fn validate_salary(salary: Salary) -> Result<()> {
    if salary < 0 {
        return Err(DomainError::NegativeSalary(salary));
    }
    Ok(())
}

// A field that is present (even as `null`) deserializes to `Some(inner)`
fn present<'de, T, D>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
