// Company Domain Model

use super::error::{DomainError, Result};
use serde::{Deserialize, Serialize};

/// Company handle (unique, human-readable key)
pub type CompanyHandle = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub handle: CompanyHandle,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub num_employees: Option<i32>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

impl Company {
    pub fn new(handle: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            name: name.into(),
            description: String::new(),
            num_employees: None,
            logo_url: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.handle.trim().is_empty() {
            return Err(DomainError::EmptyHandle);
        }
        if let Some(n) = self.num_employees {
            if n < 0 {
                return Err(DomainError::NegativeEmployees(n));
            }
        }
        Ok(())
    }
}
