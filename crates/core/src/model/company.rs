use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::CompanyId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CompanyError {
    #[error("company name cannot be empty")]
    EmptyName,

    #[error("company needs at least one location")]
    NoLocations,
}

/// A company profile in the insights directory.
///
/// `employees` is a display band like `150,000+`, not a number the core
/// ever does arithmetic on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    id: CompanyId,
    name: String,
    logo: String,
    employees: String,
    industry: String,
    locations: Vec<String>,
    openings: u32,
}

impl Company {
    /// Create a company profile.
    ///
    /// # Errors
    ///
    /// Returns `CompanyError::EmptyName` for a blank name and
    /// `CompanyError::NoLocations` for an empty location list.
    pub fn new(
        id: CompanyId,
        name: impl Into<String>,
        logo: impl Into<String>,
        employees: impl Into<String>,
        industry: impl Into<String>,
        locations: Vec<String>,
        openings: u32,
    ) -> Result<Self, CompanyError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CompanyError::EmptyName);
        }
        if locations.is_empty() {
            return Err(CompanyError::NoLocations);
        }
        Ok(Self {
            id,
            name,
            logo: logo.into(),
            employees: employees.into(),
            industry: industry.into(),
            locations,
            openings,
        })
    }

    #[must_use]
    pub fn id(&self) -> &CompanyId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn logo(&self) -> &str {
        &self.logo
    }

    #[must_use]
    pub fn employees(&self) -> &str {
        &self.employees
    }

    #[must_use]
    pub fn industry(&self) -> &str {
        &self.industry
    }

    #[must_use]
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    /// First entry in the location list.
    #[must_use]
    pub fn primary_location(&self) -> &str {
        &self.locations[0]
    }

    #[must_use]
    pub fn openings(&self) -> u32 {
        self.openings
    }

    /// Case-insensitive substring match over name and industry.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.industry.to_lowercase().contains(&query)
    }
}

/// A sample open position shown on a company's detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOpening {
    pub title: String,
    pub location: String,
    pub salary_range: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company() -> Company {
        Company::new(
            CompanyId::new("google").unwrap(),
            "Google",
            "🔍",
            "150,000+",
            "Technology",
            vec!["Mountain View".to_string(), "London".to_string()],
            1200,
        )
        .unwrap()
    }

    #[test]
    fn company_requires_name() {
        let err = Company::new(
            CompanyId::new("x").unwrap(),
            " ",
            "",
            "1+",
            "Tech",
            vec!["Here".to_string()],
            1,
        )
        .unwrap_err();
        assert_eq!(err, CompanyError::EmptyName);
    }

    #[test]
    fn company_requires_a_location() {
        let err = Company::new(
            CompanyId::new("x").unwrap(),
            "X",
            "",
            "1+",
            "Tech",
            Vec::new(),
            1,
        )
        .unwrap_err();
        assert_eq!(err, CompanyError::NoLocations);
    }

    #[test]
    fn matches_is_case_insensitive_over_name_and_industry() {
        let c = company();
        assert!(c.matches("goo"));
        assert!(c.matches("TECH"));
        assert!(!c.matches("retail"));
    }

    #[test]
    fn primary_location_is_first_entry() {
        assert_eq!(company().primary_location(), "Mountain View");
    }
}
