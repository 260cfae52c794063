use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::RoleId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoleError {
    #[error("role name cannot be empty")]
    EmptyName,
}

/// A target role a candidate can practice for.
///
/// `icon` and `accent` are display hints passed through to the presentation
/// layer untouched; the session logic never interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    id: RoleId,
    name: String,
    icon: String,
    accent: String,
}

impl Role {
    /// Create a role with a non-empty display name.
    ///
    /// # Errors
    ///
    /// Returns `RoleError::EmptyName` if the name is empty after trimming.
    pub fn new(
        id: RoleId,
        name: impl Into<String>,
        icon: impl Into<String>,
        accent: impl Into<String>,
    ) -> Result<Self, RoleError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RoleError::EmptyName);
        }
        Ok(Self {
            id,
            name,
            icon: icon.into(),
            accent: accent.into(),
        })
    }

    #[must_use]
    pub fn id(&self) -> &RoleId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    #[must_use]
    pub fn accent(&self) -> &str {
        &self.accent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_requires_name() {
        let id = RoleId::new("software").unwrap();
        let err = Role::new(id, "  ", "code", "blue").unwrap_err();
        assert_eq!(err, RoleError::EmptyName);
    }

    #[test]
    fn display_metadata_is_opaque() {
        let id = RoleId::new("cloud").unwrap();
        let role = Role::new(id, "Cloud Engineer", "cloud", "cyan").unwrap();
        assert_eq!(role.icon(), "cloud");
        assert_eq!(role.accent(), "cyan");
    }
}
