use std::collections::HashMap;

use prep_core::model::{Question, Role, RoleId};

use crate::error::CatalogError;

/// Static registry mapping roles to display metadata and question sets.
///
/// Validated once at construction: role ids are unique, every dedicated
/// question set is non-empty, and the default fallback set is non-empty.
/// Lookups after that point cannot fail — a role without a dedicated set
/// deterministically resolves to the default set.
#[derive(Debug, Clone)]
pub struct RoleCatalog {
    roles: Vec<Role>,
    sets: HashMap<RoleId, Vec<Question>>,
    default_set: Vec<Question>,
}

impl RoleCatalog {
    /// Build a validated catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::EmptyDefaultSet` if the fallback set is empty,
    /// `CatalogError::EmptySet` for any empty dedicated set, and
    /// `CatalogError::DuplicateRole` for repeated role ids.
    pub fn new(
        roles: Vec<Role>,
        sets: HashMap<RoleId, Vec<Question>>,
        default_set: Vec<Question>,
    ) -> Result<Self, CatalogError> {
        if default_set.is_empty() {
            return Err(CatalogError::EmptyDefaultSet);
        }
        for (role_id, set) in &sets {
            if set.is_empty() {
                return Err(CatalogError::EmptySet(role_id.clone()));
            }
        }
        for (pos, role) in roles.iter().enumerate() {
            if roles[..pos].iter().any(|r| r.id() == role.id()) {
                return Err(CatalogError::DuplicateRole(role.id().clone()));
            }
        }

        Ok(Self {
            roles,
            sets,
            default_set,
        })
    }

    /// All roles in display order.
    #[must_use]
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Look up a role by id.
    #[must_use]
    pub fn role(&self, id: &RoleId) -> Option<&Role> {
        self.roles.iter().find(|r| r.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: &RoleId) -> bool {
        self.role(id).is_some()
    }

    /// Question sequence for a role.
    ///
    /// Returns the role's dedicated set when one exists, otherwise the
    /// default fallback set. Never empty.
    #[must_use]
    pub fn questions_for(&self, id: &RoleId) -> &[Question] {
        self.sets
            .get(id)
            .map_or(&self.default_set, Vec::as_slice)
    }

    /// The built-in catalog shipped with the product: five roles, a
    /// dedicated software question set, and the software set doubling as
    /// the fallback for roles without their own questions.
    ///
    /// # Panics
    ///
    /// Panics if the built-in data fails validation, which would be a
    /// programming error in this module.
    #[must_use]
    pub fn builtin() -> Self {
        let roles = vec![
            builtin_role("software", "Software Engineer", "code", "blue"),
            builtin_role("web", "Web Developer", "globe", "green"),
            builtin_role("data", "Data Scientist", "database", "purple"),
            builtin_role("ai", "AI/ML Engineer", "brain", "pink"),
            builtin_role("cloud", "Cloud Engineer", "cloud", "cyan"),
        ];

        let software_set = vec![
            builtin_question(
                "What is the time complexity of binary search?",
                &["O(n)", "O(log n)", "O(n²)", "O(1)"],
                1,
            ),
            builtin_question(
                "Which data structure uses LIFO principle?",
                &["Queue", "Stack", "Array", "Tree"],
                1,
            ),
        ];

        let mut sets = HashMap::new();
        sets.insert(
            RoleId::new("software").expect("builtin role id is valid"),
            software_set.clone(),
        );

        Self::new(roles, sets, software_set).expect("builtin catalog is valid")
    }
}

fn builtin_role(id: &str, name: &str, icon: &str, accent: &str) -> Role {
    let id = RoleId::new(id).expect("builtin role id is valid");
    Role::new(id, name, icon, accent).expect("builtin role is valid")
}

fn builtin_question(prompt: &str, options: &[&str], correct: usize) -> Question {
    let options = options.iter().map(|o| (*o).to_string()).collect();
    Question::new(prompt, options, correct).expect("builtin question is valid")
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_lists_five_roles() {
        let catalog = RoleCatalog::builtin();
        assert_eq!(catalog.roles().len(), 5);
        assert!(catalog.contains(&RoleId::new("software").unwrap()));
        assert!(catalog.contains(&RoleId::new("cloud").unwrap()));
    }

    #[test]
    fn role_without_dedicated_set_falls_back_to_default() {
        let catalog = RoleCatalog::builtin();
        let web = RoleId::new("web").unwrap();
        let software = RoleId::new("software").unwrap();
        assert_eq!(catalog.questions_for(&web), catalog.questions_for(&software));
        assert!(!catalog.questions_for(&web).is_empty());
    }

    #[test]
    fn unknown_role_still_resolves_to_default() {
        let catalog = RoleCatalog::builtin();
        let unknown = RoleId::new("quantum").unwrap();
        assert!(!catalog.questions_for(&unknown).is_empty());
    }

    #[test]
    fn empty_default_set_is_rejected() {
        let err = RoleCatalog::new(Vec::new(), HashMap::new(), Vec::new()).unwrap_err();
        assert_eq!(err, CatalogError::EmptyDefaultSet);
    }

    #[test]
    fn empty_dedicated_set_is_rejected() {
        let role_id = RoleId::new("software").unwrap();
        let mut sets = HashMap::new();
        sets.insert(role_id.clone(), Vec::new());
        let default_set = vec![builtin_question("Q?", &["a", "b"], 0)];

        let err = RoleCatalog::new(Vec::new(), sets, default_set).unwrap_err();
        assert_eq!(err, CatalogError::EmptySet(role_id));
    }

    #[test]
    fn duplicate_role_ids_are_rejected() {
        let roles = vec![
            builtin_role("software", "Software Engineer", "code", "blue"),
            builtin_role("software", "Software Engineer II", "code", "red"),
        ];
        let default_set = vec![builtin_question("Q?", &["a", "b"], 0)];

        let err = RoleCatalog::new(roles, HashMap::new(), default_set).unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateRole(RoleId::new("software").unwrap())
        );
    }
}
