use crate::Actionable;

use idm_core::{User, UserSettings, ValidationResult};
use idm_db::{Result as DbErrorResult, UserStore};

use async_trait::async_trait;

const MAX_NAME_LENGTH: usize = 50;

/// Change the caller's own display name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateUserSettings {
    pub name: String,
}

impl UpdateUserSettings {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn settings(&self) -> UserSettings {
        UserSettings {
            name: self.name.trim().to_string(),
        }
    }
}

#[async_trait]
impl Actionable for UpdateUserSettings {
    fn initialize() -> Self {
        Self::default()
    }

    async fn validate(
        &self,
        _user: Option<&User>,
        _store: &mut UserStore<'_>,
    ) -> DbErrorResult<ValidationResult> {
        let mut result = ValidationResult::new();
        let name = self.name.trim();

        if name.is_empty() {
            result.add_failure("name", "Name is required.");
        } else if name.chars().count() > MAX_NAME_LENGTH {
            result.add_failure(
                "name",
                format!("Name must have less than {} characters.", MAX_NAME_LENGTH),
            );
        }

        Ok(result)
    }

    /// Always targets the caller's own record, so any identity will do.
    fn is_authorized(&self, user: Option<&User>) -> bool {
        user.is_some()
    }
}
