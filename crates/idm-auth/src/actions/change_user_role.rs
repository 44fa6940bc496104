use crate::Actionable;

use idm_core::{Role, User, ValidationResult};
use idm_db::{Result as DbErrorResult, UserStore};

use async_trait::async_trait;

/// Administrator action: give another user of the tenant a new role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeUserRole {
    pub user_id: i64,
    pub role: Role,
}

impl ChangeUserRole {
    pub fn new(user_id: i64, role: Role) -> Self {
        Self { user_id, role }
    }
}

#[async_trait]
impl Actionable for ChangeUserRole {
    fn initialize() -> Self {
        Self {
            user_id: 0,
            role: Role::Member,
        }
    }

    async fn validate(
        &self,
        user: Option<&User>,
        store: &mut UserStore<'_>,
    ) -> DbErrorResult<ValidationResult> {
        let mut result = ValidationResult::new();

        if let Some(user) = user
            && user.id == self.user_id
        {
            result.add_failure("user_id", "It is not allowed to change your own role.");
            return Ok(result);
        }

        // Users of other tenants must look exactly like missing users
        match store.find_in_tenant(self.user_id).await {
            Ok(_) => {}
            Err(e) if e.is_not_found() => result.add_failure("user_id", "User not found."),
            Err(e) => return Err(e),
        }

        Ok(result)
    }

    fn is_authorized(&self, user: Option<&User>) -> bool {
        user.is_some_and(User::is_administrator)
    }
}
