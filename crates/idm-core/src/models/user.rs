use crate::{Role, Tenant, UserProvider, avatar_hash, avatar_url};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Assigned by the store on registration, 0 before that
    pub id: i64,
    pub name: String,
    pub email: String,
    pub tenant_id: i64,
    pub role: Role,
    pub providers: Vec<UserProvider>,
    /// Derived from `email` every time a user is built, never persisted
    pub avatar_hash: String,
}

impl User {
    pub fn new(tenant: &Tenant, name: &str, email: &str, role: Role) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
            email: email.to_string(),
            tenant_id: tenant.id,
            role,
            providers: Vec::new(),
            avatar_hash: avatar_hash(email),
        }
    }

    pub fn with_provider(mut self, name: &str, uid: &str) -> Self {
        self.providers.push(UserProvider::new(name, uid));
        self
    }

    pub fn is_administrator(&self) -> bool {
        matches!(
            self.role,
            Role::Administrator | Role::PlatformAdministrator
        )
    }

    pub fn avatar_url(&self, size: u32) -> String {
        avatar_url(&self.email, size)
    }
}

/// Fields a user may change on their own account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    pub name: String,
}
