//! Raw persisted shapes. Every column that may be NULL is an `Option` here and
//! gets a defined default when converted into a domain value.

use idm_core::{Role, Tenant, User, UserProvider, avatar_hash};

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub(crate) struct TenantRow {
    pub id: i64,
    pub name: Option<String>,
    pub subdomain: Option<String>,
}

impl TenantRow {
    pub fn into_model(self) -> Tenant {
        Tenant {
            id: self.id,
            name: self.name.unwrap_or_default(),
            subdomain: self.subdomain.unwrap_or_default(),
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct UserRow {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub tenant_id: i64,
    pub role: Option<i64>,
}

impl UserRow {
    pub fn into_model(self, providers: Vec<UserProviderRow>) -> User {
        let email = self.email.unwrap_or_default();
        let avatar_hash = avatar_hash(&email);

        User {
            id: self.id,
            name: self.name.unwrap_or_default(),
            email,
            tenant_id: self.tenant_id,
            role: self.role.and_then(Role::from_i64).unwrap_or_default(),
            providers: providers
                .into_iter()
                .map(UserProviderRow::into_model)
                .collect(),
            avatar_hash,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct UserProviderRow {
    pub user_id: i64,
    pub provider: Option<String>,
    pub provider_uid: Option<String>,
    pub created_on: Option<i64>,
}

impl UserProviderRow {
    pub fn into_model(self) -> UserProvider {
        UserProvider {
            name: self.provider.unwrap_or_default(),
            uid: self.provider_uid.unwrap_or_default(),
            created_on: self
                .created_on
                .and_then(|ts| DateTime::from_timestamp(ts, 0))
                .unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
        }
    }
}
