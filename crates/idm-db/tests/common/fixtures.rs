#![allow(dead_code)]

use idm_core::{Role, Tenant, User};

/// Creates a member with a name and email derived from `name`
pub fn create_test_user(tenant: &Tenant, name: &str) -> User {
    User::new(
        tenant,
        name,
        &format!("{}@example.com", name.to_lowercase()),
        Role::Member,
    )
}

/// Creates a member linked to one provider identity
pub fn create_test_user_with_provider(
    tenant: &Tenant,
    name: &str,
    provider: &str,
    uid: &str,
) -> User {
    create_test_user(tenant, name).with_provider(provider, uid)
}
