use crate::{Role, Tenant, User, avatar_hash};

use googletest::prelude::*;

fn tenant() -> Tenant {
    Tenant::new(1, "Acme", "acme")
}

#[test]
fn given_new_user_then_unassigned_and_bound_to_tenant() {
    let user = User::new(&tenant(), "Ada", "ada@example.com", Role::Member);

    assert_that!(user.id, eq(0));
    assert_that!(user.tenant_id, eq(1));
    assert_that!(user.providers, is_empty());
    assert_that!(user.avatar_hash, eq(&avatar_hash("ada@example.com")));
}

#[test]
fn given_user_with_providers_then_keeps_link_order() {
    let user = User::new(&tenant(), "Ada", "ada@example.com", Role::Member)
        .with_provider("google", "g-1")
        .with_provider("github", "gh-1");

    assert_that!(user.providers, len(eq(2)));
    assert_that!(user.providers[0].name, eq("google"));
    assert_that!(user.providers[1].uid, eq("gh-1"));
}

#[test]
fn test_is_administrator() {
    let t = tenant();
    assert!(!User::new(&t, "a", "a@x.com", Role::Member).is_administrator());
    assert!(User::new(&t, "b", "b@x.com", Role::Administrator).is_administrator());
    assert!(User::new(&t, "c", "c@x.com", Role::PlatformAdministrator).is_administrator());
}
