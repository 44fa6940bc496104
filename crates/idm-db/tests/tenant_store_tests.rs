mod common;

use common::{create_test_pool, create_test_tenant};

use idm_db::TenantStore;

use googletest::prelude::*;

#[tokio::test]
async fn given_new_tenant_when_added_then_found_by_id_and_subdomain() {
    // Given: An empty database
    let pool = create_test_pool().await;
    let mut conn = pool.acquire().await.unwrap();
    let mut store = TenantStore::new(&mut conn);

    // When: Adding a tenant
    let tenant = store.add("Acme Corp", "acme").await.unwrap();

    // Then: It is reachable both ways
    assert_that!(tenant.id, gt(0));
    let by_id = store.get_by_id(tenant.id).await.unwrap();
    assert_that!(by_id, eq(&tenant));
    let by_subdomain = store.get_by_subdomain("ACME").await.unwrap();
    assert_that!(by_subdomain.id, eq(tenant.id));
    assert_that!(by_subdomain.name, eq("Acme Corp"));
}

#[tokio::test]
async fn given_unknown_tenant_when_fetched_then_not_found() {
    let pool = create_test_pool().await;
    let mut conn = pool.acquire().await.unwrap();
    let mut store = TenantStore::new(&mut conn);

    let by_id = store.get_by_id(42).await;
    let by_subdomain = store.get_by_subdomain("nowhere").await;

    assert_that!(by_id, err(anything()));
    assert!(by_id.unwrap_err().is_not_found());
    assert_that!(by_subdomain, err(anything()));
    assert!(by_subdomain.unwrap_err().is_not_found());
}

#[tokio::test]
async fn given_taken_subdomain_when_added_then_constraint_violation() {
    let pool = create_test_pool().await;
    create_test_tenant(&pool, "acme").await;

    let mut conn = pool.acquire().await.unwrap();
    let result = TenantStore::new(&mut conn).add("Other Acme", "Acme").await;

    assert_that!(result, err(anything()));
    assert!(result.unwrap_err().is_unique_violation());
}

#[tokio::test]
async fn given_tenants_when_listed_then_ordered_by_id() {
    let pool = create_test_pool().await;
    let first = create_test_tenant(&pool, "one").await;
    let second = create_test_tenant(&pool, "two").await;

    let mut conn = pool.acquire().await.unwrap();
    let tenants = TenantStore::new(&mut conn).get_all().await.unwrap();

    assert_that!(tenants, len(eq(2)));
    assert_that!(tenants[0].id, eq(first.id));
    assert_that!(tenants[1].id, eq(second.id));
}
