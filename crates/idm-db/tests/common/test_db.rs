#![allow(dead_code)]

use idm_core::{Tenant, User};
use idm_db::{Database, TenantStore, UserStore};

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    Database::open_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// Inserts a tenant and returns it
pub async fn create_test_tenant(pool: &SqlitePool, subdomain: &str) -> Tenant {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    TenantStore::new(&mut conn)
        .add(&format!("Tenant {}", subdomain), subdomain)
        .await
        .expect("Failed to create test tenant")
}

/// Registers a user in its own committed transaction
pub async fn register_test_user(pool: &SqlitePool, tenant: &Tenant, mut user: User) -> User {
    let mut tx = pool.begin().await.expect("Failed to begin transaction");
    UserStore::new(tenant, &mut tx)
        .register(&mut user)
        .await
        .expect("Failed to register test user");
    tx.commit().await.expect("Failed to commit");
    user
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    // Use sqlx::query (not query!) to avoid offline mode issues in tests
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .expect("Failed to count rows")
}
