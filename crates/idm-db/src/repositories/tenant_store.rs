use crate::rows::TenantRow;
use crate::{DbError, Result as DbErrorResult};

use idm_core::Tenant;

use chrono::Utc;
use log::info;
use sqlx::SqliteConnection;

pub struct TenantStore<'a> {
    conn: &'a mut SqliteConnection,
}

impl<'a> TenantStore<'a> {
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        Self { conn }
    }

    pub async fn add(&mut self, name: &str, subdomain: &str) -> DbErrorResult<Tenant> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO tenants (name, subdomain, created_on)
            VALUES (?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(subdomain)
        .bind(Utc::now().timestamp())
        .fetch_one(&mut *self.conn)
        .await?;

        info!("Created tenant {} ({})", id, subdomain);

        Ok(Tenant::new(id, name, subdomain))
    }

    pub async fn get_by_id(&mut self, tenant_id: i64) -> DbErrorResult<Tenant> {
        sqlx::query_as::<_, TenantRow>("SELECT id, name, subdomain FROM tenants WHERE id = ?")
            .bind(tenant_id)
            .fetch_optional(&mut *self.conn)
            .await?
            .map(TenantRow::into_model)
            .ok_or_else(|| DbError::not_found("tenant"))
    }

    /// Case-insensitive.
    pub async fn get_by_subdomain(&mut self, subdomain: &str) -> DbErrorResult<Tenant> {
        sqlx::query_as::<_, TenantRow>(
            "SELECT id, name, subdomain FROM tenants WHERE subdomain = ?",
        )
        .bind(subdomain)
        .fetch_optional(&mut *self.conn)
        .await?
        .map(TenantRow::into_model)
        .ok_or_else(|| DbError::not_found("tenant"))
    }

    pub async fn get_all(&mut self) -> DbErrorResult<Vec<Tenant>> {
        let rows =
            sqlx::query_as::<_, TenantRow>("SELECT id, name, subdomain FROM tenants ORDER BY id")
                .fetch_all(&mut *self.conn)
                .await?;

        Ok(rows.into_iter().map(TenantRow::into_model).collect())
    }
}
