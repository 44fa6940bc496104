use crate::rows::{UserProviderRow, UserRow};
use crate::{DbError, Result as DbErrorResult};

use idm_core::{Role, Tenant, User, UserProvider, UserSettings};

use std::collections::HashMap;

use chrono::Utc;
use log::{debug, info};
use sqlx::SqliteConnection;

const USER_COLUMNS: &str = "SELECT id, name, email, tenant_id, role FROM users";

const INSERT_PROVIDER: &str = r#"
    INSERT INTO user_providers (user_id, tenant_id, provider, provider_uid, created_on)
    VALUES (?, ?, ?, ?, ?)
    "#;

/// User and identity-provider persistence for one tenant.
///
/// Borrows a connection or an open transaction for its whole life. The store
/// never begins, commits or rolls back; the owner of the transaction does,
/// on every exit path. Build one per request and drop it afterwards.
pub struct UserStore<'a> {
    tenant: &'a Tenant,
    conn: &'a mut SqliteConnection,
}

impl<'a> UserStore<'a> {
    pub fn new(tenant: &'a Tenant, conn: &'a mut SqliteConnection) -> Self {
        Self { tenant, conn }
    }

    pub fn tenant(&self) -> &Tenant {
        self.tenant
    }

    /// Look a user up by its global identifier.
    ///
    /// Not filtered by tenant. Only use it with identifiers produced by a
    /// tenant-scoped lookup, or use [`UserStore::find_in_tenant`].
    pub async fn get_by_id(&mut self, user_id: i64) -> DbErrorResult<User> {
        debug!("{} get_by_id user={}", self.log_prefix(), user_id);

        let row = sqlx::query_as::<_, UserRow>(&format!("{USER_COLUMNS} WHERE id = ?"))
            .bind(user_id)
            .fetch_optional(&mut *self.conn)
            .await?;

        self.materialize(row).await
    }

    /// Like [`UserStore::get_by_id`], but a user of another tenant is not found.
    pub async fn find_in_tenant(&mut self, user_id: i64) -> DbErrorResult<User> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "{USER_COLUMNS} WHERE id = ? AND tenant_id = ?"
        ))
        .bind(user_id)
        .bind(self.tenant.id)
        .fetch_optional(&mut *self.conn)
        .await?;

        self.materialize(row).await
    }

    pub async fn get_by_email(&mut self, tenant_id: i64, email: &str) -> DbErrorResult<User> {
        debug!("[tenant={}] get_by_email", tenant_id);

        let row = sqlx::query_as::<_, UserRow>(&format!(
            "{USER_COLUMNS} WHERE email = ? AND tenant_id = ?"
        ))
        .bind(email)
        .bind(tenant_id)
        .fetch_optional(&mut *self.conn)
        .await?;

        self.materialize(row).await
    }

    /// Resolve an external identity to the local user that owns it.
    ///
    /// `(provider, uid)` is unique per tenant, so at most one user matches.
    pub async fn get_by_provider(
        &mut self,
        tenant_id: i64,
        provider: &str,
        uid: &str,
    ) -> DbErrorResult<User> {
        debug!(
            "[tenant={}] get_by_provider provider={}",
            tenant_id, provider
        );

        let user_id = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT up.user_id
            FROM user_providers up
            INNER JOIN users u ON u.id = up.user_id
            WHERE up.provider = ? AND up.provider_uid = ? AND u.tenant_id = ?
            "#,
        )
        .bind(provider)
        .bind(uid)
        .bind(tenant_id)
        .fetch_optional(&mut *self.conn)
        .await?
        .ok_or_else(|| DbError::not_found("user provider"))?;

        self.get_by_id(user_id).await
    }

    /// Insert the user and every one of its initial provider links.
    ///
    /// Run it inside a transaction: on error nothing is rolled back here, and
    /// committing after an error would keep the partial rows. On success the
    /// generated identifier is written back into `user`. A user built for
    /// another tenant is rejected before anything is written.
    pub async fn register(&mut self, user: &mut User) -> DbErrorResult<()> {
        if user.tenant_id != self.tenant.id {
            return Err(DbError::tenant_mismatch(self.tenant.id, user.tenant_id));
        }

        let now = Utc::now();
        let created_on = now.timestamp();

        let user_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO users (name, email, tenant_id, role, created_on)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.tenant_id)
        .bind(user.role.as_i64())
        .bind(created_on)
        .fetch_one(&mut *self.conn)
        .await?;

        for provider in &user.providers {
            sqlx::query(INSERT_PROVIDER)
                .bind(user_id)
                .bind(self.tenant.id)
                .bind(&provider.name)
                .bind(&provider.uid)
                .bind(created_on)
                .execute(&mut *self.conn)
                .await?;
        }

        user.id = user_id;
        for provider in &mut user.providers {
            provider.created_on = now;
        }

        info!(
            "{} Registered user {} with {} provider(s)",
            self.log_prefix(),
            user_id,
            user.providers.len()
        );

        Ok(())
    }

    /// Link one more external identity to an existing user of this tenant.
    pub async fn register_provider(
        &mut self,
        user_id: i64,
        provider: &UserProvider,
    ) -> DbErrorResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO user_providers (user_id, tenant_id, provider, provider_uid, created_on)
            SELECT id, tenant_id, ?, ?, ?
            FROM users
            WHERE id = ? AND tenant_id = ?
            "#,
        )
        .bind(&provider.name)
        .bind(&provider.uid)
        .bind(Utc::now().timestamp())
        .bind(user_id)
        .bind(self.tenant.id)
        .execute(&mut *self.conn)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("user"));
        }

        info!(
            "{} Linked provider {} to user {}",
            self.log_prefix(),
            provider.name,
            user_id
        );

        Ok(())
    }

    /// Change the display name. Performs no authorization: callers must have
    /// checked the target already. A user of another tenant is left untouched.
    pub async fn update(&mut self, user_id: i64, settings: &UserSettings) -> DbErrorResult<()> {
        sqlx::query("UPDATE users SET name = ? WHERE id = ? AND tenant_id = ?")
            .bind(&settings.name)
            .bind(user_id)
            .bind(self.tenant.id)
            .execute(&mut *self.conn)
            .await?;

        Ok(())
    }

    /// Returns whether a row changed. A user of another tenant never does.
    pub async fn change_role(&mut self, user_id: i64, role: Role) -> DbErrorResult<bool> {
        let result = sqlx::query("UPDATE users SET role = ? WHERE id = ? AND tenant_id = ?")
            .bind(role.as_i64())
            .bind(user_id)
            .bind(self.tenant.id)
            .execute(&mut *self.conn)
            .await?;

        let changed = result.rows_affected() > 0;
        info!(
            "{} change_role user={} role={} changed={}",
            self.log_prefix(),
            user_id,
            role,
            changed
        );

        Ok(changed)
    }

    /// Every user of the bound tenant, by ascending identifier, with providers.
    pub async fn get_all(&mut self) -> DbErrorResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "{USER_COLUMNS} WHERE tenant_id = ? ORDER BY id"
        ))
        .bind(self.tenant.id)
        .fetch_all(&mut *self.conn)
        .await?;

        let provider_rows = sqlx::query_as::<_, UserProviderRow>(
            r#"
            SELECT user_id, provider, provider_uid, created_on
            FROM user_providers
            WHERE tenant_id = ?
            ORDER BY user_id, id
            "#,
        )
        .bind(self.tenant.id)
        .fetch_all(&mut *self.conn)
        .await?;

        let mut providers: HashMap<i64, Vec<UserProviderRow>> = HashMap::new();
        for row in provider_rows {
            providers.entry(row.user_id).or_default().push(row);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let links = providers.remove(&row.id).unwrap_or_default();
                row.into_model(links)
            })
            .collect())
    }

    async fn materialize(&mut self, row: Option<UserRow>) -> DbErrorResult<User> {
        let row = row.ok_or_else(|| DbError::not_found("user"))?;

        let providers = sqlx::query_as::<_, UserProviderRow>(
            r#"
            SELECT user_id, provider, provider_uid, created_on
            FROM user_providers
            WHERE user_id = ?
            ORDER BY id
            "#,
        )
        .bind(row.id)
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(row.into_model(providers))
    }

    fn log_prefix(&self) -> String {
        format!("[tenant={}]", self.tenant.id)
    }
}
