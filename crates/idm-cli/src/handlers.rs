//! Command handlers. Every write runs in its own transaction, committed only
//! after the whole command succeeded; an early return drops the transaction,
//! which rolls it back.

use crate::commands::Commands;
use crate::error::Result as CliErrorResult;
use crate::tenant_commands::TenantCommands;
use crate::user_commands::{ProviderArg, UserCommands};

use idm_auth::{ChangeUserRole, UpdateUserSettings, run_action};
use idm_core::{Role, User, UserProvider};
use idm_db::{Database, TenantStore, UserStore};

use log::info;
use serde_json::{Value, json};
use sqlx::{Sqlite, SqlitePool, Transaction};

pub async fn execute(command: Commands, pool: &SqlitePool) -> CliErrorResult<Value> {
    match command {
        Commands::Migrate => {
            Database::migrate(pool).await?;
            Ok(json!({ "status": "migrated" }))
        }
        Commands::Tenant { action } => execute_tenant(action, pool).await,
        Commands::User { action } => execute_user(action, pool).await,
    }
}

/// Write transaction that takes SQLite's write lock at `BEGIN`.
///
/// A racing writer then waits out the busy timeout and sees the real outcome,
/// such as a uniqueness violation, instead of `database is locked`.
async fn begin_write(pool: &SqlitePool) -> CliErrorResult<Transaction<'static, Sqlite>> {
    Ok(pool.begin_with("BEGIN IMMEDIATE").await?)
}

async fn execute_tenant(action: TenantCommands, pool: &SqlitePool) -> CliErrorResult<Value> {
    match action {
        TenantCommands::Add { name, subdomain } => {
            let mut tx = begin_write(pool).await?;
            let tenant = TenantStore::new(&mut tx).add(&name, &subdomain).await?;
            tx.commit().await?;

            Ok(serde_json::to_value(tenant)?)
        }
        TenantCommands::List => {
            let mut conn = pool.acquire().await?;
            let tenants = TenantStore::new(&mut conn).get_all().await?;

            Ok(serde_json::to_value(tenants)?)
        }
    }
}

async fn execute_user(action: UserCommands, pool: &SqlitePool) -> CliErrorResult<Value> {
    match action {
        UserCommands::Register {
            tenant,
            name,
            email,
            role,
            providers,
        } => register(pool, &tenant, &name, &email, role, &providers).await,
        UserCommands::List { tenant } => {
            let mut conn = pool.acquire().await?;
            let tenant = TenantStore::new(&mut conn)
                .get_by_subdomain(&tenant)
                .await?;
            let users = UserStore::new(&tenant, &mut conn).get_all().await?;

            Ok(serde_json::to_value(users)?)
        }
        UserCommands::Show { tenant, email } => {
            let mut conn = pool.acquire().await?;
            let tenant = TenantStore::new(&mut conn)
                .get_by_subdomain(&tenant)
                .await?;
            let user = UserStore::new(&tenant, &mut conn)
                .get_by_email(tenant.id, &email)
                .await?;

            Ok(serde_json::to_value(user)?)
        }
        UserCommands::Link {
            tenant,
            user,
            provider,
        } => link(pool, &tenant, user, &provider).await,
        UserCommands::ChangeRole {
            tenant,
            actor,
            user,
            role,
        } => change_role(pool, &tenant, actor, user, role).await,
        UserCommands::Rename {
            tenant,
            actor,
            name,
        } => rename(pool, &tenant, actor, &name).await,
    }
}

async fn register(
    pool: &SqlitePool,
    subdomain: &str,
    name: &str,
    email: &str,
    role: Role,
    providers: &[ProviderArg],
) -> CliErrorResult<Value> {
    let mut tx = begin_write(pool).await?;
    let tenant = TenantStore::new(&mut tx).get_by_subdomain(subdomain).await?;

    let mut user = providers
        .iter()
        .fold(User::new(&tenant, name, email, role), |user, p| {
            user.with_provider(&p.name, &p.uid)
        });
    UserStore::new(&tenant, &mut tx).register(&mut user).await?;

    tx.commit().await?;

    Ok(serde_json::to_value(user)?)
}

async fn link(
    pool: &SqlitePool,
    subdomain: &str,
    user_id: i64,
    provider: &ProviderArg,
) -> CliErrorResult<Value> {
    let mut tx = begin_write(pool).await?;
    let tenant = TenantStore::new(&mut tx).get_by_subdomain(subdomain).await?;
    let mut store = UserStore::new(&tenant, &mut tx);

    let link = UserProvider::new(&provider.name, &provider.uid);
    match store.register_provider(user_id, &link).await {
        Ok(()) => {}
        Err(e) if e.is_unique_violation() => {
            info!(
                "[tenant={}] {}:{} already linked",
                tenant.id, provider.name, provider.uid
            );
            return Ok(json!({
                "status": "already linked",
                "provider": provider.name,
                "uid": provider.uid,
            }));
        }
        Err(e) => return Err(e.into()),
    }

    let user = store.get_by_id(user_id).await?;
    tx.commit().await?;

    Ok(serde_json::to_value(user)?)
}

async fn change_role(
    pool: &SqlitePool,
    subdomain: &str,
    actor_id: i64,
    user_id: i64,
    role: Role,
) -> CliErrorResult<Value> {
    let mut tx = begin_write(pool).await?;
    let tenant = TenantStore::new(&mut tx).get_by_subdomain(subdomain).await?;
    let mut store = UserStore::new(&tenant, &mut tx);

    let actor = store.find_in_tenant(actor_id).await?;
    let action = ChangeUserRole::new(user_id, role);
    run_action(&action, Some(&actor), &mut store).await?;

    store.change_role(action.user_id, action.role).await?;
    let user = store.get_by_id(action.user_id).await?;
    tx.commit().await?;

    Ok(serde_json::to_value(user)?)
}

async fn rename(
    pool: &SqlitePool,
    subdomain: &str,
    actor_id: i64,
    name: &str,
) -> CliErrorResult<Value> {
    let mut tx = begin_write(pool).await?;
    let tenant = TenantStore::new(&mut tx).get_by_subdomain(subdomain).await?;
    let mut store = UserStore::new(&tenant, &mut tx);

    let actor = store.find_in_tenant(actor_id).await?;
    let action = UpdateUserSettings::new(name);
    run_action(&action, Some(&actor), &mut store).await?;

    store.update(actor.id, &action.settings()).await?;
    let user = store.get_by_id(actor.id).await?;
    tx.commit().await?;

    Ok(serde_json::to_value(user)?)
}
