use crate::{tenant_commands::TenantCommands, user_commands::UserCommands};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Create the database if needed and apply pending migrations
    Migrate,

    /// Tenant operations
    Tenant {
        #[command(subcommand)]
        action: TenantCommands,
    },

    /// User operations, always scoped to one tenant
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
}
