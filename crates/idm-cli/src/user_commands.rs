use idm_core::Role;

use clap::Subcommand;

/// External identity given as `provider:uid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderArg {
    pub name: String,
    pub uid: String,
}

/// Split on the first `:`; the uid may contain further colons.
pub(crate) fn parse_provider(value: &str) -> Result<ProviderArg, String> {
    let (name, uid) = value
        .split_once(':')
        .ok_or_else(|| format!("expected provider:uid, got '{}'", value))?;

    let (name, uid) = (name.trim(), uid.trim());
    if name.is_empty() || uid.is_empty() {
        return Err(format!(
            "provider and uid must both be non-empty, got '{}'",
            value
        ));
    }

    Ok(ProviderArg {
        name: name.to_string(),
        uid: uid.to_string(),
    })
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// Register a user with its initial provider links in one transaction
    Register {
        /// Tenant subdomain
        #[arg(long)]
        tenant: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// member, administrator or platform_administrator
        #[arg(long, default_value = "member")]
        role: Role,
        /// External identity as provider:uid (repeatable)
        #[arg(long = "provider", value_parser = parse_provider)]
        providers: Vec<ProviderArg>,
    },
    /// List the users of a tenant
    List {
        #[arg(long)]
        tenant: String,
    },
    /// Show one user by email
    Show {
        #[arg(long)]
        tenant: String,
        #[arg(long)]
        email: String,
    },
    /// Link an external identity to an existing user
    Link {
        #[arg(long)]
        tenant: String,
        /// User ID
        #[arg(long)]
        user: i64,
        #[arg(long, value_parser = parse_provider)]
        provider: ProviderArg,
    },
    /// Change another user's role, acting as an administrator
    ChangeRole {
        #[arg(long)]
        tenant: String,
        /// ID of the acting user
        #[arg(long)]
        actor: i64,
        /// ID of the user whose role changes
        #[arg(long)]
        user: i64,
        #[arg(long)]
        role: Role,
    },
    /// Change the acting user's display name
    Rename {
        #[arg(long)]
        tenant: String,
        /// ID of the acting user
        #[arg(long)]
        actor: i64,
        #[arg(long)]
        name: String,
    },
}
