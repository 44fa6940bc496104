use clap::Subcommand;

#[derive(Subcommand)]
pub enum TenantCommands {
    /// Create a tenant
    Add {
        /// Display name
        #[arg(long)]
        name: String,
        /// Unique subdomain, compared case-insensitively
        #[arg(long)]
        subdomain: String,
    },
    /// List all tenants
    List,
}
