pub mod error;
pub mod models;
pub mod validation;

pub use error::{CoreError, Result as CoreResult};
pub use models::avatar::{avatar_hash, avatar_url};
pub use models::role::Role;
pub use models::tenant::Tenant;
pub use models::user::{User, UserSettings};
pub use models::user_provider::UserProvider;
pub use validation::ValidationResult;

#[cfg(test)]
mod tests;
