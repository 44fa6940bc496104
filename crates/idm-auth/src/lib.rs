pub mod actions;
pub mod error;
pub mod gate;
pub mod request_context;

pub use actions::change_user_role::ChangeUserRole;
pub use actions::update_user_settings::UpdateUserSettings;
pub use actions::{Actionable, run_action};
pub use error::{AuthError, Result};
pub use gate::require_authentication::{RequireAuthentication, RequireAuthenticationLayer};
pub use gate::require_role::{RequireRole, RequireRoleLayer};
pub use request_context::RequestContext;

#[cfg(test)]
mod tests;
