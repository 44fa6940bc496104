//! User-invocable operations and the checks they must pass before running.

pub mod change_user_role;
pub mod update_user_settings;

use crate::{AuthError, Result as AuthErrorResult};

use idm_core::{User, ValidationResult};
use idm_db::{Result as DbErrorResult, UserStore};

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::debug;

/// Contract every structured action implements.
///
/// Validation answers "is this input well formed", authorization answers "may
/// this identity perform this particular instance". Coarse role gating is the
/// gate's job and is not repeated here.
#[async_trait]
pub trait Actionable: Send + Sync {
    /// Default input, used to pre-populate forms.
    fn initialize() -> Self
    where
        Self: Sized;

    /// Check the input against domain rules. Store errors are returned as
    /// errors; rule violations go into the result, per field.
    async fn validate(
        &self,
        user: Option<&User>,
        store: &mut UserStore<'_>,
    ) -> DbErrorResult<ValidationResult>;

    fn is_authorized(&self, user: Option<&User>) -> bool;
}

/// Run both checks of `action` for `user`, authorization first.
///
/// Only `Ok` allows the caller to execute the action. Errors carry the
/// location of the `run_action` call.
#[track_caller]
pub fn run_action<'a, A: Actionable>(
    action: &'a A,
    user: Option<&'a User>,
    store: &'a mut UserStore<'_>,
) -> impl Future<Output = AuthErrorResult<()>> + Send + 'a {
    let location = ErrorLocation::from(Location::caller());

    async move {
        if !action.is_authorized(user) {
            return Err(AuthError::Unauthorized {
                message: format!(
                    "user {:?} may not run {}",
                    user.map(|u| u.id),
                    std::any::type_name::<A>()
                ),
                location,
            });
        }

        let result = action.validate(user, store).await?;
        if !result.is_ok() {
            debug!(
                "[tenant={}] {} failed validation on {:?}",
                store.tenant().id,
                std::any::type_name::<A>(),
                result.failures().keys().collect::<Vec<_>>()
            );
            return Err(AuthError::Validation { result, location });
        }

        Ok(())
    }
}
