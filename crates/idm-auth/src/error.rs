use idm_core::ValidationResult;
use idm_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    #[error("Validation failed on '{}' {location}", .result.first_field().unwrap_or("input"))]
    Validation {
        result: ValidationResult,
        location: ErrorLocation,
    },

    #[error("Store error: {source} {location}")]
    Store {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        Self::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Stable code for clients. "Unauthorized" and "not found" never share one.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized { .. } => "UNAUTHORIZED",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Store { source, .. } => source.error_code(),
        }
    }

    /// Message safe to show to a client. Internal detail stays in the logs.
    pub fn client_message(&self) -> String {
        match self {
            Self::Unauthorized { .. } => "You are not authorized to perform this action".to_string(),
            Self::Validation { .. } => "One or more fields are invalid".to_string(),
            Self::Store { source, .. } if source.is_not_found() => {
                "The requested resource does not exist".to_string()
            }
            Self::Store { source, .. } if source.is_constraint_violation() => {
                "The resource already exists".to_string()
            }
            Self::Store { .. } => "An internal error occurred. Please try again later.".to_string(),
        }
    }

    pub fn validation_result(&self) -> Option<&ValidationResult> {
        match self {
            Self::Validation { result, .. } => Some(result),
            _ => None,
        }
    }
}

impl From<DbError> for AuthError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
