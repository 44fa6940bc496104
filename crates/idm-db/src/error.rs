use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("{entity} not found {location}")]
    NotFound {
        entity: &'static str,
        location: ErrorLocation,
    },

    #[error("User belongs to tenant {actual}, store is bound to tenant {expected} {location}")]
    TenantMismatch {
        expected: i64,
        actual: i64,
        location: ErrorLocation,
    },

    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    #[track_caller]
    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound {
            entity,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn tenant_mismatch(expected: i64, actual: i64) -> Self {
        Self::TenantMismatch {
            expected,
            actual,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True when a uniqueness constraint rejected the write, e.g. a provider
    /// identity that is already linked inside the tenant.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::Sqlx {
                source: sqlx::Error::Database(e),
                ..
            } => e.is_unique_violation(),
            _ => false,
        }
    }

    pub fn is_constraint_violation(&self) -> bool {
        match self {
            Self::Sqlx {
                source: sqlx::Error::Database(e),
                ..
            } => e.is_unique_violation() || e.is_foreign_key_violation() || e.is_check_violation(),
            _ => false,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::TenantMismatch { .. } => "TENANT_MISMATCH",
            _ if self.is_constraint_violation() => "CONFLICT",
            _ => "INTERNAL_ERROR",
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
