use crate::{CoreError, CoreResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Privilege level of a user inside a tenant, lowest first.
///
/// Persisted as its integer discriminant.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Member = 1,
    Administrator = 2,
    PlatformAdministrator = 3,
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Member => "member",
            Self::Administrator => "administrator",
            Self::PlatformAdministrator => "platform_administrator",
        }
    }

    pub fn as_i64(&self) -> i64 {
        *self as i64
    }

    /// Maps a persisted value back to a role. Unknown values yield `None`.
    pub fn from_i64(value: i64) -> Option<Self> {
        match value {
            1 => Some(Self::Member),
            2 => Some(Self::Administrator),
            3 => Some(Self::PlatformAdministrator),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.to_lowercase().as_str() {
            "member" => Ok(Self::Member),
            "administrator" | "admin" => Ok(Self::Administrator),
            "platform_administrator" | "platform-administrator" => {
                Ok(Self::PlatformAdministrator)
            }
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
