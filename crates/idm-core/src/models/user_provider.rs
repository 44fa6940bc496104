use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An external identity linked to a local user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProvider {
    /// Short identifier of the identity service, e.g. `google`
    pub name: String,
    /// Identifier issued by that service
    pub uid: String,
    pub created_on: DateTime<Utc>,
}

impl UserProvider {
    pub fn new(name: &str, uid: &str) -> Self {
        Self {
            name: name.to_string(),
            uid: uid.to_string(),
            created_on: Utc::now(),
        }
    }
}
