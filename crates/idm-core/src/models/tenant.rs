use serde::{Deserialize, Serialize};

/// Isolation boundary. Every user and provider link belongs to exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: i64,
    pub name: String,
    pub subdomain: String,
}

impl Tenant {
    pub fn new(id: i64, name: &str, subdomain: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            subdomain: subdomain.to_string(),
        }
    }
}
