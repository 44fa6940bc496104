pub mod connection;
pub mod error;
pub mod repositories;

mod rows;

pub use connection::database::Database;
pub use error::{DbError, Result};
pub use repositories::tenant_store::TenantStore;
pub use repositories::user_store::UserStore;
