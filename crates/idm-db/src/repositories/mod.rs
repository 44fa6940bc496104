pub mod tenant_store;
pub mod user_store;
