pub mod avatar;
pub mod role;
pub mod tenant;
pub mod user;
pub mod user_provider;
