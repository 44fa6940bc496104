//! idm-cli library
//!
//! Command definitions and their handlers, kept out of `main` so they can be
//! driven against an in-memory database in tests.

pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod error;
pub(crate) mod handlers;
pub mod logger;
pub(crate) mod tenant_commands;
pub(crate) mod user_commands;


pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliErrorResult};
pub use handlers::execute;
