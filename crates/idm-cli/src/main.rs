//! idm - multi-tenant identity administration
//!
//! # Examples
//!
//! ```bash
//! # Create a tenant and its first administrator
//! idm tenant add --name "Acme" --subdomain acme
//! idm user register --tenant acme --name Ada --email ada@acme.test \
//!     --role administrator --provider google:1234
//!
//! # Promote another user, acting as Ada
//! idm user change-role --tenant acme --actor 1 --user 2 --role administrator
//! ```

use idm_cli::{Cli, CliError, CliErrorResult, execute, logger};
use idm_config::Config;
use idm_db::Database;

use std::process::ExitCode;

use clap::Parser;
use log::error;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    match run(cli).await {
        Ok(value) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error ({}): {}", e.error_code(), e.client_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliErrorResult<Value> {
    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => Config::config_dir().map_err(CliError::from)?,
    };

    let config = Config::load_from(&config_dir)?;
    config.validate()?;

    let log_dir = config
        .logging
        .to_file
        .then(|| config.log_dir(&config_dir));
    logger::initialize(config.logging.level, log_dir, config.logging.colored)?;
    config.log_summary();

    let pool = Database::open(
        config.database_path(&config_dir),
        config.database.max_connections,
        config.database.busy_timeout(),
    )
    .await?;

    let result = execute(cli.command, &pool).await;
    pool.close().await;

    result
}
