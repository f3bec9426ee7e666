//! CLI command implementations
//!
//! `init` prepares the database schema and exits; `serve` boots the HTTP
//! server and runs until a shutdown signal. Both load the same config
//! file and honor the same environment overrides.

use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::api::ApiServer;
use crate::config::AppConfig;
use crate::store::{MemoryStore, PgStore};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch. This is the whole program.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Init { config } => init(&config),
        Command::Serve { config } => serve(&config),
    }
}

/// Create the cupcakes table and exit.
fn init(config_path: &Path) -> CliResult<()> {
    let config = AppConfig::load(config_path)?;

    if config.storage.backend == "memory" {
        println!("memory backend needs no initialization");
        return Ok(());
    }

    let rt = build_runtime()?;
    rt.block_on(async {
        let store = PgStore::connect(&config.storage.database_url).await?;
        store.ensure_schema().await?;
        Ok::<(), CliError>(())
    })?;

    println!("cupcakes table ready");
    Ok(())
}

/// Boot the HTTP server and block until shutdown.
fn serve(config_path: &Path) -> CliResult<()> {
    let config = AppConfig::load(config_path)?;
    init_tracing();

    info!(
        backend = %config.storage.backend,
        address = %config.server.socket_addr(),
        "starting cupcakes service"
    );

    let rt = build_runtime()?;
    rt.block_on(async {
        match config.storage.backend.as_str() {
            "memory" => {
                let server = ApiServer::new(MemoryStore::new(), config.server);
                server.start().await?;
            }
            _ => {
                let store = PgStore::connect(&config.storage.database_url).await?;
                store.ensure_schema().await?;
                let server = ApiServer::new(store, config.server);
                server.start().await?;
            }
        }
        Ok::<(), CliError>(())
    })
}

fn build_runtime() -> CliResult<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("failed to create tokio runtime: {}", e)))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_with_memory_backend_is_a_no_op() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        use std::io::Write;
        write!(file, r#"{{"storage": {{"backend": "memory"}}}}"#).unwrap();

        run_command(Command::Init {
            config: file.path().to_path_buf(),
        })
        .unwrap();
    }

    #[test]
    fn test_invalid_config_fails_dispatch() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        use std::io::Write;
        write!(file, r#"{{"storage": {{"backend": "sqlite"}}}}"#).unwrap();

        let err = run_command(Command::Init {
            config: file.path().to_path_buf(),
        })
        .unwrap_err();
        assert!(err.to_string().contains("CUPCAKES_CLI_CONFIG_ERROR"));
    }
}
