//! mcp-server-syncthing: MCP server for the Syncthing REST API
//!
//! Speaks MCP over stdin/stdout. Logs go to stderr.
//!
//! Usage:
//!   mcp-server-syncthing                   - Serve over stdio
//!   mcp-server-syncthing --config <path>   - Serve, reading settings from a TOML file
//!   mcp-server-syncthing --help            - Show help

mod server;

use std::path::PathBuf;
use std::sync::Arc;

use rmcp::{ServiceExt, transport::stdio};
use syncthing_core::{SyncthingClient, SyncthingConfig};
use syncthing_tools::ToolDispatcher;
use tracing_subscriber::EnvFilter;

use crate::server::{SERVER_NAME, SyncthingServer};

/// Run mode
#[derive(Debug, PartialEq, Eq)]
enum RunMode {
    /// Serve MCP over stdio
    Serve { config_path: Option<PathBuf> },
    /// Show help
    Help,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mode = parse_args(std::env::args().skip(1))?;

    let config_path = match mode {
        RunMode::Help => {
            print_help();
            return Ok(());
        }
        RunMode::Version => {
            println!("{} {}", SERVER_NAME, env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        RunMode::Serve { config_path } => config_path,
    };

    // stdout carries the MCP channel, so logs must go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    // Load .env file
    dotenvy::dotenv().ok();

    let config = SyncthingConfig::load(config_path.as_deref()).map_err(|e| {
        tracing::error!("{}", e);
        anyhow::anyhow!("Config error: {}", e)
    })?;

    if let Err(e) = run_server(config).await {
        tracing::error!("Fatal: {}", e);
        return Err(e);
    }

    Ok(())
}

/// Parse command line arguments
fn parse_args<I>(args: I) -> anyhow::Result<RunMode>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut config_path = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(RunMode::Help),
            "--version" | "-V" => return Ok(RunMode::Version),
            "--config" | "-c" => {
                let path = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config requires a path"))?;
                config_path = Some(PathBuf::from(path));
            }
            other => anyhow::bail!("Unknown argument: {}", other),
        }
    }

    Ok(RunMode::Serve { config_path })
}

/// Print help message
fn print_help() {
    println!("{} - MCP server for the Syncthing REST API", SERVER_NAME);
    println!();
    println!("Usage:");
    println!("  {}                   Serve MCP over stdio", SERVER_NAME);
    println!("  {} --config <path>   Read settings from a TOML file", SERVER_NAME);
    println!("  {} --help            Show this help message", SERVER_NAME);
    println!("  {} --version         Show version", SERVER_NAME);
    println!();
    println!("Environment Variables:");
    println!("  SYNCTHING_API_KEY    Syncthing API key (required)");
    println!("  SYNCTHING_API_URL    Syncthing base URL (default: http://localhost:8384)");
    println!("  RUST_LOG             Log filter (default: info)");
}

/// Serve MCP over stdio until the peer disconnects
async fn run_server(config: SyncthingConfig) -> anyhow::Result<()> {
    let client = SyncthingClient::new(&config)?;
    let dispatcher = ToolDispatcher::new(Arc::new(client));

    tracing::debug!("Registered {} tools: {:?}", dispatcher.len(), dispatcher.tool_names());

    let service = SyncthingServer::new(dispatcher).serve(stdio()).await?;

    tracing::info!("Syncthing MCP Server running");
    tracing::info!("API URL: {}", config.api_url);

    let reason = service.waiting().await?;
    tracing::info!("Syncthing MCP Server stopped: {:?}", reason);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<RunMode> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_no_args_serves() {
        assert_eq!(parse(&[]).unwrap(), RunMode::Serve { config_path: None });
    }

    #[test]
    fn test_config_flag() {
        assert_eq!(
            parse(&["--config", "/etc/syncthing-mcp.toml"]).unwrap(),
            RunMode::Serve {
                config_path: Some(PathBuf::from("/etc/syncthing-mcp.toml"))
            }
        );
    }

    #[test]
    fn test_config_flag_requires_value() {
        assert!(parse(&["--config"]).is_err());
    }

    #[test]
    fn test_help_and_version() {
        assert_eq!(parse(&["-h"]).unwrap(), RunMode::Help);
        assert_eq!(parse(&["--version"]).unwrap(), RunMode::Version);
    }

    #[test]
    fn test_unknown_argument_rejected() {
        assert!(parse(&["--daemon"]).is_err());
    }
}
