//! HTTP server binary for the peak-shaving power limits
//!
//! # Usage
//!
//! ```bash
//! peakshaving-server --port 6080 --host 0.0.0.0
//! ```
//!
//! # API Endpoints
//!
//! - `GET /get/peakshaving/minimalPower`, `GET /get/peakshaving/maximalPower`
//! - `POST /set/peakshaving/minimalPower`, `POST /set/peakshaving/maximalPower`

use clap::Parser;
use peakshaving_config::cli::{ServerArgs, run_server_mode};
use std::path::PathBuf;

/// HTTP configuration service for peak-shaving power limits
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Port to listen on [default: 6080]
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to [default: ::]
    #[arg(long)]
    host: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl From<Cli> for ServerArgs {
    fn from(cli: Cli) -> Self {
        Self {
            port: cli.port,
            host: cli.host,
            config: cli.config,
            verbose: cli.verbose,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_server_mode(cli.into()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["peakshaving-server"]);
        assert_eq!(cli.port, None);
        assert_eq!(cli.host, None);
        assert_eq!(cli.config, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_custom_values() {
        let cli = Cli::parse_from([
            "peakshaving-server",
            "--port",
            "8080",
            "--host",
            "0.0.0.0",
            "--config",
            "peakshaving.toml",
            "--verbose",
        ]);
        assert_eq!(cli.port, Some(8080));
        assert_eq!(cli.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(cli.config, Some(PathBuf::from("peakshaving.toml")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_short_args() {
        let cli = Cli::parse_from(["peakshaving-server", "-p", "9000", "-c", "a.toml", "-v"]);
        let args = ServerArgs::from(cli);
        assert_eq!(args.port, Some(9000));
        assert_eq!(args.config, Some(PathBuf::from("a.toml")));
        assert!(args.verbose);
    }

    #[test]
    fn test_cli_rejects_invalid_port() {
        assert!(Cli::try_parse_from(["peakshaving-server", "--port", "70000"]).is_err());
    }
}
