// Command-line interface
use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Debug, Parser)]
#[command(name = "safety-dashboard", version, about = "Local weather, alerts and safety information for a location")]
pub struct Cli {
    /// Settings file, without extension
    #[arg(long, env = "SAFETY_CONFIG", default_value = "config/dashboard")]
    pub config: String,

    /// Default log level when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: Level,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Use this device's position
    Locate,
    /// Look up a 5-digit US ZIP code
    Zip { code: String },
    /// Read ZIP codes (or :locate) from stdin and keep the dashboard updated
    Watch,
    /// Run the backend API
    Serve {
        /// Overrides server.bind
        #[arg(long)]
        bind: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_zip_command() {
        let cli = Cli::try_parse_from(["safety-dashboard", "--log-level", "debug", "zip", "85004"]).unwrap();
        assert_eq!(cli.log_level, Level::DEBUG);
        assert!(matches!(cli.command, Command::Zip { code } if code == "85004"));
    }

    #[test]
    fn test_serve_bind_override() {
        let cli = Cli::try_parse_from(["safety-dashboard", "serve", "--bind", "127.0.0.1:9000"]).unwrap();
        assert!(matches!(cli.command, Command::Serve { bind: Some(b) } if b == "127.0.0.1:9000"));
    }
}
