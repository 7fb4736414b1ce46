//! Command-line interface definition.

use clap::{Parser, Subcommand};

/// Bookstore catalog management service.
#[derive(Debug, Parser)]
#[command(
    name = "bookstore-manager",
    version = crate::pkg_version(),
    long_version = crate::clap_long_version(),
    about = "REST backend for a bookstore catalog"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Start the HTTP server (default)
    Serve,
    /// Apply pending database migrations and exit
    Migrate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_none() {
        let cli = Cli::parse_from(["bookstore-manager"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_serve_subcommand() {
        let cli = Cli::parse_from(["bookstore-manager", "serve"]);
        assert!(matches!(cli.command, Some(Command::Serve)));
    }

    #[test]
    fn test_migrate_subcommand() {
        let cli = Cli::parse_from(["bookstore-manager", "migrate"]);
        assert!(matches!(cli.command, Some(Command::Migrate)));
    }
}
