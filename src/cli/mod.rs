//! CLI module - Command-line interface for the trivia API
//!
//! This module provides a structured CLI using clap for argument parsing.

use clap::{Parser, Subcommand};

/// Trivia API - questions, categories and quizzes over HTTP
#[derive(Parser, Debug)]
#[command(name = "trivia-api")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP server (default)
    #[command(alias = "s")]
    Serve {
        /// Port to listen on, overriding the config file
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Write a default config.toml to the working directory
    InitConfig,

    /// Print all categories
    #[command(alias = "ls")]
    Categories,
}

impl Cli {
    #[must_use]
    pub fn command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Serve { port: None })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve() {
        let cli = Cli::parse_from(["trivia-api"]);
        assert_eq!(cli.command(), Commands::Serve { port: None });
    }

    #[test]
    fn parses_port_override() {
        let cli = Cli::parse_from(["trivia-api", "serve", "--port", "8080"]);
        assert_eq!(cli.command(), Commands::Serve { port: Some(8080) });
    }

    #[test]
    fn parses_subcommand_aliases() {
        let cli = Cli::parse_from(["trivia-api", "ls"]);
        assert_eq!(cli.command(), Commands::Categories);

        let cli = Cli::parse_from(["trivia-api", "init-config"]);
        assert_eq!(cli.command(), Commands::InitConfig);
    }
}
