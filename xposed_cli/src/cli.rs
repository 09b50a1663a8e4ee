use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::ui::OutputFormat;

/// Defines the top-level interface for the xposed CLI with clap.
#[derive(Parser, Debug)]
#[command(name = "xposed")]
#[command(version, about = "Render removable chips for the active filters of a view.")]
pub struct XposedCli {
    /// Enable verbose output?
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value_t = OutputFormat::default())]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: XposedCliCommand,
}

/// Defines the available subcommands of the xposed CLI.
#[derive(Subcommand, Debug, PartialEq)]
pub enum XposedCliCommand {
    /// Render the filter chips a request would show.
    Render {
        /// View fixture file (JSON) with options, filters and lookup data
        /// (e.g. "xposed_cli/fixtures/rentals.json")
        view: PathBuf,
        /// Request URI including the query string (e.g. "/articles?status=open")
        uri: String,
    },
    /// Check the filter definitions of a view fixture.
    Check {
        /// View fixture file (JSON)
        view: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render_command() {
        let cli = XposedCli::parse_from(["xposed", "render", "view.json", "/list?a=1"]);
        assert_eq!(
            cli.command,
            XposedCliCommand::Render {
                view: PathBuf::from("view.json"),
                uri: "/list?a=1".to_string(),
            }
        );
        assert_eq!(cli.format, OutputFormat::Pretty);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = XposedCli::parse_from(["xposed", "check", "view.json", "--format", "json", "-v"]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
    }
}
