//! Terminal output for the CLI.

use std::fmt;

use clap::ValueEnum;
use console::style;
use serde::Serialize;
use xposed_core::RenderOutput;

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Pretty => write!(f, "pretty"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

pub fn header(message: &str) {
    eprintln!("{}", style(message).bold());
}

pub fn success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

pub fn info(message: &str) {
    eprintln!("{} {}", style("i").cyan(), message);
}

pub fn warning(message: &str) {
    eprintln!("{} {}", style("!").yellow(), message);
}

pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red(), message);
}

pub fn error_with_details(message: &str, details: &str) {
    eprintln!("{} {}", style("✗").red(), message);
    eprintln!("  {}", style(details).dim());
}

pub fn debug(message: &str) {
    log::debug!("{}", message);
}

/// Prints any serializable value as pretty JSON on stdout.
pub fn json_output<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => error_with_details("Failed to serialize output", &e.to_string()),
    }
}

/// Prints the label followed by one line per chip: text, then its cancel link.
pub fn pretty_output_render(output: &RenderOutput) {
    if !output.label.is_empty() {
        println!("{}", style(&output.label).bold());
    }

    for item in &output.items {
        println!("  {} {}", style("×").red(), item.text);
        println!("    {}", style(&item.url).dim());
    }
}
