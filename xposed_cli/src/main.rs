mod cli;
mod commands;
mod errors;
mod files;
mod ui;

use std::process::ExitCode;

use clap::Parser;
use log::debug;

use cli::{XposedCli, XposedCliCommand};

fn main() -> ExitCode {
    let cli = XposedCli::parse();
    initialize_logging(cli.verbose);

    let result = match cli.command {
        XposedCliCommand::Render { view, uri } => commands::render_chips(&view, &uri, cli.format),
        XposedCliCommand::Check { view } => commands::check_view(&view),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            debug!("Command failed: {}", error);
            ExitCode::FAILURE
        }
    }
}

fn initialize_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp_secs()
        .target(env_logger::Target::Stderr)
        .init();
}
