//! Sweep CLI - delete a manifest of files and directories from a checkout
//!
//! Usage: sweep [COMMAND]
//!
//! Commands:
//!   run   Delete every manifest entry (default)
//!   show  Print the resolved root, policy and manifest
//!   init  Write a starter sweep.toml

use std::str::FromStr;

use clap::Parser;
use log::LevelFilter;

use sweep::presentation::Cli;

mod commands;
mod ui;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let code = match commands::dispatch(&cli) {
        Ok(code) => code,
        Err(err) => {
            if cli.json {
                let _ = ui::json::emit(ui::json::error_event(
                    commands::command_name(&cli),
                    &format!("{:#}", err),
                ));
            } else {
                let ui = ui::context::UiContext::for_error(&cli);
                eprint!("{}", ui::error::format_error(&err, ui.color, ui.unicode));
            }
            1
        }
    };

    std::process::exit(code);
}

/// `SWEEP_LOG_LEVEL` sets the base level (default `warn`); each `-v` raises it.
fn init_logging(verbose: u8) {
    let base = std::env::var("SWEEP_LOG_LEVEL")
        .ok()
        .and_then(|var| LevelFilter::from_str(&var.to_uppercase()).ok())
        .unwrap_or(LevelFilter::Warn);

    env_logger::Builder::new()
        .filter_level(base.max(verbosity_level(verbose)))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn verbosity_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Off,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
