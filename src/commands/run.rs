//! Run command handler
//!
//! Deletes every manifest entry below the root and maps the summary to an
//! exit code through the failure policy.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::commands::settings;
use crate::ui::sink::ConsoleEventSink;
use crate::ui::views::sweep::{render_sweep_header, render_sweep_summary};
use sweep::infrastructure::JsonEventSink;
use sweep::presentation::Cli;
use sweep::{LocalFs, SweepUseCase};

pub fn cmd_run(cli: &Cli) -> Result<i32> {
    let settings = settings::resolve(cli)?;
    let manifest = settings
        .loaded
        .config
        .manifest()
        .context("invalid manifest")?;
    let ui = settings.ui;

    let use_case = SweepUseCase::new(LocalFs::new());

    let summary = if ui.json {
        let sink = JsonEventSink::stdout();
        use_case.run(&settings.root, &manifest, &sink)
    } else {
        print!(
            "{}",
            render_sweep_header(
                &settings.root,
                settings.manifest_source(),
                manifest.len(),
                settings.policy,
                ui.color,
                ui.unicode,
            )
        );

        let sink = ConsoleEventSink::stdout(&ui);
        let summary = use_case.run(&settings.root, &manifest, &sink);

        println!();
        print!("{}", render_sweep_summary(&summary, ui.color, ui.unicode));
        summary
    };

    io::stdout().flush().context("failed to flush output")?;

    Ok(summary.exit_code(settings.policy))
}
