//! Show command handler
//!
//! Prints the resolved settings and manifest without touching the filesystem.

use anyhow::{Context, Result};

use crate::commands::settings;
use crate::ui::views::show::render_manifest;
use sweep::presentation::Cli;

pub fn cmd_show(cli: &Cli) -> Result<i32> {
    let settings = settings::resolve(cli)?;
    let manifest = settings
        .loaded
        .config
        .manifest()
        .context("invalid manifest")?;
    let ui = settings.ui;

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "manifest",
            "command": "show",
            "root": settings.root.display().to_string(),
            "source": settings.manifest_source().map(|p| p.display().to_string()),
            "on_failure": settings.policy.as_str(),
            "entries": manifest.entries(),
        }))?;
    } else {
        print!(
            "{}",
            render_manifest(
                &settings.root,
                settings.manifest_source(),
                &manifest,
                settings.policy,
                ui.color,
                ui.unicode,
            )
        );
    }

    Ok(0)
}
