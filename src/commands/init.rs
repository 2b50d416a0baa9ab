//! Init command - write a starter sweep.toml into the root

use std::fs;

use anyhow::{Context, Result};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use sweep::config::{root_hint, Config, OutputConfig, PROJECT_CONFIG_FILE};
use sweep::presentation::Cli;
use sweep::{builtin_manifest, SweepError};

const HEADER: &str = "# Sweep configuration\n# Paths are relative to the sweep root.\n\n";

/// The existing config is not loaded, so a broken file can be replaced with `--force`.
pub fn cmd_init(cli: &Cli, force: bool) -> Result<i32> {
    let ui = UiContext::new(cli.json, cli.color, &OutputConfig::default());
    let path = root_hint(cli.root.as_deref()).join(PROJECT_CONFIG_FILE);

    if path.exists() && !force {
        return Err(SweepError::AlreadyExists { path }.into());
    }

    let config = starter_config();
    let body = config
        .to_toml()
        .context("failed to serialize configuration")?;
    fs::write(&path, format!("{}{}", HEADER, body))
        .with_context(|| format!("failed to write {}", path.display()))?;

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "init",
            "success": true,
            "path": path.display().to_string(),
            "entries": config.manifest.len(),
        }))?;
    } else {
        println!(
            "{} Wrote {} ({} entries)",
            Icon::Success.colored(ui.color, ui.unicode),
            path.display(),
            config.manifest.len()
        );
    }

    Ok(0)
}

fn starter_config() -> Config {
    Config {
        manifest: builtin_manifest().entries().to_vec(),
        ..Config::default()
    }
}
