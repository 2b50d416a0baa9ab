//! Settings shared by every command: root, configuration, policy and UI

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;
use sweep::config::{load_for_root, root_hint, LoadedConfig};
use sweep::presentation::Cli;
use sweep::FailurePolicy;

pub struct Settings {
    pub root: PathBuf,
    pub loaded: LoadedConfig,
    pub policy: FailurePolicy,
    pub ui: UiContext,
}

impl Settings {
    /// Config file the manifest came from; `None` means the built-in list
    pub fn manifest_source(&self) -> Option<&Path> {
        if self.loaded.config.has_custom_manifest() {
            self.loaded.source.as_deref()
        } else {
            None
        }
    }
}

/// Resolve settings from CLI flags, environment and config file.
///
/// Unknown config keys are reported on stderr.
pub fn resolve(cli: &Cli) -> Result<Settings> {
    let hint = root_hint(cli.root.as_deref());
    let loaded = load_for_root(cli.config.as_deref(), &hint)
        .context("failed to load configuration")?;

    let root = resolve_root(cli.root.as_deref(), loaded.config.run.root.as_deref());
    let policy = cli.on_failure.unwrap_or(loaded.config.run.on_failure);
    let ui = UiContext::new(cli.json, cli.color, &loaded.config.output);

    print_config_warnings(&loaded.warnings, ui.unicode);
    log::debug!("root={} policy={}", root.display(), policy);

    Ok(Settings {
        root,
        loaded,
        policy,
        ui,
    })
}

/// `--root` wins over the configured root (which already carries `SWEEP_ROOT`)
fn resolve_root(cli_root: Option<&Path>, config_root: Option<&Path>) -> PathBuf {
    cli_root
        .or(config_root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}
