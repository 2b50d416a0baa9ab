use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use sweep::config::{
    load_for_root, root_hint, with_env_overrides, ColorMode, Config, LoadedConfig, OutputConfig,
};
use sweep::presentation::{Cli, ColorWhen};
use sweep::SweepResult;

/// Resolved output settings for one command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, cli_color: Option<ColorWhen>, output: &OutputConfig) -> Self {
        Self::from_caps(json, cli_color, output, detect_capabilities())
    }

    /// Output settings for reporting a command error.
    ///
    /// The error may come from the config itself, so an unreadable config
    /// falls back to defaults with `SWEEP_*` overrides still applied.
    pub fn for_error(cli: &Cli) -> Self {
        let hint = root_hint(cli.root.as_deref());
        let output = error_output(load_for_root(cli.config.as_deref(), &hint));
        Self::new(false, cli.color, &output)
    }

    pub(crate) fn from_caps(
        json: bool,
        cli_color: Option<ColorWhen>,
        output: &OutputConfig,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = output.unicode && caps.supports_unicode;

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            json,
            color: color && !json,
            unicode,
        }
    }
}

fn error_output(loaded: SweepResult<LoadedConfig>) -> OutputConfig {
    match loaded {
        Ok(loaded) => loaded.config.output,
        Err(_) => with_env_overrides(Config::default()).output,
    }
}
