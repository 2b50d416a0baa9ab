//! Configuration module for Sweep
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SWEEP_*)
//! 3. Config file (`--config`, `<root>/sweep.toml`, or `<config dir>/sweep/config.toml`)
//! 4. Built-in defaults, including the built-in manifest (lowest priority)

mod builtin;
mod loader;
mod types;

pub use builtin::builtin_manifest;
pub use loader::{
    find_config_file, load_for_root, load_with_warnings, root_hint, with_env_overrides,
    ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE,
};
pub use types::{ColorMode, Config, OutputConfig, RunConfig};
