//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::FailurePolicy;
use crate::error::{SweepError, SweepResult};

use super::types::{ColorMode, Config};

/// File name looked up in the sweep root
pub const PROJECT_CONFIG_FILE: &str = "sweep.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Configuration together with where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the configuration was read from; `None` means built-in defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SweepResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let mut config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SweepError::ConfigParse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if let (Some(root), Some(dir)) = (config.run.root.as_ref(), path.parent()) {
        if root.is_relative() {
            config.run.root = Some(dir.join(root));
        }
    }

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Pick the config file for a run.
///
/// An explicit path wins, then `<root>/sweep.toml`, then the user config
/// (`<config dir>/sweep/config.toml`).
pub fn find_config_file(explicit: Option<&Path>, root: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let project_config = root.join(PROJECT_CONFIG_FILE);
    if project_config.is_file() {
        return Some(project_config);
    }

    let user_config = user_config_path()?;
    user_config.is_file().then_some(user_config)
}

/// Load the config for `root`, falling back to defaults, then apply
/// `SWEEP_*` environment overrides.
///
/// An explicit path that cannot be read or parsed is an error; so is a
/// discovered file that fails to parse.
pub fn load_for_root(explicit: Option<&Path>, root: &Path) -> SweepResult<LoadedConfig> {
    let loaded = match find_config_file(explicit, root) {
        Some(path) => {
            log::debug!("loading config from {}", path.display());
            let (config, warnings) = load_with_warnings(&path)?;
            LoadedConfig {
                config,
                source: Some(path),
                warnings,
            }
        }
        None => {
            log::debug!("no config file found, using built-in defaults");
            LoadedConfig::default()
        }
    };

    Ok(LoadedConfig {
        config: with_env_overrides(loaded.config),
        ..loaded
    })
}

/// Apply environment variable overrides (SWEEP_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

pub(crate) fn apply_env_overrides(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // SWEEP_ROOT
    if let Some(root) = get_env("SWEEP_ROOT").filter(|r| !r.is_empty()) {
        config.run.root = Some(PathBuf::from(root));
    }

    // SWEEP_ON_FAILURE
    if let Some(policy) = get_env("SWEEP_ON_FAILURE") {
        match FailurePolicy::parse(&policy) {
            Some(policy) => config.run.on_failure = policy,
            None => log::warn!("ignoring invalid SWEEP_ON_FAILURE value '{}'", policy),
        }
    }

    // SWEEP_COLOR
    if let Some(color) = get_env("SWEEP_COLOR") {
        if let Some(mode) = ColorMode::parse(&color) {
            config.output.color = mode;
        }
    }

    // SWEEP_NO_COLOR (any value)
    if get_env("SWEEP_NO_COLOR").is_some() {
        config.output.color = ColorMode::Never;
    }

    config
}

/// Root hint used to locate `sweep.toml` before the config is loaded
pub fn root_hint(cli_root: Option<&Path>) -> PathBuf {
    cli_root
        .map(Path::to_path_buf)
        .or_else(|| {
            std::env::var("SWEEP_ROOT")
                .ok()
                .filter(|r| !r.is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(|| PathBuf::from("."))
}

fn user_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("SWEEP_USER_CONFIG_PATH") {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|d| d.join("sweep/config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "run",
        "root",
        "on_failure",
        "output",
        "color",
        "unicode",
        "manifest",
        "path",
        "kind",
        "group",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            Some((_, best_dist)) if dist >= best_dist => best,
            _ => Some((candidate, dist)),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
