//! Configuration for vidcat reports.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (VIDCAT_MIN_SEASONS, VIDCAT_PRECISION)
//! 2. Config file (.vidcat/config.yaml)
//! 3. Defaults (min_seasons: 3, precision: 2)
//!
//! Config file discovery:
//! - Searches current directory and parents for .vidcat/config.yaml
//! - Falls back to ~/.vidcat/config.yaml

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

const ENV_MIN_SEASONS: &str = "VIDCAT_MIN_SEASONS";
const ENV_PRECISION: &str = "VIDCAT_PRECISION";

/// Highest rounding precision accepted for averages
pub const MAX_PRECISION: usize = 10;

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub reports: Option<ReportsConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportsConfig {
    /// Season count a series must exceed to be long-running
    pub min_seasons: Option<u32>,
    /// Decimal places for averages
    pub precision: Option<usize>,
}

/// Resolved configuration
#[derive(Debug, Clone, Default)]
pub struct ResolvedConfig {
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
    /// Report tunables
    pub reports: ReportSettings,
}

/// Tunables passed to the reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    pub min_seasons: u32,
    pub precision: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            min_seasons: 3,
            precision: 2,
        }
    }
}

/// Find config file by searching current directory and parents, then home
fn find_config_file() -> Option<PathBuf> {
    if let Ok(mut current) = std::env::current_dir() {
        loop {
            let config_path = current.join(".vidcat").join("config.yaml");
            if config_path.exists() {
                return Some(config_path);
            }

            if !current.pop() {
                break;
            }
        }
    }

    let home_config = dirs::home_dir()?.join(".vidcat").join("config.yaml");
    home_config.exists().then_some(home_config)
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse an optional environment value
fn parse_env<T>(name: &str, value: Option<String>) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .map(|v| {
            v.trim()
                .parse::<T>()
                .with_context(|| format!("Invalid value for {}: {:?}", name, v))
        })
        .transpose()
}

/// Merge environment, file and defaults into report settings
fn resolve_settings(
    file: Option<&ConfigFile>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ReportSettings> {
    let defaults = ReportSettings::default();
    let reports = file.and_then(|f| f.reports.as_ref());

    let min_seasons = parse_env(ENV_MIN_SEASONS, env(ENV_MIN_SEASONS))?
        .or_else(|| reports.and_then(|r| r.min_seasons))
        .unwrap_or(defaults.min_seasons);

    let mut precision = parse_env(ENV_PRECISION, env(ENV_PRECISION))?
        .or_else(|| reports.and_then(|r| r.precision))
        .unwrap_or(defaults.precision);

    if precision > MAX_PRECISION {
        tracing::warn!(precision, max = MAX_PRECISION, "Precision too high, clamping");
        precision = MAX_PRECISION;
    }

    Ok(ReportSettings {
        min_seasons,
        precision,
    })
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let config_file = find_config_file();

    let file = match config_file {
        Some(ref path) => {
            tracing::debug!(path = %path.display(), "Using config file");
            Some(load_config_file(path)?)
        }
        None => None,
    };

    let reports = resolve_settings(file.as_ref(), |key| std::env::var(key).ok())?;

    Ok(ResolvedConfig {
        config_file,
        reports,
    })
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}
