use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::error::Error;

const ENV_PREFIX: &str = "SHORTEST_CYCLE";

#[derive(Debug, Deserialize, Clone)]
pub struct SearcherConfig {
    /// 0 means "one worker per available core".
    pub workers: usize,
    /// 0 disables the deadline.
    pub deadline_ms: u64,
}

impl SearcherConfig {
    pub fn worker_count(&self) -> usize {
        if self.workers > 0 {
            return self.workers;
        }
        std::thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1)
    }

    pub fn deadline(&self) -> Option<Duration> {
        (self.deadline_ms > 0).then(|| Duration::from_millis(self.deadline_ms))
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct InputConfig {
    pub max_vertices: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    pub show_path: bool,
    pub show_elapsed: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub searcher: SearcherConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

/// Loads configuration from defaults, a TOML file and environment variables.
///
/// With `explicit_path` the file must exist. Otherwise `crates/executor/Config.toml`
/// under the current directory is used if present. Environment variables
/// override both, e.g. `SHORTEST_CYCLE_SEARCHER__WORKERS=4`.
pub fn load_config(explicit_path: Option<&Path>) -> Result<Config, Error> {
    let config_file_path: PathBuf = match explicit_path {
        Some(path) => {
            if !path.exists() {
                return Err(Error::ConfigLoadError(format!(
                    "Configuration file not found at: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => default_config_path()?,
    };

    load_from(&config_file_path, explicit_path.is_some(), ENV_PREFIX)
}

fn default_config_path() -> Result<PathBuf, Error> {
    let base_path = env::current_dir().map_err(|e| {
        Error::ConfigLoadError(format!("Failed to determine current directory: {}", e))
    })?;

    Ok(base_path
        .join("crates")
        .join("executor")
        .join("Config.toml"))
}

fn load_from(path: &Path, required: bool, env_prefix: &str) -> Result<Config, Error> {
    let s = builder(path, required, env_prefix)
        .and_then(|b| b.build())
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?;

    let app_config: Config = s
        .try_deserialize()
        .map_err(|e| Error::ConfigLoadError(format!("Failed to deserialize config: {}", e)))?;

    Ok(app_config)
}

fn builder(
    path: &Path,
    required: bool,
    env_prefix: &str,
) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
    Ok(ConfigLoader::builder()
        .set_default("searcher.workers", 0i64)?
        .set_default("searcher.deadline_ms", 0i64)?
        .set_default("input.max_vertices", 5000i64)?
        .set_default("output.show_path", false)?
        .set_default("output.show_elapsed", true)?
        .add_source(File::from(path).required(required))
        .add_source(
            Environment::with_prefix(env_prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        ))
}
