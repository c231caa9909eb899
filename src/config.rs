use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::resolver::DEFAULT_MAX_DESCRIPTOR_BYTES;

/// Root configuration structure, deserialized from `.jar-resolver/config.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Which files are considered.
    pub scan: ScanConfig,
    /// How each jar is resolved.
    pub resolver: ResolverConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Glob patterns, relative to the project root, of jars to ignore
    /// (e.g. `"build/**"`).
    pub exclude: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Resolve jars on a thread pool. Output order is unaffected.
    pub parallel: bool,
    /// Upper bound on the size of an embedded pom or manifest.
    pub max_descriptor_bytes: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            max_descriptor_bytes: DEFAULT_MAX_DESCRIPTOR_BYTES,
        }
    }
}

/// Load configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<project_path>/.jar-resolver/config.toml`
/// 3. `~/.config/jar-resolver/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(project_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = project_path.join(".jar-resolver").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home.join(".config").join("jar-resolver").join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("invalid config {}", path.display()))
}
