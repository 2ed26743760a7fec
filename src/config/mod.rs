use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::infrastructure::core::{HttpTransport, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Base url of the HTTP bridge in front of the core
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Extra headers sent with every request (auth tokens and the like)
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            headers: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// A zero timeout would fail every request before it is sent
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            bail!("timeout_secs must be at least 1");
        }
        Ok(())
    }

    /// Build the HTTP transport this config describes
    pub fn transport(&self) -> Result<HttpTransport> {
        self.validate()?;
        let mut builder = HttpTransport::builder(&self.endpoint).timeout(self.timeout());
        for (name, value) in &self.headers {
            builder = builder.header(name, value)?;
        }
        builder.build().context("failed to build HTTP transport")
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

/// Load the config from the default location, falling back to defaults
/// when no file exists
pub fn load() -> Result<Config> {
    match config_path() {
        Some(path) => load_from(&path),
        None => Ok(Config::default()),
    }
}

/// Load the config from `path`; a missing file yields the defaults
pub fn load_from(path: &Path) -> Result<Config> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Config::default()),
        Err(err) => {
            return Err(err).with_context(|| format!("read config {}", path.display()));
        }
    };
    let config = toml::from_str::<Config>(&content)
        .with_context(|| format!("parse config {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(config)
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("ABI_MODEL_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("abi-model").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("abi-model").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "abi-model", "abi-model")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
endpoint = "https://core.example.org"

[headers]
authorization = "Bearer abc"
"#
        )
        .unwrap();

        let config = load_from(file.path()).unwrap();
        assert_eq!(config.endpoint, "https://core.example.org");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.headers["authorization"], "Bearer abc");
        assert!(config.transport().is_ok());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timeout_secs = \"soon\"").unwrap();

        let err = load_from(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("parse config"));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timeout_secs = 0").unwrap();

        let err = load_from(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("timeout_secs must be at least 1"));

        let config = Config {
            timeout_secs: 0,
            ..Config::default()
        };
        assert!(config.transport().is_err());
    }
}
