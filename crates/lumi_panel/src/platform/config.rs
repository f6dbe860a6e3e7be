use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use lumi_client::{ClientError, ClientSettings};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::cli::Cli;
use super::logging::LogDestination;

/// Looked up in the working directory when `--config` is not given.
pub const CONFIG_FILENAME: &str = "lumi_panel.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub server_url: String,
    pub poll_interval_ms: u64,
    pub request_timeout_ms: Option<u64>,
    pub normalize_request: bool,
    pub log: LogDestination,
    pub log_level: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:8080".to_string(),
            poll_interval_ms: 1000,
            request_timeout_ms: None,
            normalize_request: false,
            log: LogDestination::Terminal,
            log_level: "info".to_string(),
        }
    }
}

impl PanelConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&content).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    /// The config file to read: `explicit` when given, otherwise
    /// `CONFIG_FILENAME` in `dir` if it exists.
    pub fn locate(explicit: Option<&Path>, dir: &Path) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        let implicit = dir.join(CONFIG_FILENAME);
        implicit.is_file().then_some(implicit)
    }

    /// Defaults when no file was located; a located file must load.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Command-line flags win over file values.
    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(server) = &cli.server {
            self.server_url = server.clone();
        }
        if let Some(interval) = cli.poll_interval_ms {
            self.poll_interval_ms = interval;
        }
        if cli.normalize {
            self.normalize_request = true;
        }
        if let Some(log) = cli.log {
            self.log = log;
        }
        if let Some(level) = &cli.log_level {
            self.log_level = level.clone();
        }
    }

    pub fn client_settings(&self) -> Result<ClientSettings, ClientError> {
        let mut settings = ClientSettings::parse(&self.server_url)?;
        settings.poll_interval = Duration::from_millis(self.poll_interval_ms.max(1));
        settings.request_timeout = self.request_timeout_ms.map(Duration::from_millis);
        Ok(settings)
    }
}
