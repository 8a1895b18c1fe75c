use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_script_latency_ms")]
    pub script_latency_ms: u64,
    #[serde(default = "default_thumbnail_latency_ms")]
    pub thumbnail_latency_ms: u64,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_script_latency_ms() -> u64 {
    3000
}

fn default_thumbnail_latency_ms() -> u64 {
    2000
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            script_latency_ms: default_script_latency_ms(),
            thumbnail_latency_ms: default_thumbnail_latency_ms(),
            output_dir: default_output_dir(),
        }
    }
}

impl Config {
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;

        if config.output_dir.as_os_str().is_empty() {
            anyhow::bail!("config.json: output_dir must not be empty");
        }

        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub async fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        match fs::metadata(&path).await {
            Ok(_) => Self::load(path).await,
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err).with_context(|| {
                format!("Failed to stat config: {}", path.as_ref().display())
            }),
        }
    }

    /// Zero-latency config for embedding callers and tests.
    pub fn immediate() -> Self {
        Self {
            script_latency_ms: 0,
            thumbnail_latency_ms: 0,
            ..Self::default()
        }
    }

    pub fn script_latency(&self) -> Duration {
        Duration::from_millis(self.script_latency_ms)
    }

    pub fn thumbnail_latency(&self) -> Duration {
        Duration::from_millis(self.thumbnail_latency_ms)
    }

    pub fn scripts_dir(&self) -> PathBuf {
        self.output_dir.join("scripts")
    }

    pub fn thumbnails_dir(&self) -> PathBuf {
        self.output_dir.join("thumbnails")
    }
}
