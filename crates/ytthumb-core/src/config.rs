use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// HTTP parameters for thumbnail downloads (optional `[http]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Overall transfer timeout in seconds.
    pub timeout_secs: u64,
    /// Optional User-Agent header; curl's default when missing.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 60,
            user_agent: None,
        }
    }
}

/// Global configuration loaded from `~/.config/ytthumb/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThumbConfig {
    /// Delay between submitting a link and showing results, in milliseconds.
    /// Zero by default: a one-shot command has nothing to pace.
    pub pacing_delay_ms: u64,
    /// Delay between consecutive downloads of a batch, in milliseconds.
    pub batch_delay_ms: u64,
    /// How long the "copied" indicator stays on, in milliseconds.
    pub copied_reset_ms: u64,
    /// Where downloads are saved (None = current directory).
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
    /// Optional HTTP settings; if missing, built-in defaults are used.
    #[serde(default)]
    pub http: Option<HttpConfig>,
}

impl Default for ThumbConfig {
    fn default() -> Self {
        Self {
            pacing_delay_ms: 0,
            batch_delay_ms: 300,
            copied_reset_ms: 2000,
            download_dir: None,
            http: None,
        }
    }
}

impl ThumbConfig {
    pub fn pacing_delay(&self) -> Duration {
        Duration::from_millis(self.pacing_delay_ms)
    }

    pub fn batch_delay(&self) -> Duration {
        Duration::from_millis(self.batch_delay_ms)
    }

    pub fn copied_reset(&self) -> Duration {
        Duration::from_millis(self.copied_reset_ms)
    }

    pub fn http_or_default(&self) -> HttpConfig {
        self.http.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ytthumb")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ThumbConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ThumbConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ThumbConfig = toml::from_str(&data)?;
    Ok(cfg)
}
