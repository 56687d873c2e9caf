use crate::domain::journal::is_valid_date_format;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Overrides the focusup directory
pub const HOME_ENV: &str = "FOCUSUP_HOME";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "focusup.log";

/// User preferences stored in config.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusConfig {
    /// Emoji glyphs in the UI, ASCII otherwise
    pub use_emoji: bool,
    /// Desktop notification when a focus session completes
    pub desktop_notifications: bool,
    /// chrono format for mood entry dates
    pub date_format: String,
    pub poll_interval_ms: u64,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            use_emoji: true,
            desktop_notifications: true,
            date_format: "%d/%m/%Y".to_string(),
            poll_interval_ms: crate::ticker::DEFAULT_POLL_MS,
        }
    }
}

/// Get the focusup directory: $FOCUSUP_HOME, else ~/.focusup
pub fn focusup_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".focusup"))
}

/// Ensure a directory exists
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(())
}

/// Default path to config.json
pub fn config_file() -> Result<PathBuf> {
    Ok(focusup_dir()?.join(CONFIG_FILE_NAME))
}

/// Path to the log file
pub fn log_file() -> Result<PathBuf> {
    Ok(focusup_dir()?.join(LOG_FILE_NAME))
}

/// Load config, falling back to defaults when the file doesn't exist
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<FocusConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(FocusConfig::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let mut config: FocusConfig = serde_json::from_str(&content)
        .with_context(|| format!("Invalid config: {}", path.display()))?;
    if !is_valid_date_format(&config.date_format) {
        anyhow::bail!(
            "Invalid date_format {:?} in config: {}",
            config.date_format,
            path.display()
        );
    }
    config.poll_interval_ms = config.poll_interval_ms.clamp(10, 1000);
    Ok(config)
}

/// Save config as pretty JSON
pub fn save_config<P: AsRef<Path>>(path: P, config: &FocusConfig) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        ensure_dir(dir)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    atomic_write(path, &json)
}

/// Write a default config. Fails if the file already exists.
pub fn init_config<P: AsRef<Path>>(path: P) -> Result<FocusConfig> {
    let path = path.as_ref();
    if path.exists() {
        anyhow::bail!("Config already exists: {}", path.display());
    }
    let config = FocusConfig::default();
    save_config(path, &config)?;
    Ok(config)
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path
        .parent()
        .context("File path has no parent directory")?;

    let mut temp_file =
        NamedTempFile::new_in(dir).context("Failed to create temporary file")?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;
    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}
