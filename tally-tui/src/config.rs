use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TallyConfig {
    /// How often the screen is redrawn while idle, in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Log level for the tally_tui target, e.g. "info" or "debug"
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Maximum number of command lines kept for Up/Down recall
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    /// Tasks registered at startup
    #[serde(default)]
    pub tasks: Vec<String>,
    /// Task to start tracking immediately, if it is one of `tasks`
    #[serde(default)]
    pub autostart: Option<String>,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_history_limit() -> usize {
    100
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            log_level: default_log_level(),
            history_limit: default_history_limit(),
            tasks: Vec::new(),
            autostart: None,
        }
    }
}

impl TallyConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("tally-tui")
            .join("config.toml"))
    }

    pub fn log_dir() -> Result<PathBuf> {
        Ok(dirs::data_local_dir()
            .context("Cannot determine data directory")?
            .join("tally-tui")
            .join("logs"))
    }

    /// Load config from disk. Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(&path, raw)?;
        Ok(())
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(TallyConfig::parse("").unwrap(), TallyConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let cfg = TallyConfig::parse(
            r#"
            tasks = ["Reading", "Writing"]
            autostart = "Reading"
            tick_rate_ms = 1000
            "#,
        )
        .unwrap();
        assert_eq!(cfg.tasks, vec!["Reading", "Writing"]);
        assert_eq!(cfg.autostart.as_deref(), Some("Reading"));
        assert_eq!(cfg.tick_rate(), Duration::from_secs(1));
        assert_eq!(cfg.history_limit, 100);
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn round_trips_through_toml() {
        let cfg = TallyConfig {
            tasks: vec!["Deep Work".to_string()],
            ..TallyConfig::default()
        };
        let raw = toml::to_string_pretty(&cfg).unwrap();
        assert_eq!(TallyConfig::parse(&raw).unwrap(), cfg);
    }

    #[test]
    fn tiny_tick_rate_is_floored() {
        let cfg = TallyConfig {
            tick_rate_ms: 0,
            ..TallyConfig::default()
        };
        assert_eq!(cfg.tick_rate(), Duration::from_millis(10));
    }
}
