//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_hanoi::PlacementPolicy;
use tracing::{debug, info, instrument, warn};

/// Settings read from the optional `hanoi.toml` file.
///
/// Every field has a default, so an empty file (or no file) is valid.
/// Command-line flags override these values.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Player name used when none is given on the command line.
    #[serde(default)]
    player_name: Option<String>,

    /// Disk count used when none is given on the command line.
    #[serde(default)]
    disk_count: Option<i64>,

    /// Whether placing a disk on a smaller one is refused.
    #[serde(default)]
    placement_policy: PlacementPolicy,

    /// Target frames per second for the render loop.
    #[serde(default = "default_frame_rate")]
    frame_rate: u32,

    /// How long the win screen stays up before the game exits.
    #[serde(default = "default_game_over_pause_ms")]
    game_over_pause_ms: u64,

    /// Where to write the JSON results report, if anywhere.
    #[serde(default)]
    results_path: Option<PathBuf>,

    /// Where to write logs; the terminal is owned by the game.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

#[instrument]
fn default_frame_rate() -> u32 {
    60
}

#[instrument]
fn default_game_over_pause_ms() -> u64 {
    2000
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("hanoi.log")
}

/// The render loop needs at least one frame per second.
fn at_least_one_frame(frame_rate: u32) -> u32 {
    if frame_rate == 0 {
        warn!("frame_rate of 0 raised to 1");
        1
    } else {
        frame_rate
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_name: None,
            disk_count: None,
            placement_policy: PlacementPolicy::default(),
            frame_rate: default_frame_rate(),
            game_over_pause_ms: default_game_over_pause_ms(),
            results_path: None,
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            policy = %config.placement_policy,
            frame_rate = config.frame_rate,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    ///
    /// A `frame_rate` of 0 is raised to 1 with a warning.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.frame_rate = at_least_one_frame(config.frame_rate);
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of the file values.
    #[instrument(skip(self, overrides))]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(policy) = overrides.placement_policy {
            self.placement_policy = policy;
        }
        if let Some(frame_rate) = overrides.frame_rate {
            self.frame_rate = at_least_one_frame(frame_rate);
        }
        if overrides.results_path.is_some() {
            self.results_path = overrides.results_path;
        }
        if let Some(log_file) = overrides.log_file {
            self.log_file = log_file;
        }
        self
    }
}

/// Values from the command line that replace file settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    /// Placement policy flag.
    pub placement_policy: Option<PlacementPolicy>,
    /// Frames per second flag.
    pub frame_rate: Option<u32>,
    /// Results file flag.
    pub results_path: Option<PathBuf>,
    /// Log file flag.
    pub log_file: Option<PathBuf>,
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = GameConfig::from_toml("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(*config.frame_rate(), 60);
        assert_eq!(*config.placement_policy(), PlacementPolicy::Strict);
    }

    #[test]
    fn test_parses_all_fields() {
        let config = GameConfig::from_toml(
            r#"
            player_name = "Grace"
            disk_count = 5
            placement_policy = "permissive"
            frame_rate = 30
            game_over_pause_ms = 0
            results_path = "results.json"
            log_file = "game.log"
            "#,
        )
        .unwrap();
        assert_eq!(config.player_name().as_deref(), Some("Grace"));
        assert_eq!(*config.disk_count(), Some(5));
        assert_eq!(*config.placement_policy(), PlacementPolicy::Permissive);
        assert_eq!(*config.frame_rate(), 30);
        assert_eq!(*config.game_over_pause_ms(), 0);
        assert_eq!(config.results_path().as_deref(), Some(Path::new("results.json")));
        assert_eq!(config.log_file(), Path::new("game.log"));
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let err = GameConfig::from_toml("disks = 3").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_zero_frame_rate_is_raised_to_one() {
        let config = GameConfig::from_toml("frame_rate = 0").unwrap();
        assert_eq!(*config.frame_rate(), 1);

        let config = GameConfig::default().with_overrides(ConfigOverrides {
            frame_rate: Some(0),
            ..ConfigOverrides::default()
        });
        assert_eq!(*config.frame_rate(), 1);
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let config = GameConfig::default().with_overrides(ConfigOverrides {
            placement_policy: Some(PlacementPolicy::Permissive),
            frame_rate: Some(120),
            results_path: Some(PathBuf::from("out.json")),
            log_file: None,
        });
        assert_eq!(*config.placement_policy(), PlacementPolicy::Permissive);
        assert_eq!(*config.frame_rate(), 120);
        assert_eq!(config.results_path().as_deref(), Some(Path::new("out.json")));
        assert_eq!(config.log_file(), Path::new("hanoi.log"));
    }
}
