use std::path::Path;
use std::time::Duration;

use ratatui::style::Color;

use crate::error::ConfigError;
use crate::game::COLS;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ui: UiConfig,
}

/// Presentation and timing of the terminal game. Board size and rules are fixed.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Terminal columns per board cell; pointer x maps to `x / cell_width`
    pub cell_width: u16,
    /// How long the result banner stays up before the program exits
    pub game_over_delay_ms: u64,
    /// Event poll timeout
    pub poll_interval_ms: u64,
    pub player_one_color: Color,
    pub player_two_color: Color,
    /// Column the hover marker starts on
    pub start_column: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            cell_width: 3,
            game_over_delay_ms: 3000,
            poll_interval_ms: 100,
            player_one_color: Color::Red,
            player_two_color: Color::Yellow,
            start_column: 3,
        }
    }
}

impl UiConfig {
    pub fn game_over_delay(&self) -> Duration {
        Duration::from_millis(self.game_over_delay_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ui = &self.ui;
        if !(1..=8).contains(&ui.cell_width) {
            return Err(ConfigError::Validation(
                "ui.cell_width must be in 1..=8".into(),
            ));
        }
        if ui.poll_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.poll_interval_ms must be > 0".into(),
            ));
        }
        if ui.player_one_color == ui.player_two_color {
            return Err(ConfigError::Validation(
                "ui.player_one_color and ui.player_two_color must differ".into(),
            ));
        }
        if ui.start_column >= COLS {
            return Err(ConfigError::Validation(format!(
                "ui.start_column must be < {COLS}"
            )));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
