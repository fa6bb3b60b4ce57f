use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Largest number of cells allowed along one axis
pub const MAX_AXIS_CELLS: u32 = 64;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of each projected panel, in screen units
    pub screen_size: u32,
    /// Size of one grid cell, in screen units
    pub unit_size: u32,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Interval between simulation ticks, in milliseconds
    pub tick_interval_ms: u64,
    /// Seed for food placement; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_size: 300,
            unit_size: 25,
            initial_snake_length: 4,
            tick_interval_ms: 200,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with `axis_cells` cells along every axis
    pub fn new(axis_cells: u32) -> Self {
        let defaults = Self::default();
        Self {
            screen_size: axis_cells.saturating_mul(defaults.unit_size),
            ..defaults
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(6)
    }

    /// Load a configuration from a JSON file; missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Number of cells along each of the three axes
    pub fn axis_cells(&self) -> i32 {
        if self.unit_size == 0 {
            return 0;
        }
        i32::try_from(self.screen_size / self.unit_size).unwrap_or(i32::MAX)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.unit_size == 0 {
            return Err("unit_size must be at least 1".to_string());
        }

        if self.screen_size < self.unit_size {
            return Err(format!(
                "screen_size ({}) must hold at least one unit of size {}",
                self.screen_size, self.unit_size
            ));
        }

        let cells = self.screen_size / self.unit_size;
        if cells > MAX_AXIS_CELLS {
            return Err(format!(
                "grid of {} cells per axis exceeds the limit of {}",
                cells, MAX_AXIS_CELLS
            ));
        }

        if self.initial_snake_length == 0 {
            return Err("initial_snake_length must be at least 1".to_string());
        }

        if self.tick_interval_ms == 0 {
            return Err("tick_interval_ms must be at least 1".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.axis_cells(), 12);
        assert_eq!(config.initial_snake_length, 4);
        assert_eq!(config.tick_interval(), Duration::from_millis(200));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15);
        assert_eq!(config.axis_cells(), 15);
        assert_eq!(config.unit_size, 25);
    }

    #[test]
    fn test_axis_cells_rounds_down() {
        let config = GameConfig {
            screen_size: 310,
            ..Default::default()
        };
        assert_eq!(config.axis_cells(), 12);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = GameConfig::default();
        config.unit_size = 0;
        assert!(config.validate().is_err());
        assert_eq!(config.axis_cells(), 0);

        let mut config = GameConfig::default();
        config.screen_size = 10;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.tick_interval_ms = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.initial_snake_length = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_oversized_grid() {
        let config = GameConfig {
            screen_size: 2_000_000,
            unit_size: 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            screen_size: u32::MAX,
            unit_size: 1,
            ..Default::default()
        };
        assert_eq!(config.axis_cells(), i32::MAX);
        assert!(config.validate().is_err());

        assert!(GameConfig::new(MAX_AXIS_CELLS).validate().is_ok());
        assert!(GameConfig::new(MAX_AXIS_CELLS + 1).validate().is_err());
    }

    #[test]
    fn test_new_saturates_instead_of_overflowing() {
        let config = GameConfig::new(u32::MAX);
        assert_eq!(config.screen_size, u32::MAX);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "tick_interval_ms": 120, "seed": 7 }}"#).unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.tick_interval_ms, 120);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.axis_cells(), 12);
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = GameConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = GameConfig::load(&dir.path().join("absent.json"));
        assert!(result.is_err());
    }
}
