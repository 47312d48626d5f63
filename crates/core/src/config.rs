//! Engine configuration and its validation.

use thiserror::Error;

use crate::types::{
    DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_HEIGHT, MAX_START_LEVEL, MAX_WIDTH, MIN_HEIGHT, MIN_LEVEL,
    MIN_WIDTH,
};

/// Session-independent engine settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Playfield columns
    pub width: u8,
    /// Playfield rows
    pub height: u8,
    /// Level preselected on the level-select screen
    pub starting_level: u8,
    /// Seed for piece selection; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            starting_level: MIN_LEVEL,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("playfield width {0} is outside {min}..={max}", min = MIN_WIDTH, max = MAX_WIDTH)]
    WidthOutOfRange(u16),
    #[error("playfield height {0} is outside {min}..={max}", min = MIN_HEIGHT, max = MAX_HEIGHT)]
    HeightOutOfRange(u16),
    #[error("starting level {0} is outside {min}..={max}", min = MIN_LEVEL, max = MAX_START_LEVEL)]
    LevelOutOfRange(u16),
}

impl EngineConfig {
    /// Build a config from untrusted (e.g. command line) values
    pub fn from_parts(
        width: u16,
        height: u16,
        starting_level: u16,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        let narrow = |v: u16, err: fn(u16) -> ConfigError| u8::try_from(v).map_err(|_| err(v));
        let config = Self {
            width: narrow(width, ConfigError::WidthOutOfRange)?,
            height: narrow(height, ConfigError::HeightOutOfRange)?,
            starting_level: narrow(starting_level, ConfigError::LevelOutOfRange)?,
            seed,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_WIDTH..=MAX_WIDTH).contains(&self.width) {
            return Err(ConfigError::WidthOutOfRange(self.width as u16));
        }
        if !(MIN_HEIGHT..=MAX_HEIGHT).contains(&self.height) {
            return Err(ConfigError::HeightOutOfRange(self.height as u16));
        }
        if !(MIN_LEVEL..=MAX_START_LEVEL).contains(&self.starting_level) {
            return Err(ConfigError::LevelOutOfRange(self.starting_level as u16));
        }
        Ok(())
    }
}
