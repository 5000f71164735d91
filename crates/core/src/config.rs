//! Game configuration
//!
//! Fixed rules live as constants in `blockfall_types`; the few knobs a session
//! can change are collected here and validated once when a game is created.

use thiserror::Error;

use crate::types::{RotationPolicy, DEFAULT_BOARD_ROWS, DEFAULT_SPEED, MAX_BOARD_ROWS, MIN_BOARD_ROWS};

/// Rejected configuration values
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum ConfigError {
    #[error("board must have between {min} and {max} rows, got {rows}")]
    Rows { rows: u8, min: u8, max: u8 },
    #[error("speed must be at least 1")]
    Speed,
}

/// Per-session settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: u8,
    /// Rows per second; values above `MAX_SPEED` fall no faster
    pub speed: u32,
    pub rotation_policy: RotationPolicy,
    pub seed: u32,
}

impl GameConfig {
    pub fn with_rows(mut self, rows: u8) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_speed(mut self, speed: u32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_rotation_policy(mut self, policy: RotationPolicy) -> Self {
        self.rotation_policy = policy;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_ROWS..=MAX_BOARD_ROWS).contains(&self.rows) {
            return Err(ConfigError::Rows {
                rows: self.rows,
                min: MIN_BOARD_ROWS,
                max: MAX_BOARD_ROWS,
            });
        }
        if self.speed == 0 {
            return Err(ConfigError::Speed);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_BOARD_ROWS,
            speed: DEFAULT_SPEED,
            rotation_policy: RotationPolicy::default(),
            seed: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rows_out_of_range_are_rejected() {
        let err = GameConfig::default().with_rows(3).validate().unwrap_err();
        assert_eq!(
            err,
            ConfigError::Rows {
                rows: 3,
                min: MIN_BOARD_ROWS,
                max: MAX_BOARD_ROWS
            }
        );
        assert_eq!(err.to_string(), "board must have between 4 and 40 rows, got 3");
        assert!(GameConfig::default().with_rows(41).validate().is_err());
        assert!(GameConfig::default().with_rows(40).validate().is_ok());
    }

    #[test]
    fn zero_speed_is_rejected() {
        assert_eq!(
            GameConfig::default().with_speed(0).validate(),
            Err(ConfigError::Speed)
        );
    }
}
