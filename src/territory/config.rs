use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_BOARD_HEIGHT: usize = 9;
pub const DEFAULT_BOARD_WIDTH: usize = 10;
pub const DEFAULT_MAX_TURNS: u32 = 20;

// Positions are offset in i32 space, so every coordinate must fit in one
pub const MAX_BOARD_DIMENSION: usize = i32::MAX as usize;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board height must be at least 1")]
    ZeroHeight,
    #[error("Board width must be at least 1")]
    ZeroWidth,
    #[error("Board of {rows}x{cols} exceeds the maximum dimension of {max}")]
    TooLarge { rows: usize, cols: usize, max: usize },
}

/// What happens when the active team has no cards left to play.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyDeckPolicy {
    /// The game ends on the spot.
    #[default]
    EndGame,
    /// The team forfeits its turn without advancing the turn counter. The game
    /// ends once both decks are empty.
    SkipTurn,
}

impl fmt::Display for EmptyDeckPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyDeckPolicy::EndGame => write!(f, "end-game"),
            EmptyDeckPolicy::SkipTurn => write!(f, "skip-turn"),
        }
    }
}

#[derive(Error, Debug)]
#[error("Unknown empty deck policy {0:?}, expected \"end-game\" or \"skip-turn\"")]
pub struct ParsePolicyError(String);

impl FromStr for EmptyDeckPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "end-game" => Ok(EmptyDeckPolicy::EndGame),
            "skip-turn" => Ok(EmptyDeckPolicy::SkipTurn),
            other => Err(ParsePolicyError(other.to_string())),
        }
    }
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    pub board_height: usize,
    pub board_width: usize,
    pub max_turns: u32,
    pub empty_deck_policy: EmptyDeckPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_height: DEFAULT_BOARD_HEIGHT,
            board_width: DEFAULT_BOARD_WIDTH,
            max_turns: DEFAULT_MAX_TURNS,
            empty_deck_policy: EmptyDeckPolicy::default(),
        }
    }
}

impl GameConfig {
    pub fn new(board_height: usize, board_width: usize, max_turns: u32) -> Self {
        GameConfig {
            board_height,
            board_width,
            max_turns,
            ..GameConfig::default()
        }
    }

    pub fn with_empty_deck_policy(mut self, policy: EmptyDeckPolicy) -> Self {
        self.empty_deck_policy = policy;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if self.board_width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.board_height > MAX_BOARD_DIMENSION || self.board_width > MAX_BOARD_DIMENSION {
            return Err(ConfigError::TooLarge {
                rows: self.board_height,
                cols: self.board_width,
                max: MAX_BOARD_DIMENSION,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.board_height, 9);
        assert_eq!(config.board_width, 10);
        assert_eq!(config.max_turns, 20);
        assert_eq!(config.empty_deck_policy, EmptyDeckPolicy::EndGame);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_config() {
        assert_eq!(GameConfig::new(0, 5, 3).validate(), Err(ConfigError::ZeroHeight));
        assert_eq!(GameConfig::new(5, 0, 3).validate(), Err(ConfigError::ZeroWidth));
        assert!(GameConfig::new(1, 1, 0).validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "max_turns": 4, "empty_deck_policy": "skip-turn" }"#)
                .unwrap();
        assert_eq!(config.board_height, DEFAULT_BOARD_HEIGHT);
        assert_eq!(config.board_width, DEFAULT_BOARD_WIDTH);
        assert_eq!(config.max_turns, 4);
        assert_eq!(config.empty_deck_policy, EmptyDeckPolicy::SkipTurn);

        let negative: Result<GameConfig, _> = serde_json::from_str(r#"{ "max_turns": -1 }"#);
        assert!(negative.is_err());
    }

    #[test]
    fn test_parse_policy() {
        assert_eq!("end-game".parse::<EmptyDeckPolicy>().unwrap(), EmptyDeckPolicy::EndGame);
        assert_eq!("skip-turn".parse::<EmptyDeckPolicy>().unwrap(), EmptyDeckPolicy::SkipTurn);
        assert!("forfeit".parse::<EmptyDeckPolicy>().is_err());
        assert_eq!(EmptyDeckPolicy::SkipTurn.to_string(), "skip-turn");
    }
}
