//! Error types for dungeon generation and configuration loading

use thiserror::Error;

use crate::dungeon::{Position, RoomId};

/// Fatal failures of a generation run
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("Could not place room {room} after {attempts} attempts")]
    RoomPlacementFailed { room: RoomId, attempts: u32 },

    #[error("Adjacency graph is disconnected: spanning tree reached {reached} of {total} rooms")]
    DisconnectedGraph { reached: usize, total: usize },
}

/// A corridor search that exhausted its open set
///
/// Not fatal: the edge is left uncarved and the condition is reported
/// alongside the finished dungeon.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[error("No path from room {from} at {start} to room {to} at {goal}")]
pub struct PathNotFound {
    pub from: RoomId,
    pub to: RoomId,
    pub start: Position,
    pub goal: Position,
}

/// Errors raised while reading a generator configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_error_display() {
        let err = GenerationError::RoomPlacementFailed {
            room: 3,
            attempts: 100,
        };
        assert!(err.to_string().contains("room 3"));
        assert!(err.to_string().contains("100 attempts"));
    }

    #[test]
    fn test_path_not_found_display() {
        let err = PathNotFound {
            from: 0,
            to: 2,
            start: Position::new(3, 4),
            goal: Position::new(10, 12),
        };
        let msg = err.to_string();
        assert!(msg.contains("room 0 at (3, 4)"));
        assert!(msg.contains("room 2 at (10, 12)"));
    }

    #[test]
    fn test_config_parse_error_converts() {
        let parse = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: ConfigError = parse.into();
        assert!(err.to_string().starts_with("Invalid config"));
    }
}
