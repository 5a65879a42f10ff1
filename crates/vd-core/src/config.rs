//! Generator configuration
//!
//! The only layout input is the room count; the grid side is derived from it.
//! The placement retry budget and an optional seed complete the run settings.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, GenerationError};

/// Side of the square grid reserved per room (plus one spare row/column of rooms)
pub const CELLS_PER_ROOM: usize = 5;

/// Largest grid side a run may allocate
///
/// Caps the room count at `MAX_GRID_SIZE / CELLS_PER_ROOM - 1`.
pub const MAX_GRID_SIZE: usize = 1024;

/// Default room count
pub const DEFAULT_ROOM_COUNT: usize = 5;

/// Default number of rejection-sampling draws allowed per room
pub const DEFAULT_MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;

/// Settings for one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of rooms to place
    pub room_count: usize,
    /// Candidate centres sampled per room before giving up
    pub max_placement_attempts: u32,
    /// Seed for the layout RNG; `None` draws one from entropy
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            room_count: DEFAULT_ROOM_COUNT,
            max_placement_attempts: DEFAULT_MAX_PLACEMENT_ATTEMPTS,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Config for `room_count` rooms with default placement budget
    pub fn new(room_count: usize) -> Self {
        Self {
            room_count,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_placement_attempts(mut self, attempts: u32) -> Self {
        self.max_placement_attempts = attempts;
        self
    }

    /// Side length of the square grid: `(room_count + 1) * 5`
    ///
    /// Saturates instead of overflowing; [`validate`](Self::validate)
    /// rejects anything above [`MAX_GRID_SIZE`].
    pub fn grid_size(&self) -> usize {
        self.checked_grid_size().unwrap_or(usize::MAX)
    }

    fn checked_grid_size(&self) -> Option<usize> {
        self.room_count
            .checked_add(1)
            .and_then(|n| n.checked_mul(CELLS_PER_ROOM))
    }

    /// Reject settings that cannot produce a dungeon
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.room_count == 0 {
            return Err(GenerationError::InvalidConfiguration {
                reason: "room_count must be at least 1".to_string(),
            });
        }
        match self.checked_grid_size() {
            Some(size) if size <= MAX_GRID_SIZE => {}
            _ => {
                return Err(GenerationError::InvalidConfiguration {
                    reason: format!(
                        "room_count {} needs a grid wider than {MAX_GRID_SIZE}",
                        self.room_count
                    ),
                });
            }
        }
        if self.max_placement_attempts == 0 {
            return Err(GenerationError::InvalidConfiguration {
                reason: "max_placement_attempts must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Load a config from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_json_str(&contents)
    }

    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(contents)?)
    }
}
