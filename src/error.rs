//! Crate-wide error type

use thiserror::Error;

use crate::consts::{MAX_GRID_SIZE, MAX_LEVEL_COUNT, MIN_GRID_SIZE};
use crate::puzzle::{Color, GameStatus, Tool};

pub type Result<T> = std::result::Result<T, PuzzleError>;

#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("level id {id} is outside 1..={max}", max = MAX_LEVEL_COUNT)]
    InvalidLevelId { id: u32 },

    #[error("grid size {size} is outside {min}..={max}", min = MIN_GRID_SIZE, max = MAX_GRID_SIZE)]
    InvalidGridSize { size: usize },

    #[error("grid row {row} has {len} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("color {0:?} is not available in this level")]
    ColorUnavailable(Color),

    #[error("tool {0:?} is not available in this level")]
    ToolUnavailable(Tool),

    #[error("session is over ({status:?})")]
    NotPlaying { status: GameStatus },

    #[error("cell ({row}, {col}) is outside a {size}x{size} grid")]
    OutOfBounds { row: i32, col: i32, size: usize },

    #[error("invalid difficulty curve: {0}")]
    InvalidTuning(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
