//! Colour Print - A color-mixing tile puzzle
//!
//! Core modules:
//! - `puzzle`: Deterministic engine (color mixing, tools, level generation, sessions)
//! - `tuning`: Data-driven difficulty curve
//! - `platform`: Browser bindings (wasm32 only)
//! - `error`: Crate error type

pub mod error;
pub mod platform;
pub mod puzzle;
pub mod tuning;

pub use error::{PuzzleError, Result};
pub use puzzle::{
    Color, GameStatus, Grid, Level, Move, Rank, Session, Tool, apply_tool, check_win,
    create_empty_grid, generate_level, mix_colors,
};
pub use tuning::DifficultyCurve;

/// Game configuration constants
pub mod consts {
    /// Highest level id the generator accepts
    pub const MAX_LEVEL_COUNT: u32 = 50_000;

    /// Grid side length bounds (inclusive)
    pub const MIN_GRID_SIZE: usize = 3;
    pub const MAX_GRID_SIZE: usize = 8;

    /// Upper bound on layering steps per level
    pub const MAX_STEPS: u32 = 40;
}

/// Check that a level id is within `[1, MAX_LEVEL_COUNT]`
#[inline]
pub fn validate_level_id(id: u32) -> Result<u32> {
    if (1..=consts::MAX_LEVEL_COUNT).contains(&id) {
        Ok(id)
    } else {
        Err(PuzzleError::InvalidLevelId { id })
    }
}
