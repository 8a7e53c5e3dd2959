//! Deterministic puzzle engine
//!
//! All puzzle logic lives here. This module must be pure and deterministic:
//! - Levels depend on the level id only
//! - Seeded LCG only (no OS randomness)
//! - Grids are never mutated in place by the engine
//! - No rendering or platform dependencies

pub mod color;
pub mod grid;
pub mod level;
pub mod rng;
pub mod session;
pub mod tool;

pub use color::{Color, mix_colors};
pub use grid::{Grid, check_win, create_empty_grid};
pub use level::{Level, Rank, generate_level};
pub use rng::LevelRng;
pub use session::{GameStatus, Session};
pub use tool::{Move, Tool, apply_tool};
