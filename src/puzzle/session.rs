//! Gameplay session state
//!
//! Owns the player's grid and undo history. The engine functions never hold
//! on to grids, so every snapshot here is an independent copy.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::grid::{Grid, check_win};
use super::level::Level;
use super::tool::{Tool, apply_tool};
use crate::error::{PuzzleError, Result};

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Accepting moves
    Playing,
    /// Grid matches the target
    Won,
    /// Out of moves without matching the target
    Lost,
}

/// One attempt at one level
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    level: Level,
    grid: Grid,
    moves_left: u32,
    undos_left: u32,
    selected_color: Color,
    selected_tool: Tool,
    status: GameStatus,
    /// Grids before each move (newest last)
    #[serde(skip)]
    history: Vec<Grid>,
}

impl Session {
    /// Generate level `id` and start playing it
    pub fn start(id: u32) -> Result<Self> {
        Self::from_level(Level::generate(id)?)
    }

    /// Start playing an already generated level.
    ///
    /// Fails when the target does not have the level's grid size, since such
    /// a level could never be won.
    pub fn from_level(level: Level) -> Result<Self> {
        if level.target.size() != level.grid_size {
            log::warn!(
                "Level {} declares a {}x{} grid but its target is {}x{}",
                level.id,
                level.grid_size,
                level.grid_size,
                level.target.size(),
                level.target.size()
            );
            return Err(PuzzleError::InvalidGridSize {
                size: level.grid_size,
            });
        }
        let grid = level.empty_grid()?;
        log::info!(
            "Starting {} ({} moves, {} undos)",
            level.name,
            level.moves,
            level.undos
        );
        Ok(Self {
            grid,
            moves_left: level.moves,
            undos_left: level.undos,
            selected_color: level.default_color(),
            selected_tool: level.default_tool(),
            status: GameStatus::Playing,
            history: Vec::with_capacity(level.moves as usize),
            level,
        })
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn moves_left(&self) -> u32 {
        self.moves_left
    }

    pub fn undos_left(&self) -> u32 {
        self.undos_left
    }

    pub fn selected_color(&self) -> Color {
        self.selected_color
    }

    pub fn selected_tool(&self) -> Tool {
        self.selected_tool
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether `undo` would currently succeed
    pub fn can_undo(&self) -> bool {
        self.status == GameStatus::Playing && !self.history.is_empty() && self.undos_left > 0
    }

    pub fn select_color(&mut self, color: Color) -> Result<()> {
        if !self.level.available_colors.contains(&color) {
            log::warn!("Rejected color {:?} for level {}", color, self.level.id);
            return Err(PuzzleError::ColorUnavailable(color));
        }
        self.selected_color = color;
        Ok(())
    }

    pub fn select_tool(&mut self, tool: Tool) -> Result<()> {
        if !self.level.available_tools.contains(&tool) {
            log::warn!("Rejected tool {:?} for level {}", tool, self.level.id);
            return Err(PuzzleError::ToolUnavailable(tool));
        }
        self.selected_tool = tool;
        Ok(())
    }

    /// Apply the selected tool and color at (row, col).
    ///
    /// Costs one move. Returns the status after the move.
    pub fn tap(&mut self, row: i32, col: i32) -> Result<GameStatus> {
        if self.status != GameStatus::Playing || self.moves_left == 0 {
            return Err(PuzzleError::NotPlaying {
                status: self.status,
            });
        }
        if !self.grid.contains(row, col) {
            log::warn!("Rejected tap at ({}, {})", row, col);
            return Err(PuzzleError::OutOfBounds {
                row,
                col,
                size: self.grid.size(),
            });
        }

        let next = apply_tool(
            &self.grid,
            self.selected_tool,
            self.selected_color,
            row,
            col,
        );
        self.history.push(std::mem::replace(&mut self.grid, next));
        self.moves_left -= 1;

        if check_win(&self.grid, &self.level.target) {
            self.status = GameStatus::Won;
            log::info!(
                "{} solved with {} moves to spare",
                self.level.name,
                self.moves_left
            );
        } else if self.moves_left == 0 {
            self.status = GameStatus::Lost;
            log::info!("{} lost: out of moves", self.level.name);
        }

        Ok(self.status)
    }

    /// Restore the grid from before the last move, refunding that move.
    ///
    /// Returns false when there is nothing to undo, no undos remain, or the
    /// session is over.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        let Some(prev) = self.history.pop() else {
            return false;
        };
        self.grid = prev;
        self.moves_left += 1;
        self.undos_left -= 1;
        true
    }

    /// Restart the current level from an empty grid
    pub fn reset(&mut self) -> Result<()> {
        log::info!("Resetting {}", self.level.name);
        *self = Self::from_level(self.level.clone())?;
        Ok(())
    }

    /// Session for the following level id
    pub fn next_level(&self) -> Result<Self> {
        Self::start(self.level.id.saturating_add(1))
    }
}
