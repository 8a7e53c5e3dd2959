//! Painting tools and their footprints

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::grid::Grid;

/// Painting tool types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tool {
    /// Single cell
    Stamp,
    /// Whole row
    RollerH,
    /// Whole column
    RollerV,
    /// 3x3 block centered on the target, clipped at the border
    Spray,
}

impl Tool {
    pub const ALL: [Tool; 4] = [Tool::Stamp, Tool::RollerH, Tool::RollerV, Tool::Spray];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tool::Stamp => "Stamp",
            Tool::RollerH => "Roller (row)",
            Tool::RollerV => "Roller (column)",
            Tool::Spray => "Spray",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "stamp" => Some(Tool::Stamp),
            "roller_h" | "rollerh" | "row" => Some(Tool::RollerH),
            "roller_v" | "rollerv" | "col" | "column" => Some(Tool::RollerV),
            "spray" => Some(Tool::Spray),
            _ => None,
        }
    }

    /// Cells covered when aimed at (row, col) on a `size`×`size` grid,
    /// before clipping.
    fn footprint(&self, row: i32, col: i32, size: usize) -> Vec<(i32, i32)> {
        let n = size as i32;
        match self {
            Tool::Stamp => vec![(row, col)],
            Tool::RollerH => (0..n).map(|c| (row, c)).collect(),
            Tool::RollerV => (0..n).map(|r| (r, col)).collect(),
            // Neighbors past i32's range are off any grid; drop them
            Tool::Spray => (-1..=1)
                .flat_map(|dr| (-1..=1).map(move |dc| (dr, dc)))
                .filter_map(|(dr, dc)| Some((row.checked_add(dr)?, col.checked_add(dc)?)))
                .collect(),
        }
    }
}

/// A single tool application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub tool: Tool,
    pub color: Color,
    pub row: i32,
    pub col: i32,
}

impl Move {
    pub fn new(tool: Tool, color: Color, row: i32, col: i32) -> Self {
        Self {
            tool,
            color,
            row,
            col,
        }
    }

    /// Apply this move to `grid`, returning the new grid
    pub fn apply(&self, grid: &Grid) -> Grid {
        apply_tool(grid, self.tool, self.color, self.row, self.col)
    }
}

/// Mix `color` into every cell the tool covers at (row, col).
///
/// Returns a fresh grid; the input is left untouched. Cells off the grid are
/// skipped, so a RollerH with a bad row or a Spray on a corner is not an error.
pub fn apply_tool(grid: &Grid, tool: Tool, color: Color, row: i32, col: i32) -> Grid {
    let mut next = grid.clone();
    for (r, c) in tool.footprint(row, col, grid.size()) {
        next.paint(r, c, color);
    }
    next
}
