//! Procedural level generation
//!
//! A level is a pure function of its id. The generator plays `steps` random
//! moves onto an empty grid and uses the result as the target, so every level
//! is solvable within its move budget.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::grid::Grid;
use super::rng::LevelRng;
use super::tool::{Move, Tool, apply_tool};
use crate::error::Result;
use crate::tuning::DifficultyCurve;
use crate::validate_level_id;

const TUTORIAL_HINT: &str = "Layer primary colors to create new ones!";

/// Difficulty rank shown in the level name
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Beginner,
    Apprentice,
    Journeyman,
    Artisan,
    Expert,
    Master,
    Grandmaster,
    Legend,
}

impl Rank {
    pub const LADDER: [Rank; 8] = [
        Rank::Beginner,
        Rank::Apprentice,
        Rank::Journeyman,
        Rank::Artisan,
        Rank::Expert,
        Rank::Master,
        Rank::Grandmaster,
        Rank::Legend,
    ];

    /// Ladder position, saturating at the top rank
    pub fn from_index(idx: usize) -> Self {
        Self::LADDER[idx.min(Self::LADDER.len() - 1)]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Beginner => "Beginner",
            Rank::Apprentice => "Apprentice",
            Rank::Journeyman => "Journeyman",
            Rank::Artisan => "Artisan",
            Rank::Expert => "Expert",
            Rank::Master => "Master",
            Rank::Grandmaster => "Grandmaster",
            Rank::Legend => "Legend",
        }
    }
}

/// A generated level. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pub id: u32,
    pub name: String,
    pub rank: Rank,
    pub grid_size: usize,
    pub target: Grid,
    /// Tool applications used to build `target`
    pub steps: u32,
    /// Move budget
    pub moves: u32,
    /// Offered paint colors; the first is the default selection
    pub available_colors: Vec<Color>,
    /// Offered tools; the first is the default selection
    pub available_tools: Vec<Tool>,
    /// Undo budget
    pub undos: u32,
    pub hint: String,
    /// Moves the generator played to build `target`
    #[serde(skip)]
    pub solution: Vec<Move>,
}

impl Level {
    /// Generate level `id` with the shipped difficulty curve
    pub fn generate(id: u32) -> Result<Self> {
        Self::generate_with(id, &DifficultyCurve::default())
    }

    /// Generate level `id` with a custom difficulty curve
    pub fn generate_with(id: u32, curve: &DifficultyCurve) -> Result<Self> {
        let id = validate_level_id(id)?;
        curve.validate()?;

        let grid_size = curve.grid_size(id);
        let steps = curve.steps(id);
        let colors = curve.palette(id);
        let tools = curve.tools(id);

        // Draw order per step is fixed: color, tool, row, col
        let mut rng = LevelRng::new(id)?;
        let mut target = Grid::new(grid_size)?;
        let mut solution = Vec::with_capacity(steps as usize);
        for _ in 0..steps {
            let color = rng.pick(&colors);
            let tool = rng.pick(&tools);
            let row = rng.next_index(grid_size) as i32;
            let col = rng.next_index(grid_size) as i32;
            target = apply_tool(&target, tool, color, row, col);
            solution.push(Move::new(tool, color, row, col));
        }

        let rank = curve.rank(id);
        let hint = if curve.is_tutorial(id) {
            TUTORIAL_HINT.to_string()
        } else {
            format!("Level {id}: A {grid_size}x{grid_size} pattern requiring {steps} precise layers.")
        };

        log::debug!(
            "Generated level {}: {}x{} grid, {} steps, {} colors, {} tools",
            id,
            grid_size,
            grid_size,
            steps,
            colors.len(),
            tools.len()
        );

        Ok(Self {
            id,
            name: format!("{} #{}", rank.as_str(), id),
            rank,
            grid_size,
            target,
            steps,
            moves: steps + curve.move_buffer(id),
            available_colors: colors,
            available_tools: tools,
            undos: curve.undos(id),
            hint,
            solution,
        })
    }

    pub fn default_color(&self) -> Color {
        self.available_colors.first().copied().unwrap_or(Color::Red)
    }

    pub fn default_tool(&self) -> Tool {
        self.available_tools.first().copied().unwrap_or(Tool::Stamp)
    }

    /// Fresh player grid for this level
    pub fn empty_grid(&self) -> Result<Grid> {
        Grid::new(self.grid_size)
    }
}

/// Generate level `id` with the shipped difficulty curve
pub fn generate_level(id: u32) -> Result<Level> {
    Level::generate(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MAX_LEVEL_COUNT;
    use crate::error::PuzzleError;
    use crate::puzzle::grid::check_win;
    use proptest::prelude::*;

    fn grid_of(rows: &[&str]) -> Grid {
        let rows: Vec<Vec<Color>> = rows
            .iter()
            .map(|row| {
                row.chars()
                    .map(|ch| {
                        Color::ALL
                            .into_iter()
                            .find(|c| c.symbol() == ch)
                            .unwrap()
                    })
                    .collect()
            })
            .collect();
        Grid::try_from(rows).unwrap()
    }

    #[test]
    fn test_level_one() {
        let level = generate_level(1).unwrap();
        assert_eq!(level.grid_size, 3);
        assert_eq!(level.steps, 2);
        assert_eq!(level.moves, 5);
        assert_eq!(level.undos, 10);
        assert_eq!(
            level.available_colors,
            vec![Color::Red, Color::Blue, Color::Yellow]
        );
        assert_eq!(
            level.available_tools,
            vec![Tool::Stamp, Tool::RollerH, Tool::RollerV]
        );
        assert!(level.name.starts_with("Beginner #1"));
        assert_eq!(level.hint, TUTORIAL_HINT);
        assert_eq!(
            level.solution,
            vec![
                Move::new(Tool::Stamp, Color::Red, 1, 0),
                Move::new(Tool::RollerV, Color::Blue, 1, 0),
            ]
        );
        assert_eq!(level.target, grid_of(&["B..", "P..", "B.."]));
    }

    #[test]
    fn test_level_two_target() {
        let level = generate_level(2).unwrap();
        assert_eq!(level.steps, 4);
        assert_eq!(level.target, grid_of(&["NR.", "O..", "O.."]));
    }

    #[test]
    fn test_level_six_uses_spray() {
        let level = generate_level(6).unwrap();
        assert_eq!(level.steps, 8);
        assert_eq!(level.solution[0], Move::new(Tool::Spray, Color::Red, 0, 1));
        assert_eq!(level.target, grid_of(&["PPP", "NNP", "GNP"]));
        assert_eq!(
            level.hint,
            "Level 6: A 3x3 pattern requiring 8 precise layers."
        );
    }

    #[test]
    fn test_black_unlock_boundary() {
        let fifty = generate_level(50).unwrap();
        let fifty_one = generate_level(51).unwrap();
        assert!(!fifty.available_colors.contains(&Color::Black));
        assert!(fifty_one.available_colors.contains(&Color::Black));
        assert_eq!(fifty_one.available_colors.len(), 4);
    }

    #[test]
    fn test_tight_budget_after_1000() {
        let level = generate_level(1001).unwrap();
        assert_eq!(level.grid_size, 6);
        assert_eq!(level.steps, 26);
        assert_eq!(level.moves, 27);
        assert_eq!(level.undos, 8);
        assert_eq!(level.name, "Expert #1001");
    }

    #[test]
    fn test_last_level() {
        let level = generate_level(MAX_LEVEL_COUNT).unwrap();
        assert_eq!(level.grid_size, 8);
        assert_eq!(level.steps, 39);
        assert_eq!(level.rank, Rank::Legend);
        assert_eq!(level.target.size(), 8);
    }

    #[test]
    fn test_rejects_out_of_range_ids() {
        assert!(matches!(
            generate_level(0),
            Err(PuzzleError::InvalidLevelId { id: 0 })
        ));
        assert!(generate_level(MAX_LEVEL_COUNT + 1).is_err());
    }

    #[test]
    fn test_custom_curve() {
        let curve = DifficultyCurve {
            base_grid_size: 5,
            grid_sizes: Vec::new(),
            ..DifficultyCurve::default()
        };
        let level = Level::generate_with(1, &curve).unwrap();
        assert_eq!(level.grid_size, 5);
        assert_eq!(level.target.size(), 5);
    }

    #[test]
    fn test_serialized_shape() {
        let level = generate_level(1).unwrap();
        let json = serde_json::to_value(&level).unwrap();
        assert_eq!(json["gridSize"], 3);
        assert_eq!(json["availableColors"][0], "red");
        assert_eq!(json["availableTools"][1], "ROLLER_H");
        assert_eq!(json["target"][1][0], "purple");
        assert!(json.get("solution").is_none());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_deterministic(id in 1u32..=MAX_LEVEL_COUNT) {
            let a = generate_level(id).unwrap();
            let b = generate_level(id).unwrap();
            prop_assert_eq!(&a, &b);
            prop_assert_eq!(a.solution, b.solution);
        }

        #[test]
        fn prop_solution_rebuilds_target(id in 1u32..=MAX_LEVEL_COUNT) {
            let level = generate_level(id).unwrap();
            let mut grid = level.empty_grid().unwrap();
            for mv in &level.solution {
                grid = mv.apply(&grid);
            }
            prop_assert!(check_win(&grid, &level.target));
            prop_assert!(level.steps <= level.moves);
        }

        #[test]
        fn prop_target_matches_grid_size(id in 1u32..=MAX_LEVEL_COUNT) {
            let level = generate_level(id).unwrap();
            prop_assert_eq!(level.target.size(), level.grid_size);
            prop_assert_eq!(level.grid_size, DifficultyCurve::default().grid_size(id));
            prop_assert!(level.solution.iter().all(|mv| level.target.contains(mv.row, mv.col)));
        }
    }
}
