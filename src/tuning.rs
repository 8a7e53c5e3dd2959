//! Data-driven difficulty curve
//!
//! Every balance number the level generator uses lives here. `Default` is the
//! shipped curve; alternative curves can be loaded from JSON for playtesting.

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_GRID_SIZE, MAX_STEPS, MIN_GRID_SIZE};
use crate::error::{PuzzleError, Result};
use crate::puzzle::{Color, Rank, Tool};

/// Grid grows to `size` once the level id is strictly greater than `above`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeStep {
    pub above: u32,
    pub size: usize,
}

/// Level id → difficulty parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyCurve {
    /// Grid size for the first levels
    pub base_grid_size: usize,
    /// Size increases, ascending by `above`
    pub grid_sizes: Vec<SizeStep>,

    // === Target layering ===
    pub base_steps: u32,
    /// Extra steps per power of ten in the level id
    pub steps_per_decade: f64,
    pub max_steps: u32,

    // === Unlocks (strictly greater than) ===
    pub black_after: u32,
    pub spray_after: u32,

    // === Budgets ===
    /// Levels above this get `tight_buffer` spare moves instead of `relaxed_buffer`
    pub tight_after: u32,
    pub relaxed_buffer: u32,
    pub tight_buffer: u32,
    pub base_undos: u32,
    /// One undo is lost every `undo_interval` levels
    pub undo_interval: u32,
    pub min_undos: u32,

    // === Presentation ===
    /// Rank ladder steps per power of ten in the level id
    pub rank_per_decade: f64,
    /// Levels up to and including this one show the tutorial hint
    pub tutorial_through: u32,
}

impl Default for DifficultyCurve {
    fn default() -> Self {
        Self {
            base_grid_size: 3,
            grid_sizes: vec![
                SizeStep { above: 10, size: 4 },
                SizeStep { above: 100, size: 5 },
                SizeStep { above: 1000, size: 6 },
                SizeStep { above: 5000, size: 7 },
                SizeStep { above: 20000, size: 8 },
            ],

            base_steps: 2,
            steps_per_decade: 8.0,
            max_steps: MAX_STEPS,

            black_after: 50,
            spray_after: 5,

            tight_after: 1000,
            relaxed_buffer: 3,
            tight_buffer: 1,
            base_undos: 10,
            undo_interval: 500,
            min_undos: 2,

            rank_per_decade: 1.5,
            tutorial_through: 5,
        }
    }
}

impl DifficultyCurve {
    /// Parse and validate a curve from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let curve: Self = serde_json::from_str(json)?;
        curve.validate()?;
        Ok(curve)
    }

    pub fn validate(&self) -> Result<()> {
        let in_bounds = |size: usize| (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size);

        if !in_bounds(self.base_grid_size) {
            return Err(PuzzleError::InvalidTuning(format!(
                "base grid size {} out of range",
                self.base_grid_size
            )));
        }
        let mut prev = SizeStep {
            above: 0,
            size: self.base_grid_size,
        };
        for (i, step) in self.grid_sizes.iter().enumerate() {
            if !in_bounds(step.size) {
                return Err(PuzzleError::InvalidTuning(format!(
                    "grid size {} out of range",
                    step.size
                )));
            }
            if (i > 0 && step.above <= prev.above) || step.size < prev.size {
                return Err(PuzzleError::InvalidTuning(
                    "grid size steps must ascend".to_string(),
                ));
            }
            prev = *step;
        }
        if self.max_steps == 0 || self.max_steps > MAX_STEPS {
            return Err(PuzzleError::InvalidTuning(format!(
                "max steps must be in 1..={MAX_STEPS}"
            )));
        }
        if !self.steps_per_decade.is_finite() || self.steps_per_decade < 0.0 {
            return Err(PuzzleError::InvalidTuning(
                "steps per decade must be a non-negative number".to_string(),
            ));
        }
        if !self.rank_per_decade.is_finite() || self.rank_per_decade < 0.0 {
            return Err(PuzzleError::InvalidTuning(
                "rank per decade must be a non-negative number".to_string(),
            ));
        }
        if self.undo_interval == 0 {
            return Err(PuzzleError::InvalidTuning(
                "undo interval must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn grid_size(&self, id: u32) -> usize {
        self.grid_sizes
            .iter()
            .take_while(|step| id > step.above)
            .last()
            .map_or(self.base_grid_size, |step| step.size)
    }

    /// Number of tool applications used to build the target
    pub fn steps(&self, id: u32) -> u32 {
        let scaled = (f64::from(id).log10() * self.steps_per_decade).floor() as u32;
        self.base_steps.saturating_add(scaled).min(self.max_steps)
    }

    /// Paint colors offered, default first
    pub fn palette(&self, id: u32) -> Vec<Color> {
        let mut colors = vec![Color::Red, Color::Blue, Color::Yellow];
        if id > self.black_after {
            colors.push(Color::Black);
        }
        colors
    }

    /// Tools offered, default first
    pub fn tools(&self, id: u32) -> Vec<Tool> {
        let mut tools = vec![Tool::Stamp, Tool::RollerH, Tool::RollerV];
        if id > self.spray_after {
            tools.push(Tool::Spray);
        }
        tools
    }

    /// Spare moves on top of the generator's step count
    pub fn move_buffer(&self, id: u32) -> u32 {
        if id > self.tight_after {
            self.tight_buffer
        } else {
            self.relaxed_buffer
        }
    }

    pub fn undos(&self, id: u32) -> u32 {
        self.base_undos
            .saturating_sub(id / self.undo_interval)
            .max(self.min_undos)
    }

    pub fn rank(&self, id: u32) -> Rank {
        let idx = (f64::from(id).log10() * self.rank_per_decade).floor() as usize;
        Rank::from_index(idx)
    }

    pub fn is_tutorial(&self, id: u32) -> bool {
        id <= self.tutorial_through
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_is_valid() {
        DifficultyCurve::default().validate().unwrap();
    }

    #[test]
    fn test_grid_size_thresholds() {
        let curve = DifficultyCurve::default();
        let cases = [
            (1, 3),
            (10, 3),
            (11, 4),
            (100, 4),
            (101, 5),
            (1000, 5),
            (1001, 6),
            (5000, 6),
            (5001, 7),
            (20000, 7),
            (20001, 8),
            (50000, 8),
        ];
        for (id, size) in cases {
            assert_eq!(curve.grid_size(id), size, "level {id}");
        }
    }

    #[test]
    fn test_steps() {
        let curve = DifficultyCurve::default();
        let cases = [
            (1, 2),
            (5, 7),
            (10, 10),
            (22, 12),
            (100, 18),
            (1000, 26),
            (5000, 31),
            (20000, 36),
            (50000, 39),
        ];
        for (id, steps) in cases {
            assert_eq!(curve.steps(id), steps, "level {id}");
        }
    }

    #[test]
    fn test_unlock_thresholds() {
        let curve = DifficultyCurve::default();
        assert!(!curve.palette(50).contains(&Color::Black));
        assert!(curve.palette(51).contains(&Color::Black));
        assert!(!curve.tools(5).contains(&Tool::Spray));
        assert!(curve.tools(6).contains(&Tool::Spray));
        assert_eq!(curve.palette(1)[0], Color::Red);
        assert_eq!(curve.tools(1)[0], Tool::Stamp);
    }

    #[test]
    fn test_budgets() {
        let curve = DifficultyCurve::default();
        assert_eq!(curve.move_buffer(1000), 3);
        assert_eq!(curve.move_buffer(1001), 1);
        assert_eq!(curve.undos(1), 10);
        assert_eq!(curve.undos(499), 10);
        assert_eq!(curve.undos(500), 9);
        assert_eq!(curve.undos(1001), 8);
        assert_eq!(curve.undos(4000), 2);
        assert_eq!(curve.undos(50000), 2);
    }

    #[test]
    fn test_rank_ladder() {
        let curve = DifficultyCurve::default();
        assert_eq!(curve.rank(1), Rank::Beginner);
        assert_eq!(curve.rank(5), Rank::Apprentice);
        assert_eq!(curve.rank(22), Rank::Journeyman);
        assert_eq!(curve.rank(100), Rank::Artisan);
        assert_eq!(curve.rank(1000), Rank::Expert);
        assert_eq!(curve.rank(10000), Rank::Grandmaster);
        assert_eq!(curve.rank(50000), Rank::Legend);
    }

    #[test]
    fn test_from_json_partial() {
        let curve = DifficultyCurve::from_json(r#"{"base_steps": 4, "black_after": 0}"#).unwrap();
        assert_eq!(curve.steps(1), 4);
        assert!(curve.palette(1).contains(&Color::Black));
        assert_eq!(curve.grid_size(11), 4);
    }

    #[test]
    fn test_from_json_rejects_bad_curves() {
        assert!(matches!(
            DifficultyCurve::from_json(r#"{"undo_interval": 0}"#),
            Err(PuzzleError::InvalidTuning(_))
        ));
        assert!(matches!(
            DifficultyCurve::from_json(r#"{"base_grid_size": 12}"#),
            Err(PuzzleError::InvalidTuning(_))
        ));
        assert!(matches!(
            DifficultyCurve::from_json(
                r#"{"grid_sizes": [{"above": 100, "size": 5}, {"above": 10, "size": 6}]}"#
            ),
            Err(PuzzleError::InvalidTuning(_))
        ));
        assert!(matches!(
            DifficultyCurve::from_json("{not json"),
            Err(PuzzleError::Json(_))
        ));
    }

    proptest! {
        #[test]
        fn prop_steps_non_decreasing(id in 1u32..50_000) {
            let curve = DifficultyCurve::default();
            prop_assert!(curve.steps(id) <= curve.steps(id + 1));
            prop_assert!(curve.steps(id) <= MAX_STEPS);
        }

        #[test]
        fn prop_grid_size_non_decreasing(id in 1u32..50_000) {
            let curve = DifficultyCurve::default();
            prop_assert!(curve.grid_size(id) <= curve.grid_size(id + 1));
        }
    }
}
