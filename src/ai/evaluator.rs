use serde::{Deserialize, Serialize};

use crate::game::{Board, Cell, Side, ROWS};

/// Heuristic desirability of a position. Higher is better for the
/// maximizing side.
pub type Score = i32;

/// Worse than any real evaluation. Kept well inside `i32` so alpha/beta
/// comparisons never overflow.
pub const SCORE_MIN: Score = -1_000_000_000;
/// Better than any real evaluation.
pub const SCORE_MAX: Score = 1_000_000_000;
/// Score of a position a side has already won, before the remaining-depth
/// bonus. Above any heuristic sum, below the sentinels.
pub const WIN_SCORE: Score = 1_000_000;

const CENTER_COL: usize = 3;
const ADJACENT_COLS: [usize; 2] = [2, 4];

/// Trait for evaluating a board position from the maximizing side's
/// perspective.
pub trait Heuristic: Send + Sync {
    fn evaluate(&self, board: &Board, maximizing: Side) -> Score;
}

/// Weights used by [`PositionalHeuristic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    /// Per maximizing token in the center column.
    pub center: Score,
    /// Per maximizing token in a column next to the center.
    pub adjacent: Score,
    /// Four maximizing tokens.
    pub win: Score,
    /// Three maximizing tokens and one empty cell.
    pub three: Score,
    /// Two maximizing tokens and two empty cells.
    pub two: Score,
    /// Three opposing tokens and one empty cell.
    pub opponent_three: Score,
    /// Two opposing tokens and two empty cells.
    pub opponent_two: Score,
}

impl Default for EvalWeights {
    fn default() -> Self {
        EvalWeights {
            center: 3,
            adjacent: 2,
            win: 1000,
            three: 50,
            two: 10,
            opponent_three: -500,
            opponent_two: -10,
        }
    }
}

/// Central-column bias plus pattern counting over every four-cell line.
///
/// Blocking an opposing three is weighted ten times heavier than building an
/// own three, which makes the engine play defensively.
#[derive(Debug, Clone, Default)]
pub struct PositionalHeuristic {
    weights: EvalWeights,
}

impl PositionalHeuristic {
    pub fn new(weights: EvalWeights) -> Self {
        PositionalHeuristic { weights }
    }

    pub fn weights(&self) -> &EvalWeights {
        &self.weights
    }

    fn score_window(&self, own: usize, opp: usize, empty: usize) -> Score {
        let w = &self.weights;
        match (own, opp, empty) {
            (4, 0, 0) => w.win,
            (3, 0, 1) => w.three,
            (2, 0, 2) => w.two,
            (0, 3, 1) => w.opponent_three,
            (0, 2, 2) => w.opponent_two,
            _ => 0,
        }
    }
}

impl Heuristic for PositionalHeuristic {
    fn evaluate(&self, board: &Board, maximizing: Side) -> Score {
        let own_cell = maximizing.to_cell();
        let opp_cell = maximizing.other().to_cell();
        let mut score = 0;

        for row in 0..ROWS {
            if board.get(row, CENTER_COL) == own_cell {
                score += self.weights.center;
            }
            for col in ADJACENT_COLS {
                if board.get(row, col) == own_cell {
                    score += self.weights.adjacent;
                }
            }
        }

        for line in Board::lines() {
            let mut own = 0;
            let mut opp = 0;
            let mut empty = 0;
            for (row, col) in line {
                match board.get(row, col) {
                    c if c == own_cell => own += 1,
                    c if c == opp_cell => opp += 1,
                    Cell::Empty => empty += 1,
                    _ => {}
                }
            }
            score += self.score_window(own, opp, empty);
        }

        score
    }
}
