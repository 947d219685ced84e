//! Move selection: the minimax engine, its evaluator, difficulty levels, and
//! the [`Agent`] trait shared with the random player.

mod agent;
mod difficulty;
mod evaluator;
mod random;
mod search;

pub use agent::Agent;
pub use difficulty::Difficulty;
pub use evaluator::{
    EvalWeights, Heuristic, PositionalHeuristic, Score, SCORE_MAX, SCORE_MIN,
    WIN_SCORE,
};
pub use random::RandomAgent;
pub use search::{MinimaxEngine, SearchReport, SearchStats};
