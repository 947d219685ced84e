use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::debug;

use super::agent::Agent;
use super::difficulty::Difficulty;
use super::evaluator::{Heuristic, PositionalHeuristic, Score, SCORE_MAX, SCORE_MIN, WIN_SCORE};
use crate::game::{Board, GameState, Outcome, Side, COLS};

/// Counters collected during one search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}

/// Result of a root search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// Best column, or `None` when no column accepts a token.
    pub column: Option<usize>,
    /// Score of `column`; `SCORE_MIN` when there is none.
    pub score: Score,
    pub depth: u32,
    pub stats: SearchStats,
    /// The cancel flag was raised before every root column was examined.
    /// If no column was scored, `column` is the first open one and `score`
    /// is `SCORE_MIN`.
    pub cancelled: bool,
}

/// Depth-limited minimax with alpha-beta pruning.
///
/// Columns are always tried left to right and ties keep the lowest column,
/// so the chosen move is reproducible for a given board and depth.
pub struct MinimaxEngine {
    depth: u32,
    side: Side,
    heuristic: Box<dyn Heuristic>,
    cancel: Option<Arc<AtomicBool>>,
}

impl MinimaxEngine {
    /// Engine playing [`Side::PlayerTwo`] with the default heuristic.
    pub fn new(depth: u32) -> Self {
        Self::with_heuristic(depth, Box::new(PositionalHeuristic::default()))
    }

    pub fn with_heuristic(depth: u32, heuristic: Box<dyn Heuristic>) -> Self {
        MinimaxEngine {
            depth,
            side: Side::PlayerTwo,
            heuristic,
            cancel: None,
        }
    }

    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self::new(difficulty.depth())
    }

    /// Set the side the engine maximizes for.
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    /// Stop examining further root columns once `flag` is raised.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Best column for the engine's side, or `None` on a full board.
    ///
    /// A search cancelled before any column was scored still returns the
    /// first open column. `board` is never modified; the search works on a
    /// private copy.
    pub fn choose_move(&self, board: &Board) -> Option<usize> {
        self.search_report(board).column
    }

    pub fn search_report(&self, board: &Board) -> SearchReport {
        self.report_for(board, self.side)
    }

    fn report_for(&self, board: &Board, side: Side) -> SearchReport {
        let mut work = board.clone();
        let mut searcher = Searcher {
            heuristic: self.heuristic.as_ref(),
            side,
            cancel: self.cancel.as_deref(),
            stats: SearchStats::default(),
        };
        let report = searcher.root(&mut work, self.depth);
        debug_assert_eq!(&work, board, "search left stray tokens on its board");

        debug!(
            side = side.name(),
            column = ?report.column,
            score = report.score,
            depth = report.depth,
            nodes = report.stats.nodes,
            cutoffs = report.stats.cutoffs,
            cancelled = report.cancelled,
            "search finished"
        );
        report
    }
}

struct Searcher<'a> {
    heuristic: &'a dyn Heuristic,
    side: Side,
    cancel: Option<&'a AtomicBool>,
    stats: SearchStats,
}

impl Searcher<'_> {
    fn is_cancelled(&self) -> bool {
        self.cancel.is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    fn root(&mut self, board: &mut Board, depth: u32) -> SearchReport {
        let mut best: Option<(usize, Score)> = None;
        let mut cancelled = false;

        for col in 0..COLS {
            if self.is_cancelled() {
                cancelled = true;
                break;
            }
            let Some(mut child) = board.place_guarded(col, self.side) else {
                continue;
            };
            let score = self.search(&mut child, depth, SCORE_MIN, SCORE_MAX, false);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((col, score));
            }
        }

        if best.is_none() && cancelled {
            best = board.legal_columns().first().map(|&col| (col, SCORE_MIN));
        }

        SearchReport {
            column: best.map(|(col, _)| col),
            score: best.map_or(SCORE_MIN, |(_, score)| score),
            depth,
            stats: self.stats,
            cancelled,
        }
    }

    fn search(
        &mut self,
        board: &mut Board,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> Score {
        self.stats.nodes += 1;

        // Decided games are scored before the horizon. Earlier wins keep more
        // depth and land further from zero.
        match board.check_win() {
            Outcome::Win(winner) => return decided_score(winner == self.side, depth),
            Outcome::Draw => return self.heuristic.evaluate(board, self.side),
            Outcome::NoWinYet if depth == 0 => {
                return self.heuristic.evaluate(board, self.side);
            }
            Outcome::NoWinYet => {}
        }

        if maximizing {
            let mut best = SCORE_MIN;
            for col in 0..COLS {
                let Some(mut child) = board.place_guarded(col, self.side) else {
                    continue;
                };
                let score = self.search(&mut child, depth - 1, alpha, beta, false);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        } else {
            let mut best = SCORE_MAX;
            for col in 0..COLS {
                let Some(mut child) = board.place_guarded(col, self.side.other()) else {
                    continue;
                };
                let score = self.search(&mut child, depth - 1, alpha, beta, true);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        }
    }
}

fn decided_score(won: bool, depth: u32) -> Score {
    let score = WIN_SCORE + depth as Score;
    if won {
        score
    } else {
        -score
    }
}

impl Agent for MinimaxEngine {
    /// Searches for whichever side is to move.
    fn select_action(&mut self, state: &GameState) -> Option<usize> {
        if state.is_terminal() {
            return None;
        }
        self.report_for(state.board(), state.current_player()).column
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
