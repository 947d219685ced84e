use super::{Board, Outcome, Side};
use crate::error::MoveError;

/// Turn-taking state of a live game: the authoritative board, whose turn it
/// is, and how the game ended.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Side,
    outcome: Outcome,
    moves_played: usize,
}

impl GameState {
    /// Create initial game state with `first` to move
    pub fn new(first: Side) -> Self {
        GameState {
            board: Board::new(),
            current_player: first,
            outcome: Outcome::NoWinYet,
            moves_played: 0,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Side {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome != Outcome::NoWinYet
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_columns()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = self.clone();
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply move in place, returning the row the token landed in.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<usize, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let row = self.board.play(column, self.current_player)?;
        self.moves_played += 1;
        self.outcome = self.board.check_win();
        if self.outcome == Outcome::NoWinYet {
            self.current_player = self.current_player.other();
        }

        Ok(row)
    }

    /// Tag the winning line on the board for display. Only meaningful once
    /// the game is over; the outcome itself is not affected.
    pub fn highlight_win(&mut self) {
        if matches!(self.outcome, Outcome::Win(_)) {
            self.board.mark_win();
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Side::PlayerOne)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, COLS, ROWS};

    #[test]
    fn test_initial_state() {
        let state = GameState::new(Side::PlayerTwo);
        assert_eq!(state.current_player(), Side::PlayerTwo);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_actions().len(), COLS);
        assert_eq!(state.moves_played(), 0);
    }

    #[test]
    fn test_apply_move() {
        let state = GameState::default();
        let new_state = state.apply_move(3).unwrap();

        assert_eq!(new_state.current_player(), Side::PlayerTwo);
        assert_eq!(new_state.board().get(ROWS - 1, 3), Cell::PlayerOne);
        // Source state is untouched.
        assert_eq!(state.board(), &Board::new());
    }

    #[test]
    fn test_win_detection_and_game_over() {
        let mut state = GameState::default();

        for col in 0..4 {
            state.apply_move_mut(col).unwrap(); // Player one
            if col < 3 {
                state.apply_move_mut(col).unwrap(); // Player two, stacked on top
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Outcome::Win(Side::PlayerOne));
        // Winner stays the side to move once the game ends.
        assert_eq!(state.current_player(), Side::PlayerOne);
        assert!(state.legal_actions().is_empty());
        assert_eq!(state.apply_move_mut(5), Err(MoveError::GameOver));
    }

    #[test]
    fn test_illegal_moves_keep_turn() {
        let mut state = GameState::default();
        for _ in 0..ROWS {
            state.apply_move_mut(0).unwrap();
        }
        let before = state.clone();

        assert_eq!(state.apply_move_mut(0), Err(MoveError::ColumnFull(0)));
        assert_eq!(state.apply_move_mut(COLS), Err(MoveError::InvalidColumn(COLS)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_highlight_win_marks_line() {
        let mut state = GameState::default();
        for _ in 0..3 {
            state.apply_move_mut(6).unwrap();
            state.apply_move_mut(5).unwrap();
        }
        state.apply_move_mut(6).unwrap();
        assert_eq!(state.outcome(), Outcome::Win(Side::PlayerOne));

        state.highlight_win();
        for row in 2..ROWS {
            assert_eq!(state.board().get(row, 6), Cell::WinMarker);
        }
        assert_eq!(state.outcome(), Outcome::Win(Side::PlayerOne));
    }
}
