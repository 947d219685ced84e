use super::board::Cell;

/// One of the two players.
///
/// `PlayerTwo` is the engine's canonical (maximizing) side; `PlayerOne` moves
/// against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    PlayerOne,
    PlayerTwo,
}

impl Side {
    /// Get the other side
    pub fn other(self) -> Side {
        match self {
            Side::PlayerOne => Side::PlayerTwo,
            Side::PlayerTwo => Side::PlayerOne,
        }
    }

    /// Convert side to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Side::PlayerOne => Cell::PlayerOne,
            Side::PlayerTwo => Cell::PlayerTwo,
        }
    }

    /// Token glyph used by the console rendering
    pub fn symbol(self) -> char {
        match self {
            Side::PlayerOne => 'X',
            Side::PlayerTwo => 'O',
        }
    }

    /// Get side name for display
    pub fn name(self) -> &'static str {
        match self {
            Side::PlayerOne => "Player One",
            Side::PlayerTwo => "Player Two",
        }
    }
}
