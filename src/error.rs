use std::path::PathBuf;

/// Errors returned by the authoritative placement API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is outside the board")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameOver,
}

/// Errors that can occur when parsing the 42-digit board encoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseBoardError {
    #[error("expected 42 cells, got {0}")]
    Length(usize),

    #[error("invalid cell '{0}' at index {1}")]
    InvalidDigit(char, usize),

    #[error("token at row {row}, column {col} has an empty cell below it")]
    Floating { row: usize, col: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("failed to serialize config: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(MoveError::ColumnFull(3).to_string(), "column 3 is full");
        assert_eq!(
            MoveError::InvalidColumn(9).to_string(),
            "column 9 is outside the board"
        );
    }

    #[test]
    fn test_parse_board_error_display() {
        let err = ParseBoardError::Floating { row: 2, col: 4 };
        assert_eq!(
            err.to_string(),
            "token at row 2, column 4 has an empty cell below it"
        );
        assert_eq!(
            ParseBoardError::InvalidDigit('7', 11).to_string(),
            "invalid cell '7' at index 11"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("engine.depth must be in 1..=12".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: engine.depth must be in 1..=12"
        );
    }
}
