//! Errors raised while building a puzzle structure or seeding a fill.
//!
//! An unsatisfiable puzzle is not an error: fillers report it as `Ok(None)`.

use crate::parse::Variable;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("grid must have a positive height and width, got {height}x{width}")]
    InvalidDimensions { height: usize, width: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("variable {variable} has zero length")]
    ZeroLength { variable: Variable },

    #[error("variable {variable} runs off the grid")]
    OutOfBounds { variable: Variable },

    #[error("variable {variable} covers blocked cell ({row}, {col})")]
    BlockedCell {
        variable: Variable,
        row: usize,
        col: usize,
    },

    #[error("variable {variable} is listed more than once")]
    DuplicateVariable { variable: Variable },

    #[error("variables {first} and {second} run in the same direction over a shared cell")]
    ConflictingVariables { first: Variable, second: Variable },

    #[error("word list contains an empty word")]
    EmptyWord,

    #[error("variable {variable} is not part of this crossword")]
    UnknownVariable { variable: Variable },

    #[error("\"{word}\" is not in the word list")]
    UnknownWord { word: String },

    #[error("\"{word}\" does not fit {variable}")]
    LengthMismatch { variable: Variable, word: String },
}

impl Error {
    /// Stable code for each variant, usable in logs and docs.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidDimensions { .. } => "X001",
            Error::RaggedRow { .. } => "X002",
            Error::ZeroLength { .. } => "X003",
            Error::OutOfBounds { .. } => "X004",
            Error::BlockedCell { .. } => "X005",
            Error::DuplicateVariable { .. } => "X006",
            Error::ConflictingVariables { .. } => "X007",
            Error::EmptyWord => "X008",
            Error::UnknownVariable { .. } => "X009",
            Error::UnknownWord { .. } => "X010",
            Error::LengthMismatch { .. } => "X011",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Error;
    use crate::{Direction, Variable};

    #[test]
    fn display_names_the_variable() {
        let err = Error::LengthMismatch {
            variable: Variable::new(1, 2, Direction::Down, 4),
            word: String::from("CAT"),
        };
        assert_eq!("\"CAT\" does not fit down (1, 2) len 4", err.to_string());
        assert_eq!("X011", err.code());
    }

    #[test]
    fn codes_are_distinct() {
        let v = Variable::new(0, 0, Direction::Across, 3);
        let errors = vec![
            Error::InvalidDimensions { height: 0, width: 0 },
            Error::RaggedRow { row: 0, expected: 1, found: 2 },
            Error::ZeroLength { variable: v },
            Error::OutOfBounds { variable: v },
            Error::BlockedCell { variable: v, row: 0, col: 0 },
            Error::DuplicateVariable { variable: v },
            Error::ConflictingVariables { first: v, second: v },
            Error::EmptyWord,
            Error::UnknownVariable { variable: v },
            Error::UnknownWord { word: String::from("X") },
            Error::LengthMismatch { variable: v, word: String::from("X") },
        ];
        let mut codes: Vec<&str> = errors.iter().map(Error::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(errors.len(), codes.len());
    }
}
