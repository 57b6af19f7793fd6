//! Common types for tictactoe: evaluation results and input errors.

/// Result of evaluating the board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// No line completed and at least one cell is still vacant.
    NoResult,
    /// Some row, column or diagonal is held entirely by one player.
    Victory,
    /// Every cell is taken and nobody completed a line.
    Draw,
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinates fall outside `[0, scale)` on either axis.
    OutOfBounds { x: usize, y: usize, scale: u8 },
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds { x, y, scale } => {
                write!(f, "Cell ({}, {}) is outside a {}x{} board", x, y, scale, scale)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Reasons a line of text is not a playable move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Not of the shape `<x>,<y>` with two integers.
    Malformed,
    /// Well formed, but a coordinate is outside `[1, scale]`.
    OutOfRange { scale: u8 },
}

impl core::fmt::Display for MoveError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MoveError::Malformed => write!(f, "I don't recognise that input. Try again..."),
            MoveError::OutOfRange { scale } => write!(
                f,
                "Coordinates must be between 1 and {}. Try again...",
                scale
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MoveError {}
