//! Commonly used types and utilities for ease of import.

pub use crate::{Board, GameConfig, GameResult, Occupancy, Player, Rematch};

#[cfg(feature = "std")]
pub use crate::{
    play, GameSession, InputSource, OutputSink, ScriptedConsole, SessionOutcome, SessionState,
    StdConsole,
};
