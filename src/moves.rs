//! Text grammar for moves, the quit token and rematch answers.

use crate::common::MoveError;

pub const QUIT_TOKEN: &str = "q";
pub const REMATCH_YES: &str = "y";
pub const REMATCH_NO: &str = "n";

/// Answer to the play-again prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rematch {
    Restart,
    Exit,
}

/// True when `input` asks to give up the game.
pub fn is_quit(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(QUIT_TOKEN)
}

/// Parse `<x>,<y>` with both values in `[1, scale]` into 0-based `(x, y)`.
pub fn parse_move(input: &str, scale: u8) -> Result<(usize, usize), MoveError> {
    let mut parts = input.split(',');
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(MoveError::Malformed);
    };
    let x = parse_coordinate(x)?;
    let y = parse_coordinate(y)?;

    let in_range = |v: usize| (1..=scale as usize).contains(&v);
    if in_range(x) && in_range(y) {
        Ok((x - 1, y - 1))
    } else {
        Err(MoveError::OutOfRange { scale })
    }
}

fn parse_coordinate(part: &str) -> Result<usize, MoveError> {
    let part = part.trim();
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MoveError::Malformed);
    }
    // Digits only, so a failed parse means it overflowed: certainly out of range.
    Ok(part.parse().unwrap_or(usize::MAX))
}

/// Interpret a play-again answer; `None` for anything unrecognised.
pub fn parse_rematch(input: &str) -> Option<Rematch> {
    let answer = input.trim();
    if answer.eq_ignore_ascii_case(REMATCH_YES) {
        Some(Rematch::Restart)
    } else if answer.eq_ignore_ascii_case(REMATCH_NO) {
        Some(Rematch::Exit)
    } else {
        None
    }
}
