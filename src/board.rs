//! Game board state and terminal-state detection.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::cell::{Cell, Occupancy};
use crate::common::{BoardError, GameResult};
use crate::config::{is_valid_scale, GameConfig, PieceSymbols, DEFAULT_SCALE};
use crate::player::Player;

/// An N×N grid of cells addressed by `(x, y)`, both 0-based.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    scale: u8,
    cells: Vec<Cell>,
    symbols: PieceSymbols,
}

impl Board {
    /// Create an empty board. A scale outside `[3, 255]` falls back to 3.
    pub fn new(requested_scale: usize) -> Self {
        Self::with_symbols(requested_scale, PieceSymbols::default())
    }

    /// Create an empty board using the configured scale and symbols.
    pub fn with_config(config: &GameConfig) -> Self {
        Self::with_symbols(config.scale as usize, config.symbols.clone())
    }

    fn with_symbols(requested_scale: usize, symbols: PieceSymbols) -> Self {
        let scale = if is_valid_scale(requested_scale) {
            requested_scale as u8
        } else {
            log::warn!(
                "board scale {} is out of range, falling back to {}",
                requested_scale,
                DEFAULT_SCALE
            );
            DEFAULT_SCALE
        };
        let side = scale as usize;
        Board {
            scale,
            cells: vec![Cell::new(Occupancy::Vacant); side * side],
            symbols,
        }
    }

    /// Side length of the board.
    pub fn scale(&self) -> u8 {
        self.scale
    }

    pub fn symbols(&self) -> &PieceSymbols {
        &self.symbols
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        let side = self.scale as usize;
        (x < side && y < side).then(|| y * side + x)
    }

    /// Cell at `(x, y)`, or `None` when either axis is outside `[0, scale)`.
    pub fn get_cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// True when the cell exists and is held by either player.
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.get_cell(x, y).is_some_and(|cell| !cell.is_vacant())
    }

    /// Mark `(x, y)` for `player`. Vacancy is the caller's concern.
    pub fn set_occupancy(&mut self, x: usize, y: usize, player: Player) -> Result<(), BoardError> {
        let idx = self.index(x, y).ok_or(BoardError::OutOfBounds {
            x,
            y,
            scale: self.scale,
        })?;
        self.cells[idx].set_occupancy(Occupancy::from(player));
        Ok(())
    }

    /// Number of cells still vacant.
    pub fn vacant_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_vacant()).count()
    }

    /// Decide whether the game is over. A win is always checked before a
    /// draw, so filling the last cell with a winning mark is a victory.
    pub fn evaluate(&self) -> GameResult {
        if self.column_victory()
            || self.row_victory()
            || self.main_diagonal_victory()
            || self.anti_diagonal_victory()
        {
            return GameResult::Victory;
        }
        if self.vacant_count() > 0 {
            GameResult::NoResult
        } else {
            GameResult::Draw
        }
    }

    fn occupancy(&self, x: usize, y: usize) -> Occupancy {
        self.cells[y * self.scale as usize + x].occupancy()
    }

    /// Whether `a` and `b` continue a run: equal and both held.
    fn links(&self, a: (usize, usize), b: (usize, usize)) -> bool {
        let (first, second) = (self.occupancy(a.0, a.1), self.occupancy(b.0, b.1));
        first != Occupancy::Vacant && first == second
    }

    /// Length of the run of linked pairs along `steps`, stopping at the
    /// first break.
    fn run_length<I>(&self, steps: I) -> usize
    where
        I: Iterator<Item = ((usize, usize), (usize, usize))>,
    {
        steps.take_while(|&(a, b)| self.links(a, b)).count()
    }

    fn column_victory(&self) -> bool {
        let side = self.scale as usize;
        (0..side).any(|x| self.run_length((0..side - 1).map(|y| ((x, y), (x, y + 1)))) == side - 1)
    }

    fn row_victory(&self) -> bool {
        let side = self.scale as usize;
        (0..side).any(|y| self.run_length((0..side - 1).map(|x| ((x, y), (x + 1, y)))) == side - 1)
    }

    fn main_diagonal_victory(&self) -> bool {
        let side = self.scale as usize;
        self.run_length((0..side - 1).map(|i| ((i, i), (i + 1, i + 1)))) == side - 1
    }

    fn anti_diagonal_victory(&self) -> bool {
        let side = self.scale as usize;
        // (side-1, 0) walking x-1, y+1 until x hits 0 or y hits side-1.
        let steps = (0..side - 1).map(|y| ((side - 1 - y, y), (side - 2 - y, y + 1)));
        self.run_length(steps) == side - 1
    }

    /// Symbol configured for `occupancy`.
    pub fn symbol_for(&self, occupancy: Occupancy) -> &str {
        match occupancy {
            Occupancy::Vacant => &self.symbols.vacant,
            Occupancy::Player1 => &self.symbols.player1,
            Occupancy::Player2 => &self.symbols.player2,
        }
    }

    /// Symbols row by row (y), one per column (x).
    pub fn rows(&self) -> Vec<Vec<&str>> {
        let side = self.scale as usize;
        (0..side)
            .map(|y| {
                (0..side)
                    .map(|x| self.symbol_for(self.occupancy(x, y)))
                    .collect()
            })
            .collect()
    }

    /// Renderable snapshot of the board with an optional caption.
    pub fn view(&self, caption: Option<&str>) -> BoardView {
        BoardView {
            caption: caption.filter(|c| !c.is_empty()).map(String::from),
            rows: self
                .rows()
                .into_iter()
                .map(|row| row.into_iter().map(String::from).collect())
                .collect(),
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{ scale: {}, cells:", self.scale)?;
        for row in self.rows() {
            writeln!(f, "  {:?}", row)?;
        }
        write!(f, "}}")
    }
}

/// Display output of a board: caption line followed by symbol rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub caption: Option<String>,
    pub rows: Vec<Vec<String>>,
}

impl fmt::Display for BoardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(caption) = &self.caption {
            writeln!(f, "{}\n", caption)?;
        }
        for row in &self.rows {
            for symbol in row {
                write!(f, "{} ", symbol)?;
            }
            writeln!(f, "\n")?;
        }
        Ok(())
    }
}
