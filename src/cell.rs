//! A single board position.

use crate::player::Player;

/// Occupancy state of a cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Occupancy {
    #[default]
    Vacant,
    Player1,
    Player2,
}

impl Occupancy {
    /// The player holding this cell, if any.
    pub fn holder(self) -> Option<Player> {
        match self {
            Occupancy::Vacant => None,
            Occupancy::Player1 => Some(Player::One),
            Occupancy::Player2 => Some(Player::Two),
        }
    }
}

impl From<Player> for Occupancy {
    fn from(player: Player) -> Self {
        match player {
            Player::One => Occupancy::Player1,
            Player::Two => Occupancy::Player2,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    occupancy: Occupancy,
}

impl Cell {
    pub fn new(occupancy: Occupancy) -> Self {
        Self { occupancy }
    }

    pub fn occupancy(&self) -> Occupancy {
        self.occupancy
    }

    pub fn set_occupancy(&mut self, occupancy: Occupancy) {
        self.occupancy = occupancy;
    }

    pub fn is_vacant(&self) -> bool {
        self.occupancy == Occupancy::Vacant
    }
}
