use serde::{Deserialize, Serialize};

/// A movement card: a single step in one of the eight compass directions.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Card {
    Down,
    Up,
    Right,
    Left,
    DownRight,
    DownLeft,
    UpRight,
    UpLeft,
}

impl Card {
    pub const ALL: [Card; 8] = [
        Card::Down,
        Card::Up,
        Card::Right,
        Card::Left,
        Card::DownRight,
        Card::DownLeft,
        Card::UpRight,
        Card::UpLeft,
    ];

    // (row offset, col offset); rows grow downwards
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Card::Down => (1, 0),
            Card::Up => (-1, 0),
            Card::Right => (0, 1),
            Card::Left => (0, -1),
            Card::DownRight => (1, 1),
            Card::DownLeft => (1, -1),
            Card::UpRight => (-1, 1),
            Card::UpLeft => (-1, -1),
        }
    }

    pub fn from_offset(d_row: i32, d_col: i32) -> Option<Card> {
        Card::ALL
            .iter()
            .copied()
            .find(|card| card.offset() == (d_row, d_col))
    }
}
