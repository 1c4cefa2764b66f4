//! Plain-text view of a board: `.` for unpainted cells, `α` and `β` for each
//! team's ink, one line per row.

use crate::territory::{Board, BoardSpace, Team};

pub fn space_symbol(space: &BoardSpace) -> char {
    match space {
        BoardSpace::Empty => '.',
        BoardSpace::Ink { team: Team::Alpha } => 'α',
        BoardSpace::Ink { team: Team::Beta } => 'β',
    }
}

pub fn board_to_string(board: &Board) -> String {
    board
        .get()
        .iter()
        .map(|row| {
            row.iter()
                .map(|s| space_symbol(s).to_string())
                .collect::<Vec<String>>()
                .join(" ")
        })
        .collect::<Vec<String>>()
        .join("\n")
}
