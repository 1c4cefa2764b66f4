use crate::territory::card::Card;
use crate::territory::player::Team;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Width(usize),
    Height(usize),
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Width(w) => write!(f, "width {}", w),
            Dimension::Height(h) => write!(f, "height {}", h),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("Board with no rows given")]
    NoRows,
    #[error("Board contains empty rows")]
    EmptyRows,
    #[error("Not all board rows have the same length")]
    MismatchedRowLengths,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coordinate {
    Row,
    Col,
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coordinate::Row => write!(f, "row"),
            Coordinate::Col => write!(f, "col"),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardPositionError {
    #[error("{0} coordinate {1} exceeds board {2}")]
    OutOfBounds(Coordinate, usize, Dimension),
    #[error("{0} coordinate {1} could not be converted from usize to i32")]
    CoordinateToInt(Coordinate, usize),
    #[error("Final {coordinate} coordinate with base {base} and offset {offset} overflowed")]
    Overflow {
        coordinate: Coordinate,
        base: i32,
        offset: i32,
    },
    #[error("{0} coordinate {1} falls off the board")]
    Negative(Coordinate, i32),
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum BoardSpace {
    Empty,
    Ink { team: Team },
}

impl BoardSpace {
    pub fn is_ink(&self, team: Team) -> bool {
        matches!(self, BoardSpace::Ink { team: t } if *t == team)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, BoardSpace::Empty)
    }
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoardPosition(usize, usize);

impl BoardPosition {
    // Ensure that the given position meets the following criteria:
    // - row does not exceed the board height
    // - col does not exceed the board width
    pub fn new(board: &Board, row: usize, col: usize) -> Result<Self, BoardPositionError> {
        let height = board.height();
        let width = board.width();
        if row >= height {
            return Err(BoardPositionError::OutOfBounds(
                Coordinate::Row,
                row,
                Dimension::Height(height),
            ));
        }
        if col >= width {
            return Err(BoardPositionError::OutOfBounds(
                Coordinate::Col,
                col,
                Dimension::Width(width),
            ));
        }
        Ok(BoardPosition(row, col))
    }

    pub fn row(&self) -> usize {
        self.0
    }

    pub fn col(&self) -> usize {
        self.1
    }
}

impl fmt::Display for BoardPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

// Rows are stored top to bottom; every row has the same length
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Board(Vec<Vec<BoardSpace>>);

impl Board {
    // Ensure that the given board meets the following criteria:
    // - board contains at least one row
    // - rows contain at least one space
    // - all rows are the same length
    pub fn new(spaces: Vec<Vec<BoardSpace>>) -> Result<Self, BoardError> {
        let row_len = match spaces.first() {
            None => return Err(BoardError::NoRows),
            Some(row) if row.is_empty() => return Err(BoardError::EmptyRows),
            Some(row) => row.len(),
        };
        if spaces.iter().any(|row| row.len() != row_len) {
            return Err(BoardError::MismatchedRowLengths);
        }
        Ok(Board(spaces))
    }

    pub fn empty(height: usize, width: usize) -> Result<Self, BoardError> {
        Board::new(vec![vec![BoardSpace::Empty; width]; height])
    }

    pub fn height(&self) -> usize {
        self.0.len()
    }

    pub fn width(&self) -> usize {
        self.0[0].len()
    }

    pub fn total_spaces(&self) -> usize {
        self.height() * self.width()
    }

    pub fn get(&self) -> &Vec<Vec<BoardSpace>> {
        &self.0
    }

    pub fn space(&self, pos: BoardPosition) -> BoardSpace {
        self.0[pos.row()][pos.col()]
    }

    // Last writer wins; whatever ink was there is lost
    pub fn set_ink(&mut self, pos: BoardPosition, team: Team) {
        self.0[pos.row()][pos.col()] = BoardSpace::Ink { team };
    }

    pub fn count_inked_spaces(&self, team: Team) -> u32 {
        self.0.iter().fold(0, |acc, row| {
            acc + row.iter().filter(|s| s.is_ink(team)).count() as u32
        })
    }

    pub fn is_fully_inked(&self) -> bool {
        self.0.iter().flatten().all(|s| !s.is_empty())
    }

    // Calculate the board position reached by moving one card's offset from `from`
    pub fn get_absolute_position(
        &self,
        from: BoardPosition,
        card: Card,
    ) -> Result<BoardPosition, BoardPositionError> {
        let (d_row, d_col) = card.offset();
        let row = offset_coordinate(Coordinate::Row, from.row(), d_row)?;
        let col = offset_coordinate(Coordinate::Col, from.col(), d_col)?;
        BoardPosition::new(self, row, col)
    }
}

fn offset_coordinate(
    coordinate: Coordinate,
    base: usize,
    offset: i32,
) -> Result<usize, BoardPositionError> {
    let base: i32 = base
        .try_into()
        .map_err(|_| BoardPositionError::CoordinateToInt(coordinate, base))?;
    let moved = i32::checked_add(base, offset).ok_or(BoardPositionError::Overflow {
        coordinate,
        base,
        offset,
    })?;
    usize::try_from(moved).map_err(|_| BoardPositionError::Negative(coordinate, moved))
}
