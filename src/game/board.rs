//
// This file is part of tictactoe.
//
// tictactoe is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// tictactoe is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with tictactoe. If not, see <http://www.gnu.org/licenses/>.
//
// Copyright 2016-2017 Chris Foster
//

use std::str::FromStr;

#[cfg(feature = "with_serde")]
use serde::{Deserialize, Serialize};

use crate::error::{MoveError, ParseError};
use crate::game::{Coordinates, Mark};

/// The 3x3 game board, stored row-major.
///
/// The board is `Copy`; strategies explore hypothetical moves on copies and never touch
/// the board they were handed.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
pub struct Board([Option<Mark>; 9]);

impl Board {
    /// Creates an empty board.
    pub fn new() -> Board {
        Board([None; 9])
    }

    /// Places `mark` at `(row, col)`.
    pub fn apply_move(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), MoveError> {
        let index = index(row, col)?;

        if self.0[index].is_some() {
            return Err(MoveError::CellOccupied { row, col });
        }

        self.0[index] = Some(mark);
        Ok(())
    }

    /// Empties `(row, col)`, returning what it held.
    pub fn take(&mut self, row: usize, col: usize) -> Result<Option<Mark>, MoveError> {
        let index = index(row, col)?;
        Ok(self.0[index].take())
    }

    /// Returns the mark at `(row, col)`, or `None` if the cell is empty or off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        index(row, col).ok().and_then(|index| self.0[index])
    }

    /// Returns `true` if `(row, col)` is on the board and empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        index(row, col).map(|index| self.0[index].is_none()).unwrap_or(false)
    }

    /// Returns the empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Coordinates> {
        let mut cells = Vec::with_capacity(9);
        self.empty_cells_into(&mut cells);
        cells
    }

    /// Appends the empty cells to `cells` in row-major order.
    pub fn empty_cells_into(&self, cells: &mut Vec<Coordinates>) {
        cells.extend(self.0.iter().enumerate().filter_map(|(index, space)| if space.is_none() {
            Some((index / 3, index % 3))
        } else {
            None
        }));
    }

    /// Returns `true` if no cell is empty.
    pub fn is_full(&self) -> bool {
        self.0.iter().all(|space| space.is_some())
    }

    /// Returns the number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&space| space == Some(mark)).count()
    }

    /// Returns the cells in row-major order.
    pub fn cells(&self) -> &[Option<Mark>; 9] {
        &self.0
    }
}

fn index(row: usize, col: usize) -> Result<usize, MoveError> {
    if row >= 3 || col >= 3 {
        Err(MoveError::OutOfRange { row, col })
    } else {
        Ok(row * 3 + col)
    }
}

/// Parses nine cells in row-major order.  `X` and `O` (either case) are marks; `.`, `_`,
/// `-`, and space are empty.  `/` and line breaks may separate rows and are ignored.
///
/// ```rust
/// # use tictactoe::game::{Board, Mark};
/// let board = "XX./.O./...".parse::<Board>().unwrap();
/// assert_eq!(board.get(0, 1), Some(Mark::X));
/// assert_eq!(board.get(1, 1), Some(Mark::O));
/// ```
impl FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Board, ParseError> {
        let mut cells = Vec::with_capacity(9);

        for character in s.chars().filter(|&c| c != '/' && c != '\n' && c != '\r') {
            let space = match character {
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' => Some(Mark::O),
                '.' | '_' | '-' | ' ' => None,
                _ => return Err(ParseError::InvalidCell {
                    character,
                    position: cells.len(),
                }),
            };
            cells.push(space);
        }

        if cells.len() != 9 {
            return Err(ParseError::BoardLength {
                expected: 9,
                got: cells.len(),
            });
        }

        let mut board = Board::new();
        board.0.copy_from_slice(&cells);
        Ok(board)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_apply_move() {
        let mut board = Board::new();
        assert_eq!(board.apply_move(1, 2, Mark::X), Ok(()));
        assert_eq!(board.get(1, 2), Some(Mark::X));
        assert!(!board.is_empty(1, 2));
        assert_eq!(board.count(Mark::X), 1);
    }

    #[test]
    fn test_apply_move_rejections_leave_board_untouched() {
        let mut board = Board::new();
        board.apply_move(0, 0, Mark::X).unwrap();
        let before = board;

        assert_eq!(board.apply_move(0, 0, Mark::O), Err(MoveError::CellOccupied { row: 0, col: 0 }));
        assert_eq!(board.apply_move(3, 0, Mark::O), Err(MoveError::OutOfRange { row: 3, col: 0 }));
        assert_eq!(board.apply_move(0, 7, Mark::O), Err(MoveError::OutOfRange { row: 0, col: 7 }));
        assert_eq!(board, before);
    }

    #[test]
    fn test_empty_cells_row_major() {
        let board = "X.O/.X./O..".parse::<Board>().unwrap();
        assert_eq!(board.empty_cells(), vec![(0, 1), (1, 0), (1, 2), (2, 1), (2, 2)]);
        assert_eq!(Board::new().empty_cells().len(), 9);
        assert_eq!(Board::new().empty_cells()[0], (0, 0));
        assert_eq!(Board::new().empty_cells()[8], (2, 2));
    }

    #[test]
    fn test_copies_are_independent() {
        let board = Board::new();
        let mut copy = board;
        copy.apply_move(1, 1, Mark::O).unwrap();
        assert!(board.is_empty(1, 1));
        assert!(!copy.is_empty(1, 1));
    }

    #[test]
    fn test_take() {
        let mut board = "X../.../...".parse::<Board>().unwrap();
        assert_eq!(board.take(0, 0), Ok(Some(Mark::X)));
        assert_eq!(board.take(0, 0), Ok(None));
        assert_eq!(board, Board::new());
        assert_eq!(board.take(0, 3), Err(MoveError::OutOfRange { row: 0, col: 3 }));
    }

    #[test]
    fn test_out_of_range_queries() {
        let board = Board::new();
        assert!(!board.is_empty(3, 3));
        assert_eq!(board.get(5, 0), None);
    }

    #[test]
    fn test_parse() {
        let board = "xo_\n -O\nX X".parse::<Board>().unwrap();
        assert_eq!(board.cells(), &[
            Some(Mark::X), Some(Mark::O), None,
            None, None, Some(Mark::O),
            Some(Mark::X), None, Some(Mark::X),
        ]);
        assert!("XXXXXXXXX".parse::<Board>().unwrap().is_full());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("XO".parse::<Board>(), Err(ParseError::BoardLength { expected: 9, got: 2 }));
        assert_eq!("XO./..?/...".parse::<Board>(), Err(ParseError::InvalidCell { character: '?', position: 5 }));
    }
}
