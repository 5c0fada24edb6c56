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

//! Error types.

use thiserror::Error;

use crate::game::Mark;

/// Why a move was rejected.  Every variant is recoverable; the board and session are left
/// untouched.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum MoveError {
    #[error("coordinates ({row}, {col}) are out of range (must be 0-2)")]
    OutOfRange { row: usize, col: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("it is {expected}'s turn, not {actual}'s")]
    WrongTurn { expected: Mark, actual: Mark },

    #[error("the game is already over")]
    GameOver,

    /// Raised when reverting a ply whose cell does not hold the ply's mark.
    #[error("cell ({row}, {col}) does not hold {mark}")]
    NotPlaced { row: usize, col: usize, mark: Mark },
}

/// Errors from parsing boards, marks, and difficulties from text.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ParseError {
    #[error("expected {expected} cells, got {got}")]
    BoardLength { expected: usize, got: usize },

    #[error("invalid character '{character}' for cell {position}")]
    InvalidCell { character: char, position: usize },

    #[error("unknown difficulty '{0}' (expected easy, medium, or hard)")]
    UnknownDifficulty(String),

    #[error("unknown mark '{0}' (expected X or O)")]
    UnknownMark(String),
}
