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

//! The game of tic-tac-toe.

use std::str::FromStr;

#[cfg(feature = "with_serde")]
use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::ply;

/// A `(row, column)` pair, each in `0..3`.
pub type Coordinates = (usize, usize);

/// Either X or O.  An empty cell is `None` wherever a cell is an `Option<Mark>`.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl FromStr for Mark {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Mark, ParseError> {
        match s.trim() {
            "X" | "x" => Ok(Mark::X),
            "O" | "o" => Ok(Mark::O),
            other => Err(ParseError::UnknownMark(other.to_string())),
        }
    }
}

/// The placement of a mark in an empty space.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct Ply {
    pub mark: Mark,
    pub coordinates: Coordinates,
}

impl ply::Ply for Ply { }

pub use self::board::Board;
pub use self::config::{GameMode, SessionConfig};
pub use self::position::{Evaluator, Position, Score};
pub use self::session::{Players, Session, SessionState, Tally};
pub use self::strategy::{
    choose_move, completing_move, Difficulty, HeuristicStrategy, RandomStrategy, SearchStrategy, Strategy,
};
pub use self::verdict::{evaluate, evaluate_with_line, Verdict, WinningLine, LINES};

mod board;
mod config;
mod display;
mod position;
mod session;
mod strategy;
mod verdict;
