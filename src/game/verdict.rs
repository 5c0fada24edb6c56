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

#[cfg(feature = "with_serde")]
use serde::{Deserialize, Serialize};

use crate::game::{Board, Coordinates, Mark};

/// The state of play on a board.  `Win` and `Draw` are terminal.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
pub enum Verdict {
    InProgress,
    Win(Mark),
    Draw,
}

impl Verdict {
    /// Returns `true` for `Win` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        *self != Verdict::InProgress
    }

    /// Returns the winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        if let Verdict::Win(mark) = *self { Some(mark) } else { None }
    }
}

/// The three cells of a completed row, column, or diagonal.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct WinningLine(pub [Coordinates; 3]);

impl WinningLine {
    pub fn cells(&self) -> &[Coordinates; 3] {
        &self.0
    }

    /// The endpoints of the line, e.g. for drawing a stroke through it.
    pub fn ends(&self) -> (Coordinates, Coordinates) {
        (self.0[0], self.0[2])
    }
}

/// Every line on the board: rows, then columns, then the two diagonals.
pub const LINES: [[Coordinates; 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Returns the verdict for `board`.
///
/// Works on any board, reachable by legal play or not.
pub fn evaluate(board: &Board) -> Verdict {
    evaluate_with_line(board).0
}

/// Returns the verdict for `board`, with the completed line when the verdict is a win.
///
/// Lines are checked in the order of [`LINES`](constant.LINES.html) and the first complete
/// one is reported.
pub fn evaluate_with_line(board: &Board) -> (Verdict, Option<WinningLine>) {
    let complete = LINES.iter().find_map(|line| {
        let [a, b, c] = *line;
        match board.get(a.0, a.1) {
            Some(mark) if board.get(b.0, b.1) == Some(mark) && board.get(c.0, c.1) == Some(mark) => {
                Some((mark, WinningLine(*line)))
            },
            _ => None,
        }
    });

    if let Some((mark, line)) = complete {
        (Verdict::Win(mark), Some(line))
    } else if board.is_full() {
        (Verdict::Draw, None)
    } else {
        (Verdict::InProgress, None)
    }
}
