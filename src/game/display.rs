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

use std::fmt;

use crate::game::{Board, Difficulty, Mark, Ply, Position, Tally, Verdict, WinningLine};

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            Mark::X => "X",
            Mark::O => "O",
        })
    }
}

// Coordinates are shown 1-based, as a player would count them.
impl fmt::Display for Ply {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {:?}", self.mark, (self.coordinates.0 + 1, self.coordinates.1 + 1))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\n   1  2  3")?;
        for row in 0..3 {
            write!(f, "\n{} ", row + 1)?;
            for col in 0..3 {
                match self.get(row, col) {
                    Some(mark) => write!(f, "[{}]", mark)?,
                    None => write!(f, "[ ]")?,
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\n{} to move", self.board(), self.next_mark())
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Verdict::InProgress => write!(f, "In progress"),
            Verdict::Win(mark) => write!(f, "{} wins", mark),
            Verdict::Draw => write!(f, "Draw"),
        }
    }
}

impl fmt::Display for WinningLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let cells = self.cells().iter()
            .map(|&(row, col)| format!("({}, {})", row + 1, col + 1))
            .collect::<Vec<_>>();
        write!(f, "{}", cells.join(" "))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        })
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "X: {}  O: {}  Draws: {}", self.x_wins, self.o_wins, self.draws)
    }
}
