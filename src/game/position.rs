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

use crate::analysis::{self, Evaluation as EvaluationTrait};
use crate::error::MoveError;
use crate::game::{evaluate, Board, Mark, Ply, Verdict};
use crate::state;

/// A board together with the mark to move and the number of plies played since the
/// position was created.
///
/// This is the state the searches work on.  The side to move is explicit rather than
/// derived from the mark counts, so a position can be built for either mark on any board.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Position {
    board: Board,
    next: Mark,
    plies: u8,
}

impl Position {
    pub fn new(board: Board, next: Mark) -> Position {
        Position {
            board,
            next,
            plies: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that will make the next move.
    pub fn next_mark(&self) -> Mark {
        self.next
    }
}

impl state::State for Position {
    type Ply = Ply;
    type Resolution = Verdict;
    type Error = MoveError;

    fn get_ply_count(&self) -> usize {
        self.plies as usize
    }

    fn execute_ply(&mut self, ply: &Ply) -> Result<(), MoveError> {
        if ply.mark != self.next {
            return Err(MoveError::WrongTurn {
                expected: self.next,
                actual: ply.mark,
            });
        }

        let (row, col) = ply.coordinates;
        self.board.apply_move(row, col, ply.mark)?;
        self.next = self.next.opponent();
        self.plies += 1;
        Ok(())
    }

    fn revert_ply(&mut self, ply: &Ply) -> Result<(), MoveError> {
        let (row, col) = ply.coordinates;

        match self.board.take(row, col)? {
            Some(mark) if mark == ply.mark => {
                self.next = ply.mark;
                self.plies = self.plies.saturating_sub(1);
                Ok(())
            },
            previous => {
                if let Some(mark) = previous {
                    self.board.apply_move(row, col, mark)?;
                }
                Err(MoveError::NotPlaced {
                    row,
                    col,
                    mark: ply.mark,
                })
            },
        }
    }

    fn check_resolution(&self) -> Option<Verdict> {
        match evaluate(&self.board) {
            Verdict::InProgress => None,
            verdict => Some(verdict),
        }
    }
}

impl analysis::Extrapolatable<Ply> for Position {
    fn extrapolate_into(&self, plies: &mut Vec<Ply>) {
        let next_mark = self.next;
        let mut cells = Vec::with_capacity(9);
        self.board.empty_cells_into(&mut cells);
        plies.extend(cells.into_iter().map(|coordinates| Ply {
            mark: next_mark,
            coordinates,
        }));
    }
}

/// A position's score for the side to move.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd)]
pub struct Score(pub i8);

crate::prepare_evaluation_tuple!(Score); // Implements arithmetic operators and display in terms of the inner type

impl analysis::Evaluation for Score {
    fn null() -> Score { Score(0) }
    fn shift(self, steps: i32) -> Score { Score(self.0 + steps as i8) }
    fn win() -> Score { Score(10) }
    fn max() -> Score { Score(i8::MAX) }
    fn is_win(&self) -> bool { self.0 > 0 }
}

/// Scores resolved positions only.
///
/// A completed line is worth `10 - plies` to the side that completed it, so quicker wins
/// and slower losses are preferred.  Everything else, draws included, is worth nothing.
pub struct Evaluator;

impl analysis::Evaluator for Evaluator {
    type State = Position;
    type Evaluation = Score;

    fn evaluate(&self, state: &Position) -> Score {
        match evaluate(&state.board) {
            Verdict::Win(mark) => {
                let score = Score::win().shift(-(state.plies as i32));
                if mark == state.next {
                    score
                } else {
                    -score
                }
            },
            _ => Score::null(),
        }
    }
}
