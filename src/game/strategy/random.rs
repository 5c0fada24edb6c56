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

use rand::Rng;
use rand::seq::SliceRandom;

use crate::game::{Board, Coordinates, Mark};
use super::Strategy;

/// Picks uniformly among the empty cells.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn choose_move<R>(&mut self, board: &Board, _: Mark, rng: &mut R) -> Option<Coordinates> where
        R: Rng + ?Sized {
        board.empty_cells().choose(rng).cloned()
    }
}
