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

//! Tools for analyzing a game: evaluation of states and search of the game tree.

use crate::ply::Ply;

/// Provides the possible plies from a given state.
pub trait Extrapolatable<P> where
    P: Ply {
    /// Appends the possible plies to `plies`, in the order a search should try them.
    fn extrapolate_into(&self, plies: &mut Vec<P>);

    /// Returns a list of plies that should be considered from the current state.
    fn extrapolate(&self) -> Vec<P> {
        let mut plies = Vec::new();
        self.extrapolate_into(&mut plies);
        plies
    }
}

pub use self::evaluation::Evaluation;
pub use self::evaluator::Evaluator;

#[macro_use]
mod evaluation;
mod evaluator;
pub mod search;
