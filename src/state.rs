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

use std::fmt::{Debug, Display};
use std::hash::Hash;

use crate::ply::Ply;

/// The state of the game.
///
/// This should represent everything that makes up a single moment of the game, i.e. in
/// tic-tac-toe, the marks on the board and the mark that moves next.
///
/// Searches mutate a single working state in place: every executed ply is reverted before
/// the search moves on to a sibling, so `revert_ply` must restore exactly the state that
/// preceded the matching `execute_ply`.
///
/// `Hash` and `Eq` allow the state to key a transposition table.
pub trait State: Clone + Display + Eq + Hash + PartialEq {
    type Ply: Ply;
    type Resolution: Debug;
    type Error: Debug + Display;

    /// Returns the number of plies executed on this state since it was created.
    fn get_ply_count(&self) -> usize;

    /// Executes a ply on the state.
    fn execute_ply(&mut self, ply: &Self::Ply) -> Result<(), Self::Error>;

    /// Reverts a ply from the state.
    fn revert_ply(&mut self, ply: &Self::Ply) -> Result<(), Self::Error>;

    /// Returns `None` if the game has not reached a conclusion.
    fn check_resolution(&self) -> Option<Self::Resolution>;

    /// Executes each ply in `plies` on the result of the previous ply.
    fn execute_plies(&mut self, plies: &[Self::Ply]) -> Result<(), Self::Error> {
        for ply in plies {
            self.execute_ply(ply)?;
        }
        Ok(())
    }
}
