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

//! Tools for searching the game tree.

use std::fmt;

use crate::analysis::{Evaluation, Extrapolatable};
use crate::state::State;

/// The result of a search.
#[derive(Clone, Debug)]
pub struct Analysis<S, E> where
    S: State,
    E: Evaluation {
    /// The state on which the search was performed.
    pub state: S,
    /// The evaluation of the state, from the perspective of its side to move.
    pub evaluation: E,
    /// The principal variation of the state.
    pub principal_variation: Vec<<S as State>::Ply>,
    /// Statistics from the search.
    pub statistics: Statistics,
}

impl<S, E> Analysis<S, E> where
    S: State,
    E: Evaluation {
    /// Returns the first ply of the principal variation, i.e. the chosen ply.
    pub fn best_ply(&self) -> Option<&<S as State>::Ply> {
        self.principal_variation.first()
    }
}

/// Provides search capabilities.
pub trait Search<S> where
    S: State + Extrapolatable<<S as State>::Ply> {
    type Evaluation: Evaluation;

    /// Generates an analysis of `state`.
    ///
    /// Fails only if `state` rejects one of the plies it extrapolated.
    fn search(&mut self, state: &S) -> Result<Analysis<S, Self::Evaluation>, <S as State>::Error>;
}

impl<S, E> fmt::Display for Analysis<S, E> where
    S: State,
    E: Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "State: {}", self.state)?;
        let mut result = self.state.clone();
        if result.execute_plies(&self.principal_variation).is_ok() {
            writeln!(f, "Resultant State: {}", result)?;
            if let Some(resolution) = result.check_resolution() {
                writeln!(f, "Resolution: {:?}", resolution)?;
            }
        }
        writeln!(f, "Evaluation: {}{}", self.evaluation, if self.evaluation.is_win() {
            " (Win)"
        } else if self.evaluation.is_lose() {
            " (Lose)"
        } else {
            ""
        })?;
        write!(f, "Principal Variation:")?;
        for ply in &self.principal_variation {
            write!(f, "\n  {}", ply)?;
        }
        write!(f, "\nStatistics:\n{}", self.statistics)
    }
}

pub use self::alphabeta::AlphaBetaSearch;
pub use self::minimax::MinimaxSearch;
pub use self::statistics::Statistics;

mod alphabeta;
mod minimax;
mod statistics;
mod transposition_table;
