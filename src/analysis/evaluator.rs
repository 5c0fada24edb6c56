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

use crate::analysis::Evaluation;
use crate::state::State;

/// Evaluates a State.
///
/// Evaluations are always from the perspective of the side to move in `state`.
pub trait Evaluator {
    type State: State;
    type Evaluation: Evaluation;

    /// Returns the evaluation of `state`.
    fn evaluate(&self, state: &Self::State) -> Self::Evaluation;

    /// Returns the evaluation of `state` after executing `plies`, from the perspective of the
    /// side to move in `state`.
    fn evaluate_plies(
        &self,
        state: &Self::State,
        plies: &[<Self::State as State>::Ply],
    ) -> Result<Self::Evaluation, <Self::State as State>::Error> {
        let mut state = state.clone();
        state.execute_plies(plies)?;
        if plies.len() % 2 == 0 {
            Ok(self.evaluate(&state))
        } else {
            Ok(-self.evaluate(&state))
        }
    }
}
