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

//! Exhaustive minimax without pruning

use log::debug;

use crate::analysis::{Evaluation, Evaluator, Extrapolatable};
use crate::analysis::search::{Analysis, Search, Statistics};
use crate::state::State;

use super::transposition_table::TranspositionTable;

/// A plain negamax search that examines every reply at every node.
///
/// Exact values are memoized in a transposition table for the duration of one search, so
/// the cost is bounded by the number of distinct states rather than the size of the tree.
/// Ties between plies resolve to the first one extrapolated, exactly as in
/// [`AlphaBetaSearch`](struct.AlphaBetaSearch.html), which makes this the reference the
/// pruned search is checked against.
///
/// The state's `Hash` must cover everything the evaluator depends on.
pub struct MinimaxSearch<S, E> where
    S: State + Extrapolatable<<S as State>::Ply>,
    E: Evaluator<State = S> {
    evaluator: E,
    transposition_table: TranspositionTable<S, <E as Evaluator>::Evaluation>,
}

impl<S, E> MinimaxSearch<S, E> where
    S: State + Extrapolatable<<S as State>::Ply>,
    E: Evaluator<State = S> {
    pub fn new(evaluator: E) -> MinimaxSearch<S, E> {
        MinimaxSearch {
            evaluator,
            transposition_table: TranspositionTable::new(),
        }
    }

    fn minimax(
        &mut self,
        state: &mut S,
        stats: &mut Statistics,
    ) -> Result<<E as Evaluator>::Evaluation, <S as State>::Error> {
        if let Some(value) = self.transposition_table.get(state) {
            stats.tt_hits += 1;
            return Ok(value);
        }

        if state.check_resolution().is_some() {
            stats.evaluated += 1;
            return Ok(self.evaluator.evaluate(state));
        }

        let plies = state.extrapolate();
        if plies.is_empty() {
            stats.evaluated += 1;
            return Ok(self.evaluator.evaluate(state));
        }

        stats.visited += 1;

        let mut best = <E as Evaluator>::Evaluation::min();
        for ply in plies {
            state.execute_ply(&ply)?;
            let next_eval = -self.minimax(state, stats)?;
            state.revert_ply(&ply)?;

            if next_eval > best {
                best = next_eval;
            }
        }

        self.transposition_table.insert(state.clone(), best);
        stats.tt_stores += 1;

        Ok(best)
    }

    /// Follows the first optimal reply from each state until the game resolves.
    fn principal_variation(
        &mut self,
        state: &mut S,
        mut value: <E as Evaluator>::Evaluation,
        stats: &mut Statistics,
    ) -> Result<Vec<<S as State>::Ply>, <S as State>::Error> {
        let mut principal_variation = Vec::new();

        while state.check_resolution().is_none() {
            let mut chosen = None;

            for ply in state.extrapolate() {
                state.execute_ply(&ply)?;
                let next_value = self.minimax(state, stats)?;
                if -next_value == value {
                    chosen = Some((ply, next_value));
                    break;
                }
                state.revert_ply(&ply)?;
            }

            match chosen {
                Some((ply, next_value)) => {
                    principal_variation.push(ply);
                    value = next_value;
                },
                None => break,
            }
        }

        Ok(principal_variation)
    }
}

impl<S, E> Search<S> for MinimaxSearch<S, E> where
    S: State + Extrapolatable<<S as State>::Ply>,
    E: Evaluator<State = S> {
    type Evaluation = <E as Evaluator>::Evaluation;

    fn search(&mut self, state: &S) -> Result<Analysis<S, Self::Evaluation>, <S as State>::Error> {
        self.transposition_table.clear();

        let mut working = state.clone();
        let mut statistics = Statistics::new();

        let evaluation = self.minimax(&mut working, &mut statistics)?;
        let principal_variation = self.principal_variation(&mut working, evaluation, &mut statistics)?;

        debug!(
            "minimax search: evaluation {} over {} plies, {} distinct states stored",
            evaluation, principal_variation.len(), self.transposition_table.len(),
        );

        Ok(Analysis {
            state: state.clone(),
            evaluation,
            principal_variation,
            statistics,
        })
    }
}
