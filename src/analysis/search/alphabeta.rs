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

//! Minimax with alpha-beta pruning

use log::debug;

use crate::analysis::{Evaluation, Evaluator, Extrapolatable};
use crate::analysis::search::{Analysis, Search, Statistics};
use crate::state::State;

/// A negamax search with fail-hard alpha-beta pruning.
///
/// Plies are tried in the order `Extrapolatable` yields them, and a ply only replaces the
/// current best when it scores strictly better, so among equally good plies the first one
/// wins.  Pruning never changes the evaluation or the chosen ply, only the number of nodes
/// visited.
///
/// # Example
///
/// ```rust
/// # use tictactoe::analysis::search::{AlphaBetaSearch, Search};
/// # use tictactoe::game::{Board, Evaluator, Mark, Position};
/// let board = "XX./OO./...".parse::<Board>().unwrap();
/// let position = Position::new(board, Mark::X);
///
/// let mut search = AlphaBetaSearch::new(Evaluator);
/// let analysis = search.search(&position).unwrap();
/// assert_eq!(analysis.best_ply().unwrap().coordinates, (0, 2));
/// ```
pub struct AlphaBetaSearch<S, E> where
    S: State + Extrapolatable<<S as State>::Ply>,
    E: Evaluator<State = S> {
    depth: u8,
    evaluator: E,
}

impl<S, E> AlphaBetaSearch<S, E> where
    S: State + Extrapolatable<<S as State>::Ply>,
    E: Evaluator<State = S> {
    /// Creates an `AlphaBetaSearch` without a depth limit.  It will search every line
    /// to its resolution.
    pub fn new(evaluator: E) -> AlphaBetaSearch<S, E> {
        AlphaBetaSearch {
            depth: 0,
            evaluator,
        }
    }

    /// Creates an `AlphaBetaSearch` that will search to a maximum depth of `depth`.
    pub fn with_depth(evaluator: E, depth: u8) -> AlphaBetaSearch<S, E> {
        let mut search = AlphaBetaSearch::new(evaluator);
        search.depth = depth;
        search
    }

    fn minimax(
        &self,
        state: &mut S,
        principal_variation: &mut Vec<<S as State>::Ply>,
        depth: u8,
        mut alpha: <E as Evaluator>::Evaluation,
        beta: <E as Evaluator>::Evaluation,
        stats: &mut Statistics,
    ) -> Result<<E as Evaluator>::Evaluation, <S as State>::Error> {
        principal_variation.clear();

        if depth == 0 || state.check_resolution().is_some() {
            stats.evaluated += 1;
            return Ok(self.evaluator.evaluate(state));
        }

        let plies = state.extrapolate();
        if plies.is_empty() {
            stats.evaluated += 1;
            return Ok(self.evaluator.evaluate(state));
        }

        stats.visited += 1;

        let mut next_principal_variation = Vec::new();

        for ply in plies {
            state.execute_ply(&ply)?;
            let next_eval = -self.minimax(
                state, &mut next_principal_variation, depth - 1,
                -beta, -alpha,
                stats,
            )?;
            state.revert_ply(&ply)?;

            if next_eval > alpha {
                alpha = next_eval;

                principal_variation.clear();
                principal_variation.push(ply);
                principal_variation.extend_from_slice(&next_principal_variation);
            }

            if beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }

        Ok(alpha)
    }
}

impl<S, E> Search<S> for AlphaBetaSearch<S, E> where
    S: State + Extrapolatable<<S as State>::Ply>,
    E: Evaluator<State = S> {
    type Evaluation = <E as Evaluator>::Evaluation;

    fn search(&mut self, state: &S) -> Result<Analysis<S, Self::Evaluation>, <S as State>::Error> {
        let max_depth = if self.depth == 0 {
            u8::MAX - 1
        } else {
            self.depth
        };

        let mut working = state.clone();
        let mut principal_variation = Vec::new();
        let mut statistics = Statistics::new();

        let evaluation = self.minimax(
            &mut working,
            &mut principal_variation,
            max_depth,
            <E as Evaluator>::Evaluation::min(), <E as Evaluator>::Evaluation::max(),
            &mut statistics,
        )?;

        debug!(
            "alpha-beta search: evaluation {} over {} plies, {} visited, {} evaluated, {} cutoffs",
            evaluation, principal_variation.len(), statistics.visited, statistics.evaluated, statistics.cutoffs,
        );

        Ok(Analysis {
            state: state.clone(),
            evaluation,
            principal_variation,
            statistics,
        })
    }
}

#[cfg(test)]
mod test {
    use crate::analysis::search::Search;
    use crate::game::{Board, Evaluator, Mark, Position, Score};
    use super::*;

    fn position(s: &str, next: Mark) -> Position {
        Position::new(s.parse::<Board>().unwrap(), next)
    }

    #[test]
    fn test_forced_loss() {
        // O to move cannot cover both of X's threats.
        let mut search = AlphaBetaSearch::new(Evaluator);
        let analysis = search.search(&position("XX./.O./X..", Mark::O)).unwrap();
        assert_eq!(analysis.evaluation, Score(-8));
        assert!(analysis.evaluation.is_lose());
    }

    #[test]
    fn test_depth_limit() {
        // One ply deep, the fork three plies away is invisible.
        let mut search = AlphaBetaSearch::with_depth(Evaluator, 1);
        let analysis = search.search(&position("X../.O./..X", Mark::O)).unwrap();
        assert_eq!(analysis.evaluation, Score(0));
        assert_eq!(analysis.best_ply().unwrap().coordinates, (0, 1));
        assert_eq!(analysis.principal_variation.len(), 1);
    }

    #[test]
    fn test_resolved_state() {
        let mut search = AlphaBetaSearch::new(Evaluator);
        let analysis = search.search(&position("XOX/XOO/OXX", Mark::O)).unwrap();
        assert_eq!(analysis.evaluation, Score(0));
        assert!(analysis.best_ply().is_none());
        assert_eq!(analysis.statistics.evaluated, 1);
    }

    #[test]
    fn test_display() {
        let mut search = AlphaBetaSearch::new(Evaluator);
        let printed = search.search(&position("XX./OO./...", Mark::X)).unwrap().to_string();
        assert!(printed.contains("Resolution: Win(X)"));
        assert!(printed.contains("Evaluation: 9 (Win)"));
        assert!(printed.contains("  X, (1, 3)"));
    }
}
