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

use log::warn;
use rand::Rng;

use crate::analysis::search::{AlphaBetaSearch, Analysis, Search, Statistics};
use crate::error::MoveError;
use crate::game::{Board, Coordinates, Evaluator, Mark, Position, Score};
use super::Strategy;

/// Perfect play by exhaustive alpha-beta search.
///
/// Among equally scored moves the first in row-major order is chosen, so the result is
/// deterministic and the random source is never consulted.
pub struct SearchStrategy {
    search: AlphaBetaSearch<Position, Evaluator>,
    last_statistics: Option<Statistics>,
}

impl SearchStrategy {
    pub fn new() -> SearchStrategy {
        SearchStrategy {
            search: AlphaBetaSearch::new(Evaluator),
            last_statistics: None,
        }
    }

    /// Limits the search to `depth` plies.  A limited search no longer guarantees perfect play.
    pub fn with_depth(depth: u8) -> SearchStrategy {
        SearchStrategy {
            search: AlphaBetaSearch::with_depth(Evaluator, depth),
            last_statistics: None,
        }
    }

    /// Searches `board` with `cpu_mark` to move.
    pub fn analyze(&mut self, board: &Board, cpu_mark: Mark) -> Result<Analysis<Position, Score>, MoveError> {
        let analysis = self.search.search(&Position::new(*board, cpu_mark))?;
        self.last_statistics = Some(analysis.statistics);
        Ok(analysis)
    }

    /// Statistics of the most recent search, if there was one.
    pub fn last_statistics(&self) -> Option<&Statistics> {
        self.last_statistics.as_ref()
    }
}

impl Default for SearchStrategy {
    fn default() -> SearchStrategy {
        SearchStrategy::new()
    }
}

impl Strategy for SearchStrategy {
    fn choose_move<R>(&mut self, board: &Board, cpu_mark: Mark, _: &mut R) -> Option<Coordinates> where
        R: Rng + ?Sized {
        let first_empty = board.empty_cells().first().cloned()?;

        match self.analyze(board, cpu_mark) {
            Ok(analysis) => match analysis.best_ply() {
                Some(ply) => Some(ply.coordinates),
                None => {
                    warn!("no line to search on a resolved board, taking {:?}", first_empty);
                    Some(first_empty)
                },
            },
            Err(error) => {
                warn!("search failed ({}), taking {:?}", error, first_empty);
                Some(first_empty)
            },
        }
    }
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board() {
        let mut strategy = SearchStrategy::new();
        let analysis = strategy.analyze(&Board::new(), Mark::X).unwrap();
        assert_eq!(analysis.evaluation, Score(0));
        assert_eq!(analysis.best_ply().unwrap().coordinates, (0, 0));
        assert!(strategy.last_statistics().unwrap().nodes() > 0);
    }

    #[test]
    fn test_avoids_corner_fork() {
        // Any corner reply lets X fork; an edge holds the draw.
        let mut rng = StdRng::seed_from_u64(31);
        let mut strategy = SearchStrategy::new();
        assert_eq!(strategy.choose_move(&board("X../.O./..X"), Mark::O, &mut rng), Some((0, 1)));
        assert_eq!(strategy.analyze(&board("X../.O./..X"), Mark::O).unwrap().evaluation, Score(0));
    }

    #[test]
    fn test_depth_limited_still_wins() {
        let mut rng = StdRng::seed_from_u64(32);
        let mut strategy = SearchStrategy::with_depth(1);
        assert_eq!(strategy.choose_move(&board("O.O/XX./X.."), Mark::O, &mut rng), Some((0, 1)));
    }

    #[test]
    fn test_resolved_board_takes_first_empty() {
        let mut rng = StdRng::seed_from_u64(33);
        let mut strategy = SearchStrategy::new();
        assert_eq!(strategy.choose_move(&board("XXX/OO./..."), Mark::O, &mut rng), Some((1, 2)));
        assert_eq!(strategy.choose_move(&board("XOX/XOO/OXX"), Mark::X, &mut rng), None);
    }

    #[test]
    fn test_prefers_quickest_win() {
        // X wins now at (0, 2) or later elsewhere; the immediate win scores highest.
        let mut strategy = SearchStrategy::new();
        let analysis = strategy.analyze(&board("XX./OO./..."), Mark::X).unwrap();
        assert_eq!(analysis.evaluation, Score(9));
        assert_eq!(analysis.principal_variation.len(), 1);
    }
}
