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

use log::trace;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::game::{evaluate, Board, Coordinates, Mark, Verdict};
use super::Strategy;

const CENTER: Coordinates = (1, 1);
const CORNERS: [Coordinates; 4] = [(0, 0), (0, 2), (2, 0), (2, 2)];

/// A fixed chain of rules, the first that applies deciding the move:
///
/// 1. complete a line for the CPU,
/// 2. block a line the opponent could complete next,
/// 3. take the center,
/// 4. take a random empty corner,
/// 5. take a random empty cell.
///
/// It looks only one ply ahead and can be beaten by a fork.
pub struct HeuristicStrategy;

impl Strategy for HeuristicStrategy {
    fn choose_move<R>(&mut self, board: &Board, cpu_mark: Mark, rng: &mut R) -> Option<Coordinates> where
        R: Rng + ?Sized {
        let empty = board.empty_cells();
        if empty.is_empty() {
            return None;
        }

        if let Some(coordinates) = completing_move(board, cpu_mark) {
            trace!("{} completes a line at {:?}", cpu_mark, coordinates);
            return Some(coordinates);
        }

        let player_mark = cpu_mark.opponent();
        if let Some(coordinates) = completing_move(board, player_mark) {
            trace!("{} blocks {} at {:?}", cpu_mark, player_mark, coordinates);
            return Some(coordinates);
        }

        if board.is_empty(CENTER.0, CENTER.1) {
            trace!("{} takes the center", cpu_mark);
            return Some(CENTER);
        }

        let corners = CORNERS.iter()
            .cloned()
            .filter(|&(row, col)| board.is_empty(row, col))
            .collect::<Vec<_>>();
        if let Some(&corner) = corners.choose(rng) {
            trace!("{} takes corner {:?}", cpu_mark, corner);
            return Some(corner);
        }

        empty.choose(rng).cloned()
    }
}

/// Returns the first empty cell, in row-major order, where placing `mark` would win.
pub fn completing_move(board: &Board, mark: Mark) -> Option<Coordinates> {
    board.empty_cells().into_iter().find(|&(row, col)| {
        let mut hypothetical = *board;
        hypothetical.apply_move(row, col, mark).is_ok() && evaluate(&hypothetical) == Verdict::Win(mark)
    })
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_completing_move() {
        assert_eq!(completing_move(&board("X.X/O../O.."), Mark::X), Some((0, 1)));
        assert_eq!(completing_move(&board("X.X/O../O.."), Mark::O), None);
        assert_eq!(completing_move(&board("X../.X./O.O"), Mark::O), Some((2, 1)));
        assert_eq!(completing_move(&board("X../.../..."), Mark::X), None);
    }

    #[test]
    fn test_takes_center() {
        let mut rng = StdRng::seed_from_u64(21);
        assert_eq!(HeuristicStrategy.choose_move(&board("X../.../..."), Mark::O, &mut rng), Some(CENTER));
        assert_eq!(HeuristicStrategy.choose_move(&Board::new(), Mark::X, &mut rng), Some(CENTER));
    }

    #[test]
    fn test_takes_random_empty_corner() {
        let b = board("O../.X./...");
        let mut seen = HashSet::new();
        for seed in 0..64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let choice = HeuristicStrategy.choose_move(&b, Mark::O, &mut rng).unwrap();
            assert!(CORNERS.contains(&choice) && choice != (0, 0));
            seen.insert(choice);
        }
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_falls_back_to_any_empty_cell() {
        let mut rng = StdRng::seed_from_u64(22);
        let b = board("XXO/OOX/X.O");
        assert_eq!(HeuristicStrategy.choose_move(&b, Mark::X, &mut rng), Some((2, 1)));
        assert_eq!(HeuristicStrategy.choose_move(&b, Mark::O, &mut rng), Some((2, 1)));
    }

    #[test]
    fn test_loses_to_a_fork() {
        // X in opposite corners, O in the center: the rules pick a corner, which X forks.
        let mut rng = StdRng::seed_from_u64(23);
        let choice = HeuristicStrategy.choose_move(&board("X../.O./..X"), Mark::O, &mut rng).unwrap();
        assert!(choice == (0, 2) || choice == (2, 0));
    }
}
