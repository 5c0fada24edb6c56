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

//! CPU move selection.

use std::str::FromStr;

use log::debug;
use rand::Rng;
#[cfg(feature = "with_serde")]
use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::game::{Board, Coordinates, Mark};

/// How hard the CPU plays.
///
/// Each tier is a different guarantee, not just a different speed: `Easy` plays any legal
/// move, `Medium` follows a fixed rule chain that perfect play can beat, and `Hard`
/// searches the whole game tree and never loses.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "with_serde", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    #[cfg_attr(feature = "with_serde", serde(alias = "impossible"))]
    Hard,
}

impl FromStr for Difficulty {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Difficulty, ParseError> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" | "impossible" => Ok(Difficulty::Hard),
            _ => Err(ParseError::UnknownDifficulty(s.trim().to_string())),
        }
    }
}

/// Chooses a move for the CPU.
pub trait Strategy {
    /// Returns the cell `cpu_mark` should be placed in, or `None` if `board` has no empty
    /// cell.  `board` is only read.
    ///
    /// `board` should not be resolved already; what a strategy returns for a won board is
    /// unspecified beyond being an empty cell.
    fn choose_move<R>(&mut self, board: &Board, cpu_mark: Mark, rng: &mut R) -> Option<Coordinates> where
        R: Rng + ?Sized;
}

/// Chooses a move for `cpu_mark` with the strategy `difficulty` calls for.
///
/// Returns `None` only when `board` has no empty cell.
pub fn choose_move<R>(board: &Board, difficulty: Difficulty, cpu_mark: Mark, rng: &mut R) -> Option<Coordinates> where
    R: Rng + ?Sized {
    let choice = match difficulty {
        Difficulty::Easy => RandomStrategy.choose_move(board, cpu_mark, rng),
        Difficulty::Medium => HeuristicStrategy.choose_move(board, cpu_mark, rng),
        Difficulty::Hard => SearchStrategy::new().choose_move(board, cpu_mark, rng),
    };

    debug!("{} CPU playing {} chooses {:?}", difficulty, cpu_mark, choice);
    choice
}

pub use self::heuristic::{completing_move, HeuristicStrategy};
pub use self::random::RandomStrategy;
pub use self::search::SearchStrategy;

mod heuristic;
mod random;
mod search;

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::game::{evaluate, Verdict};
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_difficulty() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!(" Medium".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!("impossible".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!("expert".parse::<Difficulty>(), Err(ParseError::UnknownDifficulty("expert".to_string())));
    }

    #[test]
    fn test_no_move_on_full_board() {
        let mut rng = StdRng::seed_from_u64(1);
        let full = board("XOX/XOO/OXX");
        for &difficulty in &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(choose_move(&full, difficulty, Mark::X, &mut rng), None);
        }
    }

    #[test]
    fn test_completes_own_line() {
        let mut rng = StdRng::seed_from_u64(2);
        for &difficulty in &[Difficulty::Medium, Difficulty::Hard] {
            let mut b = board("XX./.../...");
            let (row, col) = choose_move(&b, difficulty, Mark::X, &mut rng).unwrap();
            assert_eq!((row, col), (0, 2));

            b.apply_move(row, col, Mark::X).unwrap();
            assert_eq!(evaluate(&b), Verdict::Win(Mark::X));
        }
    }

    #[test]
    fn test_blocks_opponent_line() {
        let mut rng = StdRng::seed_from_u64(3);
        for &difficulty in &[Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(choose_move(&board("OO./.../..."), difficulty, Mark::X, &mut rng), Some((0, 2)));
        }
    }

    #[test]
    fn test_win_preferred_over_block() {
        let mut rng = StdRng::seed_from_u64(4);
        for &difficulty in &[Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(choose_move(&board("XX./OO./..."), difficulty, Mark::X, &mut rng), Some((0, 2)));
            assert_eq!(choose_move(&board("XX./OO./X.."), difficulty, Mark::O, &mut rng), Some((1, 2)));
        }
    }

    #[test]
    fn test_easy_moves_are_legal_and_varied() {
        let mut rng = StdRng::seed_from_u64(5);
        let b = board("X.O/.X./...");
        let empty = b.empty_cells();

        let mut seen = HashSet::new();
        for _ in 0..200 {
            let choice = choose_move(&b, Difficulty::Easy, Mark::O, &mut rng).unwrap();
            assert!(empty.contains(&choice));
            seen.insert(choice);
        }
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_choice_does_not_touch_board() {
        let mut rng = StdRng::seed_from_u64(6);
        let b = board("X../.O./..X");
        for &difficulty in &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let copy = b;
            choose_move(&b, difficulty, Mark::O, &mut rng);
            assert_eq!(b, copy);
        }
    }
}
