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

//! Properties of sessions and strategies over random move sequences.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use tictactoe::MoveError;
use tictactoe::game::{
    choose_move, completing_move, evaluate, Difficulty, Mark, Session, Verdict,
};

fn coordinates() -> impl Strategy<Value = (usize, usize)> {
    (0usize..4, 0usize..4)
}

fn difficulties() -> impl Strategy<Value = Difficulty> {
    prop_oneof![Just(Difficulty::Easy), Just(Difficulty::Medium), Just(Difficulty::Hard)]
}

proptest! {
    #[test]
    fn prop_session_invariants(moves in prop::collection::vec(coordinates(), 0..24)) {
        let mut session = Session::with_seed(0);

        for (row, col) in moves {
            let before = *session.board();
            let turn = session.current_turn();
            let was_over = session.is_over();

            match session.submit_move(row, col) {
                Ok(verdict) => {
                    prop_assert!(!was_over);
                    prop_assert_eq!(session.board().get(row, col), Some(turn));
                    prop_assert_eq!(verdict, evaluate(session.board()));
                    if verdict.is_terminal() {
                        prop_assert_eq!(session.current_turn(), turn);
                    } else {
                        prop_assert_eq!(session.current_turn(), turn.opponent());
                    }
                },
                Err(error) => {
                    prop_assert_eq!(*session.board(), before);
                    prop_assert_eq!(session.current_turn(), turn);
                    if was_over {
                        prop_assert_eq!(error, MoveError::GameOver);
                    }
                },
            }

            let xs = session.board().count(Mark::X);
            let os = session.board().count(Mark::O);
            prop_assert!(xs == os || xs == os + 1);
            if !session.is_over() {
                prop_assert_eq!(session.current_turn() == Mark::X, xs == os);
            }
        }
    }

    #[test]
    fn prop_cpu_moves_are_legal(
        seed in any::<u64>(),
        prefix in prop::collection::vec(coordinates(), 0..8),
        difficulty in difficulties(),
    ) {
        let mut session = Session::with_seed(seed);
        for (row, col) in prefix {
            let _ = session.submit_move(row, col);
        }
        prop_assume!(!session.is_over());

        let board = *session.board();
        let mark = session.current_turn();
        let mut rng = StdRng::seed_from_u64(seed);
        let choice = choose_move(&board, difficulty, mark, &mut rng);

        prop_assert!(choice.is_some());
        prop_assert!(board.empty_cells().contains(&choice.unwrap()));
        prop_assert_eq!(session.play_cpu_move(difficulty, mark).map(|_| ()), Ok(()));
    }

    #[test]
    fn prop_medium_and_hard_take_wins(
        seed in any::<u64>(),
        prefix in prop::collection::vec(coordinates(), 0..12),
    ) {
        let mut session = Session::with_seed(seed);
        for (row, col) in prefix {
            let _ = session.submit_move(row, col);
        }
        prop_assume!(!session.is_over());

        let board = *session.board();
        let mark = session.current_turn();
        if completing_move(&board, mark).is_none() {
            return Ok(());
        }

        let mut rng = StdRng::seed_from_u64(seed);
        for &difficulty in &[Difficulty::Medium, Difficulty::Hard] {
            let (row, col) = choose_move(&board, difficulty, mark, &mut rng).unwrap();
            let mut next = board;
            next.apply_move(row, col, mark).unwrap();
            prop_assert_eq!(evaluate(&next), Verdict::Win(mark));
        }
    }
}
