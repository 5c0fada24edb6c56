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

//! A tic-tac-toe engine: board rules, move validation, and a CPU opponent at three levels.
//!
//! The crate is layered like a general game-analysis engine.  `Ply` and `State` describe
//! a turn-based, two-player game; `analysis` scores and searches any such game; and
//! `game` implements tic-tac-toe on top of both.
//!
//! # Usage
//!
//! Most users only need a `game::Session`:
//!
//! ```rust
//! use tictactoe::game::{Difficulty, Mark, Session, Verdict};
//!
//! let mut session = Session::with_seed(42);
//! session.submit_move(1, 1).unwrap();
//!
//! let verdict = session.play_cpu_move(Difficulty::Hard, Mark::O).unwrap();
//! assert_eq!(verdict, Verdict::InProgress);
//! assert_eq!(session.board().get(0, 0), Some(Mark::O));
//! ```
//!
//! # Implementation
//!
//! The CPU's `Hard` tier is `analysis::search::AlphaBetaSearch` running over
//! `game::Position`, which implements `State` and `analysis::Extrapolatable`, and scored
//! by `game::Evaluator`.  Any other game implementing the same traits can be searched
//! the same way.
//!
//! # Example
//!
//! A console game can be found in [demos/tic_tac_toe.rs](demos/tic_tac_toe.rs).

#[macro_use]
pub mod analysis;
pub mod error;
pub mod game;

pub use self::error::{MoveError, ParseError};
pub use self::ply::Ply;
pub use self::state::State;

mod ply;
mod state;
