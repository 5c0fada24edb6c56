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

/// This trait marks a ply.
///
/// # Example
///
/// For tic-tac-toe, we might have:
///
/// ```rust
/// # use tictactoe::Ply;
/// # #[derive(Clone, Debug, PartialEq)]
/// enum Mark { X, O }
///
/// # #[derive(Clone, Debug, PartialEq)]
/// struct Move {
///     mark: Mark,
///     coordinates: (usize, usize),
/// }
///
/// impl Ply for Move { }
/// # impl std::fmt::Display for Move { fn fmt(&self, _: &mut std::fmt::Formatter) -> std::fmt::Result { Ok(()) } }
/// ```
pub trait Ply: Clone + Debug + Display + PartialEq { }
