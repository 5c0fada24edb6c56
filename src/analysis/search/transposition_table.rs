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

use std::collections::HashMap;
use std::hash::BuildHasherDefault;

use fnv::FnvHasher;

use crate::analysis::Evaluation;
use crate::state::State;

/// Exact values of fully searched states.
pub struct TranspositionTable<S, E> where
    S: State,
    E: Evaluation {
    map: HashMap<S, E, BuildHasherDefault<FnvHasher>>,
}

impl<S, E> TranspositionTable<S, E> where
    S: State,
    E: Evaluation {
    pub fn new() -> TranspositionTable<S, E> {
        TranspositionTable {
            map: HashMap::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn get(&self, state: &S) -> Option<E> {
        self.map.get(state).cloned()
    }

    pub fn insert(&mut self, state: S, value: E) -> Option<E> {
        self.map.insert(state, value)
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }
}
