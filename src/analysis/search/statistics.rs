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

use std::fmt;
use std::ops::AddAssign;

/// Counters collected during a single search.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Statistics {
    /// Interior nodes expanded.
    pub visited: u32,
    /// Leaves handed to the evaluator.
    pub evaluated: u32,
    /// Beta cutoffs taken.
    pub cutoffs: u32,
    /// Transposition table lookups that returned a value.
    pub tt_hits: u32,
    /// Transposition table insertions.
    pub tt_stores: u32,
}

impl Statistics {
    pub fn new() -> Statistics {
        Statistics::default()
    }

    /// Every node the search touched, expanded or not.
    pub fn nodes(&self) -> u32 {
        self.visited + self.evaluated + self.tt_hits
    }
}

impl AddAssign for Statistics {
    fn add_assign(&mut self, other: Statistics) {
        self.visited += other.visited;
        self.evaluated += other.evaluated;
        self.cutoffs += other.cutoffs;
        self.tt_hits += other.tt_hits;
        self.tt_stores += other.tt_stores;
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rows = [
            ("Visited:", self.visited),
            ("Evaluated:", self.evaluated),
            ("Cutoffs:", self.cutoffs),
            ("TT Hits:", self.tt_hits),
            ("TT Stores:", self.tt_stores),
        ];

        let title_width = rows.iter().map(|&(title, _)| title.len()).max().unwrap_or(0) + 1;
        let value_width = rows.iter().map(|&(_, value)| value.to_string().len()).max().unwrap_or(0);

        for (i, &(title, value)) in rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {0:1$}{2:>3$}", title, title_width, value, value_width)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_accumulate() {
        let mut total = Statistics::new();
        total += Statistics { visited: 3, evaluated: 5, cutoffs: 1, tt_hits: 0, tt_stores: 2 };
        total += Statistics { visited: 1, evaluated: 2, cutoffs: 0, tt_hits: 4, tt_stores: 0 };

        assert_eq!(total, Statistics { visited: 4, evaluated: 7, cutoffs: 1, tt_hits: 4, tt_stores: 2 });
        assert_eq!(total.nodes(), 15);
    }

    #[test]
    fn test_display_aligns_values() {
        let statistics = Statistics { visited: 120, evaluated: 7, ..Statistics::default() };
        let printed = statistics.to_string();
        let lines = printed.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "  Visited:   120");
        assert_eq!(lines[1], "  Evaluated:   7");
    }
}
