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

//! Session settings.

#[cfg(feature = "with_serde")]
use serde::{Deserialize, Serialize};

use crate::game::{Difficulty, Mark};

/// Who plays the two sides.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "with_serde", serde(rename_all = "snake_case"))]
pub enum GameMode {
    #[default]
    PlayerVsPlayer,
    /// A human playing `human` against the CPU at `difficulty`.
    PlayerVsCpu {
        difficulty: Difficulty,
        human: Mark,
    },
}

impl GameMode {
    /// The mark the CPU plays, if there is a CPU.
    pub fn cpu_mark(&self) -> Option<Mark> {
        match *self {
            GameMode::PlayerVsPlayer => None,
            GameMode::PlayerVsCpu { human, .. } => Some(human.opponent()),
        }
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        match *self {
            GameMode::PlayerVsPlayer => None,
            GameMode::PlayerVsCpu { difficulty, .. } => Some(difficulty),
        }
    }
}

/// Everything needed to build a [`Session`](struct.Session.html).
///
/// ```
/// # use tictactoe::game::{Difficulty, GameMode, Mark, Session, SessionConfig};
/// let config = SessionConfig::default()
///     .with_mode(GameMode::PlayerVsCpu { difficulty: Difficulty::Hard, human: Mark::O })
///     .with_seed(7);
///
/// let session = Session::from_config(config);
/// assert!(session.is_cpu_turn());
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "with_serde", serde(default))]
pub struct SessionConfig {
    pub mode: GameMode,
    /// Names for X and O.  Without them the defaults for the mode are used.
    pub names: Option<(String, String)>,
    /// Seed for the session's random source; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl SessionConfig {
    pub fn with_mode(mut self, mode: GameMode) -> SessionConfig {
        self.mode = mode;
        self
    }

    pub fn with_names<X, O>(mut self, name_x: X, name_o: O) -> SessionConfig where
        X: Into<String>,
        O: Into<String> {
        self.names = Some((name_x.into(), name_o.into()));
        self
    }

    pub fn with_seed(mut self, seed: u64) -> SessionConfig {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_cpu_mark() {
        assert_eq!(GameMode::PlayerVsPlayer.cpu_mark(), None);
        let mode = GameMode::PlayerVsCpu { difficulty: Difficulty::Medium, human: Mark::X };
        assert_eq!(mode.cpu_mark(), Some(Mark::O));
        assert_eq!(mode.difficulty(), Some(Difficulty::Medium));
    }

    #[test]
    fn test_builder() {
        let config = SessionConfig::default().with_names("Ana", "Bia").with_seed(3);
        assert_eq!(config.mode, GameMode::PlayerVsPlayer);
        assert_eq!(config.names, Some(("Ana".to_string(), "Bia".to_string())));
        assert_eq!(config.seed, Some(3));
    }

    #[cfg(feature = "with_serde")]
    #[test]
    fn test_deserialize() {
        let json = r#"{
            "mode": { "player_vs_cpu": { "difficulty": "impossible", "human": "O" } },
            "seed": 42
        }"#;
        let config: SessionConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config, SessionConfig::default()
            .with_mode(GameMode::PlayerVsCpu { difficulty: Difficulty::Hard, human: Mark::O })
            .with_seed(42));

        let empty: SessionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, SessionConfig::default());
    }

    #[cfg(feature = "with_serde")]
    #[test]
    fn test_serialize_round_trip() {
        let config = SessionConfig::default().with_names("A", "B");
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<SessionConfig>(&json).unwrap(), config);
    }
}
