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

//! A running game: the board, whose turn it is, and what happens between rounds.

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::MoveError;
use crate::game::{
    choose_move, evaluate_with_line, Board, Coordinates, Difficulty, GameMode, Mark, SessionConfig,
    Verdict, WinningLine,
};

/// Where a round stands.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SessionState {
    InProgress,
    Terminal(Verdict),
}

/// Display names for the two sides.  They never affect the rules.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Players {
    x: String,
    o: String,
}

impl Players {
    pub fn new<X, O>(name_x: X, name_o: O) -> Players where
        X: Into<String>,
        O: Into<String> {
        Players {
            x: name_x.into(),
            o: name_o.into(),
        }
    }

    /// Names for a human playing `human` against the CPU.
    pub fn versus_cpu(human: Mark) -> Players {
        let you = format!("You ({})", human);
        let cpu = format!("CPU ({})", human.opponent());
        match human {
            Mark::X => Players::new(you, cpu),
            Mark::O => Players::new(cpu, you),
        }
    }

    pub fn name(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }
}

impl Default for Players {
    fn default() -> Players {
        Players::new("Player 1", "Player 2")
    }
}

/// Results of the rounds played in a session.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Tally {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl Tally {
    /// Counts a finished round.  In-progress verdicts are ignored.
    pub fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Win(Mark::X) => self.x_wins += 1,
            Verdict::Win(Mark::O) => self.o_wins += 1,
            Verdict::Draw => self.draws += 1,
            Verdict::InProgress => (),
        }
    }

    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    pub fn rounds(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

/// Owns a board and enforces turn order.
///
/// X always moves first.  Human and CPU moves go through the same validation in
/// [`submit_move_as`](#method.submit_move_as); the CPU only decides where to play.
///
/// ```
/// # use tictactoe::game::{Mark, Session, Verdict};
/// let mut session = Session::with_seed(1);
/// assert_eq!(session.submit_move(1, 1), Ok(Verdict::InProgress));
/// assert_eq!(session.current_turn(), Mark::O);
/// ```
pub struct Session {
    board: Board,
    turn: Mark,
    state: SessionState,
    winning_line: Option<WinningLine>,
    players: Players,
    tally: Tally,
    mode: GameMode,
    rng: StdRng,
}

impl Session {
    /// A player-versus-player session with a random source seeded from entropy.
    pub fn new() -> Session {
        Session::build(GameMode::PlayerVsPlayer, Players::default(), StdRng::from_entropy())
    }

    /// A player-versus-player session with a reproducible random source.
    pub fn with_seed(seed: u64) -> Session {
        Session::build(GameMode::PlayerVsPlayer, Players::default(), StdRng::seed_from_u64(seed))
    }

    pub fn from_config(config: SessionConfig) -> Session {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut session = Session::build(config.mode, Players::default(), rng);
        match (config.names, config.mode) {
            (Some((name_x, name_o)), _) => session.set_player_names(&name_x, &name_o),
            (None, GameMode::PlayerVsCpu { human, .. }) => session.players = Players::versus_cpu(human),
            (None, GameMode::PlayerVsPlayer) => (),
        }
        session
    }

    fn build(mode: GameMode, players: Players, rng: StdRng) -> Session {
        Session {
            board: Board::new(),
            turn: Mark::X,
            state: SessionState::InProgress,
            winning_line: None,
            players,
            tally: Tally::default(),
            mode,
            rng,
        }
    }

    /// Begins a round.  Same as [`reset`](#method.reset).
    pub fn start(&mut self) {
        self.reset();
    }

    /// Clears the board and gives the first move to X.  The tally is kept.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.turn = Mark::X;
        self.state = SessionState::InProgress;
        self.winning_line = None;
        debug!("new round, {} to move", self.turn);
    }

    /// Like [`reset`](#method.reset), but also forgets every previous round.
    pub fn reset_all(&mut self) {
        self.reset();
        self.tally = Tally::default();
    }

    /// Places the current turn's mark at `(row, col)`.
    pub fn submit_move(&mut self, row: usize, col: usize) -> Result<Verdict, MoveError> {
        let mark = self.turn;
        self.submit_move_as(mark, row, col)
    }

    /// Places `mark` at `(row, col)` and returns the resulting verdict.
    ///
    /// Fails with `GameOver` once the round is decided, with `WrongTurn` if `mark` is not
    /// the side to move, and with the board's error if the cell is out of range or taken.
    /// A failed move changes nothing.
    pub fn submit_move_as(&mut self, mark: Mark, row: usize, col: usize) -> Result<Verdict, MoveError> {
        if let SessionState::Terminal(_) = self.state {
            return Err(MoveError::GameOver);
        }

        if mark != self.turn {
            return Err(MoveError::WrongTurn {
                expected: self.turn,
                actual: mark,
            });
        }

        self.board.apply_move(row, col, mark)?;
        debug!("{} ({}) plays ({}, {})", mark, self.players.name(mark), row, col);

        let (verdict, line) = evaluate_with_line(&self.board);
        if verdict.is_terminal() {
            self.state = SessionState::Terminal(verdict);
            self.winning_line = line;
            self.tally.record(verdict);
            match verdict.winner() {
                Some(winner) => info!("{} wins the round", self.players.name(winner)),
                None => info!("the round is a draw"),
            }
        } else {
            self.turn = self.turn.opponent();
        }

        Ok(verdict)
    }

    /// Chooses, without playing it, a move for `cpu_mark` at `difficulty`.
    ///
    /// Returns `None` once the round is decided.
    pub fn choose_cpu_move(&mut self, difficulty: Difficulty, cpu_mark: Mark) -> Option<Coordinates> {
        if self.is_over() {
            return None;
        }
        choose_move(&self.board, difficulty, cpu_mark, &mut self.rng)
    }

    /// Chooses a move for `cpu_mark` at `difficulty` and submits it like any other move.
    pub fn play_cpu_move(&mut self, difficulty: Difficulty, cpu_mark: Mark) -> Result<Verdict, MoveError> {
        let (row, col) = self.choose_cpu_move(difficulty, cpu_mark).ok_or(MoveError::GameOver)?;
        self.submit_move_as(cpu_mark, row, col)
    }

    /// Returns `true` if the round is undecided and the side to move belongs to the CPU.
    pub fn is_cpu_turn(&self) -> bool {
        !self.is_over() && self.mode.cpu_mark() == Some(self.turn)
    }

    /// Plays the CPU's move if it is the CPU's turn.
    ///
    /// Returns `Ok(None)` when the side to move is not the CPU's, or there is no CPU.
    pub fn play_cpu_turn(&mut self) -> Result<Option<Verdict>, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        match self.mode {
            GameMode::PlayerVsCpu { difficulty, human } if human != self.turn => {
                self.play_cpu_move(difficulty, human.opponent()).map(Some)
            },
            _ => Ok(None),
        }
    }

    /// Renames the sides.  An empty name falls back to "Player X" or "Player O".
    pub fn set_player_names(&mut self, name_x: &str, name_o: &str) {
        let name = |name: &str, mark: Mark| match name.trim() {
            "" => format!("Player {}", mark),
            name => name.to_string(),
        };
        self.players = Players::new(name(name_x, Mark::X), name(name_o, Mark::O));
    }

    pub fn current_turn(&self) -> Mark {
        self.turn
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The verdict of the current round, `InProgress` included.
    pub fn verdict(&self) -> Verdict {
        match self.state {
            SessionState::InProgress => Verdict::InProgress,
            SessionState::Terminal(verdict) => verdict,
        }
    }

    /// The outcome of the round once it is decided: a win for either mark, or a draw.
    pub fn winner(&self) -> Option<Verdict> {
        match self.state {
            SessionState::InProgress => None,
            SessionState::Terminal(verdict) => Some(verdict),
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn is_over(&self) -> bool {
        self.state != SessionState::InProgress
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &Players {
        &self.players
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }
}

impl Default for Session {
    fn default() -> Session {
        Session::new()
    }
}
