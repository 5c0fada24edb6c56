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

//! Play tic-tac-toe against the CPU on the console.
//!
//! ```text
//! cargo run --example tic_tac_toe -- hard
//! ```
//!
//! The difficulty defaults to hard.  Set `RUST_LOG=debug` to watch the CPU think.

use std::env;
use std::io::{self, Write};

use log::info;

use tictactoe::game::{Difficulty, Mark, Session};

fn get_coordinate(prompt: &str) -> Option<usize> {
    loop {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) | Err(_) => return None,
            Ok(_) => if let Ok(coordinate) = input.trim().parse::<usize>() {
                if coordinate > 0 && coordinate <= 3 {
                    return Some(coordinate);
                }
            },
        }
    }
}

fn main() {
    env_logger::init();

    let difficulty = match env::args().nth(1).map(|arg| arg.parse::<Difficulty>()) {
        Some(Ok(difficulty)) => difficulty,
        Some(Err(error)) => {
            eprintln!("Error: {}", error);
            return;
        },
        None => Difficulty::Hard,
    };
    info!("playing at {}", difficulty);

    let mut session = Session::new();
    let mut game = 1;

    loop {
        let human = if game % 2 == 1 { Mark::X } else { Mark::O };
        let cpu = human.opponent();
        let you = format!("You ({})", human);
        let them = format!("CPU ({})", cpu);
        match human {
            Mark::X => session.set_player_names(&you, &them),
            Mark::O => session.set_player_names(&them, &you),
        }
        session.reset();

        println!("--------------------");

        if human == Mark::X {
            println!("Human goes first!");
        } else {
            println!("Computer goes first!");
        }

        while !session.is_over() {
            println!("{}\n", session.board());

            let result = if session.current_turn() == human {
                println!("Human's turn:");

                let row = match get_coordinate("Row (1 - 3): ") {
                    Some(row) => row,
                    None => return,
                };
                let col = match get_coordinate("Column (1 - 3): ") {
                    Some(col) => col,
                    None => return,
                };

                session.submit_move(row - 1, col - 1)
            } else {
                println!("Computer's turn:");

                session.play_cpu_move(difficulty, cpu)
            };

            if let Err(error) = result {
                println!("Error: {}", error);
            }
        }

        println!("{}\n", session.board());
        if let Some(verdict) = session.winner() {
            match verdict.winner() {
                Some(mark) => println!("{} wins!", session.players().name(mark)),
                None => println!("Cat's game!"),
            }
        }
        if let Some(line) = session.winning_line() {
            println!("Line: {}", line);
        }
        println!("{}\n", session.tally());

        game += 1;
    }
}
