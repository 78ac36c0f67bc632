#![cfg(feature = "std")]

use std::fmt::Write as _;
use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{
    common::{MoveError, Player},
    config::BOARD_SIZE,
    game::{GameOutcome, GameSnapshot},
    surface::{RoundChoice, Surface},
};

/// Hot-seat terminal play: both players type cells at the same prompt.
pub struct CliSurface<R, W> {
    input: R,
    output: W,
    turn: Player,
}

impl CliSurface<io::StdinLock<'static>, io::Stdout> {
    /// Surface on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliSurface<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            turn: Player::X,
        }
    }

    /// Give back the writer, e.g. to inspect what was drawn.
    pub fn into_output(self) -> W {
        self.output
    }

    fn emit(&mut self, text: &str) {
        let res = self
            .output
            .write_all(text.as_bytes())
            .and_then(|()| self.output.flush());
        if let Err(e) = res {
            log::warn!("failed to write to terminal: {}", e);
        }
    }

    /// Next input line, `None` on end of input or a read error.
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(e) => {
                log::warn!("failed to read from terminal: {}", e);
                None
            }
        }
    }
}

/// Name of a cell in `B2` notation: column letter, then row number.
/// Cells off the board come back as `(row, col)`.
pub fn cell_name(row: usize, col: usize) -> String {
    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        return std::format!("({}, {})", row, col);
    }
    let letter = (b'A' + col as u8) as char;
    std::format!("{}{}", letter, row + 1)
}

/// Parse a cell given as `B2` (column letter, row number) or as a keypad
/// digit `1`-`9` counted row by row from the top left.
pub fn parse_cell(input: &str) -> Option<(usize, usize)> {
    let input = input.trim();
    let mut chars = input.chars();
    let first = chars.next()?;
    let rest = chars.as_str();

    if rest.is_empty() {
        let n = first.to_digit(10)? as usize;
        if n == 0 {
            return None;
        }
        return Some(((n - 1) / BOARD_SIZE, (n - 1) % BOARD_SIZE));
    }

    let col = match first.to_ascii_uppercase() {
        c @ 'A'..='C' => (c as u8 - b'A') as usize,
        _ => return None,
    };
    let row: usize = rest.parse().ok()?;
    if row == 0 || row > BOARD_SIZE {
        return None;
    }
    Some((row - 1, col))
}

/// Draw the board, highlighting the winning line with brackets.
pub fn draw_board(snapshot: &GameSnapshot) -> String {
    let mut out = String::from("    A   B   C\n");
    for (r, row) in snapshot.cells.iter().enumerate() {
        if r > 0 {
            out.push_str("   ---+---+---\n");
        }
        let _ = write!(out, "{:2} ", r + 1);
        for (c, cell) in row.iter().enumerate() {
            if c > 0 {
                out.push('|');
            }
            let mark = cell.symbol();
            let highlighted = snapshot
                .winning_line
                .is_some_and(|line| line.contains(r, c));
            if highlighted {
                let _ = write!(out, "[{}]", mark);
            } else {
                let _ = write!(out, " {} ", mark);
            }
        }
        out.push('\n');
    }
    out
}

/// Status under the board: whose turn or how the round ended, plus score.
pub fn status_line(snapshot: &GameSnapshot) -> String {
    let state = match snapshot.outcome {
        GameOutcome::InProgress => std::format!("{} to move", snapshot.turn),
        outcome => std::format!("{}!", outcome),
    };
    let standing = match snapshot.score.leader() {
        Some(p) => std::format!("{} leads", p),
        None => String::from("tied"),
    };
    std::format!("{}    Score: {} ({})\n", state, snapshot.score, standing)
}

impl<R: BufRead, W: Write> Surface for CliSurface<R, W> {
    fn render(&mut self, snapshot: &GameSnapshot) {
        self.turn = snapshot.turn;
        let mut frame = String::from("\n");
        frame.push_str(&draw_board(snapshot));
        frame.push_str(&status_line(snapshot));
        self.emit(&frame);
    }

    fn next_click(&mut self) -> Option<(usize, usize)> {
        loop {
            let prompt = std::format!("{} > ", self.turn);
            self.emit(&prompt);
            let line = self.read_line()?;
            let line = line.trim();
            if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
                return None;
            }
            match parse_cell(line) {
                Some(cell) => return Some(cell),
                None => self.emit("Enter a cell like B2 or 1-9, or q to quit.\n"),
            }
        }
    }

    fn move_rejected(&mut self, row: usize, col: usize, reason: &MoveError) {
        let msg = std::format!("{}: {}\n", cell_name(row, col), reason);
        self.emit(&msg);
    }

    fn round_over(&mut self, snapshot: &GameSnapshot) -> RoundChoice {
        let prompt = std::format!("{}! Play again? [Y/n] ", snapshot.outcome);
        self.emit(&prompt);
        match self.read_line() {
            None => RoundChoice::Quit,
            Some(answer) => match answer.trim().to_ascii_lowercase().as_str() {
                "n" | "no" | "q" | "quit" => RoundChoice::Quit,
                _ => RoundChoice::Continue,
            },
        }
    }
}
