use crate::{
    board::{Board, WinLine},
    common::{Cell, MoveError, Player},
    config::BOARD_SIZE,
    score::Score,
};
use core::fmt;

/// Result of evaluating the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameOutcome {
    InProgress,
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// `true` once the round is won or drawn.
    pub fn is_over(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::Win(p) => Some(p),
            _ => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::Win(p) => write!(f, "{} wins", p),
            GameOutcome::Draw => write!(f, "Draw"),
        }
    }
}

/// The single cell written by an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct CellDelta {
    pub row: usize,
    pub col: usize,
    pub cell: Cell,
}

/// What [`GameState::apply_move`] did.
///
/// `delta` is set exactly when the move was accepted, `rejection` exactly
/// when it was not. `outcome` is the outcome after the call either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveResult {
    pub accepted: bool,
    pub outcome: GameOutcome,
    pub delta: Option<CellDelta>,
    pub rejection: Option<MoveError>,
}

impl MoveResult {
    fn applied(outcome: GameOutcome, delta: CellDelta) -> Self {
        Self {
            accepted: true,
            outcome,
            delta: Some(delta),
            rejection: None,
        }
    }

    fn ignored(outcome: GameOutcome, reason: MoveError) -> Self {
        Self {
            accepted: false,
            outcome,
            delta: None,
            rejection: Some(reason),
        }
    }
}

/// Everything a surface needs to draw the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    pub turn: Player,
    pub outcome: GameOutcome,
    pub score: Score,
    pub winning_line: Option<WinLine>,
    pub moves_played: usize,
}

/// Classify a grid: first completed win-line, else draw on a full grid,
/// else in progress.
pub fn evaluate(board: &Board) -> GameOutcome {
    if let Some((player, _)) = board.winning_line() {
        GameOutcome::Win(player)
    } else if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}

/// Grid, turn flag, outcome and score for one play session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Player,
    outcome: GameOutcome,
    score: Score,
}

impl GameState {
    /// Empty grid, X to move, zero score.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
            outcome: GameOutcome::InProgress,
            score: Score::new(),
        }
    }

    /// Place `player`'s mark at `(row, col)`.
    ///
    /// Invalid moves leave the state untouched and come back with
    /// `accepted == false`; they are never an `Err`. A move that wins the
    /// round also credits the winner's score.
    pub fn apply_move(&mut self, row: usize, col: usize, player: Player) -> MoveResult {
        if let Err(reason) = self.try_move(row, col, player) {
            log::debug!("rejected {} at ({}, {}): {}", player, row, col, reason);
            return MoveResult::ignored(self.outcome, reason);
        }

        self.turn = player.opponent();
        self.outcome = evaluate(&self.board);
        match self.outcome {
            GameOutcome::Win(winner) => {
                self.score.record_win(winner);
                log::info!("{} wins, score {}", winner, self.score);
            }
            GameOutcome::Draw => log::info!("draw, score {}", self.score),
            GameOutcome::InProgress => {
                log::debug!("{} played ({}, {}), {} to move", player, row, col, self.turn)
            }
        }

        let delta = CellDelta {
            row,
            col,
            cell: Cell::from(player),
        };
        MoveResult::applied(self.outcome, delta)
    }

    fn try_move(&mut self, row: usize, col: usize, player: Player) -> Result<(), MoveError> {
        if self.outcome.is_over() {
            return Err(MoveError::GameOver);
        }
        if player != self.turn {
            return Err(MoveError::WrongTurn {
                expected: self.turn,
                got: player,
            });
        }
        self.board.place(row, col, player)
    }

    /// Outcome of the current grid, recomputed from the cells.
    pub fn evaluate(&self) -> GameOutcome {
        evaluate(&self.board)
    }

    /// Start a new round: empty grid, X to move. Scores are kept.
    pub fn reset(&mut self) {
        self.board.clear();
        self.turn = Player::X;
        self.outcome = GameOutcome::InProgress;
        log::debug!("board reset, score {}", self.score);
    }

    /// `(x_wins, o_wins)`.
    pub fn score(&self) -> (u32, u32) {
        self.score.as_tuple()
    }

    pub fn scoreboard(&self) -> &Score {
        &self.score
    }

    /// The player allowed to move next. Surfaces that draw cells can use
    /// `Cell::from(player)` for the mark it will place.
    pub fn current_turn(&self) -> Player {
        self.turn
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell content, `None` off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.board.get(row, col).ok()
    }

    /// Completed line of the winner, for highlighting.
    pub fn winning_line(&self) -> Option<WinLine> {
        self.board.winning_line().map(|(_, line)| line)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            cells: self.board.cells(),
            turn: self.turn,
            outcome: self.outcome,
            score: self.score,
            winning_line: self.winning_line(),
            moves_played: self.board.filled(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
