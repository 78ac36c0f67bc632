//! Common types: players, cell contents and move errors.

use crate::bitboard::BitBoardError;
use core::fmt;

/// One of the two players. X always opens a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The player moving after `self`.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Content of a single grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The player holding this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    pub fn symbol(self) -> char {
        self.player().map_or('.', Player::symbol)
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    /// Row or column outside `0..3`.
    OutOfBounds { row: usize, col: usize },
    /// Target cell already holds a mark.
    CellOccupied { row: usize, col: usize },
    /// The round is won or drawn; only a reset reopens the board.
    GameOver,
    /// Someone other than the player on turn tried to move.
    WrongTurn { expected: Player, got: Player },
    /// Underlying bitboard error other than a bad index.
    Board(BitBoardError),
}

impl From<BitBoardError> for MoveError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { row, col } => MoveError::OutOfBounds { row, col },
            other => MoveError::Board(other),
        }
    }
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds { row, col } => {
                write!(f, "cell ({}, {}) is off the board", row, col)
            }
            MoveError::CellOccupied { row, col } => {
                write!(f, "cell ({}, {}) is already taken", row, col)
            }
            MoveError::GameOver => write!(f, "the round is over"),
            MoveError::WrongTurn { expected, got } => {
                write!(f, "it is {}'s turn, not {}'s", expected, got)
            }
            MoveError::Board(e) => write!(f, "board error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MoveError {}
