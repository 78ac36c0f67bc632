//! The 3×3 grid, stored as one occupancy bitboard per player.

use crate::bitboard::BitBoard;
use crate::common::{Cell, MoveError, Player};
use crate::config::{BOARD_SIZE, WIN_LINES};
use core::fmt;

type Mask = BitBoard<u16, BOARD_SIZE>;

/// Which row, column or diagonal a [`WinLine`] covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum LineKind {
    Row(usize),
    Column(usize),
    MainDiagonal,
    AntiDiagonal,
}

/// Three cells that win the round when one player holds all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct WinLine {
    kind: LineKind,
    cells: [(usize, usize); 3],
}

impl WinLine {
    pub const fn new(kind: LineKind, cells: [(usize, usize); 3]) -> Self {
        Self { kind, cells }
    }

    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// The `(row, col)` cells of the line.
    pub fn cells(&self) -> [(usize, usize); 3] {
        self.cells
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }

    fn mask(&self) -> Mask {
        // line cells come from WIN_LINES and are always in range
        Mask::from_cells(self.cells).unwrap_or_default()
    }
}

/// Grid contents. Each cell is in at most one of the two masks.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    x: Mask,
    o: Mask,
}

impl Board {
    /// An empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    fn mask(&self, player: Player) -> Mask {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Cells taken by either player.
    pub fn occupied(&self) -> Mask {
        self.x | self.o
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell, MoveError> {
        if self.x.get(row, col)? {
            Ok(Cell::X)
        } else if self.o.get(row, col)? {
            Ok(Cell::O)
        } else {
            Ok(Cell::Empty)
        }
    }

    /// Mark `(row, col)` for `player`. The cell must be on the board and empty.
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> Result<(), MoveError> {
        if !self.get(row, col)?.is_empty() {
            return Err(MoveError::CellOccupied { row, col });
        }
        match player {
            Player::X => self.x.set(row, col)?,
            Player::O => self.o.set(row, col)?,
        }
        Ok(())
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        self.x.clear_all();
        self.o.clear_all();
    }

    /// Number of marked cells.
    pub fn filled(&self) -> usize {
        self.occupied().count_ones()
    }

    pub fn is_full(&self) -> bool {
        self.occupied().is_full()
    }

    /// Marks held by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.mask(player).count_ones()
    }

    /// Grid as rows of cells.
    pub fn cells(&self) -> [[Cell; BOARD_SIZE]; BOARD_SIZE] {
        let mut grid = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (row, col) in self.x.iter_set_bits() {
            grid[row][col] = Cell::X;
        }
        for (row, col) in self.o.iter_set_bits() {
            grid[row][col] = Cell::O;
        }
        grid
    }

    /// The player holding all three cells of `line`, if any.
    pub fn line_owner(&self, line: &WinLine) -> Option<Player> {
        let mask = line.mask();
        [Player::X, Player::O]
            .into_iter()
            .find(|&p| (self.mask(p) & mask) == mask)
    }

    /// First completed line in evaluation order, with its owner.
    pub fn winning_line(&self) -> Option<(Player, WinLine)> {
        WIN_LINES
            .iter()
            .find_map(|line| self.line_owner(line).map(|p| (p, *line)))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells().iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("x", &self.x)
            .field("o", &self.o)
            .finish()
    }
}
