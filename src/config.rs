use crate::board::{LineKind, WinLine};

/// Side length of the grid.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the grid.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// The eight win-lines in evaluation order: rows top to bottom, columns left
/// to right, then the main and anti diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    WinLine::new(LineKind::Row(0), [(0, 0), (0, 1), (0, 2)]),
    WinLine::new(LineKind::Row(1), [(1, 0), (1, 1), (1, 2)]),
    WinLine::new(LineKind::Row(2), [(2, 0), (2, 1), (2, 2)]),
    WinLine::new(LineKind::Column(0), [(0, 0), (1, 0), (2, 0)]),
    WinLine::new(LineKind::Column(1), [(0, 1), (1, 1), (2, 1)]),
    WinLine::new(LineKind::Column(2), [(0, 2), (1, 2), (2, 2)]),
    WinLine::new(LineKind::MainDiagonal, [(0, 0), (1, 1), (2, 2)]),
    WinLine::new(LineKind::AntiDiagonal, [(0, 2), (1, 1), (2, 0)]),
];
