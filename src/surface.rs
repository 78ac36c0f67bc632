use crate::{common::MoveError, game::GameSnapshot};

/// What to do once a round is won or drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundChoice {
    /// Clear the board and play another round.
    Continue,
    /// End the session.
    Quit,
}

/// Presentation layer driven by [`run_session`](crate::run_session).
///
/// A surface draws snapshots and turns user input into cell clicks. It holds
/// no game rules; every click goes through
/// [`GameState::apply_move`](crate::GameState::apply_move).
pub trait Surface {
    /// Draw the current state.
    fn render(&mut self, snapshot: &GameSnapshot);

    /// Next clicked `(row, col)`, or `None` when the user quits.
    fn next_click(&mut self) -> Option<(usize, usize)>;

    /// A click was ignored by the game.
    fn move_rejected(&mut self, _row: usize, _col: usize, _reason: &MoveError) {}

    /// The round in `snapshot` has ended; decide whether to play on.
    fn round_over(&mut self, snapshot: &GameSnapshot) -> RoundChoice;
}
