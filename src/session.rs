//! Event loop tying one [`GameState`] to one [`Surface`].

use crate::{
    game::{GameOutcome, GameState},
    score::Score,
    surface::{RoundChoice, Surface},
};

/// How a session went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionSummary {
    /// Rounds that ended in a win or a draw.
    pub rounds: u32,
    pub draws: u32,
    pub score: Score,
    /// Outcome of the board when the session stopped.
    pub last_outcome: GameOutcome,
}

/// Play rounds until the surface quits.
///
/// Clicks are always applied for the player on turn. Quitting mid-round
/// (`next_click` returning `None`) abandons that round and leaves the score
/// as it was.
pub fn run_session<S: Surface + ?Sized>(game: &mut GameState, surface: &mut S) -> SessionSummary {
    let mut rounds = 0u32;
    let mut draws = 0u32;
    surface.render(&game.snapshot());

    while let Some((row, col)) = surface.next_click() {
        let result = game.apply_move(row, col, game.current_turn());
        if let Some(reason) = result.rejection {
            surface.move_rejected(row, col, &reason);
            continue;
        }

        let snapshot = game.snapshot();
        surface.render(&snapshot);
        if !result.outcome.is_over() {
            continue;
        }

        rounds += 1;
        if result.outcome == GameOutcome::Draw {
            draws += 1;
        }
        log::info!("round {} finished: {} ({})", rounds, result.outcome, snapshot.score);

        match surface.round_over(&snapshot) {
            RoundChoice::Continue => {
                game.reset();
                surface.render(&game.snapshot());
            }
            RoundChoice::Quit => break,
        }
    }

    log::info!("session over after {} rounds, score {}", rounds, game.scoreboard());
    SessionSummary {
        rounds,
        draws,
        score: *game.scoreboard(),
        last_outcome: game.outcome(),
    }
}
