//! Commonly used types for ease of import.

pub use crate::{
    run_session, Cell, GameOutcome, GameSnapshot, GameState, MoveError, MoveResult, Player,
    RoundChoice, Surface,
};

#[cfg(feature = "std")]
pub use crate::{CliSurface, ScriptedSurface};
