#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;
mod bitboard;
mod board;
mod common;
mod config;
mod game;
mod score;
mod session;
mod surface;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod surface_cli;
#[cfg(feature = "std")]
mod surface_scripted;
pub mod prelude;

pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use score::Score;
pub use session::*;
pub use surface::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
#[cfg(feature = "std")]
pub use surface_cli::*;
#[cfg(feature = "std")]
pub use surface_scripted::*;
