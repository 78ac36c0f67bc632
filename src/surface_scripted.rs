#![cfg(feature = "std")]

use std::collections::VecDeque;
use std::vec::Vec;

use crate::{
    common::MoveError,
    game::GameSnapshot,
    surface::{RoundChoice, Surface},
};

/// A click the game refused, with the reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RejectedClick {
    pub row: usize,
    pub col: usize,
    pub reason: MoveError,
}

/// Surface replaying a fixed list of clicks.
///
/// A finished round is followed by another one while clicks remain; once the
/// list runs out the session quits.
pub struct ScriptedSurface {
    clicks: VecDeque<(usize, usize)>,
    frames: Vec<GameSnapshot>,
    rejected: Vec<RejectedClick>,
}

impl ScriptedSurface {
    pub fn new<I>(clicks: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        Self {
            clicks: clicks.into_iter().collect(),
            frames: Vec::new(),
            rejected: Vec::new(),
        }
    }

    /// Every snapshot rendered so far, oldest first.
    pub fn frames(&self) -> &[GameSnapshot] {
        &self.frames
    }

    /// The most recent snapshot rendered.
    pub fn last_frame(&self) -> Option<&GameSnapshot> {
        self.frames.last()
    }

    pub fn rejected(&self) -> &[RejectedClick] {
        &self.rejected
    }

    /// Clicks not consumed yet.
    pub fn remaining(&self) -> usize {
        self.clicks.len()
    }
}

impl Surface for ScriptedSurface {
    fn render(&mut self, snapshot: &GameSnapshot) {
        self.frames.push(*snapshot);
    }

    fn next_click(&mut self) -> Option<(usize, usize)> {
        self.clicks.pop_front()
    }

    fn move_rejected(&mut self, row: usize, col: usize, reason: &MoveError) {
        self.rejected.push(RejectedClick {
            row,
            col,
            reason: *reason,
        });
    }

    fn round_over(&mut self, _snapshot: &GameSnapshot) -> RoundChoice {
        if self.clicks.is_empty() {
            RoundChoice::Quit
        } else {
            RoundChoice::Continue
        }
    }
}
