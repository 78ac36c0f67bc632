use crate::common::Player;
use core::cmp::Ordering;
use core::fmt;

/// Wins per player for the current session. Counters only ever grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Score {
    x: u32,
    o: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Count one more win for `player`.
    pub fn record_win(&mut self, player: Player) {
        let counter = match player {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        };
        *counter = counter.saturating_add(1);
    }

    /// The player ahead on wins, `None` while tied.
    pub fn leader(&self) -> Option<Player> {
        match self.x.cmp(&self.o) {
            Ordering::Greater => Some(Player::X),
            Ordering::Less => Some(Player::O),
            Ordering::Equal => None,
        }
    }

    /// `(x, o)`.
    pub fn as_tuple(&self) -> (u32, u32) {
        (self.x, self.o)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X {} - {} O", self.x, self.o)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leader_follows_wins() {
        let mut score = Score::new();
        assert_eq!(score.leader(), None);
        score.record_win(Player::O);
        assert_eq!(score.leader(), Some(Player::O));
        score.record_win(Player::X);
        score.record_win(Player::X);
        assert_eq!(score.leader(), Some(Player::X));
        assert_eq!(score.as_tuple(), (2, 1));
        assert_eq!(score.get(Player::O), 1);
    }

    #[cfg(feature = "std")]
    #[test]
    fn display_reads_x_then_o() {
        let mut score = Score::new();
        score.record_win(Player::X);
        score.record_win(Player::X);
        score.record_win(Player::O);
        assert_eq!(std::format!("{}", score), "X 2 - 1 O");
    }

    #[test]
    fn counters_saturate() {
        let mut score = Score { x: u32::MAX, o: 0 };
        score.record_win(Player::X);
        assert_eq!(score.get(Player::X), u32::MAX);
    }
}
