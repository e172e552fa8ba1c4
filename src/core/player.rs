//! Player identity.
//!
//! Notakto is strictly two-player and both players place the same shared
//! mark, so the only per-player fact the engine tracks is whose turn it is.

use serde::{Deserialize, Serialize};

/// One of the two players in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The first mover. In vs-computer games this is the human.
    One,
    /// The second mover. In vs-computer games this is the AI opponent.
    Two,
}

impl Player {
    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// 1-based player number, matching display order.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}
