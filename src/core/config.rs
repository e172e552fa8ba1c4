//! Match configuration: board geometry, opponent mode, AI difficulty.
//!
//! Out-of-range values are a caller error, not something the engine defends
//! against at runtime: `BoardSize` makes invalid sizes unrepresentable and
//! the remaining bounds are asserted at construction.

use serde::{Deserialize, Serialize};

/// Supported board side lengths (2x2 through 5x5).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardSize {
    Two,
    Three,
    Four,
    Five,
}

impl BoardSize {
    /// All supported sizes, smallest first.
    pub const ALL: [BoardSize; 4] = [
        BoardSize::Two,
        BoardSize::Three,
        BoardSize::Four,
        BoardSize::Five,
    ];

    /// Side length of the square board.
    #[must_use]
    pub const fn side(self) -> usize {
        match self {
            BoardSize::Two => 2,
            BoardSize::Three => 3,
            BoardSize::Four => 4,
            BoardSize::Five => 5,
        }
    }

    /// Total cell count (side squared).
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.side() * self.side()
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        BoardSize::Three
    }
}

/// AI difficulty level, 1 (fully random) through 5 (fully heuristic).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Difficulty(u8);

impl Difficulty {
    /// Easiest level: the AI plays uniformly at random.
    pub const MIN: Difficulty = Difficulty(1);
    /// Hardest level: the AI always plays its parity heuristic.
    pub const MAX: Difficulty = Difficulty(5);

    /// Create a difficulty level.
    ///
    /// Levels are clamped by the caller; anything outside 1-5 here is a
    /// programming error.
    #[must_use]
    pub fn new(level: u8) -> Self {
        assert!((1..=5).contains(&level), "Difficulty must be 1-5");
        Self(level)
    }

    /// The raw level (1-5).
    #[must_use]
    pub const fn level(self) -> u8 {
        self.0
    }

    /// Probability that the AI plays its heuristic rather than at random.
    ///
    /// Scales linearly: 0.0 at level 1, 1.0 at level 5.
    #[must_use]
    pub fn optimal_chance(self) -> f64 {
        f64::from(self.0 - 1) / 4.0
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::MIN
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Difficulty {}", self.0)
    }
}

/// Who sits in the second seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Two humans sharing the device.
    VsPlayer,
    /// Player 2 is the AI opponent.
    VsComputer,
}

/// Full configuration for one match.
///
/// Changing any of these starts a fresh game; configuration never changes
/// mid-game.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of boards played simultaneously (1-5).
    pub board_count: usize,
    /// Side length shared by every board.
    pub size: BoardSize,
    /// Opponent mode.
    pub mode: GameMode,
    /// AI difficulty. Ignored in `VsPlayer` mode.
    pub difficulty: Difficulty,
}

impl GameConfig {
    /// Maximum number of simultaneous boards.
    pub const MAX_BOARDS: usize = 5;

    /// Create a configuration with the default mode (vs player) and
    /// difficulty.
    ///
    /// `board_count` is clamped by the caller; 0 or more than
    /// [`Self::MAX_BOARDS`] is a programming error.
    #[must_use]
    pub fn new(board_count: usize, size: BoardSize) -> Self {
        assert!(
            (1..=Self::MAX_BOARDS).contains(&board_count),
            "Board count must be 1-{}",
            Self::MAX_BOARDS
        );
        Self {
            board_count,
            size,
            mode: GameMode::VsPlayer,
            difficulty: Difficulty::default(),
        }
    }

    /// Set the opponent mode.
    #[must_use]
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the AI difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig::new(3, BoardSize::Three)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_size_geometry() {
        assert_eq!(BoardSize::Two.side(), 2);
        assert_eq!(BoardSize::Two.cell_count(), 4);
        assert_eq!(BoardSize::Five.side(), 5);
        assert_eq!(BoardSize::Five.cell_count(), 25);
    }

    #[test]
    fn test_difficulty_optimal_chance() {
        assert_eq!(Difficulty::new(1).optimal_chance(), 0.0);
        assert_eq!(Difficulty::new(2).optimal_chance(), 0.25);
        assert_eq!(Difficulty::new(3).optimal_chance(), 0.5);
        assert_eq!(Difficulty::new(4).optimal_chance(), 0.75);
        assert_eq!(Difficulty::new(5).optimal_chance(), 1.0);
    }

    #[test]
    #[should_panic(expected = "Difficulty must be 1-5")]
    fn test_difficulty_out_of_range() {
        let _ = Difficulty::new(6);
    }

    #[test]
    fn test_config_builder() {
        let config = GameConfig::new(5, BoardSize::Four)
            .with_mode(GameMode::VsComputer)
            .with_difficulty(Difficulty::MAX);

        assert_eq!(config.board_count, 5);
        assert_eq!(config.size, BoardSize::Four);
        assert_eq!(config.mode, GameMode::VsComputer);
        assert_eq!(config.difficulty.level(), 5);
    }

    #[test]
    #[should_panic(expected = "Board count must be 1-5")]
    fn test_config_zero_boards() {
        let _ = GameConfig::new(0, BoardSize::Three);
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::default().with_difficulty(Difficulty::new(3));
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
