//! Move-selection policies: random play, the parity heuristic, and the
//! difficulty-scaled blend of the two.

use crate::board::{legal_moves, BoardSet, Move};
use crate::core::{Difficulty, GameRng};

/// Policy for choosing the AI opponent's next move.
///
/// Policies are trait-based so the randomness source stays injectable:
/// tests construct a policy directly and drive it with a seeded
/// [`GameRng`] to pin down either branch.
pub trait MovePolicy {
    /// Choose a move for the current position.
    ///
    /// Returns `None` only when no legal moves remain, which means the game
    /// is already over. Callers must treat that as "do nothing", never as a
    /// failure.
    fn choose(&self, set: &BoardSet, rng: &mut GameRng) -> Option<Move>;
}

/// Uniform random play over all legal moves, ignoring move ordering.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPolicy;

impl MovePolicy for RandomPolicy {
    fn choose(&self, set: &BoardSet, rng: &mut GameRng) -> Option<Move> {
        let moves = legal_moves(set);
        rng.choose(&moves).copied()
    }
}

/// Misère parity heuristic.
///
/// Counts live boards and partitions legal moves by whether they would kill
/// their board. An odd live count is a winning parity for the mover, so the
/// policy keeps boards alive; an even count is losing, so it sacrifices a
/// random board to flip the parity. When the preferred partition is empty it
/// falls back to the highest-priority move in center-biased order.
///
/// This is a proxy for misère-Nim strategy, not a game-value computation,
/// and is not verified optimal for boards larger than 3x3 or counts above 3.
/// Changing the parity or kill-selection rule changes observable AI
/// behavior.
#[derive(Clone, Copy, Debug, Default)]
pub struct ParityPolicy;

impl MovePolicy for ParityPolicy {
    fn choose(&self, set: &BoardSet, rng: &mut GameRng) -> Option<Move> {
        let moves = legal_moves(set);
        if moves.is_empty() {
            return None;
        }

        let (killing, non_killing): (Vec<Move>, Vec<Move>) =
            moves.iter().copied().partition(|&m| {
                set.with_move(m)
                    .map_or(false, |next| next.is_board_dead(m.board))
            });

        let preferred = if set.live_count() % 2 == 1 {
            non_killing.first().copied()
        } else {
            rng.choose(&killing).copied()
        };

        preferred.or_else(|| moves.first().copied())
    }
}

/// Difficulty-scaled blend of [`ParityPolicy`] and [`RandomPolicy`].
///
/// Each call rolls the difficulty's optimal chance: level 1 always plays at
/// random, level 5 always plays the heuristic, levels in between
/// interpolate linearly.
#[derive(Clone, Copy, Debug)]
pub struct DifficultyPolicy {
    difficulty: Difficulty,
}

impl DifficultyPolicy {
    /// Create a policy for the given difficulty level.
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    /// The difficulty this policy was created with.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl MovePolicy for DifficultyPolicy {
    fn choose(&self, set: &BoardSet, rng: &mut GameRng) -> Option<Move> {
        if rng.gen_bool(self.difficulty.optimal_chance()) {
            ParityPolicy.choose(set, rng)
        } else {
            RandomPolicy.choose(set, rng)
        }
    }
}
