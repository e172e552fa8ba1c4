//! The AI opponent.
//!
//! Move selection is a probabilistic blend of two policies: a misère parity
//! heuristic and uniform random play. Difficulty controls the blend, from
//! fully random at level 1 to fully heuristic at level 5. No search or
//! game-value computation is performed; the heuristic is a best-effort
//! approximation of misère-Nim strategy.
//!
//! ```
//! use notakto::ai::{DifficultyPolicy, MovePolicy};
//! use notakto::board::BoardSet;
//! use notakto::core::{BoardSize, Difficulty, GameRng};
//!
//! let set = BoardSet::empty(3, BoardSize::Three);
//! let mut rng = GameRng::new(42);
//!
//! let policy = DifficultyPolicy::new(Difficulty::MAX);
//! let mv = policy.choose(&set, &mut rng).expect("fresh game has moves");
//! assert!(set.is_legal(mv));
//! ```

pub mod policy;

pub use policy::{DifficultyPolicy, MovePolicy, ParityPolicy, RandomPolicy};
