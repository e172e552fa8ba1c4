//! # notakto
//!
//! Game engine for Notakto: misère tic-tac-toe played simultaneously on
//! 1-5 boards with a single shared mark. Completing a line kills a board;
//! the player forced to kill the last live board loses.
//!
//! ## Design Principles
//!
//! 1. **Immutable Snapshots**: Every accepted move produces a new
//!    [`board::BoardSet`]; history retention and undo are plain sequence
//!    operations over `im` persistent vectors.
//!
//! 2. **Injectable Randomness**: All stochastic paths draw from a seedable
//!    [`core::GameRng`], so games replay exactly and tests can pin either
//!    AI branch.
//!
//! 3. **Silent Rejection**: Illegal moves are a normal occurrence (stale
//!    renders, double clicks) and refuse without error or state change.
//!
//! ## Modules
//!
//! - `core`: players, configuration, RNG
//! - `board`: boards, snapshots, win detection, legal moves
//! - `ai`: move policies (random, parity heuristic, difficulty blend)
//! - `engine`: orchestrating game engine (turn, history, undo, outcome)
//! - `economy`: reward calculation and wallet collaborator
//!
//! ## Example
//!
//! ```
//! use notakto::board::Move;
//! use notakto::core::{BoardSize, Difficulty, GameConfig, GameMode};
//! use notakto::engine::{GameEngine, GamePhase, MoveOutcome};
//!
//! let config = GameConfig::new(3, BoardSize::Three)
//!     .with_mode(GameMode::VsComputer)
//!     .with_difficulty(Difficulty::new(3));
//!
//! let mut engine = GameEngine::with_seed(config, 42);
//! engine.start_game();
//!
//! // Human plays the center of the first board, then the AI replies.
//! assert_eq!(engine.apply_move(Move::new(0, 4)), MoveOutcome::Applied);
//! let (ai_move, _) = engine.request_ai_move().expect("moves remain");
//! assert!(!engine.boards().board(ai_move.board).cell(ai_move.cell).is_empty());
//! assert_eq!(engine.phase(), GamePhase::InProgress);
//! ```

pub mod ai;
pub mod board;
pub mod core;
pub mod economy;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{BoardSize, Difficulty, GameConfig, GameMode, GameRng, Player};

pub use crate::board::{legal_moves, Board, BoardSet, Cell, Move};

pub use crate::ai::{DifficultyPolicy, MovePolicy, ParityPolicy, RandomPolicy};

pub use crate::engine::{GameEngine, GameOutcome, GamePhase, MoveOutcome, UndoDenied};

pub use crate::economy::{calculate_rewards, Rewards, Wallet};
