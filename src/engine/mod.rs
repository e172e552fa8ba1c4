//! Game orchestration: turn ownership, snapshot history, terminal
//! detection, and the AI-move path.
//!
//! ```
//! use notakto::board::Move;
//! use notakto::core::{BoardSize, GameConfig};
//! use notakto::engine::{GameEngine, MoveOutcome};
//!
//! let mut engine = GameEngine::with_seed(GameConfig::new(3, BoardSize::Three), 42);
//! engine.start_game();
//!
//! assert_eq!(engine.apply_move(Move::new(0, 4)), MoveOutcome::Applied);
//! // The same cell again is a silent no-op.
//! assert_eq!(engine.apply_move(Move::new(0, 4)), MoveOutcome::Rejected);
//! ```

pub mod game;

pub use game::{GameEngine, GameOutcome, GamePhase, MoveOutcome, UndoDenied};
