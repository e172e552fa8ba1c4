//! Core engine types: players, configuration, RNG.
//!
//! These are the building blocks shared by the board model, the AI
//! policies, and the orchestrating engine.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{BoardSize, Difficulty, GameConfig, GameMode};
pub use player::Player;
pub use rng::GameRng;
