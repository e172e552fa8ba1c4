//! The orchestrating game engine.
//!
//! `GameEngine` owns the authoritative board-set snapshot, the current
//! turn, and the snapshot history. All mutation goes through
//! [`GameEngine::apply_move`]; the AI path reuses it so human and AI moves
//! are indistinguishable to the state machine.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::ai::{DifficultyPolicy, MovePolicy};
use crate::board::{BoardSet, Move};
use crate::core::{GameConfig, GameRng, Player};

/// Engine lifecycle phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Configured but not started; only `start_game` is valid.
    Configuring,
    /// A game is running and accepting moves.
    InProgress,
    /// Every board is dead; only `reset` is valid.
    Terminal,
}

/// Terminal result of a game.
///
/// Under the misère convention the player who killed the last live board
/// loses. The reward collaborator consumes this signal; the engine itself
/// computes no currency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// The player whose move rendered all boards dead.
    pub loser: Player,
    /// The other player.
    pub winner: Player,
}

impl GameOutcome {
    /// Outcome where `mover` made the final, losing move.
    #[must_use]
    pub const fn loss_by(mover: Player) -> Self {
        Self {
            loser: mover,
            winner: mover.opponent(),
        }
    }
}

/// Result of submitting a move to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Move accepted; the turn passed to the other player.
    Applied,
    /// Move accepted and it killed the last live board; the game is over
    /// and the turn did not advance.
    GameOver(GameOutcome),
    /// Move refused with no state change: dead board, occupied cell,
    /// out-of-range index, or no game in progress. Expected during normal
    /// play (stale renders, double clicks), not an error.
    Rejected,
}

/// Why an undo request was declined.
///
/// Distinct from a rejected move so the caller can explain the refusal.
/// Coin gating is the economy collaborator's precondition, checked before
/// calling [`GameEngine::undo`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UndoDenied {
    /// Fewer than two applied moves to roll back.
    HistoryTooShort,
    /// No game is in progress.
    GameNotInProgress,
}

impl std::fmt::Display for UndoDenied {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UndoDenied::HistoryTooShort => write!(f, "there are no moves to undo"),
            UndoDenied::GameNotInProgress => write!(f, "no game is in progress"),
        }
    }
}

impl std::error::Error for UndoDenied {}

/// Turn-based Notakto game engine.
///
/// State machine: `Configuring` → `InProgress` on [`start_game`], back to
/// `Configuring` on [`reset`] or [`set_config`], and `InProgress` →
/// `Terminal` when a move kills the last live board.
///
/// [`start_game`]: GameEngine::start_game
/// [`reset`]: GameEngine::reset
/// [`set_config`]: GameEngine::set_config
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    boards: BoardSet,
    /// Snapshot history, oldest first. Always holds at least the initial
    /// empty snapshot.
    history: Vector<BoardSet>,
    turn: Player,
    phase: GamePhase,
    outcome: Option<GameOutcome>,
    rng: GameRng,
}

impl GameEngine {
    /// Create an engine seeded from system entropy.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_seed(config, GameRng::from_entropy().seed())
    }

    /// Create an engine with a fixed RNG seed for deterministic replay.
    #[must_use]
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        let boards = BoardSet::empty(config.board_count, config.size);
        let mut history = Vector::new();
        history.push_back(boards.clone());
        Self {
            config,
            boards,
            history,
            turn: Player::One,
            phase: GamePhase::Configuring,
            outcome: None,
            rng: GameRng::new(seed),
        }
    }

    /// Begin play: fresh boards, player 1 to move, single-entry history.
    pub fn start_game(&mut self) {
        self.boards = BoardSet::empty(self.config.board_count, self.config.size);
        self.history = Vector::new();
        self.history.push_back(self.boards.clone());
        self.turn = Player::One;
        self.outcome = None;
        self.phase = GamePhase::InProgress;
    }

    /// Discard the current game and return to `Configuring`.
    pub fn reset(&mut self) {
        self.boards = BoardSet::empty(self.config.board_count, self.config.size);
        self.history = Vector::new();
        self.history.push_back(self.boards.clone());
        self.turn = Player::One;
        self.outcome = None;
        self.phase = GamePhase::Configuring;
    }

    /// Replace the configuration, discarding any game in progress.
    pub fn set_config(&mut self, config: GameConfig) {
        self.config = config;
        self.reset();
    }

    /// Submit a move for the current player.
    ///
    /// Illegal moves are refused with [`MoveOutcome::Rejected`] and no
    /// state change. A legal move appends a snapshot to history and either
    /// advances the turn or, if it killed the last live board, ends the
    /// game with the mover as loser.
    pub fn apply_move(&mut self, mv: Move) -> MoveOutcome {
        if self.phase != GamePhase::InProgress {
            return MoveOutcome::Rejected;
        }
        let Some(next) = self.boards.with_move(mv) else {
            return MoveOutcome::Rejected;
        };

        self.boards = next.clone();
        self.history.push_back(next);

        if self.boards.all_dead() {
            let outcome = GameOutcome::loss_by(self.turn);
            self.outcome = Some(outcome);
            self.phase = GamePhase::Terminal;
            MoveOutcome::GameOver(outcome)
        } else {
            self.turn = self.turn.opponent();
            MoveOutcome::Applied
        }
    }

    /// Let the configured AI pick and play a move for the current player.
    ///
    /// Returns the chosen move and what applying it did, or `None` when no
    /// legal move exists (game already over); callers do nothing in that
    /// case. Callers that delay this (to simulate thinking) must discard
    /// the request if the game was reset in the meantime; the phase check
    /// in [`apply_move`] backstops that.
    pub fn request_ai_move(&mut self) -> Option<(Move, MoveOutcome)> {
        if self.phase != GamePhase::InProgress {
            return None;
        }
        let policy = DifficultyPolicy::new(self.config.difficulty);
        let mv = policy.choose(&self.boards, &mut self.rng)?;
        Some((mv, self.apply_move(mv)))
    }

    /// Roll back both players' last moves.
    ///
    /// Requires at least three snapshots in history (the initial one plus
    /// one per applied move). On success the two trailing snapshots are
    /// dropped and the turn is unchanged, since one move per player was
    /// reverted.
    pub fn undo(&mut self) -> Result<(), UndoDenied> {
        if self.phase != GamePhase::InProgress {
            return Err(UndoDenied::GameNotInProgress);
        }
        if self.history.len() < 3 {
            return Err(UndoDenied::HistoryTooShort);
        }

        self.history.truncate(self.history.len() - 2);
        self.boards = self
            .history
            .back()
            .cloned()
            .expect("history always holds the initial snapshot");
        Ok(())
    }

    /// Pass the turn to the other player without placing a mark.
    ///
    /// Cost-gated externally like undo. Returns `false` (no state change)
    /// unless a game is in progress.
    pub fn skip_turn(&mut self) -> bool {
        if self.phase != GamePhase::InProgress {
            return false;
        }
        self.turn = self.turn.opponent();
        true
    }

    // === Accessors ===

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The current board-set snapshot.
    #[must_use]
    pub fn boards(&self) -> &BoardSet {
        &self.boards
    }

    /// Whose turn it is.
    #[must_use]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// The current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The terminal outcome, if the game has ended.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Number of snapshots in history (1 for a fresh game).
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// The RNG seed, for replaying a game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}
