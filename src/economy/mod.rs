//! Reward calculation and the coin/XP wallet.
//!
//! This is the collaborator that consumes the engine's outcome signal. The
//! engine neither computes nor stores currency; the presentation layer
//! checks the wallet before cost-gated actions (undo, skip) and deposits
//! rewards when a game ends.

use serde::{Deserialize, Serialize};

use crate::core::{BoardSize, Difficulty, GameRng};

/// Coins charged to roll back a move pair.
pub const UNDO_COST: u32 = 100;
/// Coins charged to pass a turn.
pub const SKIP_COST: u32 = 200;
/// Balance of a fresh wallet.
pub const STARTING_COINS: u32 = 1000;

/// Coins and experience earned for one finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rewards {
    pub coins: u32,
    pub xp: u32,
}

/// Compute rewards for a finished game.
///
/// The base scales with difficulty, board count, and board side. Per-game
/// multipliers are drawn from the RNG: coins 1-5, XP 6-10. A human win pays
/// both; a loss pays no coins but still earns the base XP.
#[must_use]
pub fn calculate_rewards(
    human_won: bool,
    difficulty: Difficulty,
    board_count: usize,
    size: BoardSize,
    rng: &mut GameRng,
) -> Rewards {
    let base = u32::from(difficulty.level()) * board_count as u32 * size.side() as u32;
    let coin_multiplier = rng.gen_range_usize(1..6) as u32;
    let xp_multiplier = rng.gen_range_usize(6..11) as u32;

    Rewards {
        coins: if human_won { base * coin_multiplier } else { 0 },
        xp: if human_won { base * xp_multiplier } else { base },
    }
}

/// XP granted to the human when the computer wins: a quarter of the loss
/// reward, rounded to nearest.
#[must_use]
pub fn consolation_xp(rewards: &Rewards) -> u32 {
    (f64::from(rewards.xp) * 0.25).round() as u32
}

/// Declined spend: the wallet holds fewer coins than the action costs.
///
/// Deliberately distinct from a rejected move, so the caller can explain
/// why the action was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InsufficientCoins {
    pub required: u32,
    pub available: u32,
}

impl std::fmt::Display for InsufficientCoins {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "need {} coins but only {} available",
            self.required, self.available
        )
    }
}

impl std::error::Error for InsufficientCoins {}

/// Coin and XP balance for one account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    coins: u32,
    xp: u32,
}

impl Wallet {
    /// A fresh wallet with the starting balance.
    #[must_use]
    pub fn new() -> Self {
        Self {
            coins: STARTING_COINS,
            xp: 0,
        }
    }

    /// Restore a wallet from a persisted balance.
    #[must_use]
    pub fn with_balance(coins: u32, xp: u32) -> Self {
        Self { coins, xp }
    }

    /// Current coin balance.
    #[must_use]
    pub fn coins(&self) -> u32 {
        self.coins
    }

    /// Current experience total.
    #[must_use]
    pub fn xp(&self) -> u32 {
        self.xp
    }

    /// Whether the wallet can cover a cost.
    #[must_use]
    pub fn can_afford(&self, cost: u32) -> bool {
        self.coins >= cost
    }

    /// Deduct a cost, or decline without changing the balance.
    pub fn try_spend(&mut self, cost: u32) -> Result<(), InsufficientCoins> {
        if self.coins < cost {
            return Err(InsufficientCoins {
                required: cost,
                available: self.coins,
            });
        }
        self.coins -= cost;
        Ok(())
    }

    /// Deposit a game's rewards.
    pub fn deposit(&mut self, rewards: Rewards) {
        self.coins += rewards.coins;
        self.xp += rewards.xp;
    }

    /// Add coins directly (promotional grants).
    pub fn add_coins(&mut self, amount: u32) {
        self.coins += amount;
    }

    /// Add experience directly.
    pub fn add_xp(&mut self, amount: u32) {
        self.xp += amount;
    }
}

impl Default for Wallet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_rewards_scale_with_config() {
        let mut rng = GameRng::new(42);
        let rewards = calculate_rewards(true, Difficulty::new(4), 3, BoardSize::Five, &mut rng);

        let base = 4 * 3 * 5;
        assert!(rewards.coins >= base && rewards.coins <= base * 5);
        assert!(rewards.xp >= base * 6 && rewards.xp <= base * 10);
    }

    #[test]
    fn test_loss_pays_base_xp_only() {
        let mut rng = GameRng::new(42);
        let rewards = calculate_rewards(false, Difficulty::new(2), 3, BoardSize::Three, &mut rng);

        assert_eq!(rewards.coins, 0);
        assert_eq!(rewards.xp, 2 * 3 * 3);
    }

    #[test]
    fn test_rewards_replay_with_seed() {
        let mut rng1 = GameRng::new(9);
        let mut rng2 = GameRng::new(9);

        let r1 = calculate_rewards(true, Difficulty::MAX, 5, BoardSize::Five, &mut rng1);
        let r2 = calculate_rewards(true, Difficulty::MAX, 5, BoardSize::Five, &mut rng2);

        assert_eq!(r1, r2);
    }

    #[test]
    fn test_consolation_xp() {
        let rewards = Rewards { coins: 0, xp: 18 };
        assert_eq!(consolation_xp(&rewards), 5); // 4.5 rounds up
    }

    #[test]
    fn test_wallet_spend_and_decline() {
        let mut wallet = Wallet::with_balance(150, 0);

        assert!(wallet.can_afford(UNDO_COST));
        wallet.try_spend(UNDO_COST).unwrap();
        assert_eq!(wallet.coins(), 50);

        let err = wallet.try_spend(SKIP_COST).unwrap_err();
        assert_eq!(
            err,
            InsufficientCoins {
                required: SKIP_COST,
                available: 50
            }
        );
        // Declined spend leaves the balance alone.
        assert_eq!(wallet.coins(), 50);
    }

    #[test]
    fn test_wallet_deposit() {
        let mut wallet = Wallet::new();
        wallet.deposit(Rewards { coins: 120, xp: 45 });

        assert_eq!(wallet.coins(), STARTING_COINS + 120);
        assert_eq!(wallet.xp(), 45);
    }

    #[test]
    fn test_wallet_serialization() {
        let wallet = Wallet::with_balance(321, 99);
        let json = serde_json::to_string(&wallet).unwrap();
        let deserialized: Wallet = serde_json::from_str(&json).unwrap();
        assert_eq!(wallet, deserialized);
    }
}
