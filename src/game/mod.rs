//! Game session and round flow.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use crate::deck::Deck;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::HandRank;

mod actions;
mod bet;
mod payout;
pub mod state;

pub use payout::MAX_STAKE;
pub use state::GameState;

/// A video poker session: one player, one deck, one hand per round.
///
/// The session owns the deck, hand, balance and stake. A round runs
/// [`reset_deck`](Self::reset_deck), [`shuffle_deck`](Self::shuffle_deck),
/// [`update_balance`](Self::update_balance), [`deal`](Self::deal),
/// [`draw`](Self::draw) and [`calculate_rank`](Self::calculate_rank); the
/// caller decides which cards to replace and whether funds allow another
/// round.
///
/// # Example
///
/// ```
/// use vpoker::{Game, GameOptions};
///
/// let mut game = Game::new(GameOptions::default().with_balance(10.0), 42);
/// game.shuffle_deck();
/// game.update_balance();
/// game.deal();
/// game.draw(&[0, 2, 4]);
/// let result = game.calculate_rank();
/// assert_eq!(result.balance, game.balance());
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards left to deal this round.
    pub deck: Deck,
    /// The player's hand.
    hand: Hand,
    /// Category of the last evaluated hand.
    rank: Option<HandRank>,
    /// Player money.
    balance: f64,
    /// Amount wagered per hand.
    stake: f64,
    /// Current round phase.
    state: GameState,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new session with the given seed.
    ///
    /// The deck starts full and unshuffled. A stake from `options` that
    /// [`set_stake`](Self::set_stake) would reject is replaced by zero.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut game = Self {
            deck: Deck::new(),
            hand: Hand::new(),
            rank: None,
            balance: options.balance,
            stake: 0.0,
            state: GameState::AwaitingDeal,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };

        if let Err(err) = game.set_stake(options.stake) {
            warn!(stake = options.stake, %err, "ignoring configured stake");
        }

        game
    }

    /// Replaces the deck with a full, unshuffled one.
    ///
    /// Balance, stake and hand are left alone.
    pub fn reset_deck(&mut self) {
        self.deck = Deck::new();
        debug!("deck reset");
    }

    /// Shuffles the deck with the session's random number generator.
    pub fn shuffle_deck(&mut self) {
        self.deck.shuffle(&mut self.rng);
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the current hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the category of the last evaluated hand.
    ///
    /// Returns `None` until [`calculate_rank`](Self::calculate_rank) or
    /// [`settle`](Self::settle) has run.
    #[must_use]
    pub const fn rank(&self) -> Option<HandRank> {
        self.rank
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> f64 {
        self.balance
    }

    /// Returns the current stake.
    #[must_use]
    pub const fn stake(&self) -> f64 {
        self.stake
    }

    /// Returns the current round phase.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameOptions::default(), 0)
    }
}
