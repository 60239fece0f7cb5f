//! A five-card-draw video poker rules engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs a Jacks or Better round:
//! staking, dealing, drawing replacements, scoring the hand and paying out
//! from a fixed pay table. Hand classification lives in [`evaluator`] as
//! pure functions.
//!
//! # Example
//!
//! ```
//! use vpoker::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.reset_deck();
//! game.shuffle_deck();
//! game.update_balance();
//! game.deal();
//! game.draw(&[1, 3]);
//! let result = game.calculate_rank();
//! println!("{}: won {}", result.rank, result.payout);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod evaluator;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{CardParseError, StakeError};
pub use game::{Game, GameState, MAX_STAKE};
pub use hand::{HAND_SIZE, Hand};
pub use options::GameOptions;
pub use result::{HandRank, RoundResult};
