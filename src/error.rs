//! Error types for engine operations.
//!
//! The rules themselves never fail: a malformed hand scores as no win and a
//! short deck yields a short take. Errors only arise at the input edges.

use thiserror::Error;

/// Errors that can occur when parsing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardParseError {
    /// Input is not a rank followed by a suit.
    #[error("card must be a rank followed by a suit")]
    InvalidLength,
    /// Unknown rank.
    #[error("invalid card rank")]
    InvalidRank,
    /// Unknown suit.
    #[error("invalid card suit")]
    InvalidSuit,
}

/// Errors that can occur when setting the stake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StakeError {
    /// Stake is below zero.
    #[error("stake is negative")]
    Negative,
    /// Stake is NaN or infinite.
    #[error("stake is not a finite amount")]
    NotFinite,
}
