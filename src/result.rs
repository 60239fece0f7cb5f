//! Hand categories and round results.

use core::fmt;

use crate::hand::Hand;

/// Category of a five-card hand.
///
/// Variants are listed from least to most valuable, except for
/// [`HandRank::DeadMansHand`], a two-pair special case that pays nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HandRank {
    /// Nothing that pays. Also the result for incomplete or invalid hands.
    #[default]
    NoWin,
    /// A single pair of jacks, queens, kings or aces.
    PairJacksOrHigher,
    /// Two pairs.
    TwoPairs,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three of a kind plus a pair.
    FullHouse,
    /// Four cards of one rank.
    FourOfAKind,
    /// A straight in a single suit.
    StraightFlush,
    /// An ace-containing straight flush.
    RoyalFlush,
    /// Aces and eights in clubs and spades.
    DeadMansHand,
}

impl HandRank {
    /// Returns the result text shown to the player.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::RoyalFlush => "Royal Flush!",
            Self::StraightFlush => "Straight Flush!",
            Self::FourOfAKind => "Four of a Kind!",
            Self::FullHouse => "Full House!",
            Self::Flush => "Flush!",
            Self::Straight => "Straight!",
            Self::ThreeOfAKind => "Three of a Kind!",
            Self::TwoPairs => "Two Pairs!",
            Self::PairJacksOrHigher => "Pair - Jacks or Higher!",
            Self::DeadMansHand => "Dead Man's Hand... again!",
            Self::NoWin => "No win",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Result of settling a round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundResult {
    /// The final hand.
    pub hand: Hand,
    /// The category the hand was scored as.
    pub rank: HandRank,
    /// The stake the round was played for.
    pub stake: f64,
    /// Amount credited to the balance (multiplier times stake).
    pub payout: f64,
    /// Balance after the payout.
    pub balance: f64,
}

impl RoundResult {
    /// Returns whether the round paid anything.
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.payout > 0.0
    }
}
