//! Five-card hand classification.
//!
//! Everything here is a pure function of the cards. Malformed input (fewer
//! than five cards, or the same card twice) scores as [`HandRank::NoWin`]
//! rather than failing.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Card, Rank, Suit};
use crate::hand::HAND_SIZE;
use crate::result::HandRank;

/// Occurrence count per rank value.
pub type RankCounts = HashMap<u8, u8>;

const DEAD_MANS_CARDS: [Card; 4] = [
    Card::new(Rank::Ace, Suit::Clubs),
    Card::new(Rank::Ace, Suit::Spades),
    Card::new(Rank::Eight, Suit::Clubs),
    Card::new(Rank::Eight, Suit::Spades),
];

const LOW_ACE_STRAIGHT: [u8; HAND_SIZE] = [2, 3, 4, 5, 14];

/// Classifies a hand.
///
/// Categories are checked from the most valuable down and the first match
/// wins, so a hand is never scored below the best category it satisfies.
///
/// # Example
///
/// ```
/// use vpoker::{Card, HandRank, evaluator};
///
/// let cards: Vec<Card> = ["TS", "JS", "QS", "KS", "AS"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// assert_eq!(evaluator::calculate_rank(&cards), HandRank::RoyalFlush);
/// ```
#[must_use]
pub fn calculate_rank(cards: &[Card]) -> HandRank {
    if cards.len() < HAND_SIZE || has_duplicates(cards) {
        return HandRank::NoWin;
    }

    let counts = rank_counts(cards);
    let unique = counts.len();
    let straight = is_straight(cards);
    let flush = is_flush(cards);

    if straight && flush && contains_rank(cards, Rank::Ace) {
        return HandRank::RoyalFlush;
    }
    if straight && flush {
        return HandRank::StraightFlush;
    }
    if has_count(&counts, 4) {
        return HandRank::FourOfAKind;
    }
    if has_count(&counts, 3) && has_count(&counts, 2) {
        return HandRank::FullHouse;
    }
    if flush {
        return HandRank::Flush;
    }
    if straight {
        return HandRank::Straight;
    }
    if has_count(&counts, 3) && has_count(&counts, 1) {
        return HandRank::ThreeOfAKind;
    }
    if has_count(&counts, 2) && unique == 3 {
        if is_dead_mans_hand(cards) {
            return HandRank::DeadMansHand;
        }
        return HandRank::TwoPairs;
    }
    if is_pair_jacks_or_higher(&counts) {
        return HandRank::PairJacksOrHigher;
    }
    HandRank::NoWin
}

/// Returns whether the ranks form a run of five.
///
/// The ace plays high, or low in exactly A-2-3-4-5. Runs do not wrap
/// around, so K-A-2-3-4 is not a straight.
#[must_use]
pub fn is_straight(cards: &[Card]) -> bool {
    if cards.len() != HAND_SIZE {
        return false;
    }

    let mut ranks: Vec<u8> = cards.iter().map(|c| c.rank.value()).collect();
    ranks.sort_unstable();

    ranks.windows(2).all(|w| w[0] + 1 == w[1]) || ranks == LOW_ACE_STRAIGHT
}

/// Returns whether every card shares the first card's suit.
///
/// Trivially true for zero or one card.
#[must_use]
pub fn is_flush(cards: &[Card]) -> bool {
    cards
        .first()
        .is_none_or(|first| cards.iter().all(|c| c.suit == first.suit))
}

/// Counts cards per rank value.
#[must_use]
pub fn rank_counts(cards: &[Card]) -> RankCounts {
    let mut counts = RankCounts::new();
    for card in cards {
        *counts.entry(card.rank.value()).or_insert(0) += 1;
    }
    counts
}

/// Returns the number of distinct ranks.
#[must_use]
pub fn uniq(cards: &[Card]) -> usize {
    rank_counts(cards).len()
}

/// Returns whether any card has `rank`.
#[must_use]
pub fn contains_rank(cards: &[Card], rank: Rank) -> bool {
    cards.iter().any(|c| c.rank == rank)
}

/// Returns whether `card` is present.
#[must_use]
pub fn contains_card(cards: &[Card], card: Card) -> bool {
    cards.contains(&card)
}

/// Returns whether the same card appears more than once.
#[must_use]
pub fn has_duplicates(cards: &[Card]) -> bool {
    cards
        .iter()
        .enumerate()
        .any(|(i, card)| cards[i + 1..].contains(card))
}

/// Returns the positions of the cards that make up the scored hand.
///
/// All five positions for straights, flushes and full houses; the matched
/// cards for quads, trips and pairs; nothing when the hand does not score.
///
/// # Example
///
/// ```
/// use vpoker::{Card, evaluator};
///
/// let cards: Vec<Card> = ["2H", "KS", "9D", "KC", "4S"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// assert_eq!(evaluator::winning_positions(&cards), [1, 3]);
/// ```
#[must_use]
pub fn winning_positions(cards: &[Card]) -> Vec<usize> {
    let wanted = match calculate_rank(cards) {
        HandRank::NoWin => return Vec::new(),
        HandRank::PairJacksOrHigher | HandRank::TwoPairs | HandRank::DeadMansHand => 2,
        HandRank::ThreeOfAKind => 3,
        HandRank::FourOfAKind => 4,
        HandRank::Straight
        | HandRank::Flush
        | HandRank::FullHouse
        | HandRank::StraightFlush
        | HandRank::RoyalFlush => return (0..cards.len()).collect(),
    };

    let counts = rank_counts(cards);
    cards
        .iter()
        .enumerate()
        .filter(|(_, c)| counts.get(&c.rank.value()) == Some(&wanted))
        .map(|(i, _)| i)
        .collect()
}

fn has_count(counts: &RankCounts, count: u8) -> bool {
    counts.values().any(|&c| c == count)
}

fn is_dead_mans_hand(cards: &[Card]) -> bool {
    DEAD_MANS_CARDS
        .iter()
        .all(|card| contains_card(cards, *card))
}

fn is_pair_jacks_or_higher(counts: &RankCounts) -> bool {
    if counts.len() != 4 {
        return false;
    }

    counts
        .iter()
        .find(|&(_, &count)| count == 2)
        .is_some_and(|(&rank, _)| rank >= Rank::Jack.value())
}
