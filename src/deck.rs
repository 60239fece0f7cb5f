//! The 52-card deck.

use alloc::vec::Vec;
use core::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// An ordered, consumable deck of cards.
///
/// A fresh deck holds every rank of every suit exactly once, suits in
/// [`Suit::ALL`] order and ranks ascending within each suit. Cards are taken
/// from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full deck in canonical order.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        Self { cards }
    }

    /// Creates a deck that deals `cards` in the given order.
    ///
    /// No membership checks are made, so this can stack duplicates or a
    /// partial deck.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles the remaining cards in place.
    ///
    /// Uses a Fisher-Yates shuffle, so every ordering is equally likely for
    /// a uniform `rng`.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns up to `n` cards from the front of the deck.
    ///
    /// Returns fewer than `n` cards, possibly none, when the deck runs out.
    pub fn take(&mut self, n: usize) -> Vec<Card> {
        let n = n.min(self.cards.len());
        self.cards.drain(..n).collect()
    }

    /// Removes and returns the front card, if any.
    pub fn take_one(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    /// Returns the remaining cards, front first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn sorted(cards: &[Card]) -> Vec<(u8, u8)> {
        let mut keys: Vec<(u8, u8)> = cards
            .iter()
            .map(|c| (c.suit.ordinal(), c.rank.value()))
            .collect();
        keys.sort_unstable();
        keys
    }

    #[test]
    fn new_deck_is_canonical() {
        let deck = Deck::new();
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(deck.cards()[0], Card::new(Rank::Two, Suit::Spades));
        assert_eq!(deck.cards()[12], Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(deck.cards()[13], Card::new(Rank::Two, Suit::Hearts));
        assert_eq!(deck.cards()[51], Card::new(Rank::Ace, Suit::Clubs));

        let mut keys = sorted(deck.cards());
        keys.dedup();
        assert_eq!(keys.len(), DECK_SIZE);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut deck = Deck::new();
        let before = sorted(deck.cards());

        for _ in 0..5 {
            deck.shuffle(&mut rng);
        }

        assert_eq!(deck.len(), DECK_SIZE);
        assert_ne!(deck, Deck::new());
        assert_eq!(sorted(deck.cards()), before);
    }

    #[test]
    fn take_conserves_cards() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);

        let mut taken = Vec::new();
        for n in [0, 5, 1, 13, 20] {
            let before = deck.len();
            let cards = deck.take(n);
            assert_eq!(cards.len(), n.min(before));
            assert_eq!(deck.len(), before - cards.len());
            taken.extend(cards);
        }

        let short = deck.take(100);
        assert_eq!(short.len(), 13);
        assert!(deck.is_empty());
        taken.extend(short);

        assert!(deck.take(5).is_empty());
        assert_eq!(deck.take_one(), None);
        assert_eq!(sorted(&taken), sorted(Deck::new().cards()));
    }

    #[test]
    fn take_returns_front_cards_in_order() {
        let mut deck = Deck::new();
        let cards = deck.take(2);
        assert_eq!(
            cards,
            [
                Card::new(Rank::Two, Suit::Spades),
                Card::new(Rank::Three, Suit::Spades)
            ]
        );
        assert_eq!(deck.take_one(), Some(Card::new(Rank::Four, Suit::Spades)));
        assert_eq!(deck.len(), 49);
    }

    #[test]
    fn display_lists_cards() {
        let deck = Deck::from_cards(alloc::vec![
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Two, Suit::Hearts),
        ]);
        assert_eq!(deck.to_string(), "Ace of Spades, Deuce of Hearts");
        assert_eq!(Deck::from_cards(Vec::new()).to_string(), "");
    }
}
