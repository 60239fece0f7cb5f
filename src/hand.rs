//! The player's five-card hand.

use alloc::vec::Vec;

use crate::card::Card;

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// A player's hand of five positional slots.
///
/// Each slot maps to a physical card position the player may hold or
/// replace. A slot is only empty when the deck ran out while filling it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hand {
    slots: [Option<Card>; HAND_SIZE],
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: [None; HAND_SIZE],
        }
    }

    /// Creates a hand from up to five cards, filling slots in order.
    ///
    /// Extra cards are ignored; missing cards leave trailing slots empty.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut hand = Self::new();
        for (slot, card) in hand.slots.iter_mut().zip(cards) {
            *slot = Some(*card);
        }
        hand
    }

    /// Returns the card in `index`, if the slot exists and is filled.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.slots.get(index).copied().flatten()
    }

    /// Replaces the slot at `index`.
    ///
    /// Returns `false` without changing anything if `index` is out of range.
    pub fn set(&mut self, index: usize, card: Option<Card>) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = card;
                true
            }
            None => false,
        }
    }

    /// Returns the slots in position order.
    #[must_use]
    pub const fn slots(&self) -> &[Option<Card>; HAND_SIZE] {
        &self.slots
    }

    /// Returns the filled slots' cards in position order.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.slots.iter().flatten().copied().collect()
    }

    /// Returns the number of filled slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Returns whether every slot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Returns whether all five slots hold a card.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Clears the hand for a new round.
    pub const fn clear(&mut self) {
        self.slots = [None; HAND_SIZE];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    const ACE: Card = Card::new(Rank::Ace, Suit::Spades);
    const KING: Card = Card::new(Rank::King, Suit::Hearts);

    #[test]
    fn from_cards_fills_in_order() {
        let hand = Hand::from_cards(&[ACE, KING]);
        assert_eq!(hand.get(0), Some(ACE));
        assert_eq!(hand.get(1), Some(KING));
        assert_eq!(hand.get(2), None);
        assert_eq!(hand.len(), 2);
        assert!(!hand.is_complete());
        assert!(!hand.is_empty());
    }

    #[test]
    fn set_ignores_out_of_range() {
        let mut hand = Hand::from_cards(&[ACE; 5]);
        assert!(hand.is_complete());
        assert!(!hand.set(5, Some(KING)));
        assert!(hand.set(4, Some(KING)));
        assert_eq!(hand.get(4), Some(KING));
        assert!(hand.set(0, None));
        assert_eq!(hand.cards(), [ACE, ACE, ACE, KING]);
        assert_eq!(hand.get(99), None);
    }

    #[test]
    fn clear_empties_all_slots() {
        let mut hand = Hand::from_cards(&[ACE, KING, ACE, KING, ACE]);
        hand.clear();
        assert!(hand.is_empty());
        assert_eq!(hand.len(), 0);
        assert_eq!(hand, Hand::new());
    }
}
