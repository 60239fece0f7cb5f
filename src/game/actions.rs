use tracing::{debug, warn};

use crate::hand::{HAND_SIZE, Hand};

use super::{Game, GameState};

impl Game {
    /// Deals a new five-card hand from the front of the deck.
    ///
    /// If fewer than five cards remain, the trailing slots stay empty and
    /// the hand will score as no win. The previous rank is cleared.
    pub fn deal(&mut self) {
        let cards = self.deck.take(HAND_SIZE);
        if cards.len() < HAND_SIZE {
            warn!(dealt = cards.len(), "deck ran short while dealing");
        }

        self.hand = Hand::from_cards(&cards);
        self.rank = None;
        self.state = GameState::AwaitingDraw;
        debug!(remaining = self.deck.len(), "hand dealt");
    }

    /// Replaces the cards at `indexes` with cards from the deck.
    ///
    /// Positions not listed are held. Each listed position takes one card,
    /// so a repeated index is replaced twice. Indexes outside the hand are
    /// skipped without consuming a card. A listed slot is left empty if the
    /// deck has run out.
    pub fn draw(&mut self, indexes: &[usize]) {
        for &index in indexes {
            if index >= HAND_SIZE {
                warn!(index, "ignoring draw index outside the hand");
                continue;
            }

            let card = self.deck.take_one();
            if card.is_none() {
                warn!(index, "deck ran out while drawing");
            }
            self.hand.set(index, card);
        }

        self.state = GameState::AwaitingDeal;
        debug!(replaced = indexes.len(), remaining = self.deck.len(), "cards drawn");
    }
}
