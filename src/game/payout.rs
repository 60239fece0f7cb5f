use tracing::debug;

use crate::evaluator;
use crate::result::{HandRank, RoundResult};

use super::Game;

/// Stake that earns the royal flush jackpot.
pub const MAX_STAKE: f64 = 5.0;

const ROYAL_FLUSH_JACKPOT: f64 = 4000.0;

/// Returns the pay table multiplier for `rank` at `stake`.
///
/// Only the royal flush depends on the stake: it pays the jackpot at
/// [`MAX_STAKE`] and 250 otherwise.
fn multiplier(rank: HandRank, stake: f64) -> f64 {
    match rank {
        HandRank::RoyalFlush if stake == MAX_STAKE => ROYAL_FLUSH_JACKPOT,
        HandRank::RoyalFlush => 250.0,
        HandRank::StraightFlush => 50.0,
        HandRank::FourOfAKind => 25.0,
        HandRank::FullHouse => 9.0,
        HandRank::Flush => 6.0,
        HandRank::Straight => 4.0,
        HandRank::ThreeOfAKind => 3.0,
        HandRank::TwoPairs => 2.0,
        HandRank::PairJacksOrHigher => 1.0,
        HandRank::DeadMansHand | HandRank::NoWin => 0.0,
    }
}

impl Game {
    /// Returns the pay table multiplier for `rank` at the current stake.
    ///
    /// `None` (no rank computed yet) pays nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use vpoker::{Game, GameOptions, HandRank};
    ///
    /// let game = Game::new(GameOptions::default().with_stake(5.0), 0);
    /// assert_eq!(game.payout(HandRank::RoyalFlush), 4000.0);
    /// assert_eq!(game.payout(HandRank::Flush), 6.0);
    /// assert_eq!(game.payout(None), 0.0);
    /// ```
    pub fn payout(&self, rank: impl Into<Option<HandRank>>) -> f64 {
        rank.into().map_or(0.0, |rank| multiplier(rank, self.stake))
    }

    /// Records `rank` for this round and credits its payout.
    ///
    /// The payout is the multiplier times the stake, added as one sum when
    /// positive.
    pub fn settle(&mut self, rank: HandRank) -> RoundResult {
        self.rank = Some(rank);

        let payout = self.payout(rank) * self.stake;
        if payout > 0.0 {
            self.balance += payout;
        }
        debug!(%rank, payout, balance = self.balance, "round settled");

        RoundResult {
            hand: self.hand,
            rank,
            stake: self.stake,
            payout,
            balance: self.balance,
        }
    }

    /// Scores the current hand and credits any payout.
    pub fn calculate_rank(&mut self) -> RoundResult {
        let rank = evaluator::calculate_rank(&self.hand.cards());
        self.settle(rank)
    }
}

#[cfg(test)]
mod tests {
    #![expect(clippy::float_cmp, reason = "amounts are exact in binary")]

    use rstest::rstest;

    use crate::{Card, Deck, Game, GameOptions, HandRank};

    #[rstest]
    #[case(HandRank::StraightFlush, 50.0)]
    #[case(HandRank::FourOfAKind, 25.0)]
    #[case(HandRank::FullHouse, 9.0)]
    #[case(HandRank::Flush, 6.0)]
    #[case(HandRank::Straight, 4.0)]
    #[case(HandRank::ThreeOfAKind, 3.0)]
    #[case(HandRank::TwoPairs, 2.0)]
    #[case(HandRank::PairJacksOrHigher, 1.0)]
    #[case(HandRank::DeadMansHand, 0.0)]
    #[case(HandRank::NoWin, 0.0)]
    fn pay_table(#[case] rank: HandRank, #[case] expected: f64) {
        let game = Game::new(GameOptions::default().with_stake(1.0), 0);
        assert_eq!(game.payout(rank), expected);
    }

    #[rstest]
    #[case(5.0, 4000.0)]
    #[case(1.0, 250.0)]
    #[case(4.0, 250.0)]
    #[case(0.5, 250.0)]
    fn royal_flush_jackpot_needs_max_stake(#[case] stake: f64, #[case] expected: f64) {
        let game = Game::new(GameOptions::default().with_stake(stake), 0);
        assert_eq!(game.payout(HandRank::RoyalFlush), expected);
    }

    #[test]
    fn unknown_rank_pays_nothing() {
        let game = Game::default();
        assert_eq!(game.payout(None), 0.0);
    }

    #[test]
    fn calculate_rank_scores_the_dealt_hand() {
        let cards: alloc::vec::Vec<Card> = ["JS", "JH", "2D", "5C", "9S"]
            .iter()
            .map(|s| s.parse().expect("valid card"))
            .collect();
        let mut game = Game::new(GameOptions::default().with_balance(10.0), 0);
        game.deck = Deck::from_cards(cards);
        game.update_balance();
        game.deal();

        let result = game.calculate_rank();

        assert_eq!(result.rank, HandRank::PairJacksOrHigher);
        assert_eq!(result.payout, 1.0);
        assert_eq!(game.balance(), 10.0);
        assert_eq!(game.rank(), Some(HandRank::PairJacksOrHigher));
        assert!(result.is_win());
    }
}
