use tracing::debug;

use crate::error::StakeError;

use super::Game;

impl Game {
    /// Sets the amount wagered per hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the stake is negative or not finite. The stake is
    /// left unchanged in that case.
    pub fn set_stake(&mut self, stake: f64) -> Result<(), StakeError> {
        if !stake.is_finite() {
            return Err(StakeError::NotFinite);
        }
        if stake < 0.0 {
            return Err(StakeError::Negative);
        }

        self.stake = stake;
        Ok(())
    }

    /// Takes the stake out of the balance for a new hand.
    ///
    /// Does nothing when the balance cannot cover the stake, so staking
    /// never drives the balance negative.
    pub fn update_balance(&mut self) {
        if self.balance >= self.stake {
            self.balance -= self.stake;
            debug!(stake = self.stake, balance = self.balance, "stake taken");
        }
    }

    /// Returns whether the balance is positive and covers the stake.
    ///
    /// Callers check this before dealing; the session itself does not.
    #[must_use]
    pub fn has_sufficient_funds(&self) -> bool {
        self.balance > 0.0 && self.balance >= self.stake
    }
}

#[cfg(test)]
mod tests {
    #![expect(clippy::float_cmp, reason = "amounts are exact in binary")]

    use crate::{Game, GameOptions, StakeError};

    fn game(balance: f64, stake: f64) -> Game {
        Game::new(
            GameOptions::default()
                .with_balance(balance)
                .with_stake(stake),
            1,
        )
    }

    #[test]
    fn funds_check() {
        assert!(!game(0.0, 1.0).has_sufficient_funds());
        assert!(game(5.0, 5.0).has_sufficient_funds());
        assert!(!game(-5.0, 1.0).has_sufficient_funds());
        assert!(game(10.0, 0.0).has_sufficient_funds());
        assert!(!game(5.0, 10.0).has_sufficient_funds());
        assert!(game(999_999.0, 1.0).has_sufficient_funds());
    }

    #[test]
    fn update_balance_never_overdraws() {
        let mut g = game(0.0, 1.0);
        g.update_balance();
        assert_eq!(g.balance(), 0.0);

        let mut g = game(100.0, 1000.0);
        g.update_balance();
        assert_eq!(g.balance(), 100.0);

        let mut g = game(100.0, 0.0);
        g.update_balance();
        assert_eq!(g.balance(), 100.0);
    }

    #[test]
    fn fractional_amounts() {
        let mut g = game(2.5, 1.0);
        g.update_balance();
        assert_eq!(g.balance(), 1.5);
        assert!(g.has_sufficient_funds());
        g.update_balance();
        assert_eq!(g.balance(), 0.5);
        assert!(!g.has_sufficient_funds());

        let mut g = game(100.0, 0.5);
        g.update_balance();
        assert_eq!(g.balance(), 99.5);
    }

    #[test]
    fn rejects_negative_and_non_finite_stakes() {
        let mut g = game(100.0, 1.0);
        assert_eq!(g.set_stake(-1.0), Err(StakeError::Negative));
        assert_eq!(g.set_stake(f64::NAN), Err(StakeError::NotFinite));
        assert_eq!(g.set_stake(f64::INFINITY), Err(StakeError::NotFinite));
        assert_eq!(g.stake(), 1.0);

        g.update_balance();
        assert_eq!(g.balance(), 99.0);
    }

    #[test]
    fn configured_negative_stake_becomes_zero() {
        let mut g = game(100.0, -1.0);
        assert_eq!(g.stake(), 0.0);
        g.update_balance();
        assert_eq!(g.balance(), 100.0);
    }
}
