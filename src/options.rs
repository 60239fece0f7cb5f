//! Session configuration options.

/// Starting configuration for a video poker session.
///
/// The pay table is fixed; only the opening balance and the stake are
/// configurable. Use the builder methods to customize:
///
/// ```
/// use vpoker::GameOptions;
///
/// let options = GameOptions::default()
///     .with_balance(250.0)
///     .with_stake(5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameOptions {
    /// Opening balance.
    pub balance: f64,
    /// Amount wagered per hand.
    pub stake: f64,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            balance: 100.0,
            stake: 1.0,
        }
    }
}

impl GameOptions {
    /// Sets the opening balance.
    ///
    /// # Example
    ///
    /// ```
    /// use vpoker::GameOptions;
    ///
    /// let options = GameOptions::default().with_balance(20.0);
    /// assert_eq!(options.balance, 20.0);
    /// ```
    #[must_use]
    pub const fn with_balance(mut self, balance: f64) -> Self {
        self.balance = balance;
        self
    }

    /// Sets the stake.
    ///
    /// Negative or non-finite stakes are not rejected here; the session
    /// replaces them with zero when it starts.
    ///
    /// # Example
    ///
    /// ```
    /// use vpoker::GameOptions;
    ///
    /// let options = GameOptions::default().with_stake(2.0);
    /// assert_eq!(options.stake, 2.0);
    /// ```
    #[must_use]
    pub const fn with_stake(mut self, stake: f64) -> Self {
        self.stake = stake;
        self
    }
}
