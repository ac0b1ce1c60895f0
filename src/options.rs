//! Table betting rules.

/// Betting rules for a table.
///
/// A [`Round`](crate::Round) copies these out at construction; changing
/// the options afterwards affects only future rounds.
///
/// ```
/// use twentyone::TableOptions;
///
/// let options = TableOptions::default().with_min_bet(25).with_max_bet(250);
/// assert_eq!(options.min_bet, 25);
/// assert_eq!(options.max_bet, 250);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Smallest accepted bet; also the balance a player needs to be seated.
    pub min_bet: usize,
    /// Largest accepted bet.
    pub max_bet: usize,
    /// Whether a seat may place further bets after its first.
    pub increase_allowed: bool,
    /// A bet is rejected once the seat's placement counter exceeds this.
    pub max_increases: u32,
    /// Default bankroll for newly added players.
    pub start_balance: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            min_bet: 10,
            max_bet: 500,
            increase_allowed: true,
            max_increases: 3,
            start_balance: 1_000,
        }
    }
}

impl TableOptions {
    /// Sets the minimum bet.
    #[must_use]
    pub const fn with_min_bet(mut self, min_bet: usize) -> Self {
        self.min_bet = min_bet;
        self
    }

    /// Sets the maximum bet.
    ///
    /// ```
    /// use twentyone::TableOptions;
    ///
    /// let options = TableOptions::default().with_max_bet(1_000);
    /// assert_eq!(options.max_bet, 1_000);
    /// ```
    #[must_use]
    pub const fn with_max_bet(mut self, max_bet: usize) -> Self {
        self.max_bet = max_bet;
        self
    }

    /// Sets whether seats may bet again after their first placement.
    ///
    /// When disallowed, doubling is blocked too: the extra placement it
    /// issues goes through the same gate.
    #[must_use]
    pub const fn with_increase_allowed(mut self, allowed: bool) -> Self {
        self.increase_allowed = allowed;
        self
    }

    /// Sets the bet placement cap.
    ///
    /// ```
    /// use twentyone::TableOptions;
    ///
    /// let options = TableOptions::default().with_max_increases(1);
    /// assert_eq!(options.max_increases, 1);
    /// ```
    #[must_use]
    pub const fn with_max_increases(mut self, max_increases: u32) -> Self {
        self.max_increases = max_increases;
        self
    }

    /// Sets the default bankroll for newly added players.
    #[must_use]
    pub const fn with_start_balance(mut self, start_balance: usize) -> Self {
        self.start_balance = start_balance;
        self
    }
}
