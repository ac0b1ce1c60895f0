//! Player identity and bankroll, plus the dealer profile.

/// A roster participant: identity plus a mutable bankroll.
///
/// The balance only moves through bets, fold refunds, and settlement. No
/// lower bound is enforced at this layer; bet checks upstream keep it
/// from going negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: u8,
    name: String,
    balance: usize,
    is_self: bool,
}

impl Player {
    /// Creates a player.
    ///
    /// Ids are normally assigned by [`Game`](crate::Game); standalone
    /// construction is for driving a [`Round`](crate::Round) directly.
    #[must_use]
    pub fn new(id: u8, name: impl Into<String>, balance: usize) -> Self {
        Self {
            id,
            name: name.into(),
            balance,
            is_self: false,
        }
    }

    /// Marks this player as the seat the presentation layer plays as.
    #[must_use]
    pub fn into_self(mut self) -> Self {
        self.is_self = true;
        self
    }

    /// Table-assigned id.
    #[must_use]
    pub const fn id(&self) -> u8 {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current bankroll.
    #[must_use]
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Whether this is the presentation layer's own seat.
    #[must_use]
    pub const fn is_self(&self) -> bool {
        self.is_self
    }

    pub(crate) const fn set_id(&mut self, id: u8) {
        self.id = id;
    }

    pub(crate) const fn credit(&mut self, amount: usize) {
        self.balance += amount;
    }

    /// Callers check the balance first; see the type-level note.
    pub(crate) const fn debit(&mut self, amount: usize) {
        self.balance -= amount;
    }
}

/// Dealer construction input: identity, bankroll, and the stand threshold.
///
/// The [`Game`](crate::Game) seats the dealer as an ordinary roster player
/// and keeps the threshold beside the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dealer {
    /// Display name.
    pub name: String,
    /// Starting bankroll.
    pub balance: usize,
    /// Score at which the dealer stops drawing.
    pub drop_from: u32,
}

impl Dealer {
    /// Creates a dealer profile.
    #[must_use]
    pub fn new(name: impl Into<String>, balance: usize, drop_from: u32) -> Self {
        Self {
            name: name.into(),
            balance,
            drop_from,
        }
    }
}
