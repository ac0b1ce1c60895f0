//! Card value types and display identifiers.

use std::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Club,
    /// Diamonds.
    Diamond,
    /// Hearts.
    Heart,
    /// Spades.
    Spade,
}

impl Suit {
    /// The four suits, in generation order.
    pub const ALL: [Self; 4] = [Self::Club, Self::Spade, Self::Heart, Self::Diamond];

    /// Lowercase identifier used in card asset names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Club => "club",
            Self::Diamond => "diamond",
            Self::Heart => "heart",
            Self::Spade => "spade",
        }
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// The thirteen ranks, in generation order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Short identifier used in card asset names.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }

    /// Literal pip value for numeric ranks; `None` for faces and the ace.
    pub(crate) const fn pip_value(self) -> Option<u32> {
        match self {
            Self::Two => Some(2),
            Self::Three => Some(3),
            Self::Four => Some(4),
            Self::Five => Some(5),
            Self::Six => Some(6),
            Self::Seven => Some(7),
            Self::Eight => Some(8),
            Self::Nine => Some(9),
            Self::Ten => Some(10),
            Self::Jack | Self::Queen | Self::King | Self::Ace => None,
        }
    }
}

/// A playing card. Pure value, no identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Identifier presentation layers use to look up the card-face asset,
    /// e.g. `"Q_heart"`.
    #[must_use]
    pub fn asset_id(&self) -> String {
        format!("{}_{}", self.rank.symbol(), self.suit.name())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank.symbol(), self.suit.name())
    }
}

/// Asset identifier of the face-down card back. Display-only; a covered
/// card never participates in scoring.
pub const COVER_ID: &str = "card_cover";

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
