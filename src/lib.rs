//! A single-table twenty-one game engine.
//!
//! The crate manages a shared 52-card deck, per-player betting state, card
//! dealing, hand scoring, and round settlement for one dealer plus any
//! number of players. It renders nothing and persists nothing: a
//! presentation layer (GUI, TUI, network API) drives it through [`Game`]
//! and [`Round`] operations and reads state back through their queries.
//!
//! # Example
//!
//! ```
//! use twentyone::{Dealer, Game, TableOptions};
//!
//! let dealer = Dealer::new("Dealer", 1_000_000, 17);
//! let mut game = Game::new(dealer, TableOptions::default(), 42);
//! let you = game.add_self("You");
//! let rival = game.add_player("Rival");
//!
//! game.new_round().unwrap();
//! let (round, roster) = game.table_mut().unwrap();
//! round.place_bet(roster, you, 50).unwrap();
//! round.place_bet(roster, rival, 50).unwrap();
//! round.take_card(you).unwrap();
//! round.take_card(rival).unwrap();
//! let winners = round.finish(roster).unwrap();
//! assert!(!winners.is_empty() || round.bank() == 0);
//! ```

pub mod card;
pub mod config;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod round;
pub mod score;
pub mod seat;

// Re-export main types
pub use card::{COVER_ID, Card, DECK_SIZE, Rank, Suit};
pub use config::TableConfig;
pub use deck::Deck;
pub use error::{
    BetError, ConfigError, DeckError, DrawError, FinishError, FoldError, NewRoundError,
};
pub use game::Game;
pub use options::TableOptions;
pub use player::{Dealer, Player};
pub use round::Round;
pub use score::{BLACKJACK, score};
pub use seat::Seat;
