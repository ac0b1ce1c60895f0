//! Configuration-file collaborator.
//!
//! Mirrors the nested JSON layout table deployments ship with. The core
//! types never read files themselves; this module turns a file into plain
//! constructor inputs for [`Game`](crate::Game).
//!
//! ```
//! use twentyone::TableConfig;
//!
//! let config = TableConfig::from_json(
//!     r#"{
//!         "game": {"bet": {"min": 25, "max": 300, "increase": {"allow": true, "count": 2}}},
//!         "player": {"init": {"balance": 500}},
//!         "dealer": {"name": "Croupier", "behaviour": {"drop_from": 17}}
//!     }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.options().min_bet, 25);
//! assert_eq!(config.dealer(1_000_000).drop_from, 17);
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::options::TableOptions;
use crate::player::Dealer;

/// Root of a table configuration file.
///
/// Unknown sections (window titles, asset paths, and the like) are
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TableConfig {
    /// `game.*`: table rules.
    pub game: GameSection,
    /// `player.*`: player defaults.
    pub player: PlayerSection,
    /// `dealer.*`: dealer identity and behaviour.
    pub dealer: DealerSection,
}

/// `game.*` section.
#[derive(Debug, Clone, Deserialize)]
pub struct GameSection {
    /// Betting bounds and increase rules.
    pub bet: BetSection,
}

/// `game.bet.*` section.
#[derive(Debug, Clone, Deserialize)]
pub struct BetSection {
    /// Smallest accepted bet.
    pub min: usize,
    /// Largest accepted bet.
    pub max: usize,
    /// Increase rules.
    pub increase: IncreaseSection,
}

/// `game.bet.increase.*` section.
#[derive(Debug, Clone, Deserialize)]
pub struct IncreaseSection {
    /// Whether bets may be raised after the first placement.
    pub allow: bool,
    /// Bet placement cap.
    pub count: u32,
}

/// `player.*` section.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerSection {
    /// New-player defaults.
    pub init: PlayerInitSection,
}

/// `player.init.*` section.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerInitSection {
    /// Starting bankroll.
    pub balance: usize,
}

/// `dealer.*` section.
#[derive(Debug, Clone, Deserialize)]
pub struct DealerSection {
    /// Dealer display name.
    pub name: String,
    /// Behaviour settings.
    pub behaviour: DealerBehaviourSection,
}

/// `dealer.behaviour.*` section.
#[derive(Debug, Clone, Deserialize)]
pub struct DealerBehaviourSection {
    /// Score at which the dealer stops drawing.
    pub drop_from: u32,
}

impl TableConfig {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the text is not valid
    /// configuration JSON.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Parse`] when its contents do not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// The betting rules this configuration describes.
    #[must_use]
    pub fn options(&self) -> TableOptions {
        TableOptions::default()
            .with_min_bet(self.game.bet.min)
            .with_max_bet(self.game.bet.max)
            .with_increase_allowed(self.game.bet.increase.allow)
            .with_max_increases(self.game.bet.increase.count)
            .with_start_balance(self.player.init.balance)
    }

    /// The dealer this configuration describes.
    ///
    /// The bankroll is not a file setting; deployments pick it in code.
    #[must_use]
    pub fn dealer(&self, balance: usize) -> Dealer {
        Dealer::new(
            self.dealer.name.clone(),
            balance,
            self.dealer.behaviour.drop_from,
        )
    }
}
