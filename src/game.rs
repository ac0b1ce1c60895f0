//! Table lifecycle: dealer, roster, and rounds.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::NewRoundError;
use crate::options::TableOptions;
use crate::player::{Dealer, Player};
use crate::round::Round;
use crate::score::score;

/// A single table: the dealer, the player roster, and the round in
/// progress.
///
/// The roster outlives rounds; each round is built fresh by
/// [`Game::new_round`] and replaced wholesale, never mutated back into an
/// open state. One `Game` per logical thread of control; the engine has
/// no interior locking.
///
/// # Example
///
/// ```
/// use twentyone::{Dealer, Game, TableOptions};
///
/// let mut game = Game::new(Dealer::new("Dealer", 1_000_000, 17), TableOptions::default(), 42);
/// let you = game.add_self("You");
///
/// game.new_round().unwrap();
/// let (round, roster) = game.table_mut().unwrap();
/// round.place_bet(roster, you, 50).unwrap();
/// round.take_card(you).unwrap();
/// ```
#[derive(Debug)]
pub struct Game {
    options: TableOptions,
    players: Vec<Player>,
    dealer_id: u8,
    drop_from: u32,
    next_id: u8,
    cur_round: Option<Round>,
    rounds_started: u32,
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a table. The dealer is seated into the roster immediately
    /// and takes part in every round like any other player.
    #[must_use]
    pub fn new(dealer: Dealer, options: TableOptions, seed: u64) -> Self {
        let mut game = Self {
            options,
            players: Vec::new(),
            dealer_id: 0,
            drop_from: dealer.drop_from,
            next_id: 0,
            cur_round: None,
            rounds_started: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        game.dealer_id = game.push(Player::new(0, dealer.name, dealer.balance));
        game
    }

    fn push(&mut self, mut player: Player) -> u8 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        player.set_id(id);
        self.players.push(player);
        id
    }

    /// Adds a player with the table's configured starting bankroll.
    ///
    /// Returns the assigned player id.
    pub fn add_player(&mut self, name: impl Into<String>) -> u8 {
        let balance = self.options.start_balance;
        self.push(Player::new(0, name.into(), balance))
    }

    /// Adds a player with an explicit bankroll.
    pub fn add_player_with_balance(&mut self, name: impl Into<String>, balance: usize) -> u8 {
        self.push(Player::new(0, name.into(), balance))
    }

    /// Adds the seat the presentation layer plays as, with the configured
    /// starting bankroll.
    pub fn add_self(&mut self, name: impl Into<String>) -> u8 {
        let balance = self.options.start_balance;
        self.push(Player::new(0, name.into(), balance).into_self())
    }

    /// Removes a player from the roster.
    ///
    /// The dealer cannot be removed. A seat the player holds in the
    /// current round stays; its payout is dropped at settlement.
    pub fn remove_player(&mut self, id: u8) {
        if id == self.dealer_id {
            return;
        }
        self.players.retain(|player| player.id() != id);
    }

    /// Starts a new round, seating every roster player who can cover the
    /// minimum bet.
    ///
    /// # Errors
    ///
    /// [`NewRoundError::RoundInProgress`] while the current round is
    /// unfinished, [`NewRoundError::InsufficientPlayers`] when fewer than
    /// two roster players qualify. On failure the previous round, if any,
    /// is left untouched.
    pub fn new_round(&mut self) -> Result<&mut Round, NewRoundError> {
        if self.cur_round.as_ref().is_some_and(|round| !round.finished()) {
            return Err(NewRoundError::RoundInProgress);
        }
        let mut round = Round::new(&self.options, &mut self.rng)?;
        for player in &self.players {
            if player.balance() >= round.min_bet() {
                round.add_seat(player.id());
            }
        }
        if round.seats().len() < 2 {
            return Err(NewRoundError::InsufficientPlayers);
        }
        self.rounds_started += 1;
        log::info!(
            "round {} started with {} seats",
            self.rounds_started,
            round.seats().len()
        );
        Ok(self.cur_round.insert(round))
    }

    /// The current round paired with the roster borrow its money-moving
    /// operations need.
    pub fn table_mut(&mut self) -> Option<(&mut Round, &mut [Player])> {
        match self.cur_round.as_mut() {
            Some(round) => Some((round, self.players.as_mut_slice())),
            None => None,
        }
    }

    /// The round in progress (or the last finished one).
    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.cur_round.as_ref()
    }

    /// Whether the dealer's current hand still scores below the stand
    /// threshold.
    ///
    /// `false` when no round is live or the dealer is not seated; the host
    /// drives the actual draws.
    #[must_use]
    pub fn dealer_must_draw(&self) -> bool {
        self.cur_round.as_ref().is_some_and(|round| {
            !round.finished()
                && round
                    .seat(self.dealer_id)
                    .is_some_and(|seat| score(seat.cards()) < self.drop_from)
        })
    }

    /// Roster snapshot, dealer included.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Looks up a roster player.
    #[must_use]
    pub fn player(&self, id: u8) -> Option<&Player> {
        self.players.iter().find(|player| player.id() == id)
    }

    /// The dealer's roster id.
    #[must_use]
    pub const fn dealer_id(&self) -> u8 {
        self.dealer_id
    }

    /// The dealer's stand threshold.
    #[must_use]
    pub const fn drop_from(&self) -> u32 {
        self.drop_from
    }

    /// Number of rounds successfully started.
    #[must_use]
    pub const fn rounds_started(&self) -> u32 {
        self.rounds_started
    }

    /// The table's betting rules.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }
}
