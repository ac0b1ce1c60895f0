//! Round orchestration: betting, dealing, settlement.

use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{BetError, DeckError, DrawError, FinishError, FoldError};
use crate::options::TableOptions;
use crate::player::Player;
use crate::score::{BLACKJACK, score};
use crate::seat::Seat;

/// One hand of play across all seated players.
///
/// A round owns its deck, its seats, and the bank. The betting rules are
/// copied out of [`TableOptions`] at construction and stay fixed for the
/// round's lifetime. Operations that move money take the player roster as
/// an explicit `&mut [Player]`; [`Game::table_mut`](crate::Game::table_mut)
/// provides the paired borrow.
///
/// A rejected operation leaves deck, bank, seats, and balances exactly as
/// they were before the call.
#[derive(Debug)]
pub struct Round {
    deck: Deck,
    seats: Vec<Seat>,
    bank: usize,
    min_bet: usize,
    max_bet: usize,
    increase_allowed: bool,
    max_increases: u32,
    finished: bool,
}

impl Round {
    /// Creates a round with a freshly shuffled deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Integrity`] if deck generation misfires.
    pub fn new(options: &TableOptions, rng: &mut ChaCha8Rng) -> Result<Self, DeckError> {
        Ok(Self::with_deck(options, Deck::shuffled(rng)?))
    }

    /// Creates a round around an explicit deck (scripted layouts).
    #[must_use]
    pub fn with_deck(options: &TableOptions, deck: Deck) -> Self {
        Self {
            deck,
            seats: Vec::new(),
            bank: 0,
            min_bet: options.min_bet,
            max_bet: options.max_bet,
            increase_allowed: options.increase_allowed,
            max_increases: options.max_increases,
            finished: false,
        }
    }

    fn find_seat(seats: &mut [Seat], player: u8) -> Option<&mut Seat> {
        seats.iter_mut().find(|seat| seat.player() == player)
    }

    fn find_player(roster: &mut [Player], player: u8) -> Option<&mut Player> {
        roster.iter_mut().find(|p| p.id() == player)
    }

    /// Seats a player.
    pub fn add_seat(&mut self, player: u8) {
        self.seats.push(Seat::new(player));
    }

    /// Removes a player's seat, if present. Any bet it held stays in the
    /// bank.
    pub fn remove_seat(&mut self, player: u8) {
        self.seats.retain(|seat| seat.player() != player);
    }

    /// Draws the next card from the deck into the player's hand.
    ///
    /// # Errors
    ///
    /// Rejected once the round is finished, when the seat's draw budget is
    /// spent, or when the deck is exhausted. The budget is checked before
    /// the deck is touched so a refused draw consumes no card.
    pub fn take_card(&mut self, player: u8) -> Result<Card, DrawError> {
        if self.finished {
            return Err(DrawError::RoundFinished);
        }
        let seat = Self::find_seat(&mut self.seats, player).ok_or(DrawError::PlayerNotFound)?;
        if !seat.can_draw() {
            return Err(DrawError::NoDrawsLeft);
        }
        let card = self.deck.take().map_err(|_| DrawError::DeckExhausted)?;
        seat.put_card(card)?;
        log::debug!("player {player} drew a card, {} left in deck", self.deck.count());
        Ok(card)
    }

    /// Places (or raises) a bet for the player and banks it.
    ///
    /// # Errors
    ///
    /// Checked in order: round state, increase allowance, table bounds
    /// (inclusive on both ends), player balance. Nothing is debited unless
    /// every check passes.
    pub fn place_bet(
        &mut self,
        roster: &mut [Player],
        player: u8,
        amount: usize,
    ) -> Result<(), BetError> {
        if self.finished {
            return Err(BetError::RoundFinished);
        }
        let seat = Self::find_seat(&mut self.seats, player).ok_or(BetError::PlayerNotFound)?;
        if seat.increases() > self.max_increases {
            return Err(BetError::TooManyIncreases);
        }
        if !self.increase_allowed && seat.increases() > 0 {
            return Err(BetError::TooManyIncreases);
        }
        if amount < self.min_bet || amount > self.max_bet {
            return Err(BetError::OutOfBounds);
        }
        let owner = Self::find_player(roster, player).ok_or(BetError::PlayerNotFound)?;
        seat.place_bet(owner, amount)?;
        self.bank += amount;
        log::debug!("player {player} bet {amount}, bank at {}", self.bank);
        Ok(())
    }

    /// Doubles the player's bet through the normal bet path and limits the
    /// seat to exactly one further draw.
    ///
    /// # Errors
    ///
    /// Rejected when already doubled; the re-placed amount is subject to
    /// every [`Round::place_bet`] check.
    pub fn double_bet(&mut self, roster: &mut [Player], player: u8) -> Result<(), BetError> {
        if self.finished {
            return Err(BetError::RoundFinished);
        }
        let seat = Self::find_seat(&mut self.seats, player).ok_or(BetError::PlayerNotFound)?;
        if seat.is_doubled() {
            return Err(BetError::AlreadyDoubled);
        }
        let amount = seat.bet();
        self.place_bet(roster, player, amount)?;
        if let Some(seat) = Self::find_seat(&mut self.seats, player) {
            seat.double();
        }
        log::debug!("player {player} doubled to {}", amount * 2);
        Ok(())
    }

    /// Folds the player's seat: half the bet (floor) goes back to the
    /// player and leaves the bank; the rest stays in contention for the
    /// winners.
    ///
    /// # Errors
    ///
    /// Rejected once the round is finished or the seat already folded.
    pub fn fold(&mut self, roster: &mut [Player], player: u8) -> Result<usize, FoldError> {
        if self.finished {
            return Err(FoldError::RoundFinished);
        }
        let seat = Self::find_seat(&mut self.seats, player).ok_or(FoldError::PlayerNotFound)?;
        if seat.folded() {
            return Err(FoldError::AlreadyFolded);
        }
        let owner = Self::find_player(roster, player).ok_or(FoldError::PlayerNotFound)?;
        let refund = seat.fold(owner);
        self.bank -= refund;
        log::debug!("player {player} folded, {refund} refunded");
        Ok(refund)
    }

    /// Settles the round and returns the winners' player ids.
    ///
    /// Busted hands are out of contention; every remaining seat at the top
    /// score wins, and the bank is split between the winners by floor
    /// division. When every seat busts, the winner set is empty and the
    /// whole seated roster is paid the split instead. The division residue
    /// is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`FinishError::AlreadyFinished`] on a second settlement.
    pub fn finish(&mut self, roster: &mut [Player]) -> Result<Vec<u8>, FinishError> {
        if self.finished {
            return Err(FinishError::AlreadyFinished);
        }

        let top = self
            .seats
            .iter()
            .map(|seat| score(seat.cards()))
            .filter(|&total| total <= BLACKJACK)
            .max();
        let winners: Vec<u8> = top.map_or_else(Vec::new, |top| {
            self.seats
                .iter()
                .filter(|seat| score(seat.cards()) == top)
                .map(Seat::player)
                .collect()
        });

        let targets: Vec<u8> = if winners.is_empty() {
            self.seats.iter().map(Seat::player).collect()
        } else {
            winners.clone()
        };

        if targets.is_empty() {
            log::debug!("round settled with no seats, bank of {} dropped", self.bank);
        } else {
            let share = self.bank / targets.len();
            for id in &targets {
                match Self::find_player(roster, *id) {
                    Some(target) => target.credit(share),
                    None => log::debug!("player {id} left before settlement, share dropped"),
                }
            }
            log::info!(
                "round settled: {} winner(s), {share} per share",
                winners.len()
            );
        }
        self.bank = 0;
        self.finished = true;
        Ok(winners)
    }

    /// The seated players' round state, in seating order.
    #[must_use]
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// The seat belonging to the given player, if seated.
    #[must_use]
    pub fn seat(&self, player: u8) -> Option<&Seat> {
        self.seats.iter().find(|seat| seat.player() == player)
    }

    /// The pool of placed bets awaiting settlement.
    #[must_use]
    pub const fn bank(&self) -> usize {
        self.bank
    }

    /// The round's deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Minimum accepted bet; also the seating threshold.
    #[must_use]
    pub const fn min_bet(&self) -> usize {
        self.min_bet
    }

    /// Maximum accepted bet.
    #[must_use]
    pub const fn max_bet(&self) -> usize {
        self.max_bet
    }

    /// Whether the round has been settled.
    #[must_use]
    pub const fn finished(&self) -> bool {
        self.finished
    }
}
