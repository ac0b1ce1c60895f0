//! Hand scoring.

use crate::card::{Card, Rank};

/// The bust bound: hands above this score are out of contention.
pub const BLACKJACK: u32 = 21;

/// Scores a hand.
///
/// Numeric ranks (2–10) are summed first; face cards and aces are then
/// applied in hand order, faces at 10 each and every ace at 11 unless that
/// would push the running total past [`BLACKJACK`], in which case it
/// counts 1. The ace pass is greedy over draw order, not a best-possible
/// valuation, so e.g. `[A, 6, 6]` scores 13 rather than 13's optimal
/// equivalent being recomputed per ace.
#[must_use]
pub fn score(cards: &[Card]) -> u32 {
    let mut total: u32 = cards.iter().filter_map(|card| card.rank.pip_value()).sum();
    for card in cards {
        match card.rank {
            Rank::Jack | Rank::Queen | Rank::King => total += 10,
            Rank::Ace => total += if total + 11 > BLACKJACK { 1 } else { 11 },
            _ => {}
        }
    }
    total
}
