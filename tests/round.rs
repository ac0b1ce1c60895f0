//! Deck and round integration tests.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use twentyone::{
    BetError, Card, DECK_SIZE, Deck, DeckError, DrawError, FinishError, FoldError, Player, Rank,
    Round, Suit, TableOptions,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn roster() -> Vec<Player> {
    vec![Player::new(1, "a", 100), Player::new(2, "b", 100)]
}

/// Round with two seated players (ids 1 and 2) over a scripted deck.
fn scripted_round(cards: Vec<Card>) -> Round {
    let options = TableOptions::default();
    let mut round = Round::with_deck(&options, Deck::from_cards(cards));
    round.add_seat(1);
    round.add_seat(2);
    round
}

fn balance(roster: &[Player], id: u8) -> usize {
    roster
        .iter()
        .find(|p| p.id() == id)
        .map_or(0, Player::balance)
}

#[test]
fn fresh_deck_covers_all_fifty_two_cards() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut deck = Deck::shuffled(&mut rng).unwrap();
    assert_eq!(deck.count(), DECK_SIZE);

    let mut seen = HashSet::new();
    while deck.count() > 0 {
        seen.insert(deck.take().unwrap());
    }
    assert_eq!(seen.len(), DECK_SIZE);
}

#[test]
fn deck_count_decreases_per_take() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut deck = Deck::shuffled(&mut rng).unwrap();
    for k in 1..=5 {
        deck.take().unwrap();
        assert_eq!(deck.count(), DECK_SIZE - k);
    }
}

#[test]
fn deck_take_past_the_end_is_an_error() {
    let mut rng = ChaCha8Rng::seed_from_u64(13);
    let mut deck = Deck::shuffled(&mut rng).unwrap();
    for _ in 0..DECK_SIZE {
        deck.take().unwrap();
    }
    assert!(deck.is_empty());
    assert_eq!(deck.take().unwrap_err(), DeckError::Exhausted);
}

#[test]
fn deck_is_built_from_shuffled_suit_blocks() {
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    let mut deck = Deck::shuffled(&mut rng).unwrap();
    let mut cards = Vec::new();
    while let Ok(c) = deck.take() {
        cards.push(c);
    }

    // Four contiguous 13-card blocks, one suit each, every block a
    // permutation of the 13 ranks.
    let mut block_suits = HashSet::new();
    for block in cards.chunks(13) {
        let suit = block[0].suit;
        assert!(block.iter().all(|c| c.suit == suit));
        let ranks: HashSet<Rank> = block.iter().map(|c| c.rank).collect();
        assert_eq!(ranks.len(), 13);
        block_suits.insert(suit);
    }
    assert_eq!(block_suits.len(), 4);
}

#[test]
fn same_seed_same_sequence() {
    let mut rng1 = ChaCha8Rng::seed_from_u64(99);
    let mut rng2 = ChaCha8Rng::seed_from_u64(99);
    let mut deck1 = Deck::shuffled(&mut rng1).unwrap();
    let mut deck2 = Deck::shuffled(&mut rng2).unwrap();
    for _ in 0..DECK_SIZE {
        assert_eq!(deck1.take().unwrap(), deck2.take().unwrap());
    }
}

#[test]
fn cards_render_for_display_and_asset_lookup() {
    let queen = card(Suit::Heart, Rank::Queen);
    assert_eq!(queen.to_string(), "Q of heart");
    assert_eq!(queen.asset_id(), "Q_heart");
    assert_eq!(card(Suit::Club, Rank::Ten).asset_id(), "10_club");
    assert_eq!(twentyone::COVER_ID, "card_cover");
}

#[test]
fn bet_debits_player_and_fills_bank() {
    let mut roster = roster();
    let mut round = scripted_round(Vec::new());

    round.place_bet(&mut roster, 1, 50).unwrap();
    assert_eq!(balance(&roster, 1), 50);
    assert_eq!(round.bank(), 50);
    assert_eq!(round.seat(1).unwrap().bet(), 50);
    assert_eq!(round.seat(1).unwrap().increases(), 1);
}

#[test]
fn over_balance_bet_changes_nothing() {
    let mut roster = roster();
    let mut round = scripted_round(Vec::new());

    let err = round.place_bet(&mut roster, 1, 150).unwrap_err();
    assert_eq!(err, BetError::InsufficientBalance);
    assert_eq!(balance(&roster, 1), 100);
    assert_eq!(round.bank(), 0);
    assert_eq!(round.seat(1).unwrap().bet(), 0);
    assert_eq!(round.seat(1).unwrap().increases(), 0);
}

#[test]
fn bets_outside_the_table_bounds_are_rejected() {
    let mut roster = roster();
    let mut round = scripted_round(Vec::new());

    assert_eq!(
        round.place_bet(&mut roster, 1, 5).unwrap_err(),
        BetError::OutOfBounds
    );
    assert_eq!(
        round.place_bet(&mut roster, 1, 501).unwrap_err(),
        BetError::OutOfBounds
    );
    // Both bounds are inclusive.
    assert_eq!((round.min_bet(), round.max_bet()), (10, 500));
    round.place_bet(&mut roster, 1, 10).unwrap();
    round.place_bet(&mut roster, 2, 100).unwrap();
}

#[test]
fn unknown_player_cannot_bet() {
    let mut roster = roster();
    let mut round = scripted_round(Vec::new());
    assert_eq!(
        round.place_bet(&mut roster, 9, 50).unwrap_err(),
        BetError::PlayerNotFound
    );
}

#[test]
fn increase_cap_kicks_in_once_the_counter_exceeds_it() {
    let options = TableOptions::default().with_max_increases(1);
    let mut roster = roster();
    let mut round = Round::with_deck(&options, Deck::from_cards(Vec::new()));
    round.add_seat(1);

    // The counter is checked before each placement with a strict greater-
    // than, so a cap of 1 still admits the second placement.
    round.place_bet(&mut roster, 1, 10).unwrap();
    round.place_bet(&mut roster, 1, 10).unwrap();
    assert_eq!(
        round.place_bet(&mut roster, 1, 10).unwrap_err(),
        BetError::TooManyIncreases
    );
    assert_eq!(round.seat(1).unwrap().bet(), 20);
}

#[test]
fn disallowed_increases_stop_after_the_first_bet() {
    let options = TableOptions::default().with_increase_allowed(false);
    let mut roster = roster();
    let mut round = Round::with_deck(&options, Deck::from_cards(Vec::new()));
    round.add_seat(1);

    round.place_bet(&mut roster, 1, 50).unwrap();
    assert_eq!(
        round.place_bet(&mut roster, 1, 50).unwrap_err(),
        BetError::TooManyIncreases
    );
    // Doubling goes through the same gate.
    assert_eq!(
        round.double_bet(&mut roster, 1).unwrap_err(),
        BetError::TooManyIncreases
    );
}

#[test]
fn fold_refunds_half_and_drains_the_bank_by_the_same_amount() {
    let mut roster = roster();
    let mut round = scripted_round(Vec::new());

    round.place_bet(&mut roster, 1, 55).unwrap();
    let refund = round.fold(&mut roster, 1).unwrap();
    assert_eq!(refund, 27);
    assert_eq!(balance(&roster, 1), 45 + 27);
    assert_eq!(round.bank(), 55 - 27);
    assert!(round.seat(1).unwrap().folded());
    assert_eq!(round.seat(1).unwrap().bet(), 28);
}

#[test]
fn folding_twice_is_rejected() {
    let mut roster = roster();
    let mut round = scripted_round(Vec::new());

    round.place_bet(&mut roster, 1, 50).unwrap();
    round.fold(&mut roster, 1).unwrap();
    assert_eq!(
        round.fold(&mut roster, 1).unwrap_err(),
        FoldError::AlreadyFolded
    );
}

#[test]
fn double_doubles_the_bet_and_limits_draws_to_one() {
    let mut roster = roster();
    let mut round = scripted_round(vec![
        card(Suit::Heart, Rank::Five),
        card(Suit::Club, Rank::Nine),
    ]);

    round.place_bet(&mut roster, 1, 40).unwrap();
    round.double_bet(&mut roster, 1).unwrap();
    assert!(round.seat(1).unwrap().is_doubled());
    assert_eq!(round.seat(1).unwrap().bet(), 80);
    assert_eq!(round.bank(), 80);
    assert_eq!(balance(&roster, 1), 20);

    round.take_card(1).unwrap();
    assert_eq!(
        round.take_card(1).unwrap_err(),
        DrawError::NoDrawsLeft,
        "a doubled seat gets exactly one further card"
    );
}

#[test]
fn doubling_twice_is_rejected() {
    let mut roster = roster();
    let mut round = scripted_round(Vec::new());

    round.place_bet(&mut roster, 1, 40).unwrap();
    round.double_bet(&mut roster, 1).unwrap();
    assert_eq!(
        round.double_bet(&mut roster, 1).unwrap_err(),
        BetError::AlreadyDoubled
    );
    assert_eq!(round.seat(1).unwrap().bet(), 80);
}

#[test]
fn take_card_moves_a_card_from_deck_to_hand() {
    let mut round = scripted_round(vec![
        card(Suit::Spade, Rank::King),
        card(Suit::Heart, Rank::Two),
    ]);

    let drawn = round.take_card(1).unwrap();
    assert_eq!(drawn, card(Suit::Spade, Rank::King));
    assert_eq!(round.seat(1).unwrap().cards(), &[drawn]);
    assert_eq!(round.deck().count(), 1);
}

#[test]
fn empty_deck_refuses_draws() {
    let mut round = scripted_round(Vec::new());
    assert_eq!(round.take_card(1).unwrap_err(), DrawError::DeckExhausted);
}

#[test]
fn finished_round_refuses_every_operation() {
    let mut roster = roster();
    let mut round = scripted_round(Vec::new());
    round.finish(&mut roster).unwrap();

    assert_eq!(round.take_card(1).unwrap_err(), DrawError::RoundFinished);
    assert_eq!(
        round.place_bet(&mut roster, 1, 50).unwrap_err(),
        BetError::RoundFinished
    );
    assert_eq!(
        round.double_bet(&mut roster, 1).unwrap_err(),
        BetError::RoundFinished
    );
    assert_eq!(
        round.fold(&mut roster, 1).unwrap_err(),
        FoldError::RoundFinished
    );
    assert_eq!(
        round.finish(&mut roster).unwrap_err(),
        FinishError::AlreadyFinished
    );
}

#[test]
fn highest_hand_takes_the_whole_bank() {
    let mut roster = roster();
    // Player 1 draws K+Q (20), player 2 draws 10+8 (18).
    let mut round = scripted_round(vec![
        card(Suit::Club, Rank::King),
        card(Suit::Diamond, Rank::Queen),
        card(Suit::Heart, Rank::Ten),
        card(Suit::Spade, Rank::Eight),
    ]);
    round.place_bet(&mut roster, 1, 50).unwrap();
    round.place_bet(&mut roster, 2, 50).unwrap();
    round.take_card(1).unwrap();
    round.take_card(1).unwrap();
    round.take_card(2).unwrap();
    round.take_card(2).unwrap();

    let winners = round.finish(&mut roster).unwrap();
    assert_eq!(winners, vec![1]);
    assert_eq!(balance(&roster, 1), 150);
    assert_eq!(balance(&roster, 2), 50);
    assert_eq!(round.bank(), 0);
    assert!(round.finished());
}

#[test]
fn busted_hand_is_out_of_contention() {
    let mut roster = roster();
    // Player 1 busts with 10+10+3 (23); player 2 stands on 10+9 (19).
    let mut round = scripted_round(vec![
        card(Suit::Club, Rank::Ten),
        card(Suit::Diamond, Rank::Ten),
        card(Suit::Heart, Rank::Three),
        card(Suit::Spade, Rank::Ten),
        card(Suit::Club, Rank::Nine),
    ]);
    round.place_bet(&mut roster, 1, 50).unwrap();
    round.place_bet(&mut roster, 2, 50).unwrap();
    for _ in 0..3 {
        round.take_card(1).unwrap();
    }
    round.take_card(2).unwrap();
    round.take_card(2).unwrap();

    let winners = round.finish(&mut roster).unwrap();
    assert_eq!(winners, vec![2]);
    assert_eq!(balance(&roster, 1), 50);
    assert_eq!(balance(&roster, 2), 150);
}

#[test]
fn all_bust_pushes_the_bank_back_to_every_seat() {
    let mut roster = roster();
    let mut round = scripted_round(vec![
        card(Suit::Club, Rank::Ten),
        card(Suit::Diamond, Rank::Ten),
        card(Suit::Heart, Rank::Five),
        card(Suit::Spade, Rank::Ten),
        card(Suit::Club, Rank::Nine),
        card(Suit::Diamond, Rank::Seven),
    ]);
    round.place_bet(&mut roster, 1, 50).unwrap();
    round.place_bet(&mut roster, 2, 50).unwrap();
    for _ in 0..3 {
        round.take_card(1).unwrap();
        round.take_card(2).unwrap();
    }

    let winners = round.finish(&mut roster).unwrap();
    assert!(winners.is_empty());
    // The full bank is split across the seated roster, busts included.
    assert_eq!(balance(&roster, 1), 100);
    assert_eq!(balance(&roster, 2), 100);
    assert_eq!(round.bank(), 0);
}

#[test]
fn tied_hands_split_the_bank() {
    let mut roster = roster();
    // Both players stand on 20; the bank of 101 splits 50/50, the odd
    // chip is dropped.
    let mut round = scripted_round(vec![
        card(Suit::Club, Rank::King),
        card(Suit::Diamond, Rank::Queen),
        card(Suit::Heart, Rank::Jack),
        card(Suit::Spade, Rank::Ten),
    ]);
    round.place_bet(&mut roster, 1, 51).unwrap();
    round.place_bet(&mut roster, 2, 50).unwrap();
    round.take_card(1).unwrap();
    round.take_card(1).unwrap();
    round.take_card(2).unwrap();
    round.take_card(2).unwrap();

    let winners = round.finish(&mut roster).unwrap();
    assert_eq!(winners.len(), 2);
    assert_eq!(balance(&roster, 1), 49 + 50);
    assert_eq!(balance(&roster, 2), 50 + 50);
    assert_eq!(round.bank(), 0);
}

#[test]
fn folded_seat_still_contends_at_settlement() {
    let mut roster = roster();
    // Player 1 folds on 20; player 2 stands on 18. The fold only costs
    // half the bet - the hand itself stays in contention.
    let mut round = scripted_round(vec![
        card(Suit::Club, Rank::King),
        card(Suit::Diamond, Rank::Queen),
        card(Suit::Heart, Rank::Ten),
        card(Suit::Spade, Rank::Eight),
    ]);
    round.place_bet(&mut roster, 1, 50).unwrap();
    round.place_bet(&mut roster, 2, 50).unwrap();
    round.take_card(1).unwrap();
    round.take_card(1).unwrap();
    round.take_card(2).unwrap();
    round.take_card(2).unwrap();
    round.fold(&mut roster, 1).unwrap();

    let winners = round.finish(&mut roster).unwrap();
    assert_eq!(winners, vec![1]);
    // 100 - 50 bet + 25 refund + 75 remaining bank.
    assert_eq!(balance(&roster, 1), 150);
}

#[test]
fn removed_seat_no_longer_plays() {
    let mut roster = roster();
    let mut round = scripted_round(vec![card(Suit::Club, Rank::Two)]);
    round.remove_seat(2);
    assert_eq!(round.seats().len(), 1);
    assert_eq!(
        round.place_bet(&mut roster, 2, 50).unwrap_err(),
        BetError::PlayerNotFound
    );
    assert_eq!(round.take_card(2).unwrap_err(), DrawError::PlayerNotFound);
}
