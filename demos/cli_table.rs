//! CLI table example: one player against the dealer.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{BLACKJACK, COVER_ID, Dealer, Game, NewRoundError, Round, Seat, TableOptions, score};

fn main() {
    println!("Twenty-one CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = TableOptions::default();
    let mut game = Game::new(Dealer::new("Dealer", 1_000_000_000, 17), options, seed);

    let you = game.add_self("You");
    let dealer = game.dealer_id();

    loop {
        match game.new_round() {
            Ok(_) => {}
            Err(NewRoundError::InsufficientPlayers) => {
                println!("You can no longer cover the minimum bet. Game over.");
                break;
            }
            Err(err) => {
                println!("Cannot start a round: {err}");
                break;
            }
        }

        // Initial deal: two cards each, dealer's first card face down.
        if let Some((round, _)) = game.table_mut() {
            for _ in 0..2 {
                if round.take_card(dealer).is_err() || round.take_card(you).is_err() {
                    println!("The deck ran dry during the deal.");
                    return;
                }
            }
        }

        let balance = game.player(you).map_or(0, |p| p.balance());
        let min = game.options().min_bet;
        let max = game.options().max_bet.min(balance);
        let Some(bet) = prompt_usize(&format!("Bet amount ({min}-{max}, 0 to quit): ")) else {
            break;
        };
        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        if let Some((round, roster)) = game.table_mut() {
            // The dealer mirrors the player's stake.
            if let Err(err) = round.place_bet(roster, you, bet) {
                println!("Bet error: {err}");
                let _ = round.finish(roster);
                continue;
            }
            if let Err(err) = round.place_bet(roster, dealer, bet) {
                println!("Dealer bet error: {err}");
            }
        }

        play_hand(&mut game, you, dealer);

        let round_no = game.rounds_started();
        let balance = game.player(you).map_or(0, |p| p.balance());
        println!("After round {round_no}: your balance is {balance}.\n");
    }
}

fn play_hand(game: &mut Game, you: u8, dealer: u8) {
    loop {
        print_table(game, you, dealer);
        let action = prompt_line("Action (h)it, (d)ouble, (f)old, (s)tand: ");

        match action.as_str() {
            "h" | "hit" => {
                let Some((round, _)) = game.table_mut() else {
                    return;
                };
                match round.take_card(you) {
                    Ok(card) => println!("You drew {card}."),
                    Err(err) => println!("Cannot draw: {err}"),
                }
                // The dealer plays along behind its threshold.
                if game.dealer_must_draw() {
                    if let Some((round, _)) = game.table_mut() {
                        let _ = round.take_card(dealer);
                    }
                }
                if player_busted(game, you) {
                    println!("Bust!");
                    settle(game, you, dealer);
                    return;
                }
            }
            "d" | "double" => {
                let Some((round, roster)) = game.table_mut() else {
                    return;
                };
                let stake = round.seat(dealer).map_or(0, Seat::bet);
                match round.double_bet(roster, you) {
                    Ok(()) => {
                        // Keep the dealer's stake level with yours.
                        if round.place_bet(roster, dealer, stake).is_err() {
                            println!("(dealer could not match the double)");
                        }
                        println!("Bet doubled; one more card allowed.");
                    }
                    Err(err) => println!("Cannot double: {err}"),
                }
            }
            "f" | "fold" => {
                let Some((round, roster)) = game.table_mut() else {
                    return;
                };
                match round.fold(roster, you) {
                    Ok(refund) => {
                        println!("Folded; {refund} returned to you.");
                        settle(game, you, dealer);
                        return;
                    }
                    Err(err) => println!("Cannot fold: {err}"),
                }
            }
            "s" | "stand" => {
                settle(game, you, dealer);
                return;
            }
            "q" | "quit" => std::process::exit(0),
            _ => println!("Unknown action."),
        }
    }
}

fn settle(game: &mut Game, you: u8, dealer: u8) {
    while game.dealer_must_draw() {
        let Some((round, _)) = game.table_mut() else {
            break;
        };
        match round.take_card(dealer) {
            Ok(card) => println!("Dealer drew {card}."),
            Err(_) => break,
        }
    }

    let Some((round, roster)) = game.table_mut() else {
        return;
    };
    print_hand("Dealer", round.seat(dealer));
    print_hand("You", round.seat(you));

    match round.finish(roster) {
        Ok(winners) if winners.contains(&you) => println!("Round over. You win!"),
        Ok(winners) if winners.is_empty() => println!("Round over. Everyone bust - push."),
        Ok(_) => println!("Round over. You lose."),
        Err(err) => println!("Settlement error: {err}"),
    }
}

fn player_busted(game: &Game, you: u8) -> bool {
    game.round()
        .and_then(|round| round.seat(you))
        .is_some_and(|seat| score(seat.cards()) > BLACKJACK)
}

fn print_table(game: &Game, you: u8, dealer: u8) {
    let Some(round) = game.round() else {
        return;
    };
    print_dealer_partial(round, dealer);
    print_hand("You", round.seat(you));
    println!("(deck: {} cards, bank: {})", round.deck().count(), round.bank());
}

fn print_dealer_partial(round: &Round, dealer: u8) {
    // First dealer card stays face down until settlement.
    let Some(seat) = round.seat(dealer) else {
        return;
    };
    let shown: Vec<String> = seat
        .cards()
        .iter()
        .enumerate()
        .map(|(i, card)| {
            if i == 0 {
                format!("[{COVER_ID}]")
            } else {
                card.to_string()
            }
        })
        .collect();
    println!("Dealer: {}", shown.join(", "));
}

fn print_hand(label: &str, seat: Option<&Seat>) {
    let Some(seat) = seat else {
        return;
    };
    let cards: Vec<String> = seat.cards().iter().map(ToString::to_string).collect();
    println!("{label}: {} (score {})", cards.join(", "), score(seat.cards()));
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().read_line(&mut line);
    line.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let line = prompt_line(prompt);
        if line == "q" || line == "quit" {
            return None;
        }
        if let Ok(value) = line.parse() {
            return Some(value);
        }
        println!("Enter a number.");
    }
}
