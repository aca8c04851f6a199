//! Shared builders for domain unit tests.

use crate::domain::cards_parsing::parse_cards;
use crate::domain::deck::shuffled_deck;
use crate::domain::state::{GameSession, GameStatus, SeatedPlayer};

pub fn seat(id: &str, position: u8) -> SeatedPlayer {
    SeatedPlayer {
        id: id.into(),
        ready: true,
        position,
        hand: Vec::new(),
    }
}

/// Active session with seats `p1..pN`, cursor at 0, seeded deck.
pub fn active_session(seats: usize) -> GameSession {
    let mut session = GameSession::new("p1".into(), 2, seats.max(2));
    for n in 2..=seats {
        session.players.push(seat(&format!("p{n}"), n as u8));
    }
    session.status = GameStatus::Active;
    session.current_player_index = 0;
    session.deck = shuffled_deck(Some(7));
    session
}

/// Replace a seat's hand with the given card tokens.
pub fn give_hand(session: &mut GameSession, player_id: &str, tokens: &[&str]) {
    let seat = session
        .seat_of_mut(player_id)
        .expect("test player is seated");
    seat.hand = parse_cards(tokens);
}
