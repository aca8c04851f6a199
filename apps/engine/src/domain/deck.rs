//! Deck building, shuffling, and dealing.
//!
//! Card generation is a randomized list-building routine, not part of the
//! rule engine. Shuffling is seeded so tests and replays are
//! deterministic; callers without a fixed seed get an OS-seeded shuffle.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::cards_types::{Card, Color};
use crate::domain::state::GameSession;
use crate::errors::domain::DomainError;

/// Cards in a full deck: per color one 0, two each of 1-9, two skips, two
/// reverses, two draw-twos; four wilds, four wild-draw-fours.
pub const DECK_SIZE: usize = 108;

/// Build the full deck in canonical order.
pub fn build_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for color in Color::ALL {
        deck.push(Card::number(color, 0));
        for value in 1..=9 {
            deck.push(Card::number(color, value));
            deck.push(Card::number(color, value));
        }
        for _ in 0..2 {
            deck.push(Card::skip(color));
            deck.push(Card::reverse(color));
            deck.push(Card::draw_two(color));
        }
    }
    for _ in 0..4 {
        deck.push(Card::wild());
        deck.push(Card::wild_draw_four());
    }
    deck
}

/// Fisher-Yates shuffle with a deterministic seeded generator.
pub fn shuffle_with_seed(deck: &mut [Card], seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);
}

/// Build a shuffled deck. `seed` pins the order for tests and replays.
pub fn shuffled_deck(seed: Option<u64>) -> Vec<Card> {
    let mut deck = build_deck();
    match seed {
        Some(seed) => shuffle_with_seed(&mut deck, seed),
        None => deck.shuffle(&mut rand::rng()),
    }
    deck
}

/// Deal `hand_size` cards to every seat from the session's deck.
///
/// Errors when the deck cannot cover every seat; dealing never produces
/// uneven starting hands.
pub fn deal_starting_hands(session: &mut GameSession, hand_size: usize) -> Result<(), DomainError> {
    let needed = session.players.len() * hand_size;
    if session.deck.len() < needed {
        return Err(DomainError::validation_other(format!(
            "Deck holds {} cards but dealing requires {needed}",
            session.deck.len()
        )));
    }
    for seat in session.players.iter_mut() {
        seat.hand.clear();
        for _ in 0..hand_size {
            let card = session
                .deck
                .pop()
                .expect("deck size checked before dealing");
            seat.hand.push(card);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cards_types::{CardColor, CardKind};

    #[test]
    fn deck_has_standard_composition() {
        let deck = build_deck();
        assert_eq!(deck.len(), DECK_SIZE);

        let reds: Vec<_> = deck
            .iter()
            .filter(|c| c.color == CardColor::Red)
            .collect();
        assert_eq!(reds.len(), 25);
        assert_eq!(
            reds.iter().filter(|c| c.face_value == Some(0)).count(),
            1
        );
        assert_eq!(
            reds.iter().filter(|c| c.face_value == Some(7)).count(),
            2
        );
        assert_eq!(reds.iter().filter(|c| c.kind == CardKind::Skip).count(), 2);

        assert_eq!(deck.iter().filter(|c| c.kind == CardKind::Wild).count(), 4);
        assert_eq!(
            deck.iter()
                .filter(|c| c.kind == CardKind::WildDrawFour)
                .count(),
            4
        );
    }

    #[test]
    fn seeded_shuffle_is_deterministic() {
        let a: Vec<String> = shuffled_deck(Some(99)).iter().map(|c| c.to_string()).collect();
        let b: Vec<String> = shuffled_deck(Some(99)).iter().map(|c| c.to_string()).collect();
        assert_eq!(a, b);
        let c: Vec<String> = shuffled_deck(Some(100)).iter().map(|c| c.to_string()).collect();
        assert_ne!(a, c);
    }

    #[test]
    fn dealing_covers_every_seat_or_fails() {
        let mut session = GameSession::new("p1".into(), 2, 4);
        session.players.push(crate::domain::state::SeatedPlayer {
            id: "p2".into(),
            ready: true,
            position: 2,
            hand: Vec::new(),
        });
        session.deck = shuffled_deck(Some(1));
        deal_starting_hands(&mut session, 7).unwrap();
        assert!(session.players.iter().all(|p| p.hand.len() == 7));
        assert_eq!(session.deck.len(), DECK_SIZE - 14);

        session.deck.truncate(3);
        assert!(deal_starting_hands(&mut session, 7).is_err());
    }
}
