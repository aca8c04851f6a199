use crate::domain::cards_types::{CardColor, CardKind, Color};
use crate::domain::effects::{can_execute, execute, DRAW_TWO_PENALTY, WILD_DRAW_FOUR_PENALTY};
use crate::domain::state::TurnDirection;
use crate::domain::test_state_helpers::active_session;

#[test]
fn number_is_a_no_op() {
    let mut session = active_session(3);
    let before = session.clone();
    execute(&mut session, CardKind::Number, None).unwrap();
    assert_eq!(session, before);
}

#[test]
fn skip_lands_two_seats_ahead() {
    let mut session = active_session(4);
    execute(&mut session, CardKind::Skip, None).unwrap();
    assert_eq!(session.current_player_index, 2);
}

#[test]
fn skip_wraps_at_the_table_edge() {
    let mut session = active_session(3);
    session.current_player_index = 2;
    execute(&mut session, CardKind::Skip, None).unwrap();
    assert_eq!(session.current_player_index, 1);
}

#[test]
fn reverse_flips_direction_and_moves_nothing() {
    let mut session = active_session(3);
    let hands_before: Vec<usize> = session.players.iter().map(|p| p.hand.len()).collect();
    execute(&mut session, CardKind::Reverse, None).unwrap();
    assert_eq!(session.turn_direction, TurnDirection::Reversed);
    assert_eq!(session.current_player_index, 0);
    let hands_after: Vec<usize> = session.players.iter().map(|p| p.hand.len()).collect();
    assert_eq!(hands_before, hands_after);
}

#[test]
fn draw_two_delivers_to_the_next_seat_and_skips_it() {
    let mut session = active_session(4);
    let deck_before = session.deck.len();
    execute(&mut session, CardKind::DrawTwo, None).unwrap();
    assert_eq!(session.players[1].hand.len(), DRAW_TWO_PENALTY);
    assert_eq!(session.deck.len(), deck_before - DRAW_TWO_PENALTY);
    assert_eq!(session.current_player_index, 2);
}

#[test]
fn draw_two_respects_direction() {
    let mut session = active_session(4);
    session.turn_direction = TurnDirection::Reversed;
    execute(&mut session, CardKind::DrawTwo, None).unwrap();
    assert_eq!(session.players[3].hand.len(), DRAW_TWO_PENALTY);
    assert_eq!(session.current_player_index, 2);
}

#[test]
fn wild_sets_the_chosen_color() {
    let mut session = active_session(3);
    execute(&mut session, CardKind::Wild, Some(CardColor::Green)).unwrap();
    assert_eq!(session.current_color, Some(Color::Green));
    assert_eq!(session.current_player_index, 0);
}

#[test]
fn wild_draw_four_sets_color_delivers_and_skips() {
    let mut session = active_session(3);
    let deck_before = session.deck.len();
    execute(&mut session, CardKind::WildDrawFour, Some(CardColor::Blue)).unwrap();
    assert_eq!(session.current_color, Some(Color::Blue));
    assert_eq!(session.players[1].hand.len(), WILD_DRAW_FOUR_PENALTY);
    assert_eq!(session.deck.len(), deck_before - WILD_DRAW_FOUR_PENALTY);
    assert_eq!(session.current_player_index, 2);
}

#[test]
fn exhausted_deck_delivers_what_remains() {
    let mut session = active_session(3);
    session.deck.truncate(1);
    execute(&mut session, CardKind::WildDrawFour, Some(CardColor::Red)).unwrap();
    assert_eq!(session.players[1].hand.len(), 1);
    assert!(session.deck.is_empty());
}

#[test]
fn color_choosing_kinds_require_a_playable_color() {
    assert!(!can_execute(CardKind::Wild, None));
    assert!(!can_execute(CardKind::Wild, Some(CardColor::Wild)));
    assert!(can_execute(CardKind::Wild, Some(CardColor::Red)));
    assert!(!can_execute(CardKind::WildDrawFour, None));
    assert!(can_execute(CardKind::WildDrawFour, Some(CardColor::Yellow)));
    assert!(can_execute(CardKind::Number, None));
    assert!(can_execute(CardKind::Skip, None));
    assert!(can_execute(CardKind::Reverse, None));
    assert!(can_execute(CardKind::DrawTwo, None));
}

#[test]
fn execute_rejects_wild_without_color_even_if_unchecked() {
    let mut session = active_session(3);
    let err = execute(&mut session, CardKind::Wild, None).unwrap_err();
    assert_eq!(
        err.code(),
        crate::errors::ErrorCode::InvalidCardAction
    );
    assert!(session.current_color.is_none());
}

#[test]
fn penalty_on_empty_seat_list_is_a_no_op() {
    let mut session = active_session(2);
    session.players.clear();
    execute(&mut session, CardKind::DrawTwo, None).unwrap();
    assert_eq!(session.current_player_index, 0);
}
