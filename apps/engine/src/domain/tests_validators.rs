use crate::domain::state::{GameSession, GameStatus};
use crate::domain::test_state_helpers::{active_session, give_hand, seat};
use crate::domain::validators;
use crate::errors::ErrorCode;

fn waiting_session() -> GameSession {
    let mut session = GameSession::new("p1".into(), 2, 3);
    session.players.push(seat("p2", 2));
    session
}

#[test]
fn waiting_checks() {
    let session = waiting_session();
    let session = validators::session_is_waiting(session).unwrap();
    let mut session = validators::session_has_room(session).unwrap();

    session.players.push(seat("p3", 3));
    let err = validators::session_has_room(session).unwrap_err();
    assert_eq!(err.code(), ErrorCode::SessionFull);
}

#[test]
fn active_session_is_not_accepting_players() {
    let err = validators::session_is_waiting(active_session(2)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotAcceptingPlayers);
}

#[test]
fn seating_checks() {
    let session = waiting_session();
    let session = validators::actor_not_seated(session, "p9").unwrap();
    let err = validators::actor_not_seated(session, "p2").unwrap_err();
    assert_eq!(err.code(), ErrorCode::AlreadySeated);

    let session = waiting_session();
    let session = validators::actor_is_seated(session, "p2").unwrap();
    let err = validators::actor_is_seated(session, "p9").unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotSeated);
}

#[test]
fn creator_and_start_checks() {
    let session = waiting_session();
    let session = validators::actor_is_creator(session, "p1").unwrap();
    let err = validators::actor_is_creator(session, "p2").unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotCreator);

    let err = validators::session_not_started(active_session(2)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::AlreadyStarted);
}

#[test]
fn readiness_checks() {
    let mut session = waiting_session();
    session.players[1].ready = false;
    let err = validators::all_players_ready(session).unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotAllReady);

    let mut session = waiting_session();
    session.players[1].ready = true;
    session = validators::all_players_ready(session).unwrap();

    session.players.truncate(1);
    let err = validators::minimum_players_met(session).unwrap_err();
    assert_eq!(err.code(), ErrorCode::MinimumPlayersUnmet);
}

#[test]
fn active_checks() {
    let err = validators::session_is_active(waiting_session()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::SessionNotActive);

    let mut ended = active_session(2);
    ended.status = GameStatus::Ended;
    let err = validators::session_is_active(ended).unwrap_err();
    assert_eq!(err.code(), ErrorCode::SessionNotActive);

    let mut empty = active_session(2);
    empty.players.clear();
    let err = validators::has_seated_players(empty).unwrap_err();
    assert_eq!(err.code(), ErrorCode::NoSeatedPlayers);
    assert!(err.is_internal());
}

#[test]
fn turn_checks_distinguish_corruption_from_rule_violation() {
    let session = active_session(3);
    let session = validators::is_actors_turn(session, "p1").unwrap();

    let err = validators::is_actors_turn(session, "p2").unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotYourTurn);
    assert!(!err.is_internal());

    let mut corrupted = active_session(3);
    corrupted.current_player_index = 9;
    let err = validators::is_actors_turn(corrupted, "p1").unwrap_err();
    assert_eq!(err.code(), ErrorCode::IndeterminateCurrentPlayer);
    assert!(err.is_internal());
}

#[test]
fn card_in_hand_check() {
    let mut session = active_session(2);
    give_hand(&mut session, "p1", &["R5", "GS"]);
    let held = session.players[0].hand[0].id;

    let session = validators::card_in_hand(session, "p1", held).unwrap();
    let err = validators::card_in_hand(session, "p2", held).unwrap_err();
    assert_eq!(err.code(), ErrorCode::CardNotInHand);
}

#[test]
fn pipeline_short_circuits_on_the_first_failure() {
    // Full session that is also not waiting: the waiting check runs first,
    // so its error wins.
    let mut session = active_session(3);
    session.max_players = 3;
    let err = validators::session_is_waiting(session)
        .and_then(validators::session_has_room)
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotAcceptingPlayers);
}
