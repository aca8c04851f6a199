//! Integration tests for the abandonment orchestrator.

mod common;

use common::{apply, harness, started_session};
use engine::{ErrorCode, GameStatus, PlayOutcome};

#[tokio::test]
async fn two_seats_abandonment_crowns_the_remaining_player() {
    let h = harness();
    let session = started_session(&h, 2).await;

    let result = h
        .flow
        .abandon(&session.id.to_string(), "p2")
        .await
        .unwrap();

    assert_eq!(result.outcome, PlayOutcome::EndedWithWinner("p1".into()));
    assert_eq!(result.session.status, GameStatus::Ended);
    assert_eq!(result.session.winner_id.as_deref(), Some("p1"));
    assert!(result.session.ended_at.is_some());
}

#[tokio::test]
async fn three_seats_abandonment_continues_with_renumbered_positions() {
    let h = harness();
    let session = started_session(&h, 3).await;

    let result = h
        .flow
        .abandon(&session.id.to_string(), "p2")
        .await
        .unwrap();

    assert_eq!(result.outcome, PlayOutcome::Continue);
    let stored = &result.session;
    assert_eq!(stored.status, GameStatus::Active);
    assert_eq!(stored.players.len(), 2);
    let seats: Vec<(&str, u8)> = stored
        .players
        .iter()
        .map(|p| (p.id.as_str(), p.position))
        .collect();
    assert_eq!(seats, vec![("p1", 1), ("p3", 2)]);
}

#[tokio::test]
async fn last_seat_abandonment_ends_without_a_winner() {
    // A one-seat active session cannot arise through the service API, but
    // the outcome table still covers it.
    let h = harness();
    let session = started_session(&h, 2).await;
    apply(&h, &session, |s| {
        s.players.remove(1);
        s.reposition_seats();
    })
    .await;

    let result = h
        .flow
        .abandon(&session.id.to_string(), "p1")
        .await
        .unwrap();

    assert_eq!(result.outcome, PlayOutcome::EndedNoWinner);
    assert_eq!(result.session.status, GameStatus::Ended);
    assert!(result.session.winner_id.is_none());
}

#[tokio::test]
async fn cursor_keeps_pointing_at_the_same_player() {
    let h = harness();
    let session = started_session(&h, 3).await;
    // Hand the turn to p3 (index 2), then remove a seat below the cursor.
    apply(&h, &session, |s| s.current_player_index = 2).await;

    let result = h
        .flow
        .abandon(&session.id.to_string(), "p1")
        .await
        .unwrap();

    let stored = &result.session;
    assert_eq!(stored.current_player_index, 1);
    assert_eq!(stored.players[stored.current_player_index].id, "p3");
}

#[tokio::test]
async fn cursor_wraps_when_the_tail_seat_abandons_mid_turn() {
    let h = harness();
    let session = started_session(&h, 3).await;
    apply(&h, &session, |s| s.current_player_index = 2).await;

    let result = h
        .flow
        .abandon(&session.id.to_string(), "p3")
        .await
        .unwrap();

    let stored = &result.session;
    assert_eq!(stored.players.len(), 2);
    assert_eq!(stored.current_player_index, 0);
    assert_eq!(stored.players[0].id, "p1");
}

#[tokio::test]
async fn abandonment_guards() {
    let h = harness();
    let created = h.games.create_game("p1".into(), 2, 4).await.unwrap();
    let session_id = created.id.to_string();

    let err = h.flow.abandon(&session_id, "p9").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotSeated);

    // Seated, but the session has not started.
    let err = h.flow.abandon(&session_id, "p1").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::SessionNotActive);

    let err = h.flow.abandon("missing", "p1").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::SessionNotFound);
}
