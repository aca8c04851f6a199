//! Integration tests for the session lifecycle: create, join, ready,
//! start, and the decorated roster query.

mod common;

use common::{harness, started_session};
use engine::{ErrorCode, GameStatus, PlayerProfile, TurnDirection};

#[tokio::test]
async fn create_seats_the_creator_ready() {
    let h = harness();
    let session = h.games.create_game("p1".into(), 2, 4).await.unwrap();

    assert_eq!(session.status, GameStatus::Waiting);
    assert_eq!(session.players.len(), 1);
    assert!(session.players[0].ready);
    assert_eq!(session.players[0].position, 1);
    assert_eq!(session.version, 1);
}

#[tokio::test]
async fn create_rejects_out_of_bounds_player_counts() {
    let h = harness();
    let err = h.games.create_game("p1".into(), 1, 4).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::ValidationError);

    let err = h.games.create_game("p1".into(), 4, 2).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::ValidationError);

    let err = h.games.create_game("p1".into(), 2, 99).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::ValidationError);
}

#[tokio::test]
async fn join_then_start_requires_everyone_ready() {
    // Creator is ready from the outset; a joiner is not.
    let h = harness();
    let created = h.games.create_game("p1".into(), 2, 4).await.unwrap();
    let session_id = created.id.to_string();

    let joined = h.games.join_game(&session_id, "p2".into()).await.unwrap();
    assert_eq!(joined.players.len(), 2);
    assert!(!joined.players[1].ready);
    assert_eq!(joined.players[1].position, 2);

    let err = h.games.start_game(&session_id, "p1").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotAllReady);
}

#[tokio::test]
async fn start_activates_the_session() {
    let h = harness();
    let created = h.games.create_game("p1".into(), 2, 4).await.unwrap();
    let session_id = created.id.to_string();
    h.games.join_game(&session_id, "p2".into()).await.unwrap();
    h.games.mark_ready(&session_id, "p2").await.unwrap();

    let started = h.games.start_game(&session_id, "p1").await.unwrap();

    assert_eq!(started.status, GameStatus::Active);
    assert_eq!(started.current_player_index, 0);
    assert_eq!(started.turn_direction, TurnDirection::Forward);
    let positions: Vec<u8> = started.players.iter().map(|p| p.position).collect();
    assert_eq!(positions, vec![1, 2]);
    assert!(started.started_at.is_some());
    assert!(started.players.iter().all(|p| p.hand.len() == 7));
    assert_eq!(started.deck.len(), 108 - 14);
}

#[tokio::test]
async fn join_guards() {
    let h = harness();
    let created = h.games.create_game("p1".into(), 2, 2).await.unwrap();
    let session_id = created.id.to_string();

    // Duplicate join.
    let err = h.games.join_game(&session_id, "p1".into()).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::AlreadySeated);

    // Capacity.
    h.games.join_game(&session_id, "p2".into()).await.unwrap();
    let err = h.games.join_game(&session_id, "p3".into()).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::SessionFull);

    // Joining after start.
    h.games.mark_ready(&session_id, "p2").await.unwrap();
    h.games.start_game(&session_id, "p1").await.unwrap();
    let err = h.games.join_game(&session_id, "p4".into()).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotAcceptingPlayers);
}

#[tokio::test]
async fn start_guards() {
    let h = harness();
    let created = h.games.create_game("p1".into(), 3, 4).await.unwrap();
    let session_id = created.id.to_string();
    h.games.join_game(&session_id, "p2".into()).await.unwrap();
    h.games.mark_ready(&session_id, "p2").await.unwrap();

    let err = h.games.start_game(&session_id, "p2").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotCreator);

    let err = h.games.start_game(&session_id, "p1").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::MinimumPlayersUnmet);

    h.games.join_game(&session_id, "p3".into()).await.unwrap();
    h.games.mark_ready(&session_id, "p3").await.unwrap();
    h.games.start_game(&session_id, "p1").await.unwrap();

    let err = h.games.start_game(&session_id, "p1").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::AlreadyStarted);
}

#[tokio::test]
async fn unknown_and_invalid_session_ids() {
    let h = harness();
    let err = h.games.join_game("no-such-session", "p2".into()).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::SessionNotFound);

    let err = h.games.join_game("   ", "p2".into()).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidSessionId);
}

#[tokio::test]
async fn ready_requires_a_seat_in_a_waiting_session() {
    let h = harness();
    let created = h.games.create_game("p1".into(), 2, 4).await.unwrap();
    let session_id = created.id.to_string();

    let err = h.games.mark_ready(&session_id, "p9").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotSeated);

    let started = started_session(&h, 2).await;
    let err = h
        .games
        .mark_ready(&started.id.to_string(), "p1")
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotAcceptingPlayers);
}

#[tokio::test]
async fn roster_degrades_missing_directory_entries() {
    let h = harness();
    h.directory.insert(
        "p1",
        PlayerProfile {
            display_name: "Player One".into(),
            contact: "one@example.test".into(),
        },
    );
    let created = h.games.create_game("p1".into(), 2, 4).await.unwrap();
    let session_id = created.id.to_string();
    h.games.join_game(&session_id, "p2".into()).await.unwrap();

    let roster = h.games.roster(&session_id).await.unwrap();
    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0].display_name, "Player One");
    assert_eq!(roster[1].display_name, "Unknown");
    assert_eq!(roster[1].contact, "unknown@example.com");
    assert!(roster[0].ready);
    assert!(!roster[1].ready);
}
