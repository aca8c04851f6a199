//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use engine::{
    Card, GameConfig, GameFlowService, GameService, GameSession, MemoryPlayerDirectory,
    MemorySessionStore, SessionStore,
};

#[ctor::ctor]
fn init_logging() {
    engine_test_support::logging::init();
}

pub struct TestHarness {
    pub store: Arc<MemorySessionStore>,
    pub directory: Arc<MemoryPlayerDirectory>,
    pub games: GameService,
    pub flow: GameFlowService,
}

/// Build the service stack over fresh in-memory collaborators with a
/// pinned deck seed.
pub fn harness() -> TestHarness {
    let store = Arc::new(MemorySessionStore::new());
    let directory = Arc::new(MemoryPlayerDirectory::new());
    let config = GameConfig {
        deck_seed: Some(42),
        ..GameConfig::default()
    };
    let games = GameService::new(store.clone(), directory.clone(), config);
    let flow = GameFlowService::new(store.clone());
    TestHarness {
        store,
        directory,
        games,
        flow,
    }
}

/// Create, fill, ready up, and start a session with seats `p1..pN`.
pub async fn started_session(harness: &TestHarness, seats: usize) -> GameSession {
    let created = harness
        .games
        .create_game("p1".into(), 2, seats.max(2))
        .await
        .expect("create session");
    let session_id = created.id.to_string();
    for n in 2..=seats {
        harness
            .games
            .join_game(&session_id, format!("p{n}"))
            .await
            .expect("join session");
        harness
            .games
            .mark_ready(&session_id, &format!("p{n}"))
            .await
            .expect("mark ready");
    }
    harness
        .games
        .start_game(&session_id, "p1")
        .await
        .expect("start session")
}

/// Load, mutate, and save the stored session directly through the store.
pub async fn apply(
    harness: &TestHarness,
    session: &GameSession,
    mutate: impl FnOnce(&mut GameSession),
) -> GameSession {
    let mut stored = harness
        .store
        .find_by_id(&session.id)
        .await
        .expect("load session")
        .expect("session exists");
    mutate(&mut stored);
    harness.store.save(&stored).await.expect("save session")
}

/// Replace a seat's hand with the given card tokens, returning the new
/// hand's cards.
pub async fn override_hand(
    harness: &TestHarness,
    session: &GameSession,
    player_id: &str,
    tokens: &[&str],
) -> Vec<Card> {
    let cards: Vec<Card> = tokens
        .iter()
        .map(|t| t.parse::<Card>().expect("valid card token"))
        .collect();
    let hand = cards.clone();
    apply(harness, session, move |s| {
        let seat = s
            .players
            .iter_mut()
            .find(|p| p.id == player_id)
            .expect("player is seated");
        seat.hand = cards;
    })
    .await;
    hand
}
