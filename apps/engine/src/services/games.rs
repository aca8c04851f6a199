//! Session lifecycle services: create, join, ready, start, roster.

use std::sync::Arc;

use time::OffsetDateTime;
use tracing::{debug, info};

use crate::chain::Chain;
use crate::config::GameConfig;
use crate::domain::deck;
use crate::domain::session_transition::{derive_transitions, SessionView};
use crate::domain::state::{
    GameSession, GameStatus, PlayerId, SeatedPlayer, SessionId, TurnDirection,
};
use crate::domain::validators;
use crate::errors::domain::DomainError;
use crate::services::players::resolve_profile;
use crate::store::{require_session, PlayerDirectory, SessionStore};

/// One decorated seat in a roster query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub player_id: PlayerId,
    pub display_name: String,
    pub contact: String,
    pub position: u8,
    pub ready: bool,
    pub cards_in_hand: usize,
}

/// Session lifecycle service.
pub struct GameService {
    store: Arc<dyn SessionStore>,
    directory: Arc<dyn PlayerDirectory>,
    config: GameConfig,
}

impl GameService {
    pub fn new(
        store: Arc<dyn SessionStore>,
        directory: Arc<dyn PlayerDirectory>,
        config: GameConfig,
    ) -> Self {
        Self {
            store,
            directory,
            config,
        }
    }

    /// Create a session in `Waiting` with the creator seated, ready, at
    /// position 1.
    pub async fn create_game(
        &self,
        creator_id: PlayerId,
        min_players: usize,
        max_players: usize,
    ) -> Result<GameSession, DomainError> {
        if min_players < self.config.min_players_floor {
            return Err(DomainError::validation_other(format!(
                "min_players must be at least {}",
                self.config.min_players_floor
            )));
        }
        if max_players > self.config.max_players_cap {
            return Err(DomainError::validation_other(format!(
                "max_players must be at most {}",
                self.config.max_players_cap
            )));
        }
        if min_players > max_players {
            return Err(DomainError::validation_other(format!(
                "min_players ({min_players}) exceeds max_players ({max_players})"
            )));
        }

        let session = GameSession::new(creator_id, min_players, max_players);
        let stored = self.store.save(&session).await?;
        info!(session_id = %stored.id, creator_id = %stored.creator_id, "session created");
        Ok(stored)
    }

    /// Seat a player in a waiting session, unready, at the next position.
    pub async fn join_game(
        &self,
        session_id: &str,
        player_id: PlayerId,
    ) -> Result<GameSession, DomainError> {
        let id = SessionId::parse(session_id)?;
        let actor = player_id.clone();

        let mut session = Chain::start(require_session(self.store.as_ref(), &id))
            .and_then(validators::session_is_waiting)
            .and_then(validators::session_has_room)
            .and_then(move |s| validators::actor_not_seated(s, &actor))
            .tap_err(|err| debug!(%err, "join rejected"))
            .run()
            .await?;

        let position = session.players.len() as u8 + 1;
        session.players.push(SeatedPlayer {
            id: player_id.clone(),
            ready: false,
            position,
            hand: Vec::new(),
        });

        let stored = self.store.save(&session).await?;
        info!(
            session_id = %stored.id,
            player_id = %player_id,
            seated = stored.players.len(),
            "player joined"
        );
        Ok(stored)
    }

    /// Mark a seated player ready.
    pub async fn mark_ready(
        &self,
        session_id: &str,
        player_id: &str,
    ) -> Result<GameSession, DomainError> {
        let id = SessionId::parse(session_id)?;
        let actor = player_id.to_string();

        let mut session = Chain::start(require_session(self.store.as_ref(), &id))
            .and_then(validators::session_is_waiting)
            .and_then(move |s| validators::actor_is_seated(s, &actor))
            .tap_err(|err| debug!(%err, "ready rejected"))
            .run()
            .await?;

        if let Some(seat) = session.seat_of_mut(player_id) {
            seat.ready = true;
        }

        let stored = self.store.save(&session).await?;
        debug!(session_id = %stored.id, player_id, "player ready");
        Ok(stored)
    }

    /// Start the game: reposition seats in join order, deal starting
    /// hands, and hand the first turn to seat 1.
    pub async fn start_game(
        &self,
        session_id: &str,
        actor_id: &str,
    ) -> Result<GameSession, DomainError> {
        let id = SessionId::parse(session_id)?;
        let actor = actor_id.to_string();

        let mut session = Chain::start(require_session(self.store.as_ref(), &id))
            .and_then(move |s| validators::actor_is_creator(s, &actor))
            .and_then(validators::session_not_started)
            .and_then(validators::minimum_players_met)
            .and_then(validators::all_players_ready)
            .tap_err(|err| debug!(%err, "start rejected"))
            .run()
            .await?;
        let before = SessionView::of(&session);

        session.reposition_seats();
        session.deck = deck::shuffled_deck(self.config.deck_seed);
        deck::deal_starting_hands(&mut session, self.config.starting_hand_size)?;
        session.status = GameStatus::Active;
        session.current_player_index = 0;
        session.turn_direction = TurnDirection::Forward;
        session.started_at = Some(OffsetDateTime::now_utc());

        let stored = self.store.save(&session).await?;
        for transition in derive_transitions(&before, &SessionView::of(&stored)) {
            debug!(session_id = %stored.id, ?transition, "session transition");
        }
        info!(
            session_id = %stored.id,
            players = stored.players.len(),
            "game started"
        );
        Ok(stored)
    }

    /// Decorated player listing. Directory misses and failures degrade to
    /// placeholder fields instead of aborting the query.
    pub async fn roster(&self, session_id: &str) -> Result<Vec<RosterEntry>, DomainError> {
        let id = SessionId::parse(session_id)?;
        let session = require_session(self.store.as_ref(), &id).await?;

        let mut entries = Vec::with_capacity(session.players.len());
        for seat in &session.players {
            let profile = resolve_profile(self.directory.as_ref(), &seat.id).await;
            entries.push(RosterEntry {
                player_id: seat.id.clone(),
                display_name: profile.display_name,
                contact: profile.contact,
                position: seat.position,
                ready: seat.ready,
                cards_in_hand: seat.hand.len(),
            });
        }
        Ok(entries)
    }
}
