//! Explicit turn progression and deck drawing.
//!
//! Playing a plain number card does not move the cursor; the acting player
//! ends their turn with `advance_turn`. Drawing is likewise its own action.

use tracing::debug;

use super::GameFlowService;
use crate::chain::Chain;
use crate::domain::rotation;
use crate::domain::session_transition::{derive_transitions, SessionView};
use crate::domain::state::{GameSession, SessionId};
use crate::domain::validators;
use crate::errors::domain::DomainError;
use crate::store::require_session;

/// Result of a draw action.
#[derive(Debug)]
pub struct DrawCardResult {
    pub session: GameSession,
    /// Cards actually drawn; 0 on an exhausted deck.
    pub drawn: usize,
}

impl GameFlowService {
    /// Hand the turn to the next seat in the current direction.
    pub async fn advance_turn(
        &self,
        session_id: &str,
        actor_id: &str,
    ) -> Result<GameSession, DomainError> {
        let id = SessionId::parse(session_id)?;
        let actor = actor_id.to_string();

        let mut session = Chain::start(require_session(self.store.as_ref(), &id))
            .and_then(validators::session_is_active)
            .and_then(validators::has_seated_players)
            .and_then(move |s| validators::is_actors_turn(s, &actor))
            .tap_err(|err| debug!(%err, "advance rejected"))
            .run()
            .await?;
        let before = SessionView::of(&session);

        rotation::advance_turn(&mut session);

        let stored = self.store.save(&session).await?;
        for transition in derive_transitions(&before, &SessionView::of(&stored)) {
            debug!(session_id = %stored.id, ?transition, "session transition");
        }
        Ok(stored)
    }

    /// Draw one card from the deck into the actor's hand.
    pub async fn draw_card(
        &self,
        session_id: &str,
        actor_id: &str,
    ) -> Result<DrawCardResult, DomainError> {
        let id = SessionId::parse(session_id)?;
        let actor = actor_id.to_string();

        let mut session = Chain::start(require_session(self.store.as_ref(), &id))
            .and_then(validators::session_is_active)
            .and_then(move |s| validators::is_actors_turn(s, &actor))
            .tap_err(|err| debug!(%err, "draw rejected"))
            .run()
            .await?;

        let mut drawn = 0;
        if let Some(card) = session.deck.pop() {
            if let Some(seat) = session.seat_of_mut(actor_id) {
                seat.hand.push(card);
                drawn = 1;
            }
        }

        let stored = self.store.save(&session).await?;
        debug!(session_id = %stored.id, actor_id, drawn, "card drawn");
        Ok(DrawCardResult {
            session: stored,
            drawn,
        })
    }
}
