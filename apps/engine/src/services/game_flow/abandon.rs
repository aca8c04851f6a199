//! The abandonment orchestrator.

use tracing::{debug, info};

use super::outcome::{dispatch, PlayOutcome};
use super::GameFlowService;
use crate::chain::Chain;
use crate::domain::session_transition::{derive_transitions, SessionTransition, SessionView};
use crate::domain::state::{GameSession, SessionId};
use crate::domain::validators;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::store::require_session;

/// Result of a successful abandonment.
#[derive(Debug)]
pub struct AbandonResult {
    /// The stored session after dispatch.
    pub session: GameSession,
    pub outcome: PlayOutcome,
}

impl GameFlowService {
    /// Remove a player from an active session, renumber the remaining
    /// seats, and end or continue the game based on the new seat count.
    pub async fn abandon(
        &self,
        session_id: &str,
        actor_id: &str,
    ) -> Result<AbandonResult, DomainError> {
        let id = SessionId::parse(session_id)?;
        let actor = actor_id.to_string();
        debug!(session_id = %id, actor_id, "abandoning session");

        let seat_actor = actor.clone();
        let mut session = Chain::start(require_session(self.store.as_ref(), &id))
            .and_then(move |s| validators::actor_is_seated(s, &seat_actor))
            .and_then(validators::session_is_active)
            .tap_err(|err| debug!(%err, "abandon rejected"))
            .run()
            .await?;
        let before = SessionView::of(&session);

        let removed_index = session.seat_index(actor_id).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::NotSeated,
                format!("Player {actor_id} holds no seat in this session"),
            )
        })?;
        session.players.remove(removed_index);
        session.reposition_seats();

        // Keep the cursor on the same player where possible: seats below it
        // shifted down by one. Removing the current player at the tail
        // wraps the turn to seat index 0.
        if removed_index < session.current_player_index {
            session.current_player_index -= 1;
        }
        if session.players.is_empty() {
            session.current_player_index = 0;
        } else {
            session.current_player_index %= session.players.len();
        }

        let outcome = match session.players.len() {
            0 => PlayOutcome::EndedNoWinner,
            1 => PlayOutcome::EndedWithWinner(session.players[0].id.clone()),
            _ => PlayOutcome::Continue,
        };

        let stored = dispatch(self.store.as_ref(), &session, &outcome).await?;

        let mut transitions = derive_transitions(&before, &SessionView::of(&stored));
        transitions.push(SessionTransition::PlayerLeft { player_id: actor });
        for transition in &transitions {
            debug!(session_id = %stored.id, ?transition, "session transition");
        }
        info!(
            session_id = %stored.id,
            actor_id,
            remaining = session.players.len(),
            outcome = ?outcome,
            "player abandoned"
        );

        Ok(AbandonResult {
            session: stored,
            outcome,
        })
    }
}
