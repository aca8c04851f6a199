//! The play-card orchestrator.

use tracing::{debug, info};

use super::outcome::{dispatch, PlayOutcome};
use super::GameFlowService;
use crate::chain::Chain;
use crate::domain::cards_types::{CardColor, CardId};
use crate::domain::effects;
use crate::domain::session_transition::{derive_transitions, SessionView};
use crate::domain::state::{GameSession, SessionId};
use crate::domain::validators;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::store::require_session;

/// Result of a successful play.
#[derive(Debug)]
pub struct PlayCardResult {
    /// The stored session after dispatch.
    pub session: GameSession,
    pub outcome: PlayOutcome,
    /// Human-readable confirmation for the acting player.
    pub message: String,
}

impl GameFlowService {
    /// Play one card: validate, apply the card's effect, move the card to
    /// the discard pile, check for a win, and dispatch the outcome.
    ///
    /// Turn progression for plain number cards is deliberately not part of
    /// this action; kinds that consume turns have already moved the cursor
    /// when their effect ran.
    pub async fn play_card(
        &self,
        session_id: &str,
        actor_id: &str,
        card_id: CardId,
        chosen_color: Option<CardColor>,
    ) -> Result<PlayCardResult, DomainError> {
        let id = SessionId::parse(session_id)?;
        let actor = actor_id.to_string();
        debug!(session_id = %id, actor_id, card_id = %card_id, "playing card");

        let turn_actor = actor.clone();
        let hand_actor = actor.clone();
        let mut session = Chain::start(require_session(self.store.as_ref(), &id))
            .and_then(validators::session_is_active)
            .and_then(move |s| validators::is_actors_turn(s, &turn_actor))
            .and_then(move |s| validators::card_in_hand(s, &hand_actor, card_id))
            .tap_err(|err| debug!(%err, "play rejected"))
            .run()
            .await?;
        let before = SessionView::of(&session);

        let kind = session
            .seat_of(actor_id)
            .and_then(|seat| seat.hand.iter().find(|c| c.id == card_id))
            .map(|card| card.kind)
            .ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::CardNotInHand,
                    format!("Player {actor_id} does not hold card {card_id}"),
                )
            })?;

        if !effects::can_execute(kind, chosen_color) {
            return Err(DomainError::validation(
                ValidationKind::InvalidCardAction,
                "Cannot perform this card action",
            ));
        }
        effects::execute(&mut session, kind, chosen_color)?;

        let played = session.take_from_hand(actor_id, card_id).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::CardNotInHand,
                format!("Player {actor_id} does not hold card {card_id}"),
            )
        })?;
        session.push_discard(played, actor.clone());

        let won = session
            .seat_of(actor_id)
            .is_some_and(|seat| seat.hand.is_empty());
        let outcome = if won {
            PlayOutcome::EndedWithWinner(actor.clone())
        } else {
            PlayOutcome::Continue
        };

        let stored = dispatch(self.store.as_ref(), &session, &outcome).await?;
        for transition in derive_transitions(&before, &SessionView::of(&stored)) {
            debug!(session_id = %stored.id, ?transition, "session transition");
        }

        let message = match &outcome {
            PlayOutcome::EndedWithWinner(_) => "You played your last card and won".to_string(),
            _ => "Card played successfully".to_string(),
        };
        info!(session_id = %stored.id, actor_id, kind = ?kind, won, "card played");

        Ok(PlayCardResult {
            session: stored,
            outcome,
            message,
        })
    }
}
