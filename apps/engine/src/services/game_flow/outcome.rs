//! Outcome dispatch: symbolic result to persistence action.

use crate::domain::state::{GameSession, PlayerId};
use crate::errors::domain::DomainError;
use crate::store::SessionStore;

/// Symbolic outcome of a play or abandonment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    EndedWithWinner(PlayerId),
    EndedNoWinner,
    Continue,
}

/// Map the outcome to exactly one persistence action.
///
/// Ending outcomes finalize the session (status `Ended`, winner id, end
/// timestamp, one time) and are not followed by a second, redundant plain
/// save; `Continue` saves the mutated session.
pub(super) async fn dispatch(
    store: &dyn SessionStore,
    session: &GameSession,
    outcome: &PlayOutcome,
) -> Result<GameSession, DomainError> {
    match outcome {
        PlayOutcome::EndedWithWinner(winner_id) => {
            store.finalize(&session.id, Some(winner_id.clone())).await
        }
        PlayOutcome::EndedNoWinner => store.finalize(&session.id, None).await,
        PlayOutcome::Continue => store.save(session).await,
    }
}
