//! Collaborator contracts at the persistence boundary.
//!
//! The engine loads and saves sessions in full through [`SessionStore`] and
//! decorates player listings through [`PlayerDirectory`]. Concrete storage
//! lives outside the engine; [`memory`] provides the in-process adapters
//! used by tests and embedders.

pub mod memory;

use async_trait::async_trait;

use crate::domain::state::{GameSession, PlayerId, SessionId};
use crate::errors::domain::{DomainError, NotFoundKind};

/// Full-document session persistence.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<GameSession>, DomainError>;

    /// Persist the session, enforcing the optimistic version check: a write
    /// whose `version` does not match the stored one fails with an
    /// `OptimisticLock` conflict. Returns the stored copy with the bumped
    /// version.
    async fn save(&self, session: &GameSession) -> Result<GameSession, DomainError>;

    /// One-time finalization: status `Ended`, winner id, and end timestamp
    /// in a single step. Fails if the session is already finalized.
    async fn finalize(
        &self,
        id: &SessionId,
        winner_id: Option<PlayerId>,
    ) -> Result<GameSession, DomainError>;
}

/// Find a session by id or return an error if not found.
///
/// Convenience helper that converts `None` into a `DomainError`, eliminating
/// the repetitive `ok_or_else` pattern when a session must exist.
pub async fn require_session(
    store: &dyn SessionStore,
    id: &SessionId,
) -> Result<GameSession, DomainError> {
    store.find_by_id(id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Session, format!("No session with id {id}"))
    })
}

/// Human-readable player fields for roster decoration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerProfile {
    pub display_name: String,
    pub contact: String,
}

/// Lookup of human-readable player fields.
///
/// Failures here must degrade to placeholder values at the call site rather
/// than aborting a whole query.
#[async_trait]
pub trait PlayerDirectory: Send + Sync {
    async fn lookup(&self, player_id: &str) -> Result<Option<PlayerProfile>, DomainError>;
}
