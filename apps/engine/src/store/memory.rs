//! In-process store adapters.
//!
//! `MemorySessionStore` carries the same optimistic-locking contract a real
//! store must implement: every save validates the caller's `version`
//! against the stored one and bumps it on success, so two concurrent
//! actions against one session cannot silently overwrite each other.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use time::OffsetDateTime;

use crate::domain::state::{GameSession, GameStatus, PlayerId, SessionId};
use crate::errors::domain::{ConflictKind, DomainError};
use crate::store::{PlayerDirectory, PlayerProfile, SessionStore};

#[derive(Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, GameSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<GameSession>, DomainError> {
        Ok(self.sessions.read().get(id.as_str()).cloned())
    }

    async fn save(&self, session: &GameSession) -> Result<GameSession, DomainError> {
        let mut sessions = self.sessions.write();
        if let Some(stored) = sessions.get(session.id.as_str()) {
            if stored.version != session.version {
                return Err(DomainError::conflict(
                    ConflictKind::OptimisticLock,
                    format!(
                        "Session version mismatch: expected {}, but session has version {}",
                        session.version, stored.version
                    ),
                ));
            }
        }
        let mut updated = session.clone();
        updated.version += 1;
        sessions.insert(updated.id.as_str().to_string(), updated.clone());
        Ok(updated)
    }

    async fn finalize(
        &self,
        id: &SessionId,
        winner_id: Option<PlayerId>,
    ) -> Result<GameSession, DomainError> {
        let mut sessions = self.sessions.write();
        let stored = sessions.get_mut(id.as_str()).ok_or_else(|| {
            DomainError::not_found(
                crate::errors::domain::NotFoundKind::Session,
                format!("No session with id {id}"),
            )
        })?;
        if stored.status == GameStatus::Ended {
            return Err(DomainError::conflict(
                ConflictKind::Other("AlreadyFinalized".into()),
                format!("Session {id} was already finalized"),
            ));
        }
        stored.status = GameStatus::Ended;
        stored.winner_id = winner_id;
        stored.ended_at = Some(OffsetDateTime::now_utc());
        stored.version += 1;
        Ok(stored.clone())
    }
}

#[derive(Default)]
pub struct MemoryPlayerDirectory {
    profiles: RwLock<HashMap<String, PlayerProfile>>,
}

impl MemoryPlayerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, player_id: impl Into<String>, profile: PlayerProfile) {
        self.profiles.write().insert(player_id.into(), profile);
    }
}

#[async_trait]
impl PlayerDirectory for MemoryPlayerDirectory {
    async fn lookup(&self, player_id: &str) -> Result<Option<PlayerProfile>, DomainError> {
        Ok(self.profiles.read().get(player_id).cloned())
    }
}
