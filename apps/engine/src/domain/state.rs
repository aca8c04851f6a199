//! Session aggregate: the game session, its seats, and invariant helpers.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::cards_types::{Card, CardId, Color};
use crate::errors::domain::{CorruptionKind, DomainError, ValidationKind};

/// Opaque player identifier supplied by the caller.
pub type PlayerId = String;

/// Opaque session identifier.
///
/// The engine only shape-checks ids (trimmed, non-empty); conformance to a
/// store's id scheme is the store's concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Mint a fresh id for a new session.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Validate a caller-supplied id.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::InvalidSessionId,
                "Session id must be a non-empty string",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Overall session lifecycle states.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Session created, seats filling up.
    Waiting,
    /// Game in progress; `current_player_index` is meaningful.
    Active,
    /// Finished; never mutated again.
    Ended,
}

/// Direction the turn cursor moves through the seats.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum TurnDirection {
    Forward,
    Reversed,
}

impl TurnDirection {
    pub const fn delta(self) -> i64 {
        match self {
            TurnDirection::Forward => 1,
            TurnDirection::Reversed => -1,
        }
    }

    pub const fn flipped(self) -> Self {
        match self {
            TurnDirection::Forward => TurnDirection::Reversed,
            TurnDirection::Reversed => TurnDirection::Forward,
        }
    }
}

/// A player's membership record within a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatedPlayer {
    pub id: PlayerId,
    /// Meaningful only while the session is `Waiting`.
    pub ready: bool,
    /// 1-based seat order; reassigned on start and on abandonment.
    pub position: u8,
    pub hand: Vec<Card>,
}

/// One played card in the append-only discard history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscardEntry {
    pub order: u64,
    pub card: Card,
    pub played_by: PlayerId,
}

/// The aggregate root. Loaded and saved in full on each operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    pub id: SessionId,
    pub status: GameStatus,
    pub creator_id: PlayerId,
    pub min_players: usize,
    pub max_players: usize,
    /// Join order before `Active`; `position` is authoritative afterward.
    pub players: Vec<SeatedPlayer>,
    /// Valid index into `players` while `Active`.
    pub current_player_index: usize,
    pub turn_direction: TurnDirection,
    /// Set by color-choosing effects; `None` until the first wild.
    pub current_color: Option<Color>,
    pub discard_pile: Vec<DiscardEntry>,
    pub deck: Vec<Card>,
    pub winner_id: Option<PlayerId>,
    /// Optimistic-concurrency token, bumped by the store on save.
    pub version: i64,
    pub created_at: OffsetDateTime,
    pub started_at: Option<OffsetDateTime>,
    pub ended_at: Option<OffsetDateTime>,
}

impl GameSession {
    /// Create a session in `Waiting` with the creator seated, ready, at
    /// position 1.
    pub fn new(creator_id: PlayerId, min_players: usize, max_players: usize) -> Self {
        Self {
            id: SessionId::new(),
            status: GameStatus::Waiting,
            creator_id: creator_id.clone(),
            min_players,
            max_players,
            players: vec![SeatedPlayer {
                id: creator_id,
                ready: true,
                position: 1,
                hand: Vec::new(),
            }],
            current_player_index: 0,
            turn_direction: TurnDirection::Forward,
            current_color: None,
            discard_pile: Vec::new(),
            deck: Vec::new(),
            winner_id: None,
            version: 0,
            created_at: OffsetDateTime::now_utc(),
            started_at: None,
            ended_at: None,
        }
    }

    pub fn seat_index(&self, player_id: &str) -> Option<usize> {
        self.players.iter().position(|p| p.id == player_id)
    }

    pub fn seat_of(&self, player_id: &str) -> Option<&SeatedPlayer> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn seat_of_mut(&mut self, player_id: &str) -> Option<&mut SeatedPlayer> {
        self.players.iter_mut().find(|p| p.id == player_id)
    }

    pub fn is_seated(&self, player_id: &str) -> bool {
        self.seat_index(player_id).is_some()
    }

    /// Renumber `position` 1..N in the players' current relative order.
    pub fn reposition_seats(&mut self) {
        for (idx, seat) in self.players.iter_mut().enumerate() {
            seat.position = (idx + 1) as u8;
        }
    }

    /// Next strictly-increasing discard order.
    pub fn next_discard_order(&self) -> u64 {
        self.discard_pile.last().map_or(1, |entry| entry.order + 1)
    }

    /// Append a played card to the discard history.
    pub fn push_discard(&mut self, card: Card, played_by: PlayerId) {
        let order = self.next_discard_order();
        self.discard_pile.push(DiscardEntry {
            order,
            card,
            played_by,
        });
    }

    /// Remove a card from a seat's hand by id.
    pub fn take_from_hand(&mut self, player_id: &str, card_id: CardId) -> Option<Card> {
        let seat = self.seat_of_mut(player_id)?;
        let pos = seat.hand.iter().position(|c| c.id == card_id)?;
        Some(seat.hand.remove(pos))
    }
}

/// Seat the cursor currently points at.
///
/// A cursor outside the seated players signals corrupted state, not a rule
/// violation; callers surface it as `IndeterminateCurrentPlayer`.
pub fn require_current_seat(session: &GameSession) -> Result<&SeatedPlayer, DomainError> {
    session
        .players
        .get(session.current_player_index)
        .ok_or_else(|| {
            DomainError::corruption(
                CorruptionKind::IndeterminateCurrentPlayer,
                format!(
                    "Current player index {} out of bounds for {} seats",
                    session.current_player_index,
                    session.players.len()
                ),
            )
        })
}
