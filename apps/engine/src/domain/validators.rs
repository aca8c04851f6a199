//! Game lifecycle validators.
//!
//! Independent predicates over a session, each returning the session on
//! success or one specific failure. Pipelines compose them left-to-right
//! with `and_then`; the first failing predicate short-circuits, so check
//! order defines precedence when several violations hold at once.

use crate::domain::cards_types::CardId;
use crate::domain::state::{GameSession, GameStatus};
use crate::errors::domain::{CorruptionKind, DomainError, ValidationKind};

pub type Validated = Result<GameSession, DomainError>;

pub fn session_is_waiting(session: GameSession) -> Validated {
    if session.status == GameStatus::Waiting {
        Ok(session)
    } else {
        Err(DomainError::validation(
            ValidationKind::NotAcceptingPlayers,
            format!("Session {} is not accepting players", session.id),
        ))
    }
}

pub fn session_has_room(session: GameSession) -> Validated {
    if session.players.len() < session.max_players {
        Ok(session)
    } else {
        Err(DomainError::validation(
            ValidationKind::SessionFull,
            format!("Session {} already holds {} seats", session.id, session.players.len()),
        ))
    }
}

pub fn actor_not_seated(session: GameSession, actor_id: &str) -> Validated {
    if session.is_seated(actor_id) {
        Err(DomainError::validation(
            ValidationKind::AlreadySeated,
            format!("Player {actor_id} already holds a seat"),
        ))
    } else {
        Ok(session)
    }
}

pub fn actor_is_creator(session: GameSession, actor_id: &str) -> Validated {
    if session.creator_id == actor_id {
        Ok(session)
    } else {
        Err(DomainError::validation(
            ValidationKind::NotCreator,
            format!("Player {actor_id} did not create this session"),
        ))
    }
}

pub fn session_not_started(session: GameSession) -> Validated {
    if session.status == GameStatus::Waiting {
        Ok(session)
    } else {
        Err(DomainError::validation(
            ValidationKind::AlreadyStarted,
            format!("Session {} has already started", session.id),
        ))
    }
}

pub fn minimum_players_met(session: GameSession) -> Validated {
    if session.players.len() >= session.min_players {
        Ok(session)
    } else {
        Err(DomainError::validation(
            ValidationKind::MinimumPlayersUnmet,
            format!(
                "Session {} has {} of {} required players",
                session.id,
                session.players.len(),
                session.min_players
            ),
        ))
    }
}

pub fn all_players_ready(session: GameSession) -> Validated {
    if session.players.iter().all(|p| p.ready) {
        Ok(session)
    } else {
        Err(DomainError::validation(
            ValidationKind::NotAllReady,
            "Not all seated players are ready",
        ))
    }
}

pub fn actor_is_seated(session: GameSession, actor_id: &str) -> Validated {
    if session.is_seated(actor_id) {
        Ok(session)
    } else {
        Err(DomainError::validation(
            ValidationKind::NotSeated,
            format!("Player {actor_id} holds no seat in this session"),
        ))
    }
}

pub fn session_is_active(session: GameSession) -> Validated {
    if session.status == GameStatus::Active {
        Ok(session)
    } else {
        Err(DomainError::validation(
            ValidationKind::SessionNotActive,
            format!("Session {} is not active", session.id),
        ))
    }
}

pub fn has_seated_players(session: GameSession) -> Validated {
    if session.players.is_empty() {
        Err(DomainError::corruption(
            CorruptionKind::NoSeatedPlayers,
            format!("Active session {} holds no seats", session.id),
        ))
    } else {
        Ok(session)
    }
}

/// It must be the actor's turn.
///
/// A cursor outside the seated players is corrupted state, reported as
/// `IndeterminateCurrentPlayer` rather than `NotYourTurn`.
pub fn is_actors_turn(session: GameSession, actor_id: &str) -> Validated {
    let Some(current) = session.players.get(session.current_player_index) else {
        return Err(DomainError::corruption(
            CorruptionKind::IndeterminateCurrentPlayer,
            format!(
                "Current player index {} out of bounds for {} seats",
                session.current_player_index,
                session.players.len()
            ),
        ));
    };
    if current.id == actor_id {
        Ok(session)
    } else {
        Err(DomainError::validation(
            ValidationKind::NotYourTurn,
            format!("It is {}'s turn", current.id),
        ))
    }
}

pub fn card_in_hand(session: GameSession, actor_id: &str, card_id: CardId) -> Validated {
    let holds = session
        .seat_of(actor_id)
        .is_some_and(|seat| seat.hand.iter().any(|c| c.id == card_id));
    if holds {
        Ok(session)
    } else {
        Err(DomainError::validation(
            ValidationKind::CardNotInHand,
            format!("Player {actor_id} does not hold card {card_id}"),
        ))
    }
}
