//! Edge-triggered lifecycle transitions derived from before/after views.
//!
//! Services log these; a realtime layer embedding the engine may broadcast
//! them to connected clients.

use crate::domain::state::{GameSession, GameStatus, PlayerId};

/// Lifecycle snapshot taken before and after a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    pub status: GameStatus,
    pub current_player: Option<PlayerId>,
}

impl SessionView {
    pub fn of(session: &GameSession) -> Self {
        let current_player = match session.status {
            GameStatus::Active => session
                .players
                .get(session.current_player_index)
                .map(|p| p.id.clone()),
            _ => None,
        };
        Self {
            status: session.status,
            current_player,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionTransition {
    /// Edge-triggered: the turn became a specific player.
    TurnBecame { player_id: PlayerId },

    /// Edge-triggered: session moved from Waiting to Active.
    GameStarted,

    /// Edge-triggered: session moved to Ended.
    GameEnded,

    /// Explicit: a player took a seat.
    PlayerJoined { player_id: PlayerId },

    /// Explicit: a player abandoned their seat.
    PlayerLeft { player_id: PlayerId },
}

/// Derive domain transitions from before/after lifecycle state.
pub fn derive_transitions(before: &SessionView, after: &SessionView) -> Vec<SessionTransition> {
    let mut transitions = Vec::new();

    if let Some(player_id) = &after.current_player {
        if before.current_player.as_ref() != Some(player_id) {
            transitions.push(SessionTransition::TurnBecame {
                player_id: player_id.clone(),
            });
        }
    }

    // Waiting -> Ended counts as an end, not a start.
    if before.status == GameStatus::Waiting && after.status == GameStatus::Active {
        transitions.push(SessionTransition::GameStarted);
    }

    if before.status != GameStatus::Ended && after.status == GameStatus::Ended {
        transitions.push(SessionTransition::GameEnded);
    }

    transitions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(status: GameStatus, current_player: Option<&str>) -> SessionView {
        SessionView {
            status,
            current_player: current_player.map(String::from),
        }
    }

    #[test]
    fn test_derive_game_started() {
        let before = view(GameStatus::Waiting, None);
        let after = view(GameStatus::Active, Some("p1"));
        let transitions = derive_transitions(&before, &after);
        assert!(transitions.contains(&SessionTransition::GameStarted));
    }

    #[test]
    fn test_derive_game_ended() {
        let before = view(GameStatus::Active, Some("p1"));
        let after = view(GameStatus::Ended, None);
        let transitions = derive_transitions(&before, &after);
        assert!(transitions.contains(&SessionTransition::GameEnded));
        assert!(!transitions.contains(&SessionTransition::GameStarted));
    }

    #[test]
    fn test_derive_turn_change() {
        let before = view(GameStatus::Active, Some("p1"));
        let after = view(GameStatus::Active, Some("p2"));
        let transitions = derive_transitions(&before, &after);
        assert!(transitions.contains(&SessionTransition::TurnBecame {
            player_id: "p2".into()
        }));
    }

    #[test]
    fn test_unchanged_turn_emits_nothing() {
        let before = view(GameStatus::Active, Some("p1"));
        let after = view(GameStatus::Active, Some("p1"));
        assert!(derive_transitions(&before, &after).is_empty());
    }
}
