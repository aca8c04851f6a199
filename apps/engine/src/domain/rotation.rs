//! Turn cursor math.
//!
//! These live in `domain` so validators, effects, and services share a
//! single source of truth for rotation and "who acts next". An empty seat
//! list is a legitimate transient state during abandonment; every operation
//! here is a safe no-op on empty input.

use crate::domain::state::{GameSession, TurnDirection};

/// Next cursor index for `len` seats, committing the move.
#[inline]
pub fn advance(len: usize, index: usize, direction: TurnDirection) -> usize {
    if len == 0 {
        return index;
    }
    (index as i64 + direction.delta()).rem_euclid(len as i64) as usize
}

/// Same arithmetic as [`advance`] without committing; used by draw effects
/// that must identify "the next player" before the cursor moves.
#[inline]
pub fn peek_next(len: usize, index: usize, direction: TurnDirection) -> usize {
    advance(len, index, direction)
}

/// Advance the session's cursor one seat.
pub fn advance_turn(session: &mut GameSession) {
    session.current_player_index = advance(
        session.players.len(),
        session.current_player_index,
        session.turn_direction,
    );
}

/// Seat index that would act next, without moving the cursor.
pub fn peek_next_seat(session: &GameSession) -> usize {
    peek_next(
        session.players.len(),
        session.current_player_index,
        session.turn_direction,
    )
}

/// Flip the session's turn direction; the cursor index is untouched.
pub fn reverse_direction(session: &mut GameSession) {
    session.turn_direction = session.turn_direction.flipped();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_forward() {
        assert_eq!(advance(4, 0, TurnDirection::Forward), 1);
        assert_eq!(advance(4, 3, TurnDirection::Forward), 0);
    }

    #[test]
    fn advance_wraps_reversed() {
        assert_eq!(advance(4, 0, TurnDirection::Reversed), 3);
        assert_eq!(advance(4, 2, TurnDirection::Reversed), 1);
    }

    #[test]
    fn empty_seat_list_is_a_no_op() {
        assert_eq!(advance(0, 0, TurnDirection::Forward), 0);
        assert_eq!(advance(0, 7, TurnDirection::Reversed), 7);
    }

    #[test]
    fn peek_does_not_commit() {
        let mut session = crate::domain::state::GameSession::new("p1".into(), 2, 4);
        session.players.push(crate::domain::state::SeatedPlayer {
            id: "p2".into(),
            ready: true,
            position: 2,
            hand: Vec::new(),
        });
        assert_eq!(peek_next_seat(&session), 1);
        assert_eq!(session.current_player_index, 0);
    }
}
