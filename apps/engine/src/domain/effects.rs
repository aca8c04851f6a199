//! Per-card-kind effect resolution.
//!
//! Each kind maps to exactly one effect via an exhaustive match. Plain
//! number cards are a deliberate no-op here: the generic discard move is
//! the play orchestrator's job, and turn progression for them is a
//! separate action. Kinds that consume turns (skip and the draw
//! penalties) move the cursor themselves and are not advanced again.

use crate::domain::cards_types::{CardColor, CardKind, Color};
use crate::domain::rotation;
use crate::domain::state::GameSession;
use crate::errors::domain::{DomainError, ValidationKind};

/// Cards delivered by a draw-two effect.
pub const DRAW_TWO_PENALTY: usize = 2;
/// Cards delivered by a wild-draw-four effect.
pub const WILD_DRAW_FOUR_PENALTY: usize = 4;

/// Whether the effect's preconditions hold for this play.
///
/// Color-choosing kinds require a chosen color that is one of the four
/// playable colors; every other kind is always executable.
pub fn can_execute(kind: CardKind, chosen_color: Option<CardColor>) -> bool {
    match kind {
        CardKind::Wild | CardKind::WildDrawFour => {
            matches!(chosen_color, Some(color) if Color::try_from(color).is_ok())
        }
        CardKind::Number
        | CardKind::Skip
        | CardKind::Reverse
        | CardKind::DrawTwo => true,
    }
}

/// Apply the kind's effect to the session in place.
///
/// Callers must have checked [`can_execute`] first; a missing or wild
/// chosen color on a color-choosing kind still fails here rather than
/// corrupting state.
pub fn execute(
    session: &mut GameSession,
    kind: CardKind,
    chosen_color: Option<CardColor>,
) -> Result<(), DomainError> {
    match kind {
        CardKind::Number => Ok(()),
        CardKind::Skip => {
            // Consume the actor's turn, then pass over the next seat.
            rotation::advance_turn(session);
            rotation::advance_turn(session);
            Ok(())
        }
        CardKind::Reverse => {
            rotation::reverse_direction(session);
            Ok(())
        }
        CardKind::DrawTwo => {
            deliver_penalty(session, DRAW_TWO_PENALTY);
            Ok(())
        }
        CardKind::Wild => {
            session.current_color = Some(require_chosen(chosen_color)?);
            Ok(())
        }
        CardKind::WildDrawFour => {
            session.current_color = Some(require_chosen(chosen_color)?);
            deliver_penalty(session, WILD_DRAW_FOUR_PENALTY);
            Ok(())
        }
    }
}

fn require_chosen(chosen_color: Option<CardColor>) -> Result<Color, DomainError> {
    let color = chosen_color.ok_or_else(|| {
        DomainError::validation(
            ValidationKind::InvalidCardAction,
            "A playable color must be chosen for this card",
        )
    })?;
    Color::try_from(color)
}

/// Deliver `count` cards from the deck to the seat that would act next,
/// then move the cursor past that seat. An exhausted deck delivers what
/// remains; an empty seat list is a no-op.
fn deliver_penalty(session: &mut GameSession, count: usize) {
    if session.players.is_empty() {
        return;
    }
    let target = rotation::peek_next_seat(session);
    for _ in 0..count {
        let Some(card) = session.deck.pop() else {
            break;
        };
        session.players[target].hand.push(card);
    }
    // The penalized seat also loses its turn.
    rotation::advance_turn(session);
    rotation::advance_turn(session);
}
