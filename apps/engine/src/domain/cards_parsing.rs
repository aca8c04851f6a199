//! Compact card token format used by fixtures and the store boundary.
//!
//! Tokens are a color letter followed by a kind token: `R5` (red five),
//! `GS` (green skip), `BR` (blue reverse), `YD2` (yellow draw-two), `W`
//! (wild), `WD4` (wild draw-four).

use std::str::FromStr;

use crate::domain::cards_types::{Card, CardColor, CardId, CardKind};
use crate::errors::domain::DomainError;

fn color_letter(color: CardColor) -> char {
    match color {
        CardColor::Red => 'R',
        CardColor::Yellow => 'Y',
        CardColor::Green => 'G',
        CardColor::Blue => 'B',
        CardColor::Wild => 'W',
    }
}

fn color_from_letter(letter: char) -> Option<CardColor> {
    match letter {
        'R' => Some(CardColor::Red),
        'Y' => Some(CardColor::Yellow),
        'G' => Some(CardColor::Green),
        'B' => Some(CardColor::Blue),
        'W' => Some(CardColor::Wild),
        _ => None,
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = color_letter(self.color);
        match self.kind {
            CardKind::Number => match self.face_value {
                Some(value) => write!(f, "{letter}{value}"),
                None => write!(f, "{letter}_"),
            },
            kind => write!(f, "{letter}{}", kind.token()),
        }
    }
}

impl FromStr for Card {
    type Err = DomainError;

    /// Parse a card token, minting a fresh id.
    ///
    /// A malformed token (unknown color letter, empty input) is an error;
    /// an unknown kind suffix falls back to `Number` via
    /// [`CardKind::from_token`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let letter = chars
            .next()
            .ok_or_else(|| DomainError::validation_other("empty card token"))?;
        let color = color_from_letter(letter)
            .ok_or_else(|| DomainError::validation_other(format!("unknown card color: {s}")))?;
        let rest = chars.as_str();

        if color == CardColor::Wild {
            let kind = match rest {
                "" => CardKind::Wild,
                "D4" => CardKind::WildDrawFour,
                other => CardKind::from_token(other),
            };
            return Ok(Card {
                id: CardId::new(),
                color,
                kind,
                face_value: None,
            });
        }

        let kind = match rest.parse::<u8>() {
            Ok(_) => CardKind::Number,
            Err(_) => CardKind::from_token(rest),
        };
        Ok(Card {
            id: CardId::new(),
            color,
            kind,
            face_value: rest.parse::<u8>().ok(),
        })
    }
}

/// Parse a fixture hand from hardcoded tokens.
pub fn parse_cards(tokens: &[&str]) -> Vec<Card> {
    tokens
        .iter()
        .map(|t| t.parse::<Card>().expect("hardcoded valid card token"))
        .collect()
}
