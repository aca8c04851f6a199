//! Core card-related types: Card, Color, CardColor, CardKind.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::domain::{DomainError, ValidationKind};

/// The four playable colors. `current_color` on a session is always one of
/// these; wild cards force the player to choose one.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::Red, Color::Yellow, Color::Green, Color::Blue];
}

/// Printed card color: the four playable colors plus the wild marker.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Yellow,
    Green,
    Blue,
    Wild,
}

impl From<Color> for CardColor {
    fn from(color: Color) -> Self {
        match color {
            Color::Red => CardColor::Red,
            Color::Yellow => CardColor::Yellow,
            Color::Green => CardColor::Green,
            Color::Blue => CardColor::Blue,
        }
    }
}

impl TryFrom<CardColor> for Color {
    type Error = DomainError;

    fn try_from(color: CardColor) -> Result<Self, Self::Error> {
        match color {
            CardColor::Red => Ok(Color::Red),
            CardColor::Yellow => Ok(Color::Yellow),
            CardColor::Green => Ok(Color::Green),
            CardColor::Blue => Ok(Color::Blue),
            CardColor::Wild => Err(DomainError::validation(
                ValidationKind::InvalidCardAction,
                "Cannot convert the wild marker to a playable color",
            )),
        }
    }
}

/// Card kinds, one per effect variant.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Number,
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl CardKind {
    /// Decode a stored kind token.
    ///
    /// Unrecognized tokens decode to `Number`, the no-op fallback. Stored
    /// data is the only ingress where an unknown kind can occur; the enum
    /// itself is closed.
    pub fn from_token(token: &str) -> Self {
        match token {
            "S" => CardKind::Skip,
            "R" => CardKind::Reverse,
            "D2" => CardKind::DrawTwo,
            "W" => CardKind::Wild,
            "WD4" => CardKind::WildDrawFour,
            _ => CardKind::Number,
        }
    }

    pub const fn token(&self) -> &'static str {
        match self {
            CardKind::Number => "",
            CardKind::Skip => "S",
            CardKind::Reverse => "R",
            CardKind::DrawTwo => "D2",
            CardKind::Wild => "W",
            CardKind::WildDrawFour => "WD4",
        }
    }
}

/// Opaque card identifier, minted when the deck is built.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct CardId(pub Uuid);

impl CardId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CardId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single card. `face_value` is set only for `Number` cards.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub color: CardColor,
    pub kind: CardKind,
    pub face_value: Option<u8>,
}

impl Card {
    pub fn number(color: Color, value: u8) -> Self {
        Self {
            id: CardId::new(),
            color: color.into(),
            kind: CardKind::Number,
            face_value: Some(value),
        }
    }

    pub fn skip(color: Color) -> Self {
        Self::action(color, CardKind::Skip)
    }

    pub fn reverse(color: Color) -> Self {
        Self::action(color, CardKind::Reverse)
    }

    pub fn draw_two(color: Color) -> Self {
        Self::action(color, CardKind::DrawTwo)
    }

    pub fn wild() -> Self {
        Self {
            id: CardId::new(),
            color: CardColor::Wild,
            kind: CardKind::Wild,
            face_value: None,
        }
    }

    pub fn wild_draw_four() -> Self {
        Self {
            id: CardId::new(),
            color: CardColor::Wild,
            kind: CardKind::WildDrawFour,
            face_value: None,
        }
    }

    fn action(color: Color, kind: CardKind) -> Self {
        Self {
            id: CardId::new(),
            color: color.into(),
            kind,
            face_value: None,
        }
    }
}
