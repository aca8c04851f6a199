//! Error codes for the Onesie engine.
//!
//! This module defines all error codes surfaced by the engine. Add new codes
//! here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings a
//! presentation layer exposes in its responses.

use core::fmt;

/// Centralized error codes for the Onesie engine.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Session lifecycle rule violations
    /// Invalid session id provided
    InvalidSessionId,
    /// Join attempted outside the Waiting state
    NotAcceptingPlayers,
    /// Session already holds max_players seats
    SessionFull,
    /// Actor already holds a seat
    AlreadySeated,
    /// Only the creator may perform this operation
    NotCreator,
    /// Session already left the Waiting state
    AlreadyStarted,
    /// Fewer than min_players seated
    MinimumPlayersUnmet,
    /// At least one seated player is not ready
    NotAllReady,
    /// Action requires a seat the actor does not hold
    NotSeated,
    /// Action requires an Active session
    SessionNotActive,
    /// It is another player's turn
    NotYourTurn,
    /// Named card is not in the actor's hand
    CardNotInHand,
    /// Card effect preconditions unmet (e.g. wild without a color)
    InvalidCardAction,
    /// General validation error
    ValidationError,

    // Resource not found
    /// Session not found
    SessionNotFound,
    /// Player not found
    PlayerNotFound,
    /// General not found error
    NotFound,

    // Conflicts
    /// Optimistic lock conflict
    OptimisticLock,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // Internal inconsistency
    /// Turn cursor points outside the seated players
    IndeterminateCurrentPlayer,
    /// Active session holds no seats
    NoSeatedPlayers,
    /// Data corruption detected
    DataCorruption,

    // System errors
    /// Store timeout
    StoreTimeout,
    /// Store unavailable
    StoreUnavailable,
    /// Internal error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            // Session lifecycle rule violations
            Self::InvalidSessionId => "INVALID_SESSION_ID",
            Self::NotAcceptingPlayers => "NOT_ACCEPTING_PLAYERS",
            Self::SessionFull => "SESSION_FULL",
            Self::AlreadySeated => "ALREADY_SEATED",
            Self::NotCreator => "NOT_CREATOR",
            Self::AlreadyStarted => "ALREADY_STARTED",
            Self::MinimumPlayersUnmet => "MINIMUM_PLAYERS_UNMET",
            Self::NotAllReady => "NOT_ALL_READY",
            Self::NotSeated => "NOT_SEATED",
            Self::SessionNotActive => "SESSION_NOT_ACTIVE",
            Self::NotYourTurn => "NOT_YOUR_TURN",
            Self::CardNotInHand => "CARD_NOT_IN_HAND",
            Self::InvalidCardAction => "INVALID_CARD_ACTION",
            Self::ValidationError => "VALIDATION_ERROR",

            // Resource not found
            Self::SessionNotFound => "SESSION_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            // Conflicts
            Self::OptimisticLock => "OPTIMISTIC_LOCK",
            Self::Conflict => "CONFLICT",

            // Internal inconsistency
            Self::IndeterminateCurrentPlayer => "INDETERMINATE_CURRENT_PLAYER",
            Self::NoSeatedPlayers => "NO_SEATED_PLAYERS",
            Self::DataCorruption => "DATA_CORRUPTION",

            // System errors
            Self::StoreTimeout => "STORE_TIMEOUT",
            Self::StoreUnavailable => "STORE_UNAVAILABLE",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
