//! Domain-level error type used across services and store adapters.
//!
//! This error type is transport- and storage-agnostic. A presentation layer
//! embedding the engine maps each error to its own status scheme via
//! [`DomainError::code`] and [`DomainError::is_internal`].

use thiserror::Error;

use crate::errors::error_code::ErrorCode;

/// Rule-violation kinds raised by the lifecycle validators and orchestrators.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    InvalidSessionId,
    NotAcceptingPlayers,
    SessionFull,
    AlreadySeated,
    NotCreator,
    AlreadyStarted,
    MinimumPlayersUnmet,
    NotAllReady,
    NotSeated,
    SessionNotActive,
    NotYourTurn,
    CardNotInHand,
    InvalidCardAction,
    Other(String),
}

/// Domain-level not-found entities.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Session,
    Player,
    Other(String),
}

/// Semantic conflict kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    OptimisticLock,
    Other(String),
}

/// Internal-inconsistency kinds. These signal corrupted session state, not a
/// rule violation, and surface as 5xx-style failures upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CorruptionKind {
    IndeterminateCurrentPlayer,
    NoSeatedPlayers,
    Other(String),
}

/// Infra error kinds to distinguish operational failures.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    Timeout,
    StoreUnavailable,
    Other(String),
}

/// Central domain error type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Input or business rule violation
    #[error("validation {0:?}: {1}")]
    Validation(ValidationKind, String),
    /// Semantic conflict
    #[error("conflict {0:?}: {1}")]
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    #[error("not found {0:?}: {1}")]
    NotFound(NotFoundKind, String),
    /// Corrupted session state
    #[error("corruption {0:?}: {1}")]
    Corruption(CorruptionKind, String),
    /// Infrastructure/operational failures
    #[error("infra {0:?}: {1}")]
    Infra(InfraErrorKind, String),
    /// Configuration error
    #[error("config error: {0}")]
    Config(String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn validation_other(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        Self::Validation(ValidationKind::Other(detail.clone()), detail)
    }

    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }

    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }

    pub fn corruption(kind: CorruptionKind, detail: impl Into<String>) -> Self {
        Self::Corruption(kind, detail.into())
    }

    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config(detail.into())
    }

    /// Canonical error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation(kind, _) => match kind {
                ValidationKind::InvalidSessionId => ErrorCode::InvalidSessionId,
                ValidationKind::NotAcceptingPlayers => ErrorCode::NotAcceptingPlayers,
                ValidationKind::SessionFull => ErrorCode::SessionFull,
                ValidationKind::AlreadySeated => ErrorCode::AlreadySeated,
                ValidationKind::NotCreator => ErrorCode::NotCreator,
                ValidationKind::AlreadyStarted => ErrorCode::AlreadyStarted,
                ValidationKind::MinimumPlayersUnmet => ErrorCode::MinimumPlayersUnmet,
                ValidationKind::NotAllReady => ErrorCode::NotAllReady,
                ValidationKind::NotSeated => ErrorCode::NotSeated,
                ValidationKind::SessionNotActive => ErrorCode::SessionNotActive,
                ValidationKind::NotYourTurn => ErrorCode::NotYourTurn,
                ValidationKind::CardNotInHand => ErrorCode::CardNotInHand,
                ValidationKind::InvalidCardAction => ErrorCode::InvalidCardAction,
                ValidationKind::Other(_) => ErrorCode::ValidationError,
            },
            Self::Conflict(kind, _) => match kind {
                ConflictKind::OptimisticLock => ErrorCode::OptimisticLock,
                ConflictKind::Other(_) => ErrorCode::Conflict,
            },
            Self::NotFound(kind, _) => match kind {
                NotFoundKind::Session => ErrorCode::SessionNotFound,
                NotFoundKind::Player => ErrorCode::PlayerNotFound,
                NotFoundKind::Other(_) => ErrorCode::NotFound,
            },
            Self::Corruption(kind, _) => match kind {
                CorruptionKind::IndeterminateCurrentPlayer => {
                    ErrorCode::IndeterminateCurrentPlayer
                }
                CorruptionKind::NoSeatedPlayers => ErrorCode::NoSeatedPlayers,
                CorruptionKind::Other(_) => ErrorCode::DataCorruption,
            },
            Self::Infra(kind, _) => match kind {
                InfraErrorKind::Timeout => ErrorCode::StoreTimeout,
                InfraErrorKind::StoreUnavailable => ErrorCode::StoreUnavailable,
                InfraErrorKind::Other(_) => ErrorCode::Internal,
            },
            Self::Config(_) => ErrorCode::ConfigError,
        }
    }

    /// Whether this error represents internal inconsistency or an operational
    /// failure rather than a user-facing rule violation. A presentation layer
    /// should log these distinctly and map them to 5xx-style statuses.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Corruption(_, _) | Self::Infra(_, _) | Self::Config(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_violations_are_not_internal() {
        let err = DomainError::validation(ValidationKind::NotYourTurn, "seat 2 is up");
        assert_eq!(err.code(), ErrorCode::NotYourTurn);
        assert!(!err.is_internal());
    }

    #[test]
    fn corruption_is_internal() {
        let err = DomainError::corruption(
            CorruptionKind::IndeterminateCurrentPlayer,
            "cursor 7 out of bounds for 3 seats",
        );
        assert_eq!(err.code(), ErrorCode::IndeterminateCurrentPlayer);
        assert!(err.is_internal());
    }

    #[test]
    fn display_includes_detail() {
        let err = DomainError::not_found(NotFoundKind::Session, "no session abc");
        assert!(err.to_string().contains("no session abc"));
    }
}
