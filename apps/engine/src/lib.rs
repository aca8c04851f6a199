#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod chain;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;
pub mod store;
pub mod telemetry;

// Re-exports for public API
pub use chain::{Chain, ResultExt};
pub use config::GameConfig;
pub use domain::{
    Card, CardColor, CardId, CardKind, Color, GameSession, GameStatus, PlayerId, SeatedPlayer,
    SessionId, TurnDirection,
};
pub use errors::{DomainError, ErrorCode};
pub use services::game_flow::{GameFlowService, PlayOutcome};
pub use services::games::GameService;
pub use store::memory::{MemoryPlayerDirectory, MemorySessionStore};
pub use store::{PlayerDirectory, PlayerProfile, SessionStore};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::logging::init();
}
