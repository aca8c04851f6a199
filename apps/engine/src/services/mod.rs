//! Service layer: lifecycle operations and game-flow orchestration.

pub mod game_flow;
pub mod games;
pub mod players;
