//! Game flow orchestration service.
//!
//! Each action here is one unit of work: load the session, run it through
//! the validator pipeline, mutate in memory, and dispatch exactly one
//! persistence action for the outcome.

mod abandon;
mod outcome;
mod play_card;
mod turns;

use std::sync::Arc;

use crate::store::SessionStore;

pub use abandon::AbandonResult;
pub use outcome::PlayOutcome;
pub use play_card::PlayCardResult;
pub use turns::DrawCardResult;

/// Game flow service. Collaborators are passed in explicitly; orchestrators
/// never reach back into a larger aggregate.
pub struct GameFlowService {
    store: Arc<dyn SessionStore>,
}

impl GameFlowService {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }
}
