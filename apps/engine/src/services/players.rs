//! Player directory decoration helpers.

use tracing::{debug, warn};

use crate::store::{PlayerDirectory, PlayerProfile};

pub const UNKNOWN_NAME: &str = "Unknown";
pub const UNKNOWN_CONTACT: &str = "unknown@example.com";

fn placeholder() -> PlayerProfile {
    PlayerProfile {
        display_name: UNKNOWN_NAME.to_string(),
        contact: UNKNOWN_CONTACT.to_string(),
    }
}

/// Resolve a player's display fields, degrading to placeholders.
///
/// Directory misses and failures never abort the surrounding query.
pub async fn resolve_profile(directory: &dyn PlayerDirectory, player_id: &str) -> PlayerProfile {
    match directory.lookup(player_id).await {
        Ok(Some(profile)) => profile,
        Ok(None) => {
            debug!(player_id, "player missing from directory");
            placeholder()
        }
        Err(err) => {
            warn!(player_id, %err, "player directory lookup failed");
            placeholder()
        }
    }
}
