//! Game tunables from environment variables.

use std::env;

use crate::errors::domain::DomainError;

/// Engine-level game configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Cards dealt to each seat when the game starts.
    pub starting_hand_size: usize,
    /// Lowest `min_players` a session may be created with.
    pub min_players_floor: usize,
    /// Highest `max_players` a session may be created with.
    pub max_players_cap: usize,
    /// Pins the deck shuffle for deterministic runs; unset means OS-seeded.
    pub deck_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_hand_size: 7,
            min_players_floor: 2,
            max_players_cap: 10,
            deck_seed: None,
        }
    }
}

impl GameConfig {
    /// Build a config from `ONESIE_*` environment variables, falling back
    /// to defaults for unset values.
    pub fn from_env() -> Result<Self, DomainError> {
        let defaults = Self::default();
        let config = Self {
            starting_hand_size: env_usize("ONESIE_STARTING_HAND_SIZE", defaults.starting_hand_size)?,
            min_players_floor: env_usize("ONESIE_MIN_PLAYERS", defaults.min_players_floor)?,
            max_players_cap: env_usize("ONESIE_MAX_PLAYERS", defaults.max_players_cap)?,
            deck_seed: env_u64_opt("ONESIE_DECK_SEED")?,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.starting_hand_size == 0 {
            return Err(DomainError::config(
                "ONESIE_STARTING_HAND_SIZE must be at least 1",
            ));
        }
        if self.min_players_floor < 2 {
            return Err(DomainError::config("ONESIE_MIN_PLAYERS must be at least 2"));
        }
        if self.min_players_floor > self.max_players_cap {
            return Err(DomainError::config(format!(
                "ONESIE_MIN_PLAYERS ({}) exceeds ONESIE_MAX_PLAYERS ({})",
                self.min_players_floor, self.max_players_cap
            )));
        }
        Ok(())
    }
}

fn env_usize(name: &str, default: usize) -> Result<usize, DomainError> {
    match env::var(name) {
        Ok(raw) => raw
            .parse::<usize>()
            .map_err(|_| DomainError::config(format!("{name} must be an integer, got '{raw}'"))),
        Err(_) => Ok(default),
    }
}

fn env_u64_opt(name: &str) -> Result<Option<u64>, DomainError> {
    match env::var(name) {
        Ok(raw) => raw
            .parse::<u64>()
            .map(Some)
            .map_err(|_| DomainError::config(format!("{name} must be an integer, got '{raw}'"))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = GameConfig::default();
        assert_eq!(config.starting_hand_size, 7);
        assert_eq!(config.min_players_floor, 2);
        assert!(config.min_players_floor <= config.max_players_cap);
        assert!(config.deck_seed.is_none());
    }

    #[test]
    fn validate_rejects_inverted_bounds() {
        let config = GameConfig {
            min_players_floor: 6,
            max_players_cap: 4,
            ..GameConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.is_internal());
    }
}
