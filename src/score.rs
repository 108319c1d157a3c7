use serde::{Deserialize, Serialize};

use crate::configuration::DEFAULT_PLAYER_NAME;

/// Name of whoever is playing the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerName(pub String);

impl Default for PlayerName {
    fn default() -> Self {
        Self(DEFAULT_PLAYER_NAME.to_string())
    }
}

/// A leaderboard entry. Steps are kept as text, which is how leaderboards
/// store them on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub name: String,
    pub steps: String,
}

impl Score {
    pub fn new(player: &PlayerName, steps: usize) -> Self {
        Self {
            name: player.0.clone(),
            steps: steps.to_string(),
        }
    }
}
