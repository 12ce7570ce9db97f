//! Session statistics and the end-of-game report.

use super::types::DiskCount;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Fewest moves that solve a game with `disks` disks: `2^disks - 1`.
///
/// Saturates at `u64::MAX` for counts too large to represent.
pub fn minimum_steps(disks: u32) -> u64 {
    2u64.checked_pow(disks).map_or(u64::MAX, |moves| moves - 1)
}

/// Running statistics for the current session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionStats {
    /// Name of the person playing.
    player_name: String,
    /// Disks in play.
    disk_count: DiskCount,
    /// Completed placements so far.
    step_count: u32,
}

impl SessionStats {
    /// Creates a statistics snapshot.
    pub fn new(player_name: String, disk_count: DiskCount, step_count: u32) -> Self {
        Self {
            player_name,
            disk_count,
            step_count,
        }
    }
}

/// Final result of a solved puzzle, handed to whatever displays results.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameReport {
    /// Name of the person who played.
    player_name: String,
    /// Disks in play.
    disk_count: DiskCount,
    /// Placements the player needed.
    steps: u32,
    /// Fewest placements possible.
    minimum_steps: u64,
    /// Whether the player matched the minimum.
    optimal: bool,
}

impl GameReport {
    /// Builds a report from the final session statistics.
    #[instrument(skip(stats), fields(player = %stats.player_name, steps = stats.step_count))]
    pub fn from_stats(stats: SessionStats) -> Self {
        let minimum_steps = stats.disk_count.minimum_steps();
        Self {
            optimal: u64::from(stats.step_count) == minimum_steps,
            player_name: stats.player_name,
            disk_count: stats.disk_count,
            steps: stats.step_count,
            minimum_steps,
        }
    }

    /// Placements beyond the minimum.
    pub fn extra_steps(&self) -> u64 {
        u64::from(self.steps).saturating_sub(self.minimum_steps)
    }
}
