//! Core domain types for Towers of Hanoi.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use tracing::{instrument, warn};

/// One of the three towers.
///
/// Towers are numbered left to right: disks start on [`TowerIndex::Start`]
/// and the puzzle is solved when every disk rests on [`TowerIndex::Finish`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum TowerIndex {
    /// Left tower (index 0), where every game begins.
    #[default]
    Start,
    /// Middle tower (index 1).
    Middle,
    /// Right tower (index 2), the goal.
    Finish,
}

impl TowerIndex {
    /// All three towers, left to right.
    pub const ALL: [TowerIndex; 3] = [TowerIndex::Start, TowerIndex::Middle, TowerIndex::Finish];

    /// Converts the tower to its index (0-2).
    pub fn index(self) -> usize {
        match self {
            TowerIndex::Start => 0,
            TowerIndex::Middle => 1,
            TowerIndex::Finish => 2,
        }
    }

    /// Creates a tower from its index.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(TowerIndex::Start),
            1 => Some(TowerIndex::Middle),
            2 => Some(TowerIndex::Finish),
            _ => None,
        }
    }

    /// The tower to the right, wrapping from Finish back to Start.
    pub fn next(self) -> Self {
        match self {
            TowerIndex::Start => TowerIndex::Middle,
            TowerIndex::Middle => TowerIndex::Finish,
            TowerIndex::Finish => TowerIndex::Start,
        }
    }

    /// The tower to the left, wrapping from Start back to Finish.
    pub fn prev(self) -> Self {
        match self {
            TowerIndex::Start => TowerIndex::Finish,
            TowerIndex::Middle => TowerIndex::Start,
            TowerIndex::Finish => TowerIndex::Middle,
        }
    }

    /// Display label for this tower.
    pub fn label(self) -> &'static str {
        match self {
            TowerIndex::Start => "Start",
            TowerIndex::Middle => "Middle",
            TowerIndex::Finish => "Finish",
        }
    }
}

impl std::fmt::Display for TowerIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A disk: fixed size, movable between towers.
///
/// Size 1 is the smallest disk. Sizes are unique within a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Disk {
    size: u8,
    tower: TowerIndex,
}

impl Disk {
    /// Creates a disk of the given size resting on `tower`.
    pub fn new(size: u8, tower: TowerIndex) -> Self {
        Self { size, tower }
    }

    /// The disk's size (1 is smallest).
    pub fn size(&self) -> u8 {
        self.size
    }

    /// The tower the disk is on, or hovering over while lifted.
    pub fn tower(&self) -> TowerIndex {
        self.tower
    }

    pub(crate) fn set_tower(&mut self, tower: TowerIndex) {
        self.tower = tower;
    }
}

impl std::fmt::Display for Disk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "disk {} on {}", self.size, self.tower)
    }
}

/// Error for a disk count outside the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Disk count {requested} is outside the supported range 1-6")]
pub struct DiskCountError {
    /// The rejected value.
    pub requested: i64,
}

/// Number of disks in a game, always within `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct DiskCount(u8);

impl DiskCount {
    /// Fewest disks the game supports.
    pub const MIN: u8 = 1;
    /// Most disks the game supports.
    pub const MAX: u8 = 6;
    /// Range offered when prompting a player.
    pub const RECOMMENDED: RangeInclusive<u8> = 3..=6;
    /// Count used when nothing else is known.
    pub const DEFAULT: DiskCount = DiskCount(3);

    /// Creates a disk count, rejecting values outside `1..=6`.
    pub fn new(count: i64) -> Result<Self, DiskCountError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&count) {
            Ok(Self(count as u8))
        } else {
            Err(DiskCountError { requested: count })
        }
    }

    /// Creates a disk count, clamping out-of-range values into `1..=6`.
    #[instrument]
    pub fn clamped(count: i64) -> Self {
        let clamped = count.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u8;
        if i64::from(clamped) != count {
            warn!(requested = count, clamped, "Disk count out of range, clamping");
        }
        Self(clamped)
    }

    /// The number of disks.
    pub fn get(self) -> u8 {
        self.0
    }

    /// One more disk, saturating at [`DiskCount::MAX`].
    pub fn increment(self) -> Self {
        Self(self.0.saturating_add(1).min(Self::MAX))
    }

    /// One fewer disk, saturating at [`DiskCount::MIN`].
    pub fn decrement(self) -> Self {
        Self(self.0.saturating_sub(1).max(Self::MIN))
    }

    /// Whether this count is in the range offered to players.
    pub fn is_recommended(self) -> bool {
        Self::RECOMMENDED.contains(&self.0)
    }

    /// Fewest moves that solve a game with this many disks.
    pub fn minimum_steps(self) -> u64 {
        crate::stats::minimum_steps(u32::from(self.0))
    }
}

impl Default for DiskCount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for DiskCount {
    type Error = DiskCountError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DiskCount> for u8 {
    fn from(count: DiskCount) -> Self {
        count.0
    }
}

impl std::fmt::Display for DiskCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_tower_wraparound() {
        assert_eq!(TowerIndex::Finish.next(), TowerIndex::Start);
        assert_eq!(TowerIndex::Start.prev(), TowerIndex::Finish);
        for tower in TowerIndex::iter() {
            assert_eq!(tower.next().prev(), tower);
            assert_eq!(tower.next().index(), (tower.index() + 1) % 3);
            assert_eq!(tower.prev().index(), (tower.index() + 2) % 3);
        }
    }

    #[test]
    fn test_tower_index_roundtrip() {
        for tower in TowerIndex::ALL {
            assert_eq!(TowerIndex::from_index(tower.index()), Some(tower));
        }
        assert_eq!(TowerIndex::from_index(3), None);
    }

    #[test]
    fn test_disk_count_rejects_out_of_range() {
        assert!(DiskCount::new(0).is_err());
        assert!(DiskCount::new(7).is_err());
        assert_eq!(DiskCount::new(4).map(DiskCount::get), Ok(4));
    }

    #[test]
    fn test_disk_count_clamps() {
        assert_eq!(DiskCount::clamped(-3).get(), 1);
        assert_eq!(DiskCount::clamped(0).get(), 1);
        assert_eq!(DiskCount::clamped(12).get(), 6);
        assert_eq!(DiskCount::clamped(5).get(), 5);
    }

    #[test]
    fn test_disk_count_adjustment_saturates() {
        let max = DiskCount::clamped(6);
        assert_eq!(max.increment(), max);
        let min = DiskCount::clamped(1);
        assert_eq!(min.decrement(), min);
        assert_eq!(DiskCount::DEFAULT.increment().get(), 4);
        assert_eq!(DiskCount::DEFAULT.decrement().get(), 2);
    }

    #[test]
    fn test_disk_count_recommended_range() {
        assert!(!DiskCount::clamped(2).is_recommended());
        assert!(DiskCount::clamped(3).is_recommended());
        assert!(DiskCount::clamped(6).is_recommended());
    }
}
