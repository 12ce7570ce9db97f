//! Pointer and lifted-disk state.

use super::types::{Disk, TowerIndex};

/// Which tower the player points at and which disk, if any, they hold.
///
/// At most one disk is lifted at a time. While lifted, the disk's tower
/// follows the pointer so it hovers over wherever it would be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pointing_at: TowerIndex,
    lifted: Option<Disk>,
}

impl Selection {
    /// Creates a selection pointing at the start tower with nothing lifted.
    pub fn new() -> Self {
        Self::default()
    }

    /// The tower pointed at.
    pub fn pointing_at(&self) -> TowerIndex {
        self.pointing_at
    }

    /// The lifted disk, if any.
    pub fn lifted(&self) -> Option<Disk> {
        self.lifted
    }

    /// Whether a disk is held.
    pub fn is_lifted(&self) -> bool {
        self.lifted.is_some()
    }

    /// Moves the pointer one tower right, carrying any lifted disk.
    pub fn point_right(&mut self) -> TowerIndex {
        self.point_at(self.pointing_at.next())
    }

    /// Moves the pointer one tower left, carrying any lifted disk.
    pub fn point_left(&mut self) -> TowerIndex {
        self.point_at(self.pointing_at.prev())
    }

    fn point_at(&mut self, tower: TowerIndex) -> TowerIndex {
        self.pointing_at = tower;
        if let Some(disk) = self.lifted.as_mut() {
            disk.set_tower(tower);
        }
        tower
    }

    /// Holds a disk. Returns `false` and changes nothing if one is already held.
    pub(crate) fn lift(&mut self, disk: Disk) -> bool {
        if self.lifted.is_some() {
            return false;
        }
        self.lifted = Some(disk);
        true
    }

    /// Releases the held disk.
    pub(crate) fn release(&mut self) -> Option<Disk> {
        self.lifted.take()
    }

    /// Points back at the start tower and drops any held disk.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
