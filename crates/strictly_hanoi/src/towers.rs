//! The three towers and the disks stacked on them.

use super::types::{Disk, DiskCount, TowerIndex};
use tracing::{debug, instrument, warn};

/// Three stacks of disks, each ordered base first.
///
/// The lifted disk is never stored here; it lives in the
/// [`Selection`](crate::Selection) until it is placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Towers {
    stacks: [Vec<Disk>; 3],
}

impl Towers {
    /// Creates the initial layout: every disk on the start tower, largest at the base.
    #[instrument]
    pub fn new(disk_count: DiskCount) -> Self {
        let start = (1..=disk_count.get())
            .rev()
            .map(|size| Disk::new(size, TowerIndex::Start))
            .collect();
        debug!(disks = disk_count.get(), "Stacked disks on start tower");
        Self {
            stacks: [start, Vec::new(), Vec::new()],
        }
    }

    /// Disks on a tower, base first.
    pub fn stack(&self, tower: TowerIndex) -> &[Disk] {
        &self.stacks[tower.index()]
    }

    /// Whether a tower holds no disks.
    pub fn is_empty(&self, tower: TowerIndex) -> bool {
        self.stacks[tower.index()].is_empty()
    }

    /// The smallest disk on a tower, which is the topmost one while the tower is ordered.
    pub fn top_disk(&self, tower: TowerIndex) -> Option<Disk> {
        self.stacks[tower.index()]
            .iter()
            .copied()
            .min_by_key(Disk::size)
    }

    /// All disks resting on towers, left tower first.
    pub fn disks(&self) -> impl Iterator<Item = &Disk> {
        self.stacks.iter().flatten()
    }

    /// Number of disks resting on towers.
    pub fn len(&self) -> usize {
        self.stacks.iter().map(Vec::len).sum()
    }

    /// Whether a tower's disks shrink strictly from base to top.
    pub fn is_ordered(&self, tower: TowerIndex) -> bool {
        self.stacks[tower.index()]
            .windows(2)
            .all(|pair| pair[0].size() > pair[1].size())
    }

    /// Removes and returns the top disk of a tower.
    #[instrument(skip(self))]
    pub(crate) fn take_top(&mut self, tower: TowerIndex) -> Option<Disk> {
        let stack = &mut self.stacks[tower.index()];
        let position = stack
            .iter()
            .enumerate()
            .min_by_key(|(_, disk)| disk.size())
            .map(|(position, _)| position)?;
        let disk = stack.remove(position);
        debug!(size = disk.size(), %tower, "Took disk from tower");
        Some(disk)
    }

    /// Puts a disk on top of a tower.
    ///
    /// Callers must have validated the placement. A placement that breaks
    /// the ordering is still performed and logged.
    #[instrument(skip(self), fields(size = disk.size()))]
    pub(crate) fn assign(&mut self, mut disk: Disk, tower: TowerIndex) {
        let previous_top = self.top_disk(tower);
        disk.set_tower(tower);
        self.stacks[tower.index()].push(disk);

        match previous_top {
            Some(top) if top.size() < disk.size() => {
                warn!(
                    size = disk.size(),
                    onto = top.size(),
                    %tower,
                    "Disk placed on a smaller disk"
                );
            }
            _ => debug!(%tower, "Disk assigned to tower"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three() -> DiskCount {
        DiskCount::DEFAULT
    }

    #[test]
    fn test_initial_layout_on_start() {
        let towers = Towers::new(three());
        let sizes: Vec<u8> = towers.stack(TowerIndex::Start).iter().map(Disk::size).collect();
        assert_eq!(sizes, vec![3, 2, 1]);
        assert!(towers.is_empty(TowerIndex::Middle));
        assert!(towers.is_empty(TowerIndex::Finish));
        assert!(towers.disks().all(|d| d.tower() == TowerIndex::Start));
    }

    #[test]
    fn test_top_disk_is_smallest() {
        let towers = Towers::new(three());
        assert_eq!(towers.top_disk(TowerIndex::Start).map(|d| d.size()), Some(1));
        assert_eq!(towers.top_disk(TowerIndex::Middle), None);
    }

    #[test]
    fn test_take_and_assign() {
        let mut towers = Towers::new(three());
        let disk = towers.take_top(TowerIndex::Start).unwrap();
        assert_eq!(disk.size(), 1);
        assert_eq!(towers.len(), 2);

        towers.assign(disk, TowerIndex::Finish);
        assert_eq!(towers.len(), 3);
        let top = towers.top_disk(TowerIndex::Finish).unwrap();
        assert_eq!(top.size(), 1);
        assert_eq!(top.tower(), TowerIndex::Finish);
        assert!(towers.is_ordered(TowerIndex::Finish));
    }

    #[test]
    fn test_unordered_assign_is_detected() {
        let mut towers = Towers::new(three());
        let small = towers.take_top(TowerIndex::Start).unwrap();
        towers.assign(small, TowerIndex::Middle);
        let medium = towers.take_top(TowerIndex::Start).unwrap();
        towers.assign(medium, TowerIndex::Middle);

        assert!(!towers.is_ordered(TowerIndex::Middle));
        // The buried smaller disk is still the one picked up next.
        assert_eq!(towers.top_disk(TowerIndex::Middle).map(|d| d.size()), Some(1));
    }

    #[test]
    fn test_take_from_empty_tower() {
        let mut towers = Towers::new(three());
        assert_eq!(towers.take_top(TowerIndex::Finish), None);
    }
}
