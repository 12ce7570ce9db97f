//! The game session aggregate.
//!
//! A [`GameSession`] owns every piece of mutable game state: the towers,
//! the pointer and lifted disk, and the step counter. Screens and tests
//! drive it through [`GameSession::apply`] or the individual operations.

use super::action::{Command, IgnoredReason, MoveError, MoveEvent};
use super::invariants::{HanoiInvariants, InvariantSet};
use super::rules::{PlacementPolicy, check_placement};
use super::selection::Selection;
use super::stats::{GameReport, SessionStats};
use super::towers::Towers;
use super::types::{Disk, DiskCount, TowerIndex};
use tracing::{debug, error, info, instrument};

/// One game of Towers of Hanoi from first move to win.
#[derive(Debug, Clone)]
pub struct GameSession {
    player_name: String,
    disk_count: DiskCount,
    policy: PlacementPolicy,
    towers: Towers,
    selection: Selection,
    step_count: u32,
}

impl GameSession {
    /// Creates a session with every disk on the start tower.
    #[instrument(skip(player_name))]
    pub fn new(
        player_name: impl Into<String>,
        disk_count: DiskCount,
        policy: PlacementPolicy,
    ) -> Self {
        let player_name = player_name.into();
        info!(player = %player_name, disks = disk_count.get(), %policy, "Creating game session");
        Self {
            player_name,
            disk_count,
            policy,
            towers: Towers::new(disk_count),
            selection: Selection::new(),
            step_count: 0,
        }
    }

    /// Name of the person playing.
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Disks in play.
    pub fn disk_count(&self) -> DiskCount {
        self.disk_count
    }

    /// Placement policy in force.
    pub fn policy(&self) -> PlacementPolicy {
        self.policy
    }

    /// The towers (excluding any lifted disk).
    pub fn towers(&self) -> &Towers {
        &self.towers
    }

    /// Pointer and lifted-disk state.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Completed placements.
    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    /// Fewest placements that solve this session.
    pub fn minimum_steps(&self) -> u64 {
        self.disk_count.minimum_steps()
    }

    /// Every disk in the game, including the lifted one.
    pub fn disks(&self) -> impl Iterator<Item = Disk> + '_ {
        self.towers.disks().copied().chain(self.selection.lifted())
    }

    /// Applies a player command.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] when a placement is refused or breaks an invariant.
    #[instrument(skip(self), fields(steps = self.step_count))]
    pub fn apply(&mut self, command: Command) -> Result<MoveEvent, MoveError> {
        match command {
            Command::PointLeft => Ok(self.point_left()),
            Command::PointRight => Ok(self.point_right()),
            Command::PickUp => Ok(self.pick_up()),
            Command::Place => self.place(),
            Command::Reset => Ok(self.reset()),
        }
    }

    /// Points one tower left. Never costs a step.
    pub fn point_left(&mut self) -> MoveEvent {
        let to = self.selection.point_left();
        debug!(%to, lifted = self.selection.is_lifted(), "Pointer moved");
        MoveEvent::Pointed { to }
    }

    /// Points one tower right. Never costs a step.
    pub fn point_right(&mut self) -> MoveEvent {
        let to = self.selection.point_right();
        debug!(%to, lifted = self.selection.is_lifted(), "Pointer moved");
        MoveEvent::Pointed { to }
    }

    /// Lifts the top disk of the pointed-at tower.
    ///
    /// Does nothing if a disk is already lifted or the tower is empty.
    #[instrument(skip(self), fields(tower = %self.selection.pointing_at()))]
    pub fn pick_up(&mut self) -> MoveEvent {
        if self.selection.is_lifted() {
            return MoveEvent::Ignored(IgnoredReason::AlreadyLifted);
        }

        let from = self.selection.pointing_at();
        let Some(disk) = self.towers.take_top(from) else {
            debug!("Nothing to pick up");
            return MoveEvent::Ignored(IgnoredReason::EmptyTower(from));
        };

        self.selection.lift(disk);
        info!(size = disk.size(), %from, "Disk lifted");
        MoveEvent::Lifted { disk, from }
    }

    /// Places the lifted disk on the pointed-at tower.
    ///
    /// Does nothing if no disk is lifted.
    ///
    /// # Errors
    ///
    /// Under [`PlacementPolicy::Strict`], returns [`MoveError::IllegalMove`]
    /// when the disk would rest on a smaller one; the disk stays lifted and
    /// no step is counted. A placement that breaks a [`HanoiInvariants`]
    /// postcondition is rolled back and returns
    /// [`MoveError::InvariantViolation`].
    #[instrument(skip(self), fields(tower = %self.selection.pointing_at()))]
    pub fn place(&mut self) -> Result<MoveEvent, MoveError> {
        self.place_checked::<HanoiInvariants>()
    }

    /// Places the lifted disk, checking `I` afterwards under the strict policy.
    ///
    /// On a violation the session is restored to its state before the call.
    fn place_checked<I: InvariantSet<Self>>(&mut self) -> Result<MoveEvent, MoveError> {
        let Some(disk) = self.selection.lifted() else {
            return Ok(MoveEvent::Ignored(IgnoredReason::NothingLifted));
        };

        let tower = self.selection.pointing_at();
        let verdict = check_placement(self.policy, disk, tower, self.towers.top_disk(tower))?;

        let before = (self.towers.clone(), self.selection, self.step_count);
        self.selection.release();
        self.towers.assign(disk, tower);
        self.step_count += 1;

        if self.policy == PlacementPolicy::Strict {
            if let Err(violations) = I::check_all(self) {
                let descriptions = violations
                    .iter()
                    .map(|v| v.description.as_str())
                    .collect::<Vec<_>>()
                    .join("; ");
                error!(%descriptions, "Postcondition failed after placement, rolling back");
                (self.towers, self.selection, self.step_count) = before;
                return Err(MoveError::InvariantViolation(format!(
                    "Postcondition failed: {}",
                    descriptions
                )));
            }
        }

        let placed = Disk::new(disk.size(), tower);
        info!(size = disk.size(), %tower, step = self.step_count, "Disk placed");
        Ok(MoveEvent::Placed {
            disk: placed,
            step: self.step_count,
            ordered: verdict.is_ordered(),
        })
    }

    /// Restores the starting layout with the same disk count.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> MoveEvent {
        self.restart(self.disk_count)
    }

    /// Restores the starting layout with a new disk count.
    #[instrument(skip(self))]
    pub fn restart(&mut self, disk_count: DiskCount) -> MoveEvent {
        info!(disks = disk_count.get(), "Resetting session");
        self.disk_count = disk_count;
        self.towers = Towers::new(disk_count);
        self.selection.clear();
        self.step_count = 0;
        MoveEvent::Reset
    }

    /// Whether the puzzle is solved.
    ///
    /// Always `false` while a disk is lifted: a held disk rests on no tower.
    pub fn check_win(&self) -> bool {
        !self.selection.is_lifted() && self.disks().all(|disk| disk.tower() == TowerIndex::Finish)
    }

    /// Current statistics.
    pub fn stats(&self) -> SessionStats {
        SessionStats::new(self.player_name.clone(), self.disk_count, self.step_count)
    }

    /// The final report, once the puzzle is solved.
    pub fn report(&self) -> Option<GameReport> {
        self.check_win().then(|| GameReport::from_stats(self.stats()))
    }
}
