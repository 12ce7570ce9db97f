//! First-class commands and events for Towers of Hanoi.
//!
//! Input handlers translate key presses into [`Command`]s. The session
//! answers each command with a [`MoveEvent`] describing what changed, or a
//! [`MoveError`] when a placement is refused.

use super::types::{Disk, TowerIndex};
use serde::{Deserialize, Serialize};

/// Something the player asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Point at the tower to the left (wraps around).
    PointLeft,
    /// Point at the tower to the right (wraps around).
    PointRight,
    /// Lift the top disk of the pointed-at tower.
    PickUp,
    /// Set the lifted disk down on the pointed-at tower.
    Place,
    /// Start over with the same disk count.
    Reset,
}

/// Why a command changed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum IgnoredReason {
    /// Pick-up on a tower with no disks.
    #[display("{} tower is empty", _0)]
    EmptyTower(TowerIndex),
    /// Pick-up while a disk is already lifted.
    #[display("A disk is already lifted")]
    AlreadyLifted,
    /// Place while nothing is lifted.
    #[display("No disk is lifted")]
    NothingLifted,
}

/// Outcome of a command that was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveEvent {
    /// The pointer moved; a lifted disk moved with it.
    Pointed {
        /// Tower now pointed at.
        to: TowerIndex,
    },
    /// A disk was lifted off a tower.
    Lifted {
        /// The lifted disk.
        disk: Disk,
        /// Tower it came from.
        from: TowerIndex,
    },
    /// The lifted disk was placed, completing a step.
    Placed {
        /// The disk, with its new tower.
        disk: Disk,
        /// Step count after this placement.
        step: u32,
        /// Whether the disk landed on a larger disk or an empty tower.
        ordered: bool,
    },
    /// The command had no effect.
    Ignored(IgnoredReason),
    /// The session returned to its starting layout.
    Reset,
}

impl std::fmt::Display for MoveEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveEvent::Pointed { to } => write!(f, "Pointing at {}", to),
            MoveEvent::Lifted { disk, from } => {
                write!(f, "Lifted disk {} from {}", disk.size(), from)
            }
            MoveEvent::Placed { disk, ordered, .. } => {
                if *ordered {
                    write!(f, "Placed disk {} on {}", disk.size(), disk.tower())
                } else {
                    write!(f, "Placed disk {} on {} (on a smaller disk)", disk.size(), disk.tower())
                }
            }
            MoveEvent::Ignored(reason) => write!(f, "{}", reason),
            MoveEvent::Reset => write!(f, "Game reset"),
        }
    }
}

/// Error that can occur when applying a command.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The lifted disk is larger than the destination's top disk.
    #[display("Cannot place disk {} on smaller disk {} ({} tower)", disk, onto, tower)]
    IllegalMove {
        /// Size of the lifted disk.
        disk: u8,
        /// Size of the destination's top disk.
        onto: u8,
        /// Destination tower.
        tower: TowerIndex,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
