//! Placement rules for Towers of Hanoi.
//!
//! Rules are pure functions over disks, separated from tower storage so the
//! session can compose them with its invariant checks.

use super::action::MoveError;
use super::types::{Disk, TowerIndex};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How strictly placements are checked.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlacementPolicy {
    /// Refuse to put a disk on a smaller one; the disk stays lifted.
    #[default]
    Strict,
    /// Accept every placement and only record whether it was ordered.
    Permissive,
}

/// Verdict on a placement the policy accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Onto an empty tower or a larger disk.
    Ordered,
    /// Onto a smaller disk; only reachable under [`PlacementPolicy::Permissive`].
    Unordered,
}

impl Placement {
    /// Whether the stacking rule held.
    pub fn is_ordered(self) -> bool {
        matches!(self, Placement::Ordered)
    }
}

/// Checks whether `disk` may go on a tower whose top disk is `onto`.
///
/// A move is legal when the destination is empty or its top disk is
/// strictly larger than the lifted one.
pub fn is_legal(disk: Disk, onto: Option<Disk>) -> bool {
    onto.is_none_or(|top| disk.size() < top.size())
}

/// Applies the policy to a placement.
///
/// # Errors
///
/// Returns [`MoveError::IllegalMove`] when the placement breaks the
/// stacking rule under [`PlacementPolicy::Strict`].
#[instrument(skip(disk, onto), fields(size = disk.size(), onto = ?onto.map(|d| d.size())))]
pub fn check_placement(
    policy: PlacementPolicy,
    disk: Disk,
    tower: TowerIndex,
    onto: Option<Disk>,
) -> Result<Placement, MoveError> {
    if is_legal(disk, onto) {
        return Ok(Placement::Ordered);
    }

    match (policy, onto) {
        (PlacementPolicy::Strict, Some(top)) => Err(MoveError::IllegalMove {
            disk: disk.size(),
            onto: top.size(),
            tower,
        }),
        _ => {
            debug!(%tower, "Permitting placement on a smaller disk");
            Ok(Placement::Unordered)
        }
    }
}
