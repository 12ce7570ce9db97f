//! First-class invariants for Towers of Hanoi.
//!
//! Invariants are logical properties that must hold between moves. The
//! session checks them as placement postconditions, and tests check them
//! after arbitrary command sequences.

use super::session::GameSession;
use super::types::TowerIndex;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect([
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ])
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect([
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ])
    }
}

fn collect<const N: usize>(
    results: [(bool, &'static str); N],
) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = results
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Invariant: every tower is largest-at-bottom.
pub struct StackOrderInvariant;

impl Invariant<GameSession> for StackOrderInvariant {
    fn holds(game: &GameSession) -> bool {
        TowerIndex::ALL
            .into_iter()
            .all(|tower| game.towers().is_ordered(tower))
    }

    fn description() -> &'static str {
        "Every tower is ordered largest at the base"
    }
}

/// Invariant: each size `1..=n` exists exactly once, on a tower or lifted.
pub struct DiskConservationInvariant;

impl Invariant<GameSession> for DiskConservationInvariant {
    fn holds(game: &GameSession) -> bool {
        let mut sizes: Vec<u8> = game.disks().map(|disk| disk.size()).collect();
        sizes.sort_unstable();
        sizes.into_iter().eq(1..=game.disk_count().get())
    }

    fn description() -> &'static str {
        "Each disk size appears exactly once"
    }
}

/// Invariant: the lifted disk is detached from every stack and hovers over the pointer.
pub struct LiftedDetachedInvariant;

impl Invariant<GameSession> for LiftedDetachedInvariant {
    fn holds(game: &GameSession) -> bool {
        let selection = game.selection();
        match selection.lifted() {
            None => true,
            Some(lifted) => {
                lifted.tower() == selection.pointing_at()
                    && game.towers().disks().all(|disk| disk.size() != lifted.size())
            }
        }
    }

    fn description() -> &'static str {
        "Lifted disk is on no tower and follows the pointer"
    }
}

/// All Towers of Hanoi invariants as a composable set.
pub type HanoiInvariants = (
    StackOrderInvariant,
    DiskConservationInvariant,
    LiftedDetachedInvariant,
);
