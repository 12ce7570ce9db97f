//! Strictly Hanoi - Towers of Hanoi game logic.
//!
//! Pure, terminal-free rules for the puzzle:
//!
//! - **Model**: [`Disk`], [`TowerIndex`] and [`Towers`], three stacks ordered base first
//! - **Validator**: [`check_placement`] under a [`PlacementPolicy`]
//! - **Selection**: the pointer and the single lifted disk
//! - **Session**: [`GameSession`], the aggregate every screen drives
//! - **Invariants**: composable checks used as placement postconditions
//!
//! # Example
//!
//! ```
//! use strictly_hanoi::{Command, DiskCount, GameSession, PlacementPolicy};
//!
//! let mut game = GameSession::new("Guest", DiskCount::clamped(1), PlacementPolicy::Strict);
//! game.apply(Command::PickUp)?;
//! game.apply(Command::PointLeft)?;
//! game.apply(Command::Place)?;
//! assert!(game.check_win());
//! assert_eq!(game.step_count(), 1);
//! # Ok::<(), strictly_hanoi::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod invariants;
mod rules;
mod selection;
mod session;
mod stats;
mod towers;
mod types;

pub use action::{Command, IgnoredReason, MoveError, MoveEvent};
pub use invariants::{HanoiInvariants, Invariant, InvariantSet, InvariantViolation};
pub use rules::{Placement, PlacementPolicy, check_placement, is_legal};
pub use selection::Selection;
pub use session::GameSession;
pub use stats::{GameReport, SessionStats, minimum_steps};
pub use towers::Towers;
pub use types::{Disk, DiskCount, DiskCountError, TowerIndex};
