//! Property tests over arbitrary command sequences.

use proptest::prelude::*;
use strictly_hanoi::{
    Command, DiskCount, GameSession, HanoiInvariants, InvariantSet, MoveEvent, PlacementPolicy,
    TowerIndex, minimum_steps,
};

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        Just(Command::PointLeft),
        Just(Command::PointRight),
        Just(Command::PickUp),
        Just(Command::Place),
        Just(Command::Reset),
    ]
}

proptest! {
    #[test]
    fn strict_sessions_keep_every_invariant(
        disks in 1i64..=6,
        commands in prop::collection::vec(command(), 0..200),
    ) {
        let mut game = GameSession::new("Prop", DiskCount::clamped(disks), PlacementPolicy::Strict);
        for command in commands {
            let _ = game.apply(command);
            prop_assert!(HanoiInvariants::check_all(&game).is_ok());
            let pointing_at = game.selection().pointing_at();
            prop_assert!(game.selection().lifted().is_none_or(|d| d.tower() == pointing_at));
        }
    }

    #[test]
    fn steps_count_only_placements_and_reset_restores_layout(
        policy in prop_oneof![Just(PlacementPolicy::Strict), Just(PlacementPolicy::Permissive)],
        commands in prop::collection::vec(command(), 0..200),
    ) {
        let mut game = GameSession::new("Prop", DiskCount::clamped(4), policy);
        let mut expected = 0u32;
        for command in commands {
            match game.apply(command) {
                Ok(MoveEvent::Placed { step, .. }) => {
                    expected += 1;
                    prop_assert_eq!(step, expected);
                }
                Ok(MoveEvent::Reset) => {
                    expected = 0;
                    let start: Vec<u8> = game
                        .towers()
                        .stack(TowerIndex::Start)
                        .iter()
                        .map(|disk| disk.size())
                        .collect();
                    prop_assert_eq!(start, vec![4, 3, 2, 1]);
                    prop_assert_eq!(game.selection().pointing_at(), TowerIndex::Start);
                    prop_assert!(!game.selection().is_lifted());
                }
                _ => {}
            }
            prop_assert_eq!(game.step_count(), expected);
            prop_assert_eq!(game.disks().count(), 4);
        }
    }

    #[test]
    fn win_iff_every_disk_on_finish(
        commands in prop::collection::vec(command(), 0..300),
    ) {
        let mut game = GameSession::new("Prop", DiskCount::clamped(2), PlacementPolicy::Strict);
        for command in commands {
            let _ = game.apply(command);
            let all_on_finish = !game.selection().is_lifted()
                && game.towers().stack(TowerIndex::Finish).len() == 2;
            prop_assert_eq!(game.check_win(), all_on_finish);
        }
    }

    #[test]
    fn minimum_steps_doubles_plus_one(n in 1u32..63) {
        prop_assert_eq!(minimum_steps(n + 1), 2 * minimum_steps(n) + 1);
    }
}
