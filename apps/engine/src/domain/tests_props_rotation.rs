use proptest::prelude::*;

use crate::domain::rotation::{advance, peek_next};
use crate::domain::state::TurnDirection;

proptest! {
    /// Repeated forward advance visits every index cyclically.
    #[test]
    fn forward_advance_cycles_through_all_seats(len in 1usize..12, start in 0usize..12) {
        let start = start % len;
        let mut index = start;
        let mut visited = Vec::with_capacity(len);
        for _ in 0..len {
            index = advance(len, index, TurnDirection::Forward);
            visited.push(index);
        }
        // One full lap returns to the start and touches every seat once.
        prop_assert_eq!(index, start);
        visited.sort_unstable();
        visited.dedup();
        prop_assert_eq!(visited.len(), len);
    }

    /// Reversed advance visits the same cycle in the opposite order.
    #[test]
    fn reversed_advance_is_the_inverse(len in 1usize..12, start in 0usize..12) {
        let start = start % len;
        let forward = advance(len, start, TurnDirection::Forward);
        prop_assert_eq!(advance(len, forward, TurnDirection::Reversed), start);
    }

    /// Peek never commits and always matches the following advance.
    #[test]
    fn peek_agrees_with_advance(len in 0usize..12, index in 0usize..12, reversed in any::<bool>()) {
        let direction = if reversed { TurnDirection::Reversed } else { TurnDirection::Forward };
        prop_assert_eq!(peek_next(len, index, direction), advance(len, index, direction));
    }

    /// Empty seat lists are untouched regardless of index or direction.
    #[test]
    fn empty_input_is_identity(index in 0usize..64, reversed in any::<bool>()) {
        let direction = if reversed { TurnDirection::Reversed } else { TurnDirection::Forward };
        prop_assert_eq!(advance(0, index, direction), index);
    }
}
