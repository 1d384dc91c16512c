use std::iter::Rev;
use std::ops::Deref;
use std::vec::Drain;

use crate::csp_assert_simple;

/// A stack of undoable changes grouped into decision levels.
///
/// The search driver opens a new level before every propagation call, so that all values pruned
/// by that call can be handed back, newest first, when the branch is abandoned.
#[derive(Clone, Debug)]
pub(crate) struct Trail<T> {
    current_decision_level: usize,
    /// At index i is the position where the i-th decision level ends (exclusive) on the trail
    trail_delimiter: Vec<usize>,
    trail: Vec<T>,
}

// Implemented by hand to avoid requiring `T: Default`.
impl<T> Default for Trail<T> {
    fn default() -> Self {
        Trail {
            current_decision_level: Default::default(),
            trail_delimiter: Default::default(),
            trail: Default::default(),
        }
    }
}

impl<T> Trail<T> {
    pub(crate) fn increase_decision_level(&mut self) {
        self.current_decision_level += 1;
        self.trail_delimiter.push(self.trail.len());
    }

    pub(crate) fn values_on_decision_level(&self, decision_level: usize) -> &[T] {
        assert!(decision_level <= self.current_decision_level);

        let start = if decision_level == 0 {
            0
        } else {
            self.trail_delimiter[decision_level - 1]
        };

        let end = if decision_level == self.current_decision_level {
            self.trail.len()
        } else {
            self.trail_delimiter[decision_level]
        };

        &self.trail[start..end]
    }

    pub(crate) fn get_decision_level(&self) -> usize {
        self.current_decision_level
    }

    /// Removes every element above `new_decision_level` and returns them in reverse order of
    /// insertion.
    pub(crate) fn synchronise(&mut self, new_decision_level: usize) -> Rev<Drain<'_, T>> {
        csp_assert_simple!(new_decision_level < self.current_decision_level);

        let new_trail_len = self.trail_delimiter[new_decision_level];

        self.current_decision_level = new_decision_level;
        self.trail_delimiter.truncate(new_decision_level);
        self.trail.drain(new_trail_len..).rev()
    }

    pub(crate) fn push(&mut self, elem: T) {
        self.trail.push(elem)
    }
}

impl<T> Deref for Trail<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.trail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_partition_the_pushed_values() {
        let mut trail = Trail::default();
        trail.increase_decision_level();
        trail.push('a');
        trail.push('b');
        trail.increase_decision_level();
        trail.increase_decision_level();
        trail.push('c');

        assert_eq!(&['a', 'b'], trail.values_on_decision_level(1));
        assert!(trail.values_on_decision_level(2).is_empty());
        assert_eq!(&['c'], trail.values_on_decision_level(3));
        assert_eq!(3, trail.get_decision_level());
    }

    #[test]
    fn synchronising_returns_newest_values_first() {
        let mut trail = Trail::default();
        trail.increase_decision_level();
        trail.push(10);
        trail.increase_decision_level();
        trail.push(20);
        trail.push(30);

        let undone = trail.synchronise(1).collect::<Vec<_>>();

        assert_eq!(vec![30, 20], undone);
        assert_eq!(&[10], trail.deref());
        assert_eq!(1, trail.get_decision_level());
    }

    #[test]
    fn synchronising_to_the_root_empties_the_trail() {
        let mut trail = Trail::default();
        trail.increase_decision_level();
        trail.push(1);
        trail.increase_decision_level();
        trail.push(2);

        let _ = trail.synchronise(0);

        assert!(trail.is_empty());
        assert_eq!(0, trail.get_decision_level());
    }
}
