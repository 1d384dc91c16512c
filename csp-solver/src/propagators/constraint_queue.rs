use std::collections::VecDeque;

use crate::containers::KeyedVec;
use crate::csp_assert_moderate;
use crate::model::ConstraintId;

/// The worklist of constraints which still need to be revised during arc consistency.
///
/// A constraint is present at most once; enqueueing a constraint which is already waiting is a
/// no-op.
#[derive(Debug, Clone, Default)]
pub(crate) struct ConstraintQueue {
    queue: VecDeque<ConstraintId>,
    is_enqueued: KeyedVec<ConstraintId, bool>,
}

impl ConstraintQueue {
    pub(crate) fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub(crate) fn enqueue(&mut self, constraint: ConstraintId) {
        if !self.is_constraint_enqueued(constraint) {
            self.is_enqueued.accommodate(constraint, false);
            self.is_enqueued[constraint] = true;
            self.queue.push_back(constraint);
        }
    }

    pub(crate) fn pop(&mut self) -> Option<ConstraintId> {
        let next_constraint = self.queue.pop_front();

        if let Some(constraint) = next_constraint {
            csp_assert_moderate!(self.is_enqueued[constraint]);
            self.is_enqueued[constraint] = false;
        }

        next_constraint
    }

    pub(crate) fn clear(&mut self) {
        while let Some(constraint) = self.queue.pop_front() {
            self.is_enqueued[constraint] = false;
        }
    }

    pub(crate) fn is_constraint_enqueued(&self, constraint: ConstraintId) -> bool {
        self.is_enqueued
            .get(constraint)
            .copied()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::ConstraintQueue;
    use crate::containers::StorageKey;
    use crate::model::ConstraintId;

    fn id(index: usize) -> ConstraintId {
        ConstraintId::create_from_index(index)
    }

    #[test]
    fn constraints_are_popped_in_insertion_order() {
        let mut queue = ConstraintQueue::default();

        queue.enqueue(id(3));
        queue.enqueue(id(0));
        queue.enqueue(id(7));

        assert_eq!(Some(id(3)), queue.pop());
        assert_eq!(Some(id(0)), queue.pop());
        assert_eq!(Some(id(7)), queue.pop());
        assert_eq!(None, queue.pop());
    }

    #[test]
    fn enqueueing_twice_keeps_one_entry() {
        let mut queue = ConstraintQueue::default();

        queue.enqueue(id(1));
        queue.enqueue(id(1));
        assert!(queue.is_constraint_enqueued(id(1)));

        assert_eq!(Some(id(1)), queue.pop());
        assert!(queue.is_empty());
        assert!(!queue.is_constraint_enqueued(id(1)));

        queue.enqueue(id(1));
        assert_eq!(Some(id(1)), queue.pop());
    }

    #[test]
    fn clearing_resets_membership() {
        let mut queue = ConstraintQueue::default();
        queue.enqueue(id(0));
        queue.enqueue(id(2));

        queue.clear();

        assert!(queue.is_empty());
        assert!(!queue.is_constraint_enqueued(id(2)));
    }
}
