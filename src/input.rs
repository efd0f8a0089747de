use std::collections::VecDeque;

use tracing::debug;

use crate::snake::Direction;

pub const INPUT_QUEUE_CAPACITY: usize = 3;

/// Directions submitted between two ticks, oldest first.
///
/// Nothing is validated on the way in. Whether a direction is a legal turn
/// depends on the direction committed when it is finally dequeued.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputQueue {
    pending: VecDeque<Direction>,
}

impl InputQueue {
    pub fn new() -> Self {
        InputQueue { pending: VecDeque::with_capacity(INPUT_QUEUE_CAPACITY) }
    }

    /// Buffers `direction` unless the queue is full, in which case it is dropped.
    /// Returns whether it was kept.
    pub fn enqueue(&mut self, direction: Direction) -> bool {
        if self.pending.len() >= INPUT_QUEUE_CAPACITY {
            debug!(?direction, "input queue full, dropping direction");
            return false;
        }

        self.pending.push_back(direction);
        true
    }

    pub fn dequeue_one(&mut self) -> Option<Direction> {
        self.pending.pop_front()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        self.pending.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    #[test]
    fn excess_input_is_dropped() {
        let mut queue = InputQueue::new();

        let kept: Vec<bool> =
            [Up, Left, Down, Right, Up].iter().map(|&d| queue.enqueue(d)).collect();

        assert_eq!(kept, vec![true, true, true, false, false]);
        assert_eq!(queue.iter().collect::<Vec<_>>(), vec![Up, Left, Down]);
    }

    #[test]
    fn dequeues_oldest_first() {
        let mut queue = InputQueue::new();
        queue.enqueue(Down);
        queue.enqueue(Right);

        assert_eq!(queue.dequeue_one(), Some(Down));
        assert_eq!(queue.dequeue_one(), Some(Right));
        assert_eq!(queue.dequeue_one(), None);
    }

    #[test]
    fn reversals_are_accepted_at_enqueue() {
        let mut queue = InputQueue::new();
        assert!(queue.enqueue(Left));
        assert!(queue.enqueue(Right));
        assert_eq!(queue.len(), 2);

        queue.clear();
        assert!(queue.is_empty());
    }
}
