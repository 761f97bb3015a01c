use std::collections::VecDeque;
use std::fmt::Debug;

/// FIFO worklist of edges pending relaxation.
///
/// Tracks how many items were ever enqueued so callers can report the amount
/// of work done by a run.
#[derive(Debug, Clone)]
pub struct EdgeQueue<E>
where
    E: Copy + Debug,
{
    items: VecDeque<E>,
    enqueued: usize,
}

impl<E> EdgeQueue<E>
where
    E: Copy + Debug,
{
    /// Creates a new empty queue
    pub fn new() -> Self {
        EdgeQueue {
            items: VecDeque::new(),
            enqueued: 0,
        }
    }

    /// Creates a queue seeded with `items`, front first
    pub fn from_slice(items: &[E]) -> Self {
        let mut queue = Self::new();
        queue.extend_from_slice(items);
        queue
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Total number of items pushed since creation
    pub fn total_enqueued(&self) -> usize {
        self.enqueued
    }

    /// Appends an item at the back
    pub fn push(&mut self, item: E) {
        self.items.push_back(item);
        self.enqueued += 1;
    }

    /// Appends all items at the back, preserving their order
    pub fn extend_from_slice(&mut self, items: &[E]) {
        self.items.extend(items.iter().copied());
        self.enqueued += items.len();
    }

    /// Removes the front item
    pub fn pop(&mut self) -> Option<E> {
        self.items.pop_front()
    }

    pub fn peek(&self) -> Option<&E> {
        self.items.front()
    }
}

impl<E> Default for EdgeQueue<E>
where
    E: Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
