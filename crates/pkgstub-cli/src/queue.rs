//! Bounded multi-consumer queue of work items.
//!
//! The queue is filled once before any worker starts and then only drained,
//! so a single atomic cursor is enough for consumers to claim items.

use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug)]
pub struct WorkQueue<T> {
    items: Vec<T>,
    cursor: AtomicUsize,
}

impl<T> WorkQueue<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            cursor: AtomicUsize::new(0),
        }
    }

    /// Add an item. Only possible before the queue is shared.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Claim the next unclaimed item. Every item is handed out exactly once.
    pub fn try_pop(&self) -> Option<&T> {
        let index = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items not yet claimed.
    pub fn remaining(&self) -> usize {
        self.items
            .len()
            .saturating_sub(self.cursor.load(Ordering::Relaxed))
    }
}

impl<T> FromIterator<T> for WorkQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
            cursor: AtomicUsize::new(0),
        }
    }
}
