//! k-way merge of independently sorted queues.
//!
//! A [`MergeChain`] is a transient sequence of mutably borrowed queues,
//! each tagged with its element count cached at push time. It exists only
//! to drive one merge call: the first queue becomes the accumulator, every
//! subsequent queue is absorbed into it by a linear two-pointer walk, and
//! the chain is consumed. Borrowing the queues mutably makes it impossible
//! to chain the same queue twice.

use smallvec::SmallVec;

use crate::queue::Queue;

struct Entry<'a> {
    queue: &'a mut Queue,
    size: usize,
}

/// A chain of sorted queues to be folded into one.
#[derive(Default)]
pub struct MergeChain<'a> {
    entries: SmallVec<[Entry<'a>; 4]>,
}

impl<'a> MergeChain<'a> {
    /// Create an empty chain.
    pub fn new() -> MergeChain<'a> {
        MergeChain {
            entries: SmallVec::new(),
        }
    }

    /// Append a queue to the chain, caching its current size.
    /// The queue is expected to already be sorted ascending.
    pub fn push(&mut self, queue: &'a mut Queue) {
        let size = queue.len();
        self.entries.push(Entry { queue, size });
    }

    /// Number of queues in the chain.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the chain holds no queues.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merge every chained queue into the first one.
    ///
    /// Returns 0 on an empty chain. A chain of exactly one queue returns
    /// its cached size with the queue untouched. Otherwise each subsequent
    /// queue is absorbed into the accumulator in chain order and left
    /// empty; if `descend` is set the accumulator is fully reversed at the
    /// end. Returns the accumulator's final element count.
    pub fn merge(self, descend: bool) -> usize {
        let mut entries = self.entries.into_iter();
        let Some(first) = entries.next() else {
            return 0;
        };
        let accumulator = first.queue;
        let mut total = first.size;
        let mut folded = false;
        for entry in entries {
            total += entry.size;
            accumulator.absorb_sorted(entry.queue);
            folded = true;
        }
        if descend && folded {
            accumulator.reverse();
        }
        total
    }
}

impl Queue {
    /// Drain `other` (sorted ascending) into `self` (sorted ascending),
    /// keeping `self` sorted. Linear two-pointer walk: each value popped
    /// off `other` advances a cursor past the accumulator values `<=` it
    /// and is linked in before the cursor; once the cursor reaches the
    /// sentinel, the rest of `other` appends at the tail.
    pub(crate) fn absorb_sorted(&mut self, other: &mut Queue) {
        let mut cursor = self.arena.next(self.head);
        while let Some(value) = other.pop_front() {
            while cursor != self.head && self.arena.value(cursor) <= value.as_str() {
                cursor = self.arena.next(cursor);
            }
            let node = self.arena.alloc_element(value);
            self.arena.link_before(node, cursor);
        }
    }
}
