//! An ordered string container over a circular intrusive chain.
//!
//! A `Queue` owns a node arena plus the index of its primary
//! sentinel. Every element reachable from the sentinel lives in that arena,
//! so exclusive ownership of the elements is structural. Removal transfers
//! the owned value out to the caller; dropping the queue releases everything
//! that remains.
//!
//! Basic operations are O(1) except `len`, which deliberately re-traverses
//! the chain: no cached count is maintained, matching the container's
//! contract that size is derived from structure alone.

use crate::link::NodeArena;

/// A queue of string values on a circular, intrusive, doubly-linked chain.
#[derive(Clone)]
pub struct Queue {
    pub(crate) arena: NodeArena,
    pub(crate) head: usize,
}

impl Queue {
    /// Create a new empty queue.
    pub fn new() -> Queue {
        let mut arena = NodeArena::new();
        let head = arena.alloc_head();
        return Queue { arena, head };
    }

    /// Number of elements. O(n) full traversal.
    pub fn len(&self) -> usize {
        return self.arena.run_len(self.head);
    }

    /// O(1) structural emptiness check.
    pub fn is_empty(&self) -> bool {
        return self.arena.is_empty(self.head);
    }

    /// Insert `value` at the front. O(1).
    pub fn push_front(&mut self, value: impl Into<String>) {
        let node = self.arena.alloc_element(value.into());
        self.arena.link_after(node, self.head);
    }

    /// Insert `value` at the back. O(1).
    pub fn push_back(&mut self, value: impl Into<String>) {
        let node = self.arena.alloc_element(value.into());
        self.arena.link_before(node, self.head);
    }

    /// Unlink the first element and hand its value to the caller. O(1).
    /// Returns `None` on an empty queue.
    pub fn pop_front(&mut self) -> Option<String> {
        if self.arena.is_empty(self.head) {
            return None;
        }
        let node = self.arena.next(self.head);
        self.arena.unlink(node);
        return self.arena.release(node);
    }

    /// Unlink the last element and hand its value to the caller. O(1).
    /// Returns `None` on an empty queue.
    pub fn pop_back(&mut self) -> Option<String> {
        if self.arena.is_empty(self.head) {
            return None;
        }
        let node = self.arena.prev(self.head);
        self.arena.unlink(node);
        return self.arena.release(node);
    }

    /// Front-to-back traversal of the element values.
    pub fn iter(&self) -> Iter<'_> {
        return Iter {
            queue: self,
            cur: self.arena.next(self.head),
        };
    }

    /// Delete the middle element: 1-indexed position `n/2 + 1`.
    ///
    /// Located by a fast/slow walk, both starting at the first element; the
    /// fast cursor advances two links per step, the slow cursor one, until
    /// the fast cursor reaches the sentinel or its successor is the
    /// sentinel. Returns false on an empty queue.
    pub fn delete_middle(&mut self) -> bool {
        if self.arena.is_empty(self.head) {
            return false;
        }
        let head = self.head;
        let mut fast = self.arena.next(head);
        let mut slow = fast;
        while fast != head && self.arena.next(fast) != head {
            fast = self.arena.next(self.arena.next(fast));
            slow = self.arena.next(slow);
        }
        self.arena.unlink(slow);
        self.arena.release(slow);
        return true;
    }

    /// Delete every member of each run of two or more consecutive equal
    /// values, keeping no representative.
    ///
    /// Expects the queue to already be ordered by value, so equal values are
    /// adjacent and the surviving elements are exactly those whose value
    /// occurred once. Returns false on an empty queue; a singleton succeeds
    /// as a no-op.
    pub fn delete_duplicates(&mut self) -> bool {
        if self.arena.is_empty(self.head) {
            return false;
        }
        let head = self.head;
        let mut cur = self.arena.next(head);
        while cur != head {
            let mut run_end = self.arena.next(cur);
            while run_end != head && self.arena.value(run_end) == self.arena.value(cur) {
                run_end = self.arena.next(run_end);
            }
            if self.arena.next(cur) != run_end {
                // Run of two or more: drop all of it.
                let mut node = cur;
                while node != run_end {
                    let after = self.arena.next(node);
                    self.arena.unlink(node);
                    self.arena.release(node);
                    node = after;
                }
            }
            cur = run_end;
        }
        return true;
    }

    /// Reverse the queue in place. O(n). No-op on an empty queue.
    pub fn reverse(&mut self) {
        if self.arena.is_empty(self.head) {
            return;
        }
        let head = self.head;
        self.reverse_run(head);
    }

    /// Reverse the chain anchored at `run` by relocating each node, in
    /// traversal order, to the front.
    pub(crate) fn reverse_run(&mut self, run: usize) {
        let mut cur = self.arena.next(run);
        while cur != run {
            let next = self.arena.next(cur);
            self.arena.move_front(cur, run);
            cur = next;
        }
    }

    /// Reverse consecutive groups of `k` elements.
    ///
    /// Groups are cut off the front in traversal order. A group is reversed
    /// only when at least `k` elements remained when it was cut; a shorter
    /// trailing group keeps its order. Groups are reassembled in their
    /// original left-to-right sequence. `k == 0` is a no-op, `k == 1` the
    /// identity.
    pub fn reverse_k(&mut self, k: usize) {
        if k == 0 || self.arena.is_empty(self.head) {
            return;
        }
        let head = self.head;
        let scratch = self.arena.alloc_head();
        let mut remaining = self.len();
        while remaining > 0 {
            let take = k.min(remaining);
            let mut boundary = head;
            for _ in 0..take {
                boundary = self.arena.next(boundary);
            }
            self.arena.cut_position(scratch, head, boundary);
            if take == k {
                self.reverse_run(scratch);
            }
            // Processed groups accumulate at the tail; the unprocessed rest
            // stays at the front for the next cut.
            self.arena.splice_tail(scratch, head);
            remaining -= take;
        }
        self.arena.release(scratch);
    }

    /// Swap every two adjacent elements, leaving an odd final element
    /// untouched. No-op on an empty or singleton queue.
    pub fn swap_pairs(&mut self) {
        if self.arena.is_empty(self.head) || self.arena.is_singular(self.head) {
            return;
        }
        self.reverse_k(2);
    }

    /// Assert circularity and double consistency of the whole chain.
    #[cfg(test)]
    pub(crate) fn check_links(&self) {
        self.arena.check_run(self.head);
    }
}

impl Default for Queue {
    fn default() -> Queue {
        return Queue::new();
    }
}

impl std::fmt::Debug for Queue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return f.debug_list().entries(self.iter()).finish();
    }
}

impl<S: Into<String>> Extend<S> for Queue {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for Queue {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Queue {
        let mut queue = Queue::new();
        queue.extend(iter);
        return queue;
    }
}

/// Front-to-back iterator over a queue's values.
pub struct Iter<'a> {
    queue: &'a Queue,
    cur: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.cur == self.queue.head {
            return None;
        }
        let value = self.queue.arena.value(self.cur);
        self.cur = self.queue.arena.next(self.cur);
        return Some(value);
    }
}

impl<'a> IntoIterator for &'a Queue {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        return self.iter();
    }
}
