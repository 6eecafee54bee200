//! Order-based transformations: partition sort and monotonic filters.
//!
//! The sort is the classic first-element-pivot partition sort over the
//! chain: strictly-less values go to a `less` run, everything else (ties
//! included) to a `greater` run, and the result reassembles as
//! `less, pivot, greater` (or the mirror for descending). Pivot selection
//! is not randomized, so already-sorted input is the worst case: O(n)
//! partition depth and O(n²) comparisons. The recursion is carried on an
//! explicit task stack, so the worst case costs heap space, not call-stack
//! frames.
//!
//! The monotonic filters are a single right-to-left pass that deletes
//! elements violating a running ordering bound; the rightmost element is
//! always retained and seeds the bound.

use std::cmp::Ordering;

use crate::queue::Queue;

/// One pending step of the sort: either a run still to be partitioned, or
/// a partitioned run waiting for its children before reassembly.
enum Task {
    Sort(usize),
    Combine {
        run: usize,
        pivot: usize,
        less: usize,
        greater: usize,
    },
}

impl Queue {
    /// Sort the queue by byte-wise lexicographic value comparison,
    /// ascending, or descending when `descend` is set.
    ///
    /// Equal values keep no particular relative order (ties always land in
    /// the greater-or-equal partition). No-op on an empty or singleton
    /// queue.
    pub fn sort(&mut self, descend: bool) {
        if self.arena.is_empty(self.head) || self.arena.is_singular(self.head) {
            return;
        }

        let mut tasks = vec![Task::Sort(self.head)];
        while let Some(task) = tasks.pop() {
            match task {
                Task::Sort(run) => {
                    if self.arena.is_empty(run) || self.arena.is_singular(run) {
                        continue;
                    }

                    let pivot = self.arena.next(run);
                    self.arena.unlink(pivot);
                    let less = self.arena.alloc_head();
                    let greater = self.arena.alloc_head();

                    let mut cur = self.arena.next(run);
                    while cur != run {
                        let next = self.arena.next(cur);
                        if self.arena.value(cur) < self.arena.value(pivot) {
                            self.arena.move_back(cur, less);
                        } else {
                            self.arena.move_back(cur, greater);
                        }
                        cur = next;
                    }

                    // Reassemble after both children are done; the stack
                    // pops `less` first, mirroring the recursive order.
                    tasks.push(Task::Combine {
                        run,
                        pivot,
                        less,
                        greater,
                    });
                    tasks.push(Task::Sort(greater));
                    tasks.push(Task::Sort(less));
                }
                Task::Combine {
                    run,
                    pivot,
                    less,
                    greater,
                } => {
                    self.arena.link_after(pivot, run);
                    if descend {
                        self.arena.splice(greater, run);
                        self.arena.splice_tail(less, run);
                    } else {
                        self.arena.splice(less, run);
                        self.arena.splice_tail(greater, run);
                    }
                    self.arena.release(less);
                    self.arena.release(greater);
                }
            }
        }
    }

    /// Delete every element that has a strictly smaller value somewhere to
    /// its right, leaving a non-decreasing sequence. The rightmost element
    /// is always retained. Returns the resulting size; 0 and no mutation
    /// on an empty queue.
    pub fn ascend(&mut self) -> usize {
        return self.prune_right_to_left(Ordering::Greater);
    }

    /// Delete every element that has a strictly greater value somewhere to
    /// its right, leaving a non-increasing sequence. The rightmost element
    /// is always retained. Returns the resulting size; 0 and no mutation
    /// on an empty queue.
    pub fn descend(&mut self) -> usize {
        return self.prune_right_to_left(Ordering::Less);
    }

    /// Right-to-left pass deleting any element that compares `delete_when`
    /// against the most recently retained one. The retained node itself is
    /// the running reference, so no value is copied.
    fn prune_right_to_left(&mut self, delete_when: Ordering) -> usize {
        if self.arena.is_empty(self.head) {
            return 0;
        }
        let head = self.head;
        let mut reference = self.arena.prev(head);
        let mut cur = self.arena.prev(reference);
        while cur != head {
            let prev = self.arena.prev(cur);
            if self.arena.value(cur).cmp(self.arena.value(reference)) == delete_when {
                self.arena.unlink(cur);
                self.arena.release(cur);
            } else {
                reference = cur;
            }
            cur = prev;
        }
        return self.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue(values: &[&str]) -> Queue {
        return values.iter().copied().collect();
    }

    fn values(queue: &Queue) -> Vec<String> {
        return queue.iter().map(str::to_string).collect();
    }

    #[test]
    fn sort_ascending_with_ties() {
        let mut q = queue(&["a", "b", "c", "b", "a"]);
        q.sort(false);
        assert_eq!(values(&q), ["a", "a", "b", "b", "c"]);
        q.check_links();
    }

    #[test]
    fn sort_descending() {
        let mut q = queue(&["b", "a", "c"]);
        q.sort(true);
        assert_eq!(values(&q), ["c", "b", "a"]);
        q.check_links();
    }

    #[test]
    fn sort_empty_and_singleton_are_noops() {
        let mut empty = Queue::new();
        empty.sort(false);
        assert!(empty.is_empty());

        let mut single = queue(&["z"]);
        single.sort(true);
        assert_eq!(values(&single), ["z"]);
    }

    #[test]
    fn sort_already_sorted_worst_case() {
        // First-element pivot degenerates on sorted input; the task stack
        // keeps it off the call stack.
        let input: Vec<String> = (0..2000).map(|i| format!("{i:08}")).collect();
        let mut q: Queue = input.iter().cloned().collect();
        q.sort(false);
        assert_eq!(values(&q), input);
        q.check_links();
    }

    #[test]
    fn sort_is_bytewise_lexicographic() {
        let mut q = queue(&["10", "9", "1"]);
        q.sort(false);
        assert_eq!(values(&q), ["1", "10", "9"]);
    }

    #[test]
    fn sort_all_equal() {
        let mut q = queue(&["x", "x", "x"]);
        q.sort(false);
        assert_eq!(values(&q), ["x", "x", "x"]);
        q.check_links();
    }

    #[test]
    fn ascend_keeps_ascending_chain() {
        let mut q = queue(&["1", "3", "2"]);
        assert_eq!(q.ascend(), 2);
        assert_eq!(values(&q), ["1", "2"]);
        q.check_links();
    }

    #[test]
    fn ascend_retains_rightmost() {
        let mut q = queue(&["5", "4", "3"]);
        assert_eq!(q.ascend(), 1);
        assert_eq!(values(&q), ["3"]);
    }

    #[test]
    fn ascend_keeps_ties() {
        let mut q = queue(&["2", "2", "3"]);
        assert_eq!(q.ascend(), 3);
        assert_eq!(values(&q), ["2", "2", "3"]);
    }

    #[test]
    fn descend_keeps_descending_chain() {
        let mut q = queue(&["3", "1", "2"]);
        assert_eq!(q.descend(), 2);
        assert_eq!(values(&q), ["3", "2"]);
        q.check_links();
    }

    #[test]
    fn filters_on_empty_return_zero() {
        let mut q = Queue::new();
        assert_eq!(q.ascend(), 0);
        assert_eq!(q.descend(), 0);
        assert!(q.is_empty());
    }

    #[test]
    fn filters_on_singleton_keep_it() {
        let mut q = queue(&["only"]);
        assert_eq!(q.ascend(), 1);
        assert_eq!(q.descend(), 1);
        assert_eq!(values(&q), ["only"]);
    }
}
