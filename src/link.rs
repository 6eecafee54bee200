//! Link primitives for circular, intrusive, doubly-linked chains.
//!
//! Nodes live in an arena and address each other by stable `usize` indices
//! instead of raw pointers. Key design decisions:
//!
//! 1. **Intrusive links**: the `next`/`prev` fields live inside the node
//!    that also carries the payload, so membership in a chain is structural.
//!    Sentinels are ordinary nodes whose payload slot is `None`.
//!
//! 2. **One arena per container**: every node reachable from a container's
//!    sentinel lives in that container's arena, which makes exclusive
//!    ownership a type-system fact rather than a convention.
//!
//! 3. **No dangling links**: `unlink` re-initializes the removed node to a
//!    self-loop. A removed node's structural references are consumed, never
//!    left pointing into the chain it came from.
//!
//! 4. **Free list recycling**: released slots are reused by later
//!    allocations, so long-lived containers don't grow without bound under
//!    churn.
//!
//! All moves here are pure index relinking; only `alloc_*` and `release`
//! touch storage.

/// One slot in the arena: an intrusive link pair plus an optional payload.
/// Sentinels hold `None`; elements hold `Some(value)`.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) next: usize,
    pub(crate) prev: usize,
    value: Option<String>,
}

/// An arena of circularly linked nodes.
///
/// Several chains may coexist in one arena (the container's primary
/// sentinel plus any scratch runs an operation carves off), which keeps
/// cut/splice between them O(1) index surgery.
#[derive(Clone, Debug, Default)]
pub(crate) struct NodeArena {
    nodes: Vec<Node>,
    free: Vec<usize>,
}

impl NodeArena {
    pub(crate) fn new() -> NodeArena {
        return NodeArena {
            nodes: Vec::new(),
            free: Vec::new(),
        };
    }

    /// Allocate a node, reusing a free slot when one exists.
    /// The new node starts as a self-loop.
    fn alloc(&mut self, value: Option<String>) -> usize {
        if let Some(idx) = self.free.pop() {
            let node = &mut self.nodes[idx];
            node.next = idx;
            node.prev = idx;
            node.value = value;
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(Node {
            next: idx,
            prev: idx,
            value,
        });
        return idx;
    }

    /// Allocate an empty chain head (sentinel).
    pub(crate) fn alloc_head(&mut self) -> usize {
        return self.alloc(None);
    }

    /// Allocate an element node owning `value`.
    pub(crate) fn alloc_element(&mut self, value: String) -> usize {
        return self.alloc(Some(value));
    }

    /// Return a slot to the free list and hand back its payload.
    /// The node must already be unlinked (self-looped).
    pub(crate) fn release(&mut self, idx: usize) -> Option<String> {
        debug_assert!(
            self.nodes[idx].next == idx && self.nodes[idx].prev == idx,
            "releasing a node still linked into a chain"
        );
        let value = self.nodes[idx].value.take();
        self.free.push(idx);
        return value;
    }

    /// Reset a chain head to the empty self-loop.
    pub(crate) fn init(&mut self, head: usize) {
        self.nodes[head].next = head;
        self.nodes[head].prev = head;
    }

    #[inline(always)]
    pub(crate) fn next(&self, idx: usize) -> usize {
        return self.nodes[idx].next;
    }

    #[inline(always)]
    pub(crate) fn prev(&self, idx: usize) -> usize {
        return self.nodes[idx].prev;
    }

    /// Payload of an element node. Sentinels have no payload.
    #[inline]
    pub(crate) fn value(&self, idx: usize) -> &str {
        return self.nodes[idx]
            .value
            .as_deref()
            .expect("link node without a payload");
    }

    /// A chain is empty iff its head loops to itself.
    #[inline(always)]
    pub(crate) fn is_empty(&self, head: usize) -> bool {
        return self.nodes[head].next == head;
    }

    /// Exactly one node besides the head.
    #[inline]
    pub(crate) fn is_singular(&self, head: usize) -> bool {
        let node = &self.nodes[head];
        return node.next != head && node.next == node.prev;
    }

    /// Splice `node` in right after `anchor`.
    pub(crate) fn link_after(&mut self, node: usize, anchor: usize) {
        let next = self.nodes[anchor].next;
        self.nodes[anchor].next = node;
        self.nodes[node].prev = anchor;
        self.nodes[node].next = next;
        self.nodes[next].prev = node;
    }

    /// Splice `node` in right before `anchor`.
    pub(crate) fn link_before(&mut self, node: usize, anchor: usize) {
        let prev = self.nodes[anchor].prev;
        self.link_after(node, prev);
    }

    /// Bridge the neighbors over `node` and self-loop it.
    pub(crate) fn unlink(&mut self, node: usize) {
        let next = self.nodes[node].next;
        let prev = self.nodes[node].prev;
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.nodes[node].next = node;
        self.nodes[node].prev = node;
    }

    /// Unlink `node` and relink it as the first node of `head`'s chain.
    pub(crate) fn move_front(&mut self, node: usize, head: usize) {
        self.unlink(node);
        self.link_after(node, head);
    }

    /// Unlink `node` and relink it as the last node of `head`'s chain.
    pub(crate) fn move_back(&mut self, node: usize, head: usize) {
        self.unlink(node);
        self.link_before(node, head);
    }

    /// Concatenate the whole run anchored at `src` to the front of `dest`,
    /// leaving `src` empty.
    pub(crate) fn splice(&mut self, src: usize, dest: usize) {
        if self.is_empty(src) {
            return;
        }
        let first = self.nodes[src].next;
        let last = self.nodes[src].prev;
        let old_first = self.nodes[dest].next;
        self.nodes[dest].next = first;
        self.nodes[first].prev = dest;
        self.nodes[last].next = old_first;
        self.nodes[old_first].prev = last;
        self.init(src);
    }

    /// Concatenate the whole run anchored at `src` to the back of `dest`,
    /// leaving `src` empty.
    pub(crate) fn splice_tail(&mut self, src: usize, dest: usize) {
        if self.is_empty(src) {
            return;
        }
        let first = self.nodes[src].next;
        let last = self.nodes[src].prev;
        let old_last = self.nodes[dest].prev;
        self.nodes[old_last].next = first;
        self.nodes[first].prev = old_last;
        self.nodes[last].next = dest;
        self.nodes[dest].prev = last;
        self.init(src);
    }

    /// Move the prefix `src.next ..= boundary` into the empty chain `dest`.
    /// `boundary == src` cuts nothing.
    pub(crate) fn cut_position(&mut self, dest: usize, src: usize, boundary: usize) {
        debug_assert!(self.is_empty(dest), "cutting into a non-empty chain");
        if boundary == src {
            return;
        }
        let first = self.nodes[src].next;
        let rest = self.nodes[boundary].next;
        self.nodes[dest].next = first;
        self.nodes[first].prev = dest;
        self.nodes[dest].prev = boundary;
        self.nodes[boundary].next = dest;
        self.nodes[src].next = rest;
        self.nodes[rest].prev = src;
    }

    /// Number of nodes in the chain anchored at `head`. O(n) traversal.
    pub(crate) fn run_len(&self, head: usize) -> usize {
        let mut len = 0;
        let mut cur = self.nodes[head].next;
        while cur != head {
            len += 1;
            cur = self.nodes[cur].next;
        }
        return len;
    }

    /// Assert the chain at `head` is circular and doubly consistent.
    #[cfg(test)]
    pub(crate) fn check_run(&self, head: usize) {
        let mut cur = head;
        let mut steps = 0;
        loop {
            let next = self.nodes[cur].next;
            assert_eq!(self.nodes[next].prev, cur, "broken link at node {cur}");
            cur = next;
            steps += 1;
            assert!(steps <= self.nodes.len(), "chain does not close on itself");
            if cur == head {
                break;
            }
        }
    }
}
