//! Strand - an ordered string container with structural transformations.
//!
//! A `Queue` is a circular, intrusive, doubly-linked list of string values,
//! plus a library of transformations over it: middle deletion, duplicate-run
//! elimination, full and k-group reversal, partition sort, monotonic
//! filtering, and k-way merge of independently sorted queues.
//!
//! # Quick Start
//!
//! ```
//! use strand::Queue;
//!
//! let mut queue = Queue::new();
//! queue.push_back("banana");
//! queue.push_back("apple");
//! queue.push_back("cherry");
//!
//! queue.sort(false);
//! assert_eq!(
//!     queue.iter().collect::<Vec<_>>(),
//!     ["apple", "banana", "cherry"],
//! );
//!
//! assert_eq!(queue.pop_front(), Some("apple".to_string()));
//! ```

mod link;
mod sort;

pub mod merge;
pub mod queue;

pub use merge::MergeChain;
pub use queue::Queue;
