//! Contiguous-buffer binary max-heap and priority queue
//!
//! This crate provides two layered structures over one exclusively-owned
//! element buffer:
//!
//! - **[`BinaryMaxHeap`]**: the heap engine: invariant validation
//!   (`is_heap`), O(n) bottom-up reconstruction (`heapify`), and an
//!   in-place, invariant-destroying heap-sort (`sort`)
//! - **[`HeapQueue`]**: the priority queue: peek/extract highest
//!   (`tip`/`pop_tip`/`remove_tip`), arbitrary priority change by value or
//!   by position (`change`/`change_at`), and an amortized grow/shrink
//!   capacity policy (2× growth, shrink at quarter occupancy)
//!
//! The queue *composes* the engine; the engine operates over the buffer by
//! index. Capability traits ([`Heap`], [`Sortable`], [`Clearable`],
//! [`Indexable`], [`PriorityQueue`]) expose each concern separately.
//!
//! Everything is single-threaded and synchronous: operations run to
//! completion on the caller's thread and either succeed or fail
//! immediately with a [`HeapError`], leaving the structure unchanged on
//! failure.
//!
//! # Example
//!
//! ```rust
//! use priority_heap::HeapQueue;
//!
//! let mut queue = HeapQueue::from_vec(vec![10, 5, 15, 2, 8, 20, 3]);
//! assert_eq!(queue.tip()?, &20);
//!
//! queue.change_at(0, 100)?;
//! assert_eq!(queue.pop_tip()?, 100);
//! assert_eq!(queue.pop_tip()?, 15);
//! # Ok::<(), priority_heap::HeapError>(())
//! ```

pub mod heap;
pub mod queue;
pub mod storage;
pub mod traits;

// Re-export the concrete structures and the capability traits for convenience
pub use heap::BinaryMaxHeap;
pub use queue::HeapQueue;
pub use traits::{Clearable, Heap, HeapError, Indexable, PriorityQueue, Sortable};
