//! # `circdeque` - Growable Circular Deque
//!
//! A double-ended queue stored in one contiguous, dynamically resized array,
//! with O(1) amortized insertion and removal at both ends.
//!
//! ## Guarantees
//!
//! ### Memory Safety
//! - **No unsafe code**: slots are `Option<T>`, so a vacant slot is a `None`
//!   rather than uninitialized memory, and there is no type erasure to cast back.
//! - **No pinned elements**: removing an element clears its slot, so the deque
//!   never keeps a removed value alive.
//!
//! ### Structural Invariants
//! - **Real cursors**: `head` and `tail` always index the backing store directly.
//! - **Counter-free emptiness**: `head == tail` always means empty, because an
//!   insertion that would fill the store grows it before returning.
//! - **Monotonic capacity**: the store only grows, and only on insertion.
//!
//! ### Errors
//! - **Explicit empty errors**: removing or peeking on an empty deque returns
//!   [`DequeError::Empty`] and leaves the deque untouched.
//! - **Fallible growth**: [`CircularDeque::try_add_first`] and
//!   [`CircularDeque::try_add_last`] report capacity overflow and allocation
//!   failure without partially applying the insertion.
//!
//! ## Concurrency
//!
//! Single-threaded. No operation blocks or locks; share a deque between
//! threads only behind external synchronization.
//!
//! ## Features
//!
//! - `tracing`: emit growth events through the `tracing` crate.
//! - `alloc-mimalloc`, `alloc-jemalloc`, `alloc-system`: select the global
//!   allocator used by the benchmark suite.
//!
//! ## Example
//!
//! ```rust
//! use circdeque::CircularDeque;
//!
//! let mut deque = CircularDeque::new();
//! deque.add_last(10);
//! deque.add_last(20);
//! deque.add_first(5);
//!
//! assert_eq!(deque.peek_first(), Ok(&5));
//! assert_eq!(deque.peek_last(), Ok(&20));
//! assert_eq!(deque.len(), 3);
//!
//! assert_eq!(deque.remove_first(), Ok(5));
//! assert_eq!(deque.remove_last(), Ok(20));
//! assert_eq!(deque.len(), 1);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
mod error;

pub use collections::{CircularDeque, GrowthPolicy, SimpleDeque};
pub use error::DequeError;

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // Store handle, two cursors and the policy; no hidden length counter.
    assert!(mem::size_of::<CircularDeque<u64>>() <= mem::size_of::<usize>() * 7);
    assert!(mem::size_of::<GrowthPolicy>() == mem::size_of::<usize>() * 2);

    // Errors stay small enough to return by value.
    assert!(mem::size_of::<DequeError>() <= mem::size_of::<usize>() * 3);
};
