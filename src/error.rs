//! Error type shared by the deque and its growth policy.

use core::fmt;

/// The error type for deque operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DequeError {
    /// A removal or peek was attempted on an empty deque.
    Empty,
    /// The next capacity does not fit in a `usize`.
    CapacityOverflow,
    /// The allocator could not provide a backing store.
    AllocFailed {
        /// Number of slots that were requested.
        requested: usize,
    },
    /// A growth policy that could never make progress.
    InvalidPolicy {
        /// Rejected initial capacity (must be non-zero).
        initial_capacity: usize,
        /// Rejected growth multiplier (must be at least 2).
        multiplier: usize,
    },
}

impl fmt::Display for DequeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("deque is empty"),
            Self::CapacityOverflow => f.write_str("deque capacity overflow"),
            Self::AllocFailed { requested } => {
                write!(f, "failed to allocate a backing store of {requested} slots")
            }
            Self::InvalidPolicy { initial_capacity, multiplier } => write!(
                f,
                "invalid growth policy (initial capacity {initial_capacity}, multiplier {multiplier})"
            ),
        }
    }
}

impl std::error::Error for DequeError {}
