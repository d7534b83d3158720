//! Collections provided by the crate.
//!
//! - `circular_deque`: growable double-ended queue over one circular buffer
//! - `traits`: the `SimpleDeque` contract shared with `std::collections::VecDeque`

pub mod circular_deque;
pub mod traits;

// Re-export commonly used types from submodules
pub use circular_deque::{CircularDeque, GrowthPolicy};
pub use traits::SimpleDeque;
