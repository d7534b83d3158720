//! Growth policy for [`CircularDeque`](super::CircularDeque).
//!
//! The policy is plain data so it can live inside a host application's
//! configuration. Fields missing from a serialized policy take the defaults.

use serde::{Deserialize, Serialize};

use crate::DequeError;

/// Capacity of a deque created with [`GrowthPolicy::default`].
pub const DEFAULT_CAPACITY: usize = 8;

/// Factor applied to the capacity on every growth with [`GrowthPolicy::default`].
pub const DEFAULT_MULTIPLIER: usize = 2;

/// Initial capacity and growth factor of a deque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthPolicy {
    /// Number of slots allocated up front. Must be non-zero.
    pub initial_capacity: usize,
    /// Factor the capacity is multiplied by when the deque fills up. Must be at least 2.
    pub multiplier: usize,
}

impl GrowthPolicy {
    /// Creates a validated policy.
    ///
    /// # Errors
    /// Returns [`DequeError::InvalidPolicy`] if `initial_capacity` is zero or
    /// `multiplier` is below 2.
    pub fn new(initial_capacity: usize, multiplier: usize) -> Result<Self, DequeError> {
        let policy = Self { initial_capacity, multiplier };
        policy.validate()?;
        Ok(policy)
    }

    /// Checks the policy. Public fields allow building (or deserializing) an
    /// invalid one, so deques call this before using it.
    ///
    /// # Errors
    /// Returns [`DequeError::InvalidPolicy`] for a zero capacity or a multiplier below 2.
    pub fn validate(&self) -> Result<(), DequeError> {
        if self.initial_capacity == 0 || self.multiplier < 2 {
            return Err(DequeError::InvalidPolicy {
                initial_capacity: self.initial_capacity,
                multiplier: self.multiplier,
            });
        }
        Ok(())
    }

    /// Capacity that follows `capacity` under this policy.
    ///
    /// # Errors
    /// Returns [`DequeError::CapacityOverflow`] if the product does not fit in a `usize`.
    #[inline]
    pub fn grown_capacity(&self, capacity: usize) -> Result<usize, DequeError> {
        capacity.checked_mul(self.multiplier).ok_or(DequeError::CapacityOverflow)
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self { initial_capacity: DEFAULT_CAPACITY, multiplier: DEFAULT_MULTIPLIER }
    }
}
