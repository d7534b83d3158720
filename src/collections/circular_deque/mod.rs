//! `CircularDeque` — a growable double-ended queue over one circular buffer.
//!
//! The deque keeps its elements in a single contiguous store of `Option<T>`
//! slots and tracks them with two cursors:
//!
//! - `head` is the real index of the first element,
//! - `tail` is the real index one past the last element.
//!
//! Both cursors are always wrapped positions into the store, never logical
//! offsets. There is no element counter: `head == tail` means *empty*, and an
//! insertion that would make the cursors meet grows the store before the call
//! returns, so a full store is never observable.
//!
//! ```text
//!            tail          head
//!              |             |
//!              v             v
//! +---+---+---+---+---+---+---+---+
//! | 5 | 6 | 7 |   |   |   | 3 | 4 |
//! +---+---+---+---+---+---+---+---+
//! ```
//!
//! Growth multiplies the capacity (doubling by default, see [`GrowthPolicy`])
//! and unwraps the ring: the run `[head, capacity)` moves to the front of the
//! new store, followed by `[0, tail)`. Afterwards `head == 0` and `tail` equals
//! the old capacity.
//!
//! # Thread safety
//!
//! There is no internal locking. The deque is `Send`/`Sync` whenever `T` is,
//! but mutation from several threads needs external synchronization such as a
//! `Mutex`.

mod policy;


use core::fmt;
use core::iter;

use crate::DequeError;

pub use policy::{GrowthPolicy, DEFAULT_CAPACITY, DEFAULT_MULTIPLIER};

/// A double-ended queue backed by a growable circular buffer.
///
/// See the [module-level documentation](self) for the layout.
#[derive(Clone)]
pub struct CircularDeque<T> {
    /// Backing store. Its length is the capacity and never changes between
    /// growths. Slots outside the logical range are always `None`.
    buf: Vec<Option<T>>,
    /// Real index of the first element.
    head: usize,
    /// Real index of the slot the next `add_last` writes to.
    tail: usize,
    policy: GrowthPolicy,
}

impl<T> CircularDeque<T> {
    /// Creates an empty deque with the default policy (capacity 8, doubling).
    ///
    /// # Examples
    ///
    /// ```
    /// use circdeque::CircularDeque;
    ///
    /// let deque: CircularDeque<i32> = CircularDeque::new();
    /// assert!(deque.is_empty());
    /// assert_eq!(deque.capacity(), 8);
    /// ```
    pub fn new() -> Self {
        let policy = GrowthPolicy::default();
        Self {
            buf: iter::repeat_with(|| None).take(policy.initial_capacity).collect(),
            head: 0,
            tail: 0,
            policy,
        }
    }

    /// Creates an empty deque that starts at `policy.initial_capacity` and grows
    /// by `policy.multiplier`.
    ///
    /// # Errors
    /// Returns [`DequeError::InvalidPolicy`] for a policy that fails
    /// [`GrowthPolicy::validate`], or [`DequeError::AllocFailed`] if the initial
    /// store cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use circdeque::{CircularDeque, GrowthPolicy};
    ///
    /// let policy = GrowthPolicy::new(4, 3)?;
    /// let deque: CircularDeque<u8> = CircularDeque::with_policy(policy)?;
    /// assert_eq!(deque.capacity(), 4);
    /// # Ok::<(), circdeque::DequeError>(())
    /// ```
    pub fn with_policy(policy: GrowthPolicy) -> Result<Self, DequeError> {
        policy.validate()?;
        Ok(Self { buf: vacant_store(policy.initial_capacity)?, head: 0, tail: 0, policy })
    }

    /// Number of slots in the backing store.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// The policy this deque grows by.
    #[inline]
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Number of elements in the deque.
    #[inline]
    pub fn len(&self) -> usize {
        // (tail - head) mod capacity, kept in unsigned range
        self.wrap(self.tail + self.capacity() - self.head)
    }

    /// Returns `true` if the deque holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Prepends an element.
    ///
    /// # Panics
    /// Panics if the store has to grow and the new capacity overflows or
    /// cannot be allocated. Use [`try_add_first`](Self::try_add_first) to get
    /// the error instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use circdeque::CircularDeque;
    ///
    /// let mut deque = CircularDeque::new();
    /// deque.add_first(1);
    /// deque.add_first(2);
    /// assert_eq!(deque.peek_first(), Ok(&2));
    /// assert_eq!(deque.peek_last(), Ok(&1));
    /// ```
    pub fn add_first(&mut self, value: T) {
        if let Err(err) = self.try_add_first(value) {
            growth_failed(err);
        }
    }

    /// Prepends an element, reporting growth failures.
    ///
    /// The head cursor moves back one slot and `value` is written there. If
    /// that makes the cursors meet, the store grows. The larger store is
    /// reserved before anything is written, so on error the deque is unchanged.
    ///
    /// # Errors
    /// Returns [`DequeError::CapacityOverflow`] or [`DequeError::AllocFailed`]
    /// if the deque is one element short of full and cannot grow.
    pub fn try_add_first(&mut self, value: T) -> Result<(), DequeError> {
        let head = self.step_back(self.head);
        let spare = (head == self.tail).then(|| self.reserve_growth()).transpose()?;

        self.head = head;
        self.buf[head] = Some(value);

        if let Some(spare) = spare {
            self.grow_into(spare);
        }
        Ok(())
    }

    /// Appends an element.
    ///
    /// # Panics
    /// Panics if the store has to grow and the new capacity overflows or
    /// cannot be allocated. Use [`try_add_last`](Self::try_add_last) to get
    /// the error instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use circdeque::CircularDeque;
    ///
    /// let mut deque = CircularDeque::new();
    /// deque.add_last(1);
    /// deque.add_last(2);
    /// assert_eq!(deque.remove_first(), Ok(1));
    /// ```
    pub fn add_last(&mut self, value: T) {
        if let Err(err) = self.try_add_last(value) {
            growth_failed(err);
        }
    }

    /// Appends an element, reporting growth failures.
    ///
    /// `value` is written at the tail cursor, which then moves forward one
    /// slot. If that makes the cursors meet, the store grows. As with
    /// [`try_add_first`](Self::try_add_first), the deque is unchanged on error.
    ///
    /// # Errors
    /// Returns [`DequeError::CapacityOverflow`] or [`DequeError::AllocFailed`]
    /// if the deque is one element short of full and cannot grow.
    pub fn try_add_last(&mut self, value: T) -> Result<(), DequeError> {
        let tail = self.step_forward(self.tail);
        let spare = (tail == self.head).then(|| self.reserve_growth()).transpose()?;

        self.buf[self.tail] = Some(value);
        self.tail = tail;

        if let Some(spare) = spare {
            self.grow_into(spare);
        }
        Ok(())
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    /// Returns [`DequeError::Empty`] if there is nothing to remove. The deque
    /// is not modified in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use circdeque::{CircularDeque, DequeError};
    ///
    /// let mut deque = CircularDeque::new();
    /// deque.add_last("a");
    /// assert_eq!(deque.remove_first(), Ok("a"));
    /// assert_eq!(deque.remove_first(), Err(DequeError::Empty));
    /// ```
    pub fn remove_first(&mut self) -> Result<T, DequeError> {
        // Slots outside [head, tail) are vacant, so a vacant head slot means empty.
        let value = self.buf[self.head].take().ok_or(DequeError::Empty)?;
        self.head = self.step_forward(self.head);
        Ok(value)
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    /// Returns [`DequeError::Empty`] if there is nothing to remove. The deque
    /// is not modified in that case.
    pub fn remove_last(&mut self) -> Result<T, DequeError> {
        let tail = self.step_back(self.tail);
        let value = self.buf[tail].take().ok_or(DequeError::Empty)?;
        self.tail = tail;
        Ok(value)
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    /// Returns [`DequeError::Empty`] if the deque is empty.
    pub fn peek_first(&self) -> Result<&T, DequeError> {
        self.buf[self.head].as_ref().ok_or(DequeError::Empty)
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    /// Returns [`DequeError::Empty`] if the deque is empty.
    pub fn peek_last(&self) -> Result<&T, DequeError> {
        self.buf[self.step_back(self.tail)].as_ref().ok_or(DequeError::Empty)
    }

    /// Drops every element. The capacity is kept.
    pub fn clear(&mut self) {
        self.buf.fill_with(|| None);
        self.head = 0;
        self.tail = 0;
    }

    /// Single-step modular correction.
    ///
    /// Cursors move one slot at a time, so `index` is never more than one
    /// capacity past the end of the store.
    #[inline]
    fn wrap(&self, index: usize) -> usize {
        let cap = self.capacity();
        debug_assert!(index < cap || index - cap < cap, "index {index} is more than one lap out");
        if index >= cap {
            index - cap
        } else {
            index
        }
    }

    #[inline]
    fn step_forward(&self, index: usize) -> usize {
        self.wrap(index + 1)
    }

    #[inline]
    fn step_back(&self, index: usize) -> usize {
        self.wrap(index + self.capacity() - 1)
    }

    /// Elements front to back.
    fn elements(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len()).filter_map(move |offset| self.buf[self.wrap(self.head + offset)].as_ref())
    }

    /// Allocates the store the next growth moves into.
    fn reserve_growth(&self) -> Result<Vec<Option<T>>, DequeError> {
        let grown = self.policy.grown_capacity(self.capacity()).and_then(vacant_store);
        #[cfg(feature = "tracing")]
        if let Err(err) = &grown {
            tracing::warn!(capacity = self.capacity(), error = %err, "circular deque failed to grow");
        }
        grown
    }

    /// Moves every element into `spare`, unwrapping the ring.
    ///
    /// Only called while the store is full, when `head == tail`.
    fn grow_into(&mut self, mut spare: Vec<Option<T>>) {
        let old_capacity = self.capacity();
        debug_assert_eq!(self.head, self.tail);

        let first_run = old_capacity - self.head;
        spare[..first_run].swap_with_slice(&mut self.buf[self.head..]);
        spare[first_run..old_capacity].swap_with_slice(&mut self.buf[..self.tail]);

        #[cfg(feature = "tracing")]
        tracing::debug!(old_capacity, new_capacity = spare.len(), "circular deque grew");

        self.buf = spare;
        self.head = 0;
        self.tail = old_capacity;
    }
}

/// Allocates `capacity` vacant slots, reporting allocation failure.
fn vacant_store<T>(capacity: usize) -> Result<Vec<Option<T>>, DequeError> {
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(capacity)
        .map_err(|_| DequeError::AllocFailed { requested: capacity })?;
    slots.resize_with(capacity, || None);
    Ok(slots)
}

#[cold]
#[inline(never)]
fn growth_failed(err: DequeError) -> ! {
    panic!("circular deque could not grow: {err}");
}

impl<T> Default for CircularDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elements()).finish()
    }
}

/// Two deques are equal when they hold equal elements in the same order,
/// whatever their capacities or cursor positions.
impl<T: PartialEq> PartialEq for CircularDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.elements().eq(other.elements())
    }
}

impl<T: Eq> Eq for CircularDeque<T> {}

impl<T> Extend<T> for CircularDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_last(value);
        }
    }
}

impl<T> FromIterator<T> for CircularDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}
