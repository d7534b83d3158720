//! The minimal deque contract, abstracted over implementations.

use std::collections::VecDeque;

use crate::collections::CircularDeque;
use crate::DequeError;

/// Insertion, removal and inspection at both ends of a queue.
///
/// Implemented by [`CircularDeque`] and by the standard library's
/// [`VecDeque`], so code (and tests) can run against either.
pub trait SimpleDeque<T> {
    /// Number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Prepends an element.
    fn add_first(&mut self, value: T);

    /// Appends an element.
    fn add_last(&mut self, value: T);

    /// Removes the first element.
    ///
    /// # Errors
    /// Returns [`DequeError::Empty`] if there is nothing to remove.
    fn remove_first(&mut self) -> Result<T, DequeError>;

    /// Removes the last element.
    ///
    /// # Errors
    /// Returns [`DequeError::Empty`] if there is nothing to remove.
    fn remove_last(&mut self) -> Result<T, DequeError>;

    /// Borrows the first element.
    ///
    /// # Errors
    /// Returns [`DequeError::Empty`] if the deque is empty.
    fn peek_first(&self) -> Result<&T, DequeError>;

    /// Borrows the last element.
    ///
    /// # Errors
    /// Returns [`DequeError::Empty`] if the deque is empty.
    fn peek_last(&self) -> Result<&T, DequeError>;
}

impl<T> SimpleDeque<T> for CircularDeque<T> {
    #[inline]
    fn len(&self) -> usize {
        CircularDeque::len(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        CircularDeque::is_empty(self)
    }

    #[inline]
    fn add_first(&mut self, value: T) {
        CircularDeque::add_first(self, value);
    }

    #[inline]
    fn add_last(&mut self, value: T) {
        CircularDeque::add_last(self, value);
    }

    #[inline]
    fn remove_first(&mut self) -> Result<T, DequeError> {
        CircularDeque::remove_first(self)
    }

    #[inline]
    fn remove_last(&mut self) -> Result<T, DequeError> {
        CircularDeque::remove_last(self)
    }

    #[inline]
    fn peek_first(&self) -> Result<&T, DequeError> {
        CircularDeque::peek_first(self)
    }

    #[inline]
    fn peek_last(&self) -> Result<&T, DequeError> {
        CircularDeque::peek_last(self)
    }
}

impl<T> SimpleDeque<T> for VecDeque<T> {
    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn add_first(&mut self, value: T) {
        self.push_front(value);
    }

    #[inline]
    fn add_last(&mut self, value: T) {
        self.push_back(value);
    }

    #[inline]
    fn remove_first(&mut self) -> Result<T, DequeError> {
        self.pop_front().ok_or(DequeError::Empty)
    }

    #[inline]
    fn remove_last(&mut self) -> Result<T, DequeError> {
        self.pop_back().ok_or(DequeError::Empty)
    }

    #[inline]
    fn peek_first(&self) -> Result<&T, DequeError> {
        self.front().ok_or(DequeError::Empty)
    }

    #[inline]
    fn peek_last(&self) -> Result<&T, DequeError> {
        self.back().ok_or(DequeError::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain_front<D: SimpleDeque<u32>>(deque: &mut D) -> Vec<u32> {
        let mut out = Vec::new();
        while let Ok(value) = deque.remove_first() {
            out.push(value);
        }
        out
    }

    fn fill<D: SimpleDeque<u32>>(deque: &mut D) {
        for i in 0..20 {
            if i % 3 == 0 {
                deque.add_first(i);
            } else {
                deque.add_last(i);
            }
        }
    }

    #[test]
    fn implementations_agree() {
        let mut circular = CircularDeque::new();
        let mut std_deque = VecDeque::new();
        fill(&mut circular);
        fill(&mut std_deque);

        assert_eq!(SimpleDeque::len(&circular), SimpleDeque::len(&std_deque));
        assert_eq!(SimpleDeque::peek_first(&circular), SimpleDeque::peek_first(&std_deque));
        assert_eq!(SimpleDeque::peek_last(&circular), SimpleDeque::peek_last(&std_deque));
        assert_eq!(drain_front(&mut circular), drain_front(&mut std_deque));
    }

    #[test]
    fn vec_deque_reports_empty() {
        let mut deque: VecDeque<u32> = VecDeque::new();
        assert!(SimpleDeque::is_empty(&deque));
        assert_eq!(SimpleDeque::remove_last(&mut deque), Err(DequeError::Empty));
        assert_eq!(SimpleDeque::peek_first(&deque), Err(DequeError::Empty));
    }
}
