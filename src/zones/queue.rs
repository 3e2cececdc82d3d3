//! Fixed-capacity FIFO over a pre-allocated ring buffer.
//!
//! The logical element at offset `i` lives at physical slot
//! `(offset + i) % capacity`. The buffer is allocated once and never
//! resized: pushing into a full queue is rejected, never overwrites.

use std::iter::FusedIterator;

use crate::core::error::QueueError;

/// Bounded circular queue.
///
/// ## Usage
///
/// ```
/// use rust_war::zones::BoundedQueue;
///
/// let mut queue = BoundedQueue::new(3).unwrap();
/// for value in [0, 1, 2] {
///     queue.push(value).unwrap();
/// }
/// assert_eq!(queue.pop(), Some(0));
/// queue.push(3).unwrap();
///
/// assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert!(queue.push(4).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct BoundedQueue<T> {
    slots: Box<[Option<T>]>,
    offset: usize,
    len: usize,
}

impl<T> BoundedQueue<T> {
    /// Create an empty queue over exactly `capacity` slots.
    pub fn new(capacity: usize) -> Result<Self, QueueError> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| QueueError::Allocation { capacity })?;
        slots.resize_with(capacity, || None);

        Ok(Self {
            slots: slots.into_boxed_slice(),
            offset: 0,
            len: 0,
        })
    }

    /// Maximum number of elements.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of elements currently queued.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    fn slot(&self, index: usize) -> usize {
        (self.offset + index) % self.capacity()
    }

    /// Append at the logical back.
    pub fn push(&mut self, item: T) -> Result<(), QueueError> {
        if self.is_full() {
            return Err(QueueError::Full {
                capacity: self.capacity(),
            });
        }

        let slot = self.slot(self.len);
        self.slots[slot] = Some(item);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the logical front element.
    ///
    /// Returns `None` without touching the queue when it is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let item = self.slots[self.offset].take();
        self.offset = self.slot(1);
        self.len -= 1;
        item
    }

    /// Element at logical offset `index` (0 = front), without removal.
    #[must_use]
    pub fn peek(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.slots[self.slot(index)].as_ref()
    }

    /// Front element, same as `peek(0)`.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.peek(0)
    }

    /// Move the front element to the back, `count` times.
    ///
    /// Never fails for a non-empty queue since every pop frees the slot
    /// the following push needs.
    pub fn rotate(&mut self, count: usize) -> Result<(), QueueError> {
        for _ in 0..count {
            match self.pop() {
                Some(item) => self.push(item)?,
                None => break,
            }
        }
        Ok(())
    }

    /// Front-to-back iterator over queued elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            queue: self,
            front: 0,
            back: self.len,
        }
    }

    /// Call `visitor(element, index)` on every element, front to back.
    pub fn for_each_indexed(&self, mut visitor: impl FnMut(&T, usize)) {
        for (index, item) in self.iter().enumerate() {
            visitor(item, index);
        }
    }
}

/// Space-separated elements, front to back.
impl<T: std::fmt::Display> std::fmt::Display for BoundedQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut result = Ok(());
        self.for_each_indexed(|item, index| {
            if result.is_ok() {
                result = if index == 0 {
                    write!(f, "{item}")
                } else {
                    write!(f, " {item}")
                };
            }
        });
        result
    }
}

impl<'a, T> IntoIterator for &'a BoundedQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator returned by [`BoundedQueue::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    queue: &'a BoundedQueue<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.queue.peek(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.queue.peek(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(capacity: usize, values: &[u32]) -> BoundedQueue<u32> {
        let mut queue = BoundedQueue::new(capacity).unwrap();
        for &v in values {
            queue.push(v).unwrap();
        }
        queue
    }

    #[test]
    fn test_new_is_empty() {
        let queue: BoundedQueue<u32> = BoundedQueue::new(52).unwrap();
        assert_eq!(queue.capacity(), 52);
        assert_eq!(queue.len(), 0);
        assert!(queue.is_empty());
        assert_eq!(queue.front(), None);
    }

    #[test]
    fn test_fifo_order() {
        let mut queue = filled(4, &[10, 20, 30]);
        assert_eq!(queue.pop(), Some(10));
        assert_eq!(queue.pop(), Some(20));
        assert_eq!(queue.pop(), Some(30));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_wraparound() {
        let mut queue = filled(3, &[0, 1, 2]);
        assert_eq!(queue.pop(), Some(0));
        queue.push(3).unwrap();

        assert_eq!(queue.peek(0), Some(&1));
        assert_eq!(queue.peek(1), Some(&2));
        assert_eq!(queue.peek(2), Some(&3));
        assert_eq!(queue.peek(3), None);
    }

    #[test]
    fn test_push_full_rejected() {
        let mut queue = filled(2, &[1, 2]);
        assert!(queue.is_full());
        assert_eq!(queue.push(3), Err(QueueError::Full { capacity: 2 }));
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_pop_empty_leaves_state() {
        let mut queue = filled(3, &[1]);
        queue.pop();
        assert_eq!(queue.pop(), None);
        assert_eq!(queue.len(), 0);

        queue.push(5).unwrap();
        assert_eq!(queue.front(), Some(&5));
    }

    #[test]
    fn test_zero_capacity() {
        let mut queue: BoundedQueue<u32> = BoundedQueue::new(0).unwrap();
        assert_eq!(queue.push(1), Err(QueueError::Full { capacity: 0 }));
        assert_eq!(queue.pop(), None);
        assert_eq!(queue.peek(0), None);
        assert!(queue.rotate(3).is_ok());
    }

    #[test]
    fn test_rotate() {
        let mut queue = filled(4, &[1, 2, 3]);
        queue.rotate(1).unwrap();
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![2, 3, 1]);

        // Rotating past the length wraps around.
        queue.rotate(4).unwrap();
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
    }

    #[test]
    fn test_rotate_full_queue() {
        let mut queue = filled(3, &[1, 2, 3]);
        queue.rotate(2).unwrap();
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
    }

    #[test]
    fn test_iter_after_wrap() {
        let mut queue = filled(3, &[1, 2, 3]);
        queue.pop();
        queue.pop();
        queue.push(4).unwrap();
        queue.push(5).unwrap();

        let items: Vec<_> = queue.iter().copied().collect();
        assert_eq!(items, vec![3, 4, 5]);
        assert_eq!(queue.iter().len(), 3);

        let reversed: Vec<_> = queue.iter().rev().copied().collect();
        assert_eq!(reversed, vec![5, 4, 3]);
    }

    #[test]
    fn test_for_each_indexed() {
        let queue = filled(5, &[7, 8, 9]);
        let mut seen = Vec::new();
        queue.for_each_indexed(|&v, i| seen.push((i, v)));
        assert_eq!(seen, vec![(0, 7), (1, 8), (2, 9)]);
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn test_display_after_wrap() {
        let mut queue = filled(3, &[1, 2, 3]);
        queue.rotate(2).unwrap();
        assert_eq!(queue.to_string(), "3 1 2");

        assert_eq!(filled(3, &[]).to_string(), "");
        assert_eq!(filled(3, &[42]).to_string(), "42");
    }

    #[test]
    fn test_into_iterator() {
        let queue = filled(3, &[1, 2]);
        let mut total = 0;
        for v in &queue {
            total += v;
        }
        assert_eq!(total, 3);
    }
}
