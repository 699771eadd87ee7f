//! A fixed-capacity queue used by the chunked codec APIs.
//!
//! The buffer is an arena plus two indices: elements live in `[start, end)`.
//! Producers append at `end` until `end == capacity`; consumers take from `start`.
//! Space freed at the front is not reused until `resize` compacts the buffer, so
//! a partially drained buffer keeps its exact layout between chunked calls.

use crate::error::{CodecError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer<T> {
    items: Vec<T>,
    start: usize,
    capacity: usize,
}

impl<T: Copy> Buffer<T> {
    /// Creates an empty buffer that can hold up to `capacity` elements.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            start: 0,
            capacity,
        }
    }

    /// Maximum number of elements the buffer can ever hold without `resize`.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Index of the first unconsumed element.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Index one past the last element.
    pub fn end(&self) -> usize {
        self.items.len()
    }

    /// Number of elements waiting to be consumed.
    pub fn used(&self) -> usize {
        self.end() - self.start
    }

    /// Number of elements that can still be appended.
    pub fn available(&self) -> usize {
        self.capacity - self.end()
    }

    pub fn is_empty(&self) -> bool {
        self.used() == 0
    }

    pub fn is_full(&self) -> bool {
        self.available() == 0
    }

    pub fn enqueue(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            return Err(CodecError::BufferTooSmall {
                required: 1,
                available: 0,
            });
        }
        self.items.push(value);
        Ok(())
    }

    /// Appends all of `values` or nothing.
    pub fn enqueue_slice(&mut self, values: &[T]) -> Result<()> {
        if values.len() > self.available() {
            return Err(CodecError::BufferTooSmall {
                required: values.len(),
                available: self.available(),
            });
        }
        self.items.extend_from_slice(values);
        Ok(())
    }

    pub fn dequeue(&mut self) -> Option<T> {
        let value = self.peek()?;
        self.start += 1;
        Some(value)
    }

    pub fn peek(&self) -> Option<T> {
        self.as_slice().first().copied()
    }

    /// Marks the first `count` elements as consumed.
    pub(crate) fn advance(&mut self, count: usize) {
        debug_assert!(count <= self.used());
        self.start += count.min(self.used());
    }

    /// The unconsumed elements, front first.
    pub fn as_slice(&self) -> &[T] {
        &self.items[self.start..]
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.as_slice().to_vec()
    }

    /// Changes the capacity, keeping every unconsumed element. Consumed space at
    /// the front is reclaimed, so afterwards `start() == 0`.
    pub fn resize(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity < self.used() {
            return Err(CodecError::BufferTooSmall {
                required: self.used(),
                available: new_capacity,
            });
        }
        self.items.drain(..self.start);
        self.start = 0;
        self.capacity = new_capacity;
        self.items.reserve_exact(new_capacity - self.items.len());
        Ok(())
    }
}

/// A buffer filled to capacity with `items`, ready to be consumed.
impl<T: Copy> From<Vec<T>> for Buffer<T> {
    fn from(items: Vec<T>) -> Self {
        let capacity = items.len();
        Self {
            items,
            start: 0,
            capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_order_and_indices() {
        let mut buffer = Buffer::new(3);
        buffer.enqueue(1u64).unwrap();
        buffer.enqueue(2).unwrap();
        assert_eq!(buffer.used(), 2);
        assert_eq!(buffer.available(), 1);

        assert_eq!(buffer.dequeue(), Some(1));
        assert_eq!(buffer.start(), 1);
        assert_eq!(buffer.end(), 2);

        buffer.enqueue(3).unwrap();
        assert!(buffer.is_full());
        assert!(buffer.enqueue(4).is_err());
        assert_eq!(buffer.to_vec(), vec![2, 3]);
    }

    #[test]
    fn test_from_vec_is_full() {
        let buffer = Buffer::from(vec![7u8, 8, 9]);
        assert_eq!(buffer.start(), 0);
        assert_eq!(buffer.end(), 3);
        assert!(buffer.is_full());
        assert_eq!(buffer.peek(), Some(7));
    }

    #[test]
    fn test_resize_preserves_content() {
        let mut buffer = Buffer::from(vec![1u8, 2, 3, 4]);
        buffer.dequeue();
        buffer.resize(8).unwrap();
        assert_eq!(buffer.start(), 0);
        assert_eq!(buffer.capacity(), 8);
        assert_eq!(buffer.available(), 5);
        assert_eq!(buffer.to_vec(), vec![2, 3, 4]);

        assert!(buffer.resize(2).is_err());
        assert_eq!(buffer.to_vec(), vec![2, 3, 4]);
    }

    #[test]
    fn test_enqueue_slice_is_all_or_nothing() {
        let mut buffer = Buffer::new(2);
        assert!(buffer.enqueue_slice(&[1u8, 2, 3]).is_err());
        assert!(buffer.is_empty());
        buffer.enqueue_slice(&[1, 2]).unwrap();
        assert!(buffer.is_full());
    }
}
