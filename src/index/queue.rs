//! Bucket queue
//!
//! FIFO of suffix-start positions used by each radix pass. Backed by a
//! growable array with a read cursor instead of linked nodes, so a pass
//! allocates only when a bucket outgrows the capacity left by earlier passes.

use crate::error::{Error, Result};
use std::fmt;

/// FIFO of suffix positions
#[derive(Debug, Clone, Default)]
pub struct BucketQueue {
    /// Queued values; `items[head..]` are live
    items: Vec<usize>,
    /// Index of the next value to dequeue
    head: usize,
}

impl BucketQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty queue with room for `capacity` values
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut items = Vec::new();
        items.try_reserve(capacity)?;
        Ok(Self { items, head: 0 })
    }

    /// Append a value to the back of the queue
    ///
    /// Fails with [`Error::OutOfMemory`] if the backing storage cannot grow.
    #[inline]
    pub fn enqueue(&mut self, value: usize) -> Result<()> {
        if self.items.len() == self.items.capacity() {
            self.items.try_reserve(1)?;
        }
        self.items.push(value);
        Ok(())
    }

    /// Remove and return the value at the front of the queue
    ///
    /// Fails with [`Error::EmptyQueue`] if nothing is queued.
    #[inline]
    pub fn dequeue(&mut self) -> Result<usize> {
        let value = *self.items.get(self.head).ok_or(Error::EmptyQueue)?;
        self.head += 1;

        // Rewind once drained so the capacity is reused by the next pass
        if self.head == self.items.len() {
            self.clear();
        }

        Ok(value)
    }

    /// Check if the queue holds no values
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head == self.items.len()
    }

    /// Number of queued values
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len() - self.head
    }

    /// Drop all queued values, keeping the allocation
    pub fn clear(&mut self) {
        self.items.clear();
        self.head = 0;
    }

    /// Move every queued value, in FIFO order, onto the end of `out`
    pub fn drain_into(&mut self, out: &mut Vec<usize>) -> Result<()> {
        out.try_reserve(self.len())?;
        while !self.is_empty() {
            out.push(self.dequeue()?);
        }
        Ok(())
    }

    /// Iterate over queued values front to back without removing them
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.items[self.head..].iter().copied()
    }
}

impl fmt::Display for BucketQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "empty");
        }

        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = BucketQueue::new();
        for value in [9, 12, 22, 0] {
            queue.enqueue(value).unwrap();
        }

        assert!(!queue.is_empty());
        assert_eq!(queue.len(), 4);
        assert_eq!(queue.to_string(), "9 12 22 0");

        assert_eq!(queue.dequeue().unwrap(), 9);
        assert_eq!(queue.dequeue().unwrap(), 12);
        queue.enqueue(100).unwrap();
        assert_eq!(queue.to_string(), "22 0 100");
    }

    #[test]
    fn test_dequeue_empty() {
        let mut queue = BucketQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), Err(Error::EmptyQueue));

        queue.enqueue(1).unwrap();
        queue.dequeue().unwrap();
        for _ in 0..10 {
            assert_eq!(queue.dequeue(), Err(Error::EmptyQueue));
        }
        assert_eq!(queue.to_string(), "empty");

        // Still usable after failed dequeues
        queue.enqueue(22).unwrap();
        assert_eq!(queue.dequeue().unwrap(), 22);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_storage_rewinds_when_drained() {
        let mut queue = BucketQueue::with_capacity(8).unwrap();
        for value in 0..8 {
            queue.enqueue(value).unwrap();
        }
        let capacity = queue.items.capacity();

        for _ in 0..8 {
            queue.dequeue().unwrap();
        }

        assert_eq!(queue.head, 0);
        assert!(queue.items.is_empty());
        assert_eq!(queue.items.capacity(), capacity);
    }

    #[test]
    fn test_drain_into() {
        let mut queue = BucketQueue::new();
        for value in [5, 3, 1] {
            queue.enqueue(value).unwrap();
        }

        let mut out = vec![7];
        queue.drain_into(&mut out).unwrap();

        assert_eq!(out, vec![7, 5, 3, 1]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_oversized_capacity_is_out_of_memory() {
        assert_eq!(
            BucketQueue::with_capacity(usize::MAX).unwrap_err(),
            Error::OutOfMemory
        );
        assert_eq!(
            BucketQueue::with_capacity(isize::MAX as usize).unwrap_err(),
            Error::OutOfMemory
        );
        assert!(BucketQueue::with_capacity(0).unwrap().is_empty());
    }
}
