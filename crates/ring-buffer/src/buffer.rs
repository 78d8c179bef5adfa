//! Mutex-Guarded Ring Buffer Implementation

use crate::error::BufferError;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Cursor and slot state, only ever touched while the lock is held
struct Ring<T, const N: usize> {
    /// Pre-allocated storage
    storage: [T; N],
    /// Head position (next slot to write)
    head: usize,
    /// Tail position (next slot to read)
    tail: usize,
}

/// Fixed-capacity FIFO shared between producer and consumer threads.
///
/// One slot is always left unused so that `head == tail` means empty and
/// `head + 1 == tail` (mod `N`) means full, giving a usable capacity of
/// `N - 1`. Pushing into a full buffer fails instead of overwriting.
pub struct RingBuffer<T, const N: usize> {
    ring: Mutex<Ring<T, N>>,
}

impl<T: Copy + Default, const N: usize> RingBuffer<T, N> {
    const MIN_SLOTS: () = assert!(N >= 2, "a ring buffer needs at least two slots");

    /// Total number of slots
    pub const SLOTS: usize = N;

    /// Maximum number of unread entries held at once
    pub const USABLE_CAPACITY: usize = N - 1;

    /// Create an empty buffer
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::MIN_SLOTS;

        Self {
            ring: Mutex::new(Ring {
                storage: [T::default(); N],
                head: 0,
                tail: 0,
            }),
        }
    }

    /// Push an entry, failing with [`BufferError::Full`] if no slot is free
    pub fn push(&self, entry: T) -> Result<(), BufferError> {
        let mut ring = self.lock();

        let next = (ring.head + 1) % N;
        if next == ring.tail {
            return Err(BufferError::Full);
        }

        let head = ring.head;
        ring.storage[head] = entry;
        ring.head = next;
        Ok(())
    }

    /// Pop the oldest entry, failing with [`BufferError::Empty`] if none is unread
    pub fn pop(&self) -> Result<T, BufferError> {
        let mut ring = self.lock();

        if ring.head == ring.tail {
            return Err(BufferError::Empty);
        }

        // The vacated slot keeps its value until a later push overwrites it
        let entry = ring.storage[ring.tail];
        ring.tail = (ring.tail + 1) % N;
        Ok(entry)
    }

    fn lock(&self) -> MutexGuard<'_, Ring<T, N>> {
        // Cursors are only moved after the slot copy completes, so a
        // poisoned guard still holds a consistent ring.
        self.ring.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[cfg(test)]
    fn cursors(&self) -> (usize, usize) {
        let ring = self.lock();
        (ring.head, ring.tail)
    }
}

impl<T: Copy + Default, const N: usize> Default for RingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Entry, SensorKind};
    use proptest::prelude::*;
    use std::collections::VecDeque;

    #[test]
    fn test_capacity_bound() {
        let buffer: RingBuffer<u32, 8> = RingBuffer::new();

        for i in 0..7 {
            assert_eq!(buffer.push(i), Ok(()));
        }
        let before = buffer.cursors();

        assert_eq!(buffer.push(99), Err(BufferError::Full));
        assert_eq!(buffer.cursors(), before);
        assert_eq!(RingBuffer::<u32, 8>::USABLE_CAPACITY, 7);
        assert_eq!(RingBuffer::<u32, 8>::SLOTS, 8);
    }

    #[test]
    fn test_pop_empty() {
        let buffer: RingBuffer<Entry, 4> = RingBuffer::new();

        assert_eq!(buffer.pop(), Err(BufferError::Empty));
        assert_eq!(buffer.cursors(), (0, 0));
    }

    #[test]
    fn test_fifo_order() {
        let buffer: RingBuffer<Entry, 4> = RingBuffer::new();
        let a = Entry::temperature(1);
        let b = Entry::pressure(2);
        let c = Entry::camera(3);

        buffer.push(a).unwrap();
        buffer.push(b).unwrap();
        buffer.push(c).unwrap();

        assert_eq!(buffer.pop(), Ok(a));
        assert_eq!(buffer.pop(), Ok(b));
        assert_eq!(buffer.pop(), Ok(c));
    }

    #[test]
    fn test_wrap_around() {
        let buffer: RingBuffer<u32, 4> = RingBuffer::new();

        for i in 0..3 {
            buffer.push(i).unwrap();
        }
        for i in 0..3 {
            assert_eq!(buffer.pop(), Ok(i));
        }
        assert_eq!(buffer.cursors(), (3, 3));

        // These writes land in slots 3, 0, 1
        for i in 10..13 {
            assert_eq!(buffer.push(i), Ok(()));
        }
        assert_eq!(buffer.cursors(), (2, 3));
        assert_eq!(buffer.push(13), Err(BufferError::Full));

        for i in 10..13 {
            assert_eq!(buffer.pop(), Ok(i));
        }
        assert_eq!(buffer.pop(), Err(BufferError::Empty));
    }

    #[test]
    fn test_two_slot_buffer_holds_one() {
        let buffer: RingBuffer<u8, 2> = RingBuffer::default();

        assert_eq!(buffer.push(1), Ok(()));
        assert_eq!(buffer.push(2), Err(BufferError::Full));
        assert_eq!(buffer.pop(), Ok(1));
        assert_eq!(buffer.push(2), Ok(()));
        assert_eq!(buffer.pop(), Ok(2));
        assert_eq!(buffer.pop(), Err(BufferError::Empty));
    }

    #[test]
    fn test_sensor_log_sequence() {
        let buffer: RingBuffer<Entry, 4> = RingBuffer::new();

        assert!(buffer.push(Entry::temperature(55)).is_ok());
        assert!(buffer.push(Entry::temperature(32)).is_ok());
        assert!(buffer.push(Entry::pressure(31)).is_ok());
        assert_eq!(buffer.push(Entry::pressure(8)), Err(BufferError::Full));

        let first = buffer.pop().unwrap();
        assert_eq!((first.kind(), first.value()), (SensorKind::Temperature, 55));
        let second = buffer.pop().unwrap();
        assert_eq!((second.kind(), second.value()), (SensorKind::Temperature, 32));
        let third = buffer.pop().unwrap();
        assert_eq!((third.kind(), third.value()), (SensorKind::Pressure, 31));
        assert_eq!(buffer.pop(), Err(BufferError::Empty));

        assert!(buffer.push(Entry::pressure(8)).is_ok());
        assert_eq!(buffer.pop(), Ok(Entry::pressure(8)));
    }

    #[derive(Debug, Clone)]
    enum Op {
        Push(u32),
        Pop,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![any::<u32>().prop_map(Op::Push), Just(Op::Pop)]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_matches_bounded_queue(ops in prop::collection::vec(op(), 0..300)) {
            let buffer: RingBuffer<u32, 5> = RingBuffer::new();
            let mut model = VecDeque::new();

            for op in ops {
                match op {
                    Op::Push(v) => {
                        let result = buffer.push(v);
                        if model.len() == 4 {
                            prop_assert_eq!(result, Err(BufferError::Full));
                        } else {
                            prop_assert_eq!(result, Ok(()));
                            model.push_back(v);
                        }
                    }
                    Op::Pop => {
                        let expected = model.pop_front().ok_or(BufferError::Empty);
                        prop_assert_eq!(buffer.pop(), expected);
                    }
                }

                let (head, tail) = buffer.cursors();
                prop_assert!(head < 5 && tail < 5);
                prop_assert_eq!((head + 5 - tail) % 5, model.len());
            }
        }
    }
}
