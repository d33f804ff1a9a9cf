//! `RingBuffer<T>` — a fixed-capacity buffer that overwrites its oldest
//! element when full.
//!
//! Used for rolling-window statistics (e.g. smoothing the instantaneous FPS
//! over the last N frames) where both the O(1) push and the bounded memory
//! matter more than random removal.

/// A fixed-capacity circular buffer.
///
/// Once `capacity` elements have been pushed, each further push evicts the
/// oldest element.  Iteration runs oldest → newest.
pub struct RingBuffer<T> {
    buf: Vec<T>,
    /// Index of the oldest element once the buffer has wrapped.
    head: usize,
    capacity: usize,
}

impl<T> RingBuffer<T> {
    /// Create an empty buffer.
    ///
    /// # Panics
    /// Panics if `capacity < 2` — a one-slot ring cannot distinguish first
    /// from last.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity >= 2, "ring buffer capacity must be at least 2");
        Self { buf: Vec::with_capacity(capacity), head: 0, capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.buf.len() == self.capacity
    }

    /// Append `item`, evicting the oldest element if the buffer is full.
    pub fn push(&mut self, item: T) {
        if self.is_full() {
            self.buf[self.head] = item;
            self.head = (self.head + 1) % self.capacity;
        } else {
            self.buf.push(item);
        }
    }

    /// The oldest element still in the buffer.
    pub fn first(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.buf.get(self.head)
    }

    /// The most recently pushed element.
    pub fn last(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        let idx = (self.head + self.buf.len() - 1) % self.buf.len();
        self.buf.get(idx)
    }

    /// Element `index` positions after the oldest (0 = oldest).
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.buf.len() {
            return None;
        }
        self.buf.get((self.head + index) % self.buf.len())
    }

    /// Iterate oldest → newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let (wrapped, oldest_run) = self.buf.split_at(self.head);
        oldest_run.iter().chain(wrapped.iter())
    }
}

impl<T: Clone> RingBuffer<T> {
    /// Copy the contents out, oldest first.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}
