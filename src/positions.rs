// src/positions.rs
use std::fmt;

use crate::POSITION_LIST_INITIAL_CAPACITY;

/// Append-only list of sequence offsets for one triplet.
///
/// Storage is a single contiguous buffer. It starts with
/// `POSITION_LIST_INITIAL_CAPACITY` slots and doubles exactly when a push
/// would overflow it. Nothing is ever removed, so it never shrinks.
#[derive(Debug, Clone)]
pub struct PositionList {
    slots: Vec<usize>,
    capacity: usize,
}

impl PositionList {
    pub fn new() -> Self {
        Self {
            slots: Vec::with_capacity(POSITION_LIST_INITIAL_CAPACITY),
            capacity: POSITION_LIST_INITIAL_CAPACITY,
        }
    }

    pub fn with_first(position: usize) -> Self {
        let mut list = Self::new();
        list.push(position);
        list
    }

    pub fn push(&mut self, position: usize) {
        if self.slots.len() == self.capacity {
            // Grow by doubling; reserve_exact keeps the buffer at the tracked size
            self.slots.reserve_exact(self.capacity);
            self.capacity *= 2;
        }
        self.slots.push(position);
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Logical capacity (initial size times a power of two).
    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.slots
    }

    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.slots.iter()
    }
}

impl Default for PositionList {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders as `[p1, p2, ...]`, or `[]` when empty.
impl fmt::Display for PositionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, pos) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", pos)?;
        }
        write!(f, "]")
    }
}
