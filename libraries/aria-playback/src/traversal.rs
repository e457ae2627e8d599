//! Queue traversal order
//!
//! Sequential traversal walks queue indices with modular wraparound.
//! Shuffle builds a Fisher-Yates permutation of the indices and walks that
//! instead; the queue elements themselves are never reordered, so indices
//! stay stable for callers.

use rand::seq::SliceRandom;
use rand::thread_rng;

/// Order in which queue indices are visited
#[derive(Debug, Clone, Default)]
pub struct Traversal {
    /// Shuffled visiting order; `None` means sequential
    order: Option<Vec<usize>>,
}

impl Traversal {
    /// Sequential traversal (queue order)
    pub fn sequential() -> Self {
        Self { order: None }
    }

    /// Fisher-Yates shuffled traversal over `len` indices
    ///
    /// When `start` is given, that index is moved to the front so the
    /// currently bound item keeps its place in the new order.
    pub fn shuffled(len: usize, start: Option<usize>) -> Self {
        let mut order: Vec<usize> = (0..len).collect();
        order.shuffle(&mut thread_rng());

        if let Some(start) = start {
            if let Some(pos) = order.iter().position(|&i| i == start) {
                order.swap(0, pos);
            }
        }

        Self { order: Some(order) }
    }

    /// Whether a shuffled order is active
    pub fn is_shuffled(&self) -> bool {
        self.order.is_some()
    }

    /// Index visited after `current`, with wraparound
    pub fn next(&self, current: usize, len: usize) -> usize {
        debug_assert!(len > 0);
        match &self.order {
            None => (current + 1) % len,
            Some(order) => {
                let pos = order.iter().position(|&i| i == current).unwrap_or(0);
                order[(pos + 1) % order.len()]
            }
        }
    }

    /// Index visited before `current`, with wraparound
    pub fn previous(&self, current: usize, len: usize) -> usize {
        debug_assert!(len > 0);
        match &self.order {
            None => (current + len - 1) % len,
            Some(order) => {
                let pos = order.iter().position(|&i| i == current).unwrap_or(0);
                order[(pos + order.len() - 1) % order.len()]
            }
        }
    }

    /// Whether `current` is the final index of one traversal cycle
    pub fn is_last(&self, current: usize, len: usize) -> bool {
        if len == 0 {
            return false;
        }
        match &self.order {
            None => current == len - 1,
            Some(order) => order.last() == Some(&current),
        }
    }

    /// First index of a traversal cycle
    pub fn first(&self) -> usize {
        match &self.order {
            None => 0,
            Some(order) => order.first().copied().unwrap_or(0),
        }
    }

    /// Account for an index appended to the queue
    pub fn push(&mut self) {
        if let Some(order) = &mut self.order {
            order.push(order.len());
        }
    }

    /// Account for an index removed from the queue
    ///
    /// Drops the removed index from the order and shifts the higher ones
    /// down, mirroring what removal does to queue indices.
    pub fn remove(&mut self, removed: usize) {
        if let Some(order) = &mut self.order {
            order.retain(|&i| i != removed);
            for index in order.iter_mut() {
                if *index > removed {
                    *index -= 1;
                }
            }
        }
    }

    /// The full visiting order for `len` indices
    pub fn cycle(&self, len: usize) -> Vec<usize> {
        match &self.order {
            None => (0..len).collect(),
            Some(order) => order.clone(),
        }
    }
}
