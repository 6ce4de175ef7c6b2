//! The playlist queue: pool indices in playback order.
//!
//! Playback is circular. `rotate` moves the head to the tail, so once the
//! queue is filled its length never changes.

use std::collections::VecDeque;

use rand::Rng;
use rand::seq::SliceRandom;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Queue {
    entries: VecDeque<usize>,
}

impl Queue {
    /// A random permutation of `0..len`.
    pub fn shuffled<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..len).collect();
        order.shuffle(rng);
        Self {
            entries: order.into(),
        }
    }

    /// Move the head to the tail and return it. `None` on an empty queue.
    pub fn rotate(&mut self) -> Option<usize> {
        let head = self.entries.pop_front()?;
        self.entries.push_back(head);
        Some(head)
    }

    /// The first `n` entries, in order.
    pub fn upcoming(&self, n: usize) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().copied().take(n)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().copied()
    }
}

impl FromIterator<usize> for Queue {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
