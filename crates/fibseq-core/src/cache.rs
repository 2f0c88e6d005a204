//! Process-wide memoized Fibonacci sequence cache.
//!
//! The cache owns the single source of truth: an append-only list of
//! Fibonacci values seeded `[0, 1]` and extended one element at a time by
//! summing the last two entries. One process-wide instance is created
//! lazily through [`SequenceCache::instance`]; private caches can be
//! constructed for embedding and tests.

use std::sync::OnceLock;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use parking_lot::RwLock;

/// Append-only cache of computed Fibonacci values.
///
/// The storage sits behind a read-write lock: `advance` reads the tail and
/// appends under the write lock, so concurrent producers cannot corrupt or
/// duplicate entries, and views read under the read lock. The sequence is
/// never truncated or reordered.
pub struct SequenceCache {
    values: RwLock<Vec<BigUint>>,
}

impl SequenceCache {
    /// Create a private cache seeded with `[0, 1]`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: RwLock::new(vec![BigUint::zero(), BigUint::one()]),
        }
    }

    /// The process-wide shared cache, created on first access.
    ///
    /// Exactly one instance is constructed even under concurrent first-time
    /// access; every caller observes the same instance for the lifetime of
    /// the process. Never fails.
    #[must_use]
    pub fn instance() -> &'static SequenceCache {
        static INSTANCE: OnceLock<SequenceCache> = OnceLock::new();
        INSTANCE.get_or_init(SequenceCache::new)
    }

    /// Append the next value, the sum of the last two entries.
    pub fn advance(&self) {
        let mut values = self.values.write();
        let len = values.len();
        let next = &values[len - 1] + &values[len - 2];
        values.push(next);
    }

    /// Append the next value and return it.
    pub fn advance_and_get_last(&self) -> BigUint {
        let mut values = self.values.write();
        let len = values.len();
        let next = &values[len - 1] + &values[len - 2];
        values.push(next.clone());
        next
    }

    /// The most recently computed value.
    #[must_use]
    pub fn last(&self) -> BigUint {
        let values = self.values.read();
        values[values.len() - 1].clone()
    }

    /// The value at index `i`, if it has been computed.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<BigUint> {
        self.values.read().get(i).cloned()
    }

    /// Number of values computed so far (at least 2).
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    /// Whether the cache holds no values. Never true for a seeded cache.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }

    /// A live read-only view over the current contents.
    ///
    /// The view shares the cache's storage rather than copying it:
    /// re-querying observes values appended after the view was obtained.
    #[must_use]
    pub fn view(&self) -> SequenceView<'_> {
        SequenceView { cache: self }
    }

    fn snapshot(&self) -> Vec<BigUint> {
        self.values.read().clone()
    }
}

impl Default for SequenceCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Live read-only view over a [`SequenceCache`].
#[derive(Clone, Copy)]
pub struct SequenceView<'a> {
    cache: &'a SequenceCache,
}

impl<'a> SequenceView<'a> {
    /// Number of values visible right now.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether the underlying cache holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// The tail of the sequence as of this call.
    #[must_use]
    pub fn latest(&self) -> BigUint {
        self.cache.last()
    }

    /// The value at index `i`, if it has been computed.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<BigUint> {
        self.cache.get(i)
    }

    /// Copy out the current contents.
    #[must_use]
    pub fn to_vec(&self) -> Vec<BigUint> {
        self.cache.snapshot()
    }

    /// Iterate the values computed so far.
    ///
    /// The iterator locks per element, so values appended while iterating
    /// are also yielded.
    #[must_use]
    pub fn iter(&self) -> SequenceIter<'a> {
        SequenceIter {
            cache: self.cache,
            index: 0,
        }
    }
}

impl<'a> IntoIterator for SequenceView<'a> {
    type Item = BigUint;
    type IntoIter = SequenceIter<'a>;

    fn into_iter(self) -> SequenceIter<'a> {
        self.iter()
    }
}

impl<'a> IntoIterator for &SequenceView<'a> {
    type Item = BigUint;
    type IntoIter = SequenceIter<'a>;

    fn into_iter(self) -> SequenceIter<'a> {
        self.iter()
    }
}

/// Per-element iterator over a [`SequenceView`].
pub struct SequenceIter<'a> {
    cache: &'a SequenceCache,
    index: usize,
}

impl Iterator for SequenceIter<'_> {
    type Item = BigUint;

    fn next(&mut self) -> Option<BigUint> {
        let value = self.cache.get(self.index)?;
        self.index += 1;
        Some(value)
    }
}
