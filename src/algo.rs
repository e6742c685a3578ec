//! Single-digit stable counting sort and its sortedness verifier.
//!
//! This module implements key-indexed counting over one character position:
//! - **Frequency counting**: histogram of sentinel-shifted keys at position `d`.
//! - **Cumulative transform**: prefix sums turn counts into insertion offsets.
//! - **Stable distribution**: elements land in an auxiliary permutation in
//!   original order, which preserves the relative order of equal keys.
//!
//! The main entry point is [`DigitSorter`].

use crate::core::{KeyAccessor, RADIX, shifted_key, table_slot};
use cuneiform::cuneiform;

// Cache-aligned count table: RADIX shifted keys, one sentinel slot, one
// trailing slot for the cumulative total.
#[cuneiform]
struct CountTable {
    slots: [usize; RADIX + 2],
}

/// Stable single-digit counting sorter with per-instance access accounting.
///
/// Every character access performed by [`sort_by_position`] and
/// [`is_sorted_by_position`], including accesses that resolve to the
/// end-of-key sentinel, bumps a counter scoped to this instance. The counter
/// accumulates for the sorter's lifetime and is readable via [`accesses`].
///
/// A single sort of `n >= 2` elements performs exactly `2n` accesses (`n`
/// while counting frequencies, `n` while distributing); the verifier performs
/// at most `2 * (n - 1)`, fewer when it finds a violation early.
///
/// [`sort_by_position`]: DigitSorter::sort_by_position
/// [`is_sorted_by_position`]: DigitSorter::is_sorted_by_position
/// [`accesses`]: DigitSorter::accesses
///
/// # Examples
///
/// ```
/// use digitsort::DigitSorter;
///
/// let mut sorter = DigitSorter::new();
/// let mut data = vec!["bc", "ab", "b", "ba"];
///
/// sorter.sort_by_position_mut(&mut data, 0);
///
/// // "bc", "b" and "ba" all share the key 'b' and keep their input order.
/// assert_eq!(data, vec!["ab", "bc", "b", "ba"]);
/// assert_eq!(sorter.accesses(), 8);
/// ```
#[derive(Debug, Default)]
pub struct DigitSorter {
    accesses: u64,
}

impl DigitSorter {
    /// Creates a sorter with a zeroed access counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cumulative number of character accesses performed by this
    /// instance across all calls.
    pub fn accesses(&self) -> u64 {
        self.accesses
    }

    /// Resets the access counter to zero.
    ///
    /// The counter never resets on its own; this is an explicit escape hatch
    /// for callers that want per-call accounting.
    pub fn reset_accesses(&mut self) {
        self.accesses = 0;
    }

    /// Returns the digit of the key at `index`: the byte at position `d`, or
    /// `None` when the key is shorter than `d + 1`. Counts as one access
    /// either way.
    ///
    /// `Option<u8>`'s derived ordering puts `None` before every byte, which is
    /// exactly the sentinel ordering the sort and verifier need.
    fn char_at<T: KeyAccessor + ?Sized>(
        &mut self,
        provider: &T,
        index: usize,
        d: usize,
    ) -> Option<u8> {
        self.accesses += 1;
        provider.get_key(index).get(d).copied()
    }

    /// Performs an index-based stable sort of the collection by the character
    /// at position `d`.
    ///
    /// This function does not modify the input collection. Instead, it returns
    /// a `Vec<usize>` containing the indices that order the collection
    /// non-decreasingly by the digit at `d`, with keys shorter than `d + 1`
    /// ordered first; ties keep their input order.
    ///
    /// Runs in `O(n + R)` time with `O(n + R)` auxiliary space and performs
    /// exactly `2n` character accesses for `n >= 2` (none for smaller inputs,
    /// which are returned as the identity permutation without touching the
    /// count table).
    ///
    /// # Examples
    ///
    /// ```
    /// use digitsort::DigitSorter;
    ///
    /// let data = vec!["bc", "ab", "b", "ba"];
    /// let indices = DigitSorter::new().sort_by_position(&data, 0);
    ///
    /// assert_eq!(indices, vec![1, 0, 2, 3]); // ab, then bc/b/ba in input order
    /// ```
    pub fn sort_by_position<T: KeyAccessor + ?Sized>(
        &mut self,
        provider: &T,
        d: usize,
    ) -> Vec<usize> {
        let n = provider.len();
        if n <= 1 {
            return (0..n).collect();
        }

        let mut table = CountTable {
            slots: [0; RADIX + 2],
        };
        let counts = &mut table.slots;

        // 1. Count frequencies of each shifted key.
        for index in 0..n {
            let key = shifted_key(self.char_at(provider, index, d));
            counts[table_slot(key)] += 1;
        }

        // 2. Prefix sums: counts[k] becomes the insertion offset for shifted
        // key k. counts[0] stays 0 as the anchor.
        for r in 0..=RADIX {
            counts[r + 1] += counts[r];
        }

        // 3. Distribute indices in input order, advancing each key's offset
        // as it is consumed. Input order plus current-offset writes is what
        // makes the sort stable.
        let mut aux = vec![0usize; n];
        for index in 0..n {
            let key = shifted_key(self.char_at(provider, index, d));
            aux[counts[key]] = index;
            counts[key] += 1;
        }

        aux
    }

    /// Sorts a mutable slice in place, stably, by the character at position
    /// `d`.
    ///
    /// This is a convenience wrapper for [`sort_by_position`] which computes
    /// the stable permutation and then applies it to the slice, leaving the
    /// collection reordered with its length and contents otherwise untouched.
    ///
    /// [`sort_by_position`]: DigitSorter::sort_by_position
    ///
    /// # Examples
    ///
    /// ```
    /// use digitsort::DigitSorter;
    ///
    /// let mut sorter = DigitSorter::new();
    /// let mut data = vec!["x", "xy", "xz"];
    ///
    /// sorter.sort_by_position_mut(&mut data, 1);
    ///
    /// // "x" has no character at position 1 and sorts first.
    /// assert_eq!(data, vec!["x", "xy", "xz"]);
    /// ```
    pub fn sort_by_position_mut<T: AsRef<[u8]> + Clone>(&mut self, data: &mut [T], d: usize) {
        let indices = self.sort_by_position(&*data, d);
        apply_permutation(data, indices);
    }

    /// Checks whether the collection is ordered by the character at position
    /// `d`, sentinel included (keys shorter than `d + 1` order first).
    ///
    /// Returns `true` trivially for collections of length 0 or 1. Does not
    /// mutate the collection; performs two character accesses per adjacent
    /// pair and stops at the first violation.
    ///
    /// # Examples
    ///
    /// ```
    /// use digitsort::DigitSorter;
    ///
    /// let mut sorter = DigitSorter::new();
    /// let data = vec!["x", "xy", "xz"];
    /// assert!(sorter.is_sorted_by_position(&data, 1));
    ///
    /// let unsorted = vec!["b", "a"];
    /// assert!(!sorter.is_sorted_by_position(&unsorted, 0));
    /// ```
    pub fn is_sorted_by_position<T: KeyAccessor + ?Sized>(
        &mut self,
        provider: &T,
        d: usize,
    ) -> bool {
        for i in 1..provider.len() {
            let current = self.char_at(provider, i, d);
            let previous = self.char_at(provider, i - 1, d);
            if current < previous {
                return false;
            }
        }
        true
    }
}

fn apply_permutation<T: Clone>(data: &mut [T], mut indices: Vec<usize>) {
    for i in 0..data.len() {
        let mut current = i;
        while indices[current] != i {
            let next = indices[current];
            data.swap(current, next);
            indices[current] = current; // Mark as visited/placed
            current = next;
        }
        indices[current] = current;
    }
}
