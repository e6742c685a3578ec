//! Core trait and key-indexing helpers for digitsort.
//!
//! This module defines:
//! - [`KeyAccessor`]: The main trait users implement to sort their custom types.
//! - The sentinel-shifted index conversions used by the count table.

use std::collections::VecDeque;

/// Number of distinct byte values a digit position can take.
///
/// The count table additionally reserves one slot for the end-of-key sentinel
/// and one trailing slot for the cumulative total, so its width is `RADIX + 2`.
pub const RADIX: usize = 256;

/// Maps a digit to its shifted key: the sentinel (`None`) becomes `0`, a real
/// byte `b` becomes `b + 1`. Range: `0..=RADIX`.
#[inline]
pub(crate) fn shifted_key(digit: Option<u8>) -> usize {
    match digit {
        None => 0,
        Some(byte) => byte as usize + 1,
    }
}

/// Maps a shifted key to the count-table slot its frequency is tallied in.
///
/// The extra `+ 1` leaves `count[0]` as the zero anchor of the prefix sum, so
/// after the cumulative pass `count[k]` is the insertion offset for shifted
/// key `k`. Range: `1..=RADIX + 1`.
#[inline]
pub(crate) fn table_slot(shifted: usize) -> usize {
    shifted + 1
}

/// A trait for accessing key data from a collection without copying.
///
/// This trait allows [`DigitSorter`](crate::DigitSorter) to sort any
/// collection where elements can be represented as byte slices (e.g.,
/// `Vec<String>`, `Vec<Vec<u8>>`, or custom types like Arrow arrays).
///
/// # Examples
///
/// Implementing for a custom struct:
///
/// ```
/// use digitsort::core::KeyAccessor;
///
/// struct MyCollection {
///     data: Vec<String>,
/// }
///
/// impl KeyAccessor for MyCollection {
///     fn get_key(&self, index: usize) -> &[u8] {
///         self.data[index].as_bytes()
///     }
///
///     fn len(&self) -> usize {
///         self.data.len()
///     }
/// }
/// ```
pub trait KeyAccessor {
    /// Returns a byte slice representing the key at the given index.
    fn get_key(&self, index: usize) -> &[u8];

    /// Returns the number of items in the collection.
    fn len(&self) -> usize;

    /// Returns `true` if the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Blanket implementation for indexable slices of byte-ref types.
impl<T: AsRef<[u8]>> KeyAccessor for [T] {
    fn get_key(&self, index: usize) -> &[u8] {
        self[index].as_ref()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

// Explicit Vec impl to improve ergonomics (avoiding .as_slice()).
impl<T: AsRef<[u8]>> KeyAccessor for Vec<T> {
    fn get_key(&self, index: usize) -> &[u8] {
        self[index].as_ref()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

// Implementation for VecDeque.
// Provides O(1) random access, so it is suitable for digit sorting.
impl<T: AsRef<[u8]>> KeyAccessor for VecDeque<T> {
    fn get_key(&self, index: usize) -> &[u8] {
        self[index].as_ref()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

// Implementation for sorting characters in a string (by byte).
// Note: This returns INDICES of bytes.
// Warning: Sorting UTF-8 bytes arbitrarily might produce invalid UTF-8 if reassembled blindly.
// But for searching/indexing it is valid.
impl KeyAccessor for str {
    fn get_key(&self, index: usize) -> &[u8] {
        std::slice::from_ref(&self.as_bytes()[index])
    }

    fn len(&self) -> usize {
        self.len()
    }
}

impl KeyAccessor for String {
    fn get_key(&self, index: usize) -> &[u8] {
        std::slice::from_ref(&self.as_bytes()[index])
    }

    fn len(&self) -> usize {
        self.len()
    }
}
