//! # Digitsort
//!
//! `digitsort` is a stable, single-pass counting sort for strings and byte
//! arrays keyed on the character at a fixed position `d`, the distribution
//! primitive at the heart of MSD (most-significant-digit) radix sorting.
//!
//! It implements classic key-indexed counting: tally the frequency of every
//! key, turn the tallies into insertion offsets with a prefix sum, then
//! distribute elements to their final positions in one stable pass. Keys
//! shorter than `d + 1` yield an end-of-key sentinel that orders before every
//! real byte, so shorter strings sort first among equal prefixes.
//!
//! ## Key Features
//!
//! - **Stable**: elements with equal keys at position `d` keep their relative
//!   input order, the property MSD recursion depends on.
//! - **Linear**: one sort is `O(n + R)` time and auxiliary space (`R = 256`),
//!   with exactly `2n` character accesses.
//! - **Zero-Copy abstractions**: the [`KeyAccessor`] trait allows sorting
//!   arbitrary data structures (e.g., Arrow arrays, `Vec<Vec<u8>>`) without
//!   copying the underlying data.
//! - **Access accounting**: every character access is tallied per
//!   [`DigitSorter`] instance, making access-complexity claims testable.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! For standard collections like `Vec<String>` or `Vec<Vec<u8>>`, use
//! [`DigitSorter::sort_by_position_mut`] (in-place) or
//! [`DigitSorter::sort_by_position`] (index-based).
//!
//! ```rust
//! use digitsort::DigitSorter;
//!
//! let mut sorter = DigitSorter::new();
//! let mut data = vec!["banana", "apple", "cherry", "date"];
//!
//! sorter.sort_by_position_mut(&mut data, 0);
//!
//! assert_eq!(data, vec!["apple", "banana", "cherry", "date"]);
//! assert!(sorter.is_sorted_by_position(&data, 0));
//! ```
//!
//! ### Custom Types
//!
//! To sort custom types or complex data structures without creating
//! intermediate strings, implement the [`KeyAccessor`] trait.
//!
//! ```rust
//! use digitsort::{DigitSorter, KeyAccessor};
//!
//! struct User {
//!     username: String,
//! }
//!
//! // Wrapper struct to avoid orphan rule violation (impl foreign trait on foreign type).
//! struct Users(Vec<User>);
//!
//! impl KeyAccessor for Users {
//!     fn get_key(&self, index: usize) -> &[u8] {
//!         self.0[index].username.as_bytes()
//!     }
//!
//!     fn len(&self) -> usize {
//!         self.0.len()
//!     }
//! }
//!
//! let users = Users(vec![
//!     User { username: "Alice".to_string() },
//!     User { username: "Bob".to_string() },
//! ]);
//!
//! // Returns indices: [0, 1] (Alice, Bob)
//! let indices = DigitSorter::new().sort_by_position(&users, 0);
//! assert_eq!(indices, vec![0, 1]);
//! ```
//!
//! ## Scope
//!
//! This crate is the single-digit pass only: no recursion into equal-key
//! sub-ranges, no insertion-sort cutover, no three-way partitioning. A full
//! MSD sort is obtained by calling [`DigitSorter::sort_by_position_mut`] at
//! increasing `d` over successively narrower equal-key sub-ranges; that
//! driver is left to the caller.
//!
//! ## Performance Characteristics
//!
//! - **Time**: O(n + R) per call, independent of key length.
//! - **Memory Overhead**: one `R + 2` count table plus an `n`-entry
//!   permutation buffer, both owned by the call and discarded afterwards.

pub mod algo;
pub mod core;
pub use crate::algo::DigitSorter;
pub use crate::core::{KeyAccessor, RADIX};

pub mod prelude {
    pub use crate::algo::DigitSorter;
    pub use crate::core::{KeyAccessor, RADIX};
}
