//! # Wheel Words
//!
//! Finds every dictionary word that can be read off a grid of rotating
//! lettered wheels, taking one letter from each of a contiguous run of wheels,
//! top to bottom.
//!
//! The search is a pruned depth-first walk over the grid. A prefix-tree
//! dictionary classifies each candidate, and the classification alone decides
//! whether the walk extends into the next wheel, rotates the last wheel, or
//! backtracks.

use std::io::{self, BufRead};

pub mod dictionary;
pub mod error;
pub mod solver;
pub mod status;
pub mod wheels;

pub use dictionary::Dictionary;
pub use error::WheelError;
pub use solver::{search_with, SearchReport, StatusCounts, WheelSolver};
pub use status::SearchStatus;
pub use wheels::{Cursor, Position, Slot, WheelGrid, Wheels};

/// Number of letters in the Latin alphabet
pub const LETTERS_IN_ALPHABET: usize = 26;

/// Shortest word the wheels can spell
pub const MIN_WORD_LENGTH: usize = 2;

/// True if every byte is in `[a-zA-Z]`.
pub fn is_valid_word(word: impl AsRef<[u8]>) -> bool {
    word.as_ref().iter().all(u8::is_ascii_alphabetic)
}

/// Lines of `reader` as raw bytes with surrounding ASCII whitespace
/// (including `\r`) removed. Input need not be UTF-8.
pub(crate) fn byte_lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<Vec<u8>>> {
    reader
        .split(b'\n')
        .map(|line| line.map(|bytes| trim_ascii(&bytes).to_vec()))
}

fn trim_ascii(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    &bytes[start..end]
}

/// Position of an ASCII letter in the alphabet, A = 0 ... Z = 25.
pub(crate) fn letter_index(byte: u8) -> usize {
    debug_assert!(byte.is_ascii_alphabetic());
    (byte.to_ascii_uppercase() - b'A') as usize
}
