//! Prefix-tree dictionary.
//!
//! Words are stored one letter per level in a tree of boxed nodes, each with
//! one child slot per letter of the alphabet. A single walk down the tree
//! classifies a string as a word or not, and as extendable or not.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::WheelError;
use crate::status::SearchStatus;
use crate::{byte_lines, is_valid_word, letter_index, LETTERS_IN_ALPHABET, MIN_WORD_LENGTH};

#[derive(Debug, Default)]
struct Node {
    children: [Option<Box<Node>>; LETTERS_IN_ALPHABET],
    /// Number of occupied child slots
    child_count: u8,
    is_word: bool,
}

impl Node {
    /// A node is terminal when no word continues past it.
    fn is_terminal(&self) -> bool {
        self.child_count == 0
    }

    fn child(&self, index: usize) -> Option<&Node> {
        self.children[index].as_deref()
    }

    fn child_or_insert(&mut self, index: usize) -> &mut Node {
        if self.children[index].is_none() {
            self.child_count += 1;
        }
        self.children[index].get_or_insert_with(Box::default)
    }
}

/// A dictionary of words over the 26 Latin letters, case-insensitive.
#[derive(Debug, Default)]
pub struct Dictionary {
    root: Node,
    word_count: usize,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from an iterator of words.
    pub fn from_words<I, S>(words: I) -> Result<Self, WheelError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::new();
        for word in words {
            dictionary.insert(word.as_ref())?;
        }
        Ok(dictionary)
    }

    /// Read one word per line, keeping only words whose length lies in
    /// `2..=maximum_word_size`. Lines outside that range are skipped without
    /// being validated, so they may hold any bytes.
    pub fn from_reader<R: BufRead>(reader: R, maximum_word_size: usize) -> Result<Self, WheelError> {
        let mut dictionary = Self::new();
        let mut skipped = 0usize;

        for (number, word) in byte_lines(reader).enumerate() {
            let word = word?;
            if word.len() < MIN_WORD_LENGTH || word.len() > maximum_word_size {
                skipped += 1;
                continue;
            }
            if !is_valid_word(&word) {
                return Err(WheelError::InvalidCharacter {
                    text: String::from_utf8_lossy(&word).into_owned(),
                    line: Some(number + 1),
                });
            }
            dictionary.insert_letters(&word);
        }

        debug!(
            words = dictionary.word_count,
            skipped, maximum_word_size, "dictionary loaded"
        );
        Ok(dictionary)
    }

    /// Open a dictionary file and load it with [`Dictionary::from_reader`].
    pub fn from_path(path: impl AsRef<Path>, maximum_word_size: usize) -> Result<Self, WheelError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|_| WheelError::FileAccess {
            paths: vec![path.to_path_buf()],
        })?;
        Self::from_reader(BufReader::new(file), maximum_word_size)
    }

    /// Insert a word.
    ///
    /// The whole word is checked before the tree is touched, so a word with a
    /// character outside the alphabet fails with
    /// [`WheelError::InvalidCharacter`] and leaves the dictionary unchanged.
    pub fn insert(&mut self, word: &str) -> Result<(), WheelError> {
        if !is_valid_word(word) {
            return Err(WheelError::InvalidCharacter {
                text: word.to_string(),
                line: None,
            });
        }

        self.insert_letters(word.as_bytes());
        Ok(())
    }

    /// Insert a word already known to hold only ASCII letters.
    fn insert_letters(&mut self, word: &[u8]) {
        let mut node = &mut self.root;
        for &byte in word {
            node = node.child_or_insert(letter_index(byte));
        }

        if !node.is_word && !word.is_empty() {
            node.is_word = true;
            self.word_count += 1;
        }
    }

    /// Classify a string against the dictionary.
    ///
    /// Strings with characters outside the alphabet are a [`SearchStatus::Miss`].
    pub fn find(&self, word: &str) -> SearchStatus {
        if !is_valid_word(word) {
            return SearchStatus::Miss;
        }

        let mut node = &self.root;
        for byte in word.bytes() {
            match node.child(letter_index(byte)) {
                Some(child) => node = child,
                None => return SearchStatus::Miss,
            }
        }

        if node.is_terminal() {
            // An empty dictionary has a terminal root, which is not a word.
            if word.is_empty() {
                SearchStatus::Miss
            } else {
                SearchStatus::HitTerminal
            }
        } else if node.is_word {
            SearchStatus::HitParent
        } else {
            SearchStatus::MissParent
        }
    }

    /// True if `word` was inserted.
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_hit()
    }

    /// Number of distinct words inserted
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}
