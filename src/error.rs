//! Errors raised while building a wheel grid or a dictionary.
//!
//! Every error is detected before a search starts; lookups never fail.

use std::path::PathBuf;

/// Errors for loading inputs and constructing the grid or dictionary.
#[derive(Debug, thiserror::Error)]
pub enum WheelError {
    #[error("usage: {0}")]
    Usage(String),

    #[error("unable to locate / access {}", describe_paths(.paths))]
    FileAccess { paths: Vec<PathBuf> },

    #[error("unable to read the {field} as an integer, value: {value:?}")]
    MalformedCount { field: &'static str, value: String },

    #[error(
        "not enough wheels or letters: got {wheels} wheels of {letters} letters, \
         need at least 1 wheel of at least 2 letters"
    )]
    InvalidGridDimensions { wheels: i64, letters: i64 },

    #[error("{} contains a character outside [a-zA-Z]: {text:?}", describe_line(.line))]
    InvalidCharacter { text: String, line: Option<usize> },

    #[error("wheel {wheel} has {found} letters, expected {expected}")]
    WheelLength {
        wheel: usize,
        expected: usize,
        found: usize,
    },

    #[error("expected {expected} wheels, found {found}")]
    WheelCount { expected: usize, found: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn describe_paths(paths: &[PathBuf]) -> String {
    let noun = if paths.len() == 1 { "file" } else { "files" };
    let joined: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
    format!("the {} with path: {}", noun, joined.join(" & "))
}

fn describe_line(line: &Option<usize>) -> String {
    match line {
        Some(n) => format!("line {}", n),
        None => "input".to_string(),
    }
}
