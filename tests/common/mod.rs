//! Common test utilities shared across integration tests.
#![allow(dead_code)]

use std::collections::HashSet;
use std::path::PathBuf;

use wheel_words::{Dictionary, WheelGrid};

/// Path to a file under the crate's `data/` directory.
pub fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

/// Every dictionary word readable from `grid`, found by enumerating all
/// contiguous wheel ranges and letter choices without any pruning.
pub fn brute_force_words(grid: &WheelGrid, dictionary: &Dictionary) -> HashSet<String> {
    let mut found = HashSet::new();
    for start in 0..grid.number_of_wheels() {
        let mut prefixes = vec![String::new()];
        for wheel in start..grid.number_of_wheels() {
            prefixes = prefixes
                .iter()
                .flat_map(|prefix| {
                    grid.wheel(wheel).chars().map(move |c| {
                        let mut next = prefix.clone();
                        next.push(c);
                        next
                    })
                })
                .collect();
            if wheel > start {
                found.extend(prefixes.iter().filter(|p| dictionary.contains(p)).cloned());
            }
        }
    }
    found
}

/// The candidates a pruned depth-first walk of `grid` should visit, in order:
/// every two-wheel candidate, and the extensions of every candidate the
/// dictionary reports as a parent.
pub fn reference_visits(grid: &WheelGrid, dictionary: &Dictionary) -> Vec<String> {
    let mut visits = Vec::new();
    for start in 0..grid.number_of_wheels().saturating_sub(1) {
        for letter in grid.wheel(start).chars() {
            extend(grid, dictionary, start + 1, letter.to_string(), &mut visits);
        }
    }
    visits
}

fn extend(grid: &WheelGrid, dictionary: &Dictionary, wheel: usize, prefix: String, visits: &mut Vec<String>) {
    for letter in grid.wheel(wheel).chars() {
        let candidate = format!("{}{}", prefix, letter);
        visits.push(candidate.clone());
        if dictionary.find(&candidate).can_extend() && wheel + 1 < grid.number_of_wheels() {
            extend(grid, dictionary, wheel + 1, candidate, visits);
        }
    }
}
