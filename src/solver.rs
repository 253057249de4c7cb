//! Driving the wheel traversal with dictionary lookups.
//!
//! The loop is: take the current candidate, classify it, record it if it is a
//! word, and feed the classification back to the traversal to get the next
//! candidate. It stops as soon as the traversal can no longer permute.

use std::collections::HashSet;

use rayon::prelude::*;
use tracing::{info, trace};

use crate::dictionary::Dictionary;
use crate::status::SearchStatus;
use crate::wheels::{WheelGrid, Wheels};

/// How many candidates received each classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts([usize; 4]);

impl StatusCounts {
    pub fn record(&mut self, status: SearchStatus) {
        self.0[status.index()] += 1;
    }

    pub fn get(&self, status: SearchStatus) -> usize {
        self.0[status.index()]
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }
}

impl std::fmt::Display for StatusCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, status) in SearchStatus::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}={}", status, self.get(*status))?;
        }
        Ok(())
    }
}

/// Outcome of a full search over one grid
#[derive(Debug, Clone, Default)]
pub struct SearchReport {
    pub words: HashSet<String>,
    pub candidates_visited: usize,
    pub status_counts: StatusCounts,
}

impl SearchReport {
    /// Number of distinct words found
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn sorted_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}

/// Run a full traversal of `wheels`, classifying each candidate with
/// `classify`.
///
/// Candidates classified as a hit are collected. `classify` is called exactly
/// once per visited candidate, in traversal order.
pub fn search_with<F>(wheels: &mut Wheels, mut classify: F) -> SearchReport
where
    F: FnMut(&str) -> SearchStatus,
{
    let mut report = SearchReport::default();
    let mut permutation = wheels.current_permutation();

    while wheels.can_permute() {
        let status = classify(&permutation);
        trace!(candidate = %permutation, %status, "classified");

        report.candidates_visited += 1;
        report.status_counts.record(status);
        if status.is_hit() {
            report.words.insert(permutation);
        }

        permutation = wheels.advance_permutation(status);
    }

    report
}

/// Finds dictionary words in wheel grids.
#[derive(Debug, Default)]
pub struct WheelSolver {
    dictionary: Dictionary,
}

impl WheelSolver {
    pub fn new(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Find every distinct dictionary word readable from `grid`.
    pub fn solve(&self, grid: &WheelGrid) -> SearchReport {
        let mut wheels = Wheels::new(grid.clone());
        let report = search_with(&mut wheels, |candidate| self.dictionary.find(candidate));

        info!(
            wheels = grid.number_of_wheels(),
            letters = grid.letters_per_wheel(),
            candidates = report.candidates_visited,
            words = report.word_count(),
            statuses = %report.status_counts,
            "search finished"
        );
        report
    }

    /// Solve several independent grids against the same dictionary, in
    /// parallel. Reports come back in the order of `grids`.
    pub fn solve_all(&self, grids: &[WheelGrid]) -> Vec<SearchReport> {
        grids.par_iter().map(|grid| self.solve(grid)).collect()
    }
}
