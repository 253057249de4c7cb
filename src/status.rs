//! Classification of a candidate string against the dictionary.
//!
//! Every lookup answers two questions at once: is the string a complete word
//! (hit or miss), and does any longer word continue from it (parent or
//! terminal). The traversal uses the second half to decide whether to deepen
//! or rotate.

/// The four-way answer of a dictionary lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchStatus {
    /// The string is not a path in the dictionary at all
    Miss,
    /// The string is a prefix of some word but not a word itself
    MissParent,
    /// The string is a word and longer words continue from it
    HitParent,
    /// The string is a word and nothing continues from it
    HitTerminal,
}

impl SearchStatus {
    /// All statuses, in the order used by [`StatusCounts`](crate::solver::StatusCounts).
    pub const ALL: [SearchStatus; 4] = [
        SearchStatus::Miss,
        SearchStatus::MissParent,
        SearchStatus::HitParent,
        SearchStatus::HitTerminal,
    ];

    /// True when the string is a complete word.
    pub fn is_hit(self) -> bool {
        matches!(self, SearchStatus::HitParent | SearchStatus::HitTerminal)
    }

    /// True when longer words continue from the string, so the traversal
    /// should extend into the next wheel.
    pub fn can_extend(self) -> bool {
        matches!(self, SearchStatus::MissParent | SearchStatus::HitParent)
    }

    /// Position of this status in [`SearchStatus::ALL`].
    pub fn index(self) -> usize {
        match self {
            SearchStatus::Miss => 0,
            SearchStatus::MissParent => 1,
            SearchStatus::HitParent => 2,
            SearchStatus::HitTerminal => 3,
        }
    }

    /// Short label used in logs and reports
    pub fn label(self) -> &'static str {
        match self {
            SearchStatus::Miss => "miss",
            SearchStatus::MissParent => "miss-parent",
            SearchStatus::HitParent => "hit-parent",
            SearchStatus::HitTerminal => "hit-terminal",
        }
    }
}

impl std::fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
