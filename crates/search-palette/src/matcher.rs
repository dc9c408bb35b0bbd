//! Query matching
//!
//! Case-insensitive literal substring matching. A candidate matches when its
//! lowercased label contains the lowercased query. Highlight spans come from
//! an escaped case-insensitive regex compiled once per keystroke; where the
//! two case rules disagree (some non-ASCII letters), a row is listed without
//! highlights.

use crate::candidate::Candidate;
use regex::{Regex, RegexBuilder};
use std::ops::Range;

/// Returns true when the query should be treated as "no query".
///
/// Leading and trailing whitespace is insignificant for this check only;
/// matching itself uses the raw query.
pub fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}

/// Filter `candidates` down to those whose label contains `query`,
/// ignoring case. Source order is kept.
pub fn match_candidates(candidates: &[Candidate], query: &str) -> Vec<Candidate> {
    QueryPattern::new(query).filter(candidates)
}

/// Byte ranges of every non-overlapping occurrence of `query` in `label`
pub fn highlight_spans(label: &str, query: &str) -> Vec<Range<usize>> {
    QueryPattern::new(query).spans(label)
}

/// A compiled query
#[derive(Debug, Clone)]
pub struct QueryPattern {
    /// Lowercased query
    needle: String,
    /// `None` when the escaped query exceeds the regex size limit
    highlighter: Option<Regex>,
}

impl QueryPattern {
    pub fn new(query: &str) -> Self {
        let highlighter = match RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()
        {
            Ok(regex) => Some(regex),
            Err(e) => {
                log::warn!("Falling back to lowercase highlighting for query: {}", e);
                None
            }
        };

        Self {
            needle: query.to_lowercase(),
            highlighter,
        }
    }

    pub fn is_match(&self, label: &str) -> bool {
        label.to_lowercase().contains(self.needle.as_str())
    }

    /// Stable filter over `candidates`
    pub fn filter(&self, candidates: &[Candidate]) -> Vec<Candidate> {
        candidates
            .iter()
            .filter(|candidate| self.is_match(&candidate.label))
            .cloned()
            .collect()
    }

    /// Highlight ranges inside `label`. Empty occurrences are skipped.
    pub fn spans(&self, label: &str) -> Vec<Range<usize>> {
        if let Some(regex) = &self.highlighter {
            return regex
                .find_iter(label)
                .filter(|m| !m.is_empty())
                .map(|m| m.range())
                .collect();
        }

        // Byte offsets only line up when lowercasing keeps the length
        let lowered = label.to_lowercase();
        if self.needle.is_empty() || lowered.len() != label.len() {
            return Vec::new();
        }
        lowered
            .match_indices(self.needle.as_str())
            .map(|(start, m)| start..start + m.len())
            .collect()
    }
}
