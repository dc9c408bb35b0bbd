//! Palette State

use crate::candidate::{Candidate, Catalog, Category};
use crate::matcher::is_blank;
use std::sync::Arc;

/// Where the palette is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Closed,
    /// Open with an empty query: history followed by featured entries
    Idle,
    /// Open with a query that has matches
    Typing,
    /// Open with a query that matches nothing
    NoResults,
}

/// Which list a row of the active list comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntrySource {
    History,
    Featured,
    Match,
}

/// A row of the active list, borrowed from the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListEntry<'a> {
    pub label: &'a str,
    pub source: EntrySource,
    pub category: Category,
}

/// Host-selected behaviour switches
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteOptions {
    /// Keep the query when the palette is dismissed by an outside click
    pub preserve_query_on_outside_click: bool,
}

/// Palette state
#[derive(Debug, Clone, Default)]
pub struct PaletteState {
    pub open: bool,
    pub query: String,
    /// Highlighted row of the active list, `None` when nothing is highlighted
    pub selected_index: Option<usize>,
    /// Candidates matching the current query (empty while the query is blank)
    pub matches: Vec<Candidate>,
    /// Mirror of the history store, most recent first
    pub history: Vec<String>,
    pub catalog: Arc<Catalog>,
    pub options: PaletteOptions,
}

impl PaletteState {
    pub fn new(catalog: Catalog, history: Vec<String>, options: PaletteOptions) -> Self {
        Self {
            catalog: Arc::new(catalog),
            history,
            options,
            ..Self::default()
        }
    }

    pub fn has_query(&self) -> bool {
        !is_blank(&self.query)
    }

    pub fn phase(&self) -> Phase {
        if !self.open {
            Phase::Closed
        } else if !self.has_query() {
            Phase::Idle
        } else if self.matches.is_empty() {
            Phase::NoResults
        } else {
            Phase::Typing
        }
    }

    /// The list keyboard navigation and rendering operate on.
    ///
    /// With no query this is the history followed by the featured entries;
    /// otherwise the current matches. Featured labels are not deduplicated
    /// against the history.
    pub fn active_list(&self) -> Vec<ListEntry<'_>> {
        if self.has_query() {
            return self
                .matches
                .iter()
                .map(|candidate| ListEntry {
                    label: &candidate.label,
                    source: EntrySource::Match,
                    category: candidate.category,
                })
                .collect();
        }

        let history = self.history.iter().map(|label| ListEntry {
            label: label.as_str(),
            source: EntrySource::History,
            category: Category::Plain,
        });
        let featured = self.catalog.featured.iter().map(|candidate| ListEntry {
            label: &candidate.label,
            source: EntrySource::Featured,
            category: candidate.category,
        });
        history.chain(featured).collect()
    }

    pub fn active_len(&self) -> usize {
        if self.has_query() {
            self.matches.len()
        } else {
            self.history.len() + self.catalog.featured.len()
        }
    }

    pub fn entry_at(&self, index: usize) -> Option<ListEntry<'_>> {
        self.active_list().get(index).copied()
    }

    pub fn selected_entry(&self) -> Option<ListEntry<'_>> {
        self.selected_index.and_then(|index| self.entry_at(index))
    }
}
