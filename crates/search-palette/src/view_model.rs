//! View model for the search palette
//!
//! Pre-computes all display data for a presentation layer, separating
//! data preparation from rendering logic. Nothing in here knows how rows
//! are drawn; it only says what to draw and which parts of a label matched.

use crate::candidate::Category;
use crate::matcher::QueryPattern;
use crate::state::{EntrySource, ListEntry, PaletteState, Phase};
use std::ops::Range;

/// View model for the search palette
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteViewModel {
    pub open: bool,
    pub phase: Phase,
    /// Query text as typed
    pub input_text: String,
    /// Is input empty (for placeholder styling)
    pub input_is_empty: bool,
    /// Sections in display order; row indices are positions in the active list
    pub sections: Vec<Section>,
    pub selected_index: Option<usize>,
    /// Message for the no-results state
    pub empty_message: Option<String>,
    pub total_candidates: usize,
    pub footer_hints: FooterHints,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Recent,
    Suggested,
    Results,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub kind: SectionKind,
    pub title: &'static str,
    /// Offers a bulk "Clear" action
    pub clearable: bool,
    pub rows: Vec<PaletteRow>,
}

/// Icon shown in front of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowIcon {
    /// Recent selection
    History,
    /// Featured suggestion
    Mountain,
    /// Matched featured destination
    Marker,
    /// Any other match
    Arrow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteRow {
    /// Position in the active list
    pub index: usize,
    pub label: String,
    pub icon: RowIcon,
    pub is_selected: bool,
    /// Offers a per-row remove action (history rows only)
    pub removable: bool,
    /// Byte ranges of `label` that matched the query
    pub highlights: Vec<Range<usize>>,
}

impl PaletteRow {
    /// Split the label into `(text, highlighted)` segments
    pub fn segments(&self) -> Vec<(&str, bool)> {
        let mut segments = Vec::new();
        let mut cursor = 0;
        for span in &self.highlights {
            if span.start > cursor {
                segments.push((&self.label[cursor..span.start], false));
            }
            segments.push((&self.label[span.clone()], true));
            cursor = span.end;
        }
        if cursor < self.label.len() {
            segments.push((&self.label[cursor..], false));
        }
        segments
    }
}

/// Pre-computed footer hints for keyboard shortcuts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterHints {
    pub navigate: String,
    pub select: String,
    pub close: String,
}

impl Default for FooterHints {
    fn default() -> Self {
        Self {
            navigate: "↑↓".to_string(),
            select: "↵".to_string(),
            close: "esc".to_string(),
        }
    }
}

impl PaletteViewModel {
    /// Build view model from palette state
    pub fn from_state(state: &PaletteState) -> Self {
        let phase = state.phase();
        let active = state.active_list();

        let sections = match phase {
            Phase::Closed | Phase::NoResults => Vec::new(),
            Phase::Idle => idle_sections(state, &active),
            Phase::Typing => {
                let pattern = QueryPattern::new(&state.query);
                let rows = active
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        let mut row = build_row(state, index, entry);
                        row.highlights = pattern.spans(entry.label);
                        row
                    })
                    .collect();
                vec![Section {
                    kind: SectionKind::Results,
                    title: "Results",
                    clearable: false,
                    rows,
                }]
            }
        };

        let empty_message = (phase == Phase::NoResults)
            .then(|| format!("No match for \"{}\".", state.query));

        Self {
            open: state.open,
            phase,
            input_text: state.query.clone(),
            input_is_empty: state.query.is_empty(),
            sections,
            selected_index: state.selected_index,
            empty_message,
            total_candidates: state.catalog.candidates.len(),
            footer_hints: FooterHints::default(),
        }
    }

    /// All rows in active-list order
    pub fn rows(&self) -> impl Iterator<Item = &PaletteRow> {
        self.sections.iter().flat_map(|section| section.rows.iter())
    }
}

fn idle_sections(state: &PaletteState, active: &[ListEntry<'_>]) -> Vec<Section> {
    let (recent, suggested): (Vec<PaletteRow>, Vec<PaletteRow>) = active
        .iter()
        .enumerate()
        .map(|(index, entry)| build_row(state, index, entry))
        .partition(|row| row.icon == RowIcon::History);

    let mut sections = Vec::with_capacity(2);
    if !recent.is_empty() {
        sections.push(Section {
            kind: SectionKind::Recent,
            title: "Recent",
            clearable: true,
            rows: recent,
        });
    }
    // Suggested header is shown even when nothing is featured
    sections.push(Section {
        kind: SectionKind::Suggested,
        title: "Suggested",
        clearable: false,
        rows: suggested,
    });
    sections
}

fn build_row(state: &PaletteState, index: usize, entry: &ListEntry<'_>) -> PaletteRow {
    let icon = match (entry.source, entry.category) {
        (EntrySource::History, _) => RowIcon::History,
        (EntrySource::Featured, _) => RowIcon::Mountain,
        (EntrySource::Match, Category::Featured) => RowIcon::Marker,
        (EntrySource::Match, Category::Plain) => RowIcon::Arrow,
    };

    PaletteRow {
        index,
        label: entry.label.to_string(),
        icon,
        is_selected: state.selected_index == Some(index),
        removable: entry.source == EntrySource::History,
        highlights: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::Catalog;
    use crate::state::PaletteOptions;

    fn state(history: &[&str], query: &str) -> PaletteState {
        let catalog = Catalog::from_labels(
            ["Everest Base Camp", "Annapurna Trek", "Lumbini"],
            ["Illam", "Everest Base Camp"],
        );
        let mut state = PaletteState::new(
            catalog.clone(),
            history.iter().map(|s| s.to_string()).collect(),
            PaletteOptions::default(),
        );
        state.open = true;
        state.query = query.to_string();
        if !query.trim().is_empty() {
            state.matches = crate::matcher::match_candidates(&catalog.candidates, query);
        }
        state
    }

    #[test]
    fn test_closed_has_no_sections() {
        let mut state = state(&["Illam"], "");
        state.open = false;
        let vm = PaletteViewModel::from_state(&state);
        assert!(!vm.open);
        assert!(vm.sections.is_empty());
    }

    #[test]
    fn test_idle_sections() {
        let mut state = state(&["Lumbini"], "");
        state.selected_index = Some(2);
        let vm = PaletteViewModel::from_state(&state);

        assert_eq!(vm.sections.len(), 2);
        assert_eq!(vm.sections[0].kind, SectionKind::Recent);
        assert!(vm.sections[0].clearable);
        assert!(vm.sections[0].rows[0].removable);
        assert_eq!(vm.sections[1].kind, SectionKind::Suggested);

        let indices: Vec<usize> = vm.rows().map(|row| row.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);

        let selected: Vec<&str> = vm
            .rows()
            .filter(|row| row.is_selected)
            .map(|row| row.label.as_str())
            .collect();
        assert_eq!(selected, vec!["Everest Base Camp"]);
    }

    #[test]
    fn test_idle_without_history_hides_recent() {
        let vm = PaletteViewModel::from_state(&state(&[], ""));
        assert_eq!(vm.sections.len(), 1);
        assert_eq!(vm.sections[0].kind, SectionKind::Suggested);
        assert!(vm.rows().all(|row| row.icon == RowIcon::Mountain));
    }

    #[test]
    fn test_results_carry_highlights_and_icons() {
        let vm = PaletteViewModel::from_state(&state(&[], "e"));
        assert_eq!(vm.phase, Phase::Typing);

        let rows: Vec<&PaletteRow> = vm.rows().collect();
        assert_eq!(rows[0].label, "Everest Base Camp");
        assert_eq!(rows[0].icon, RowIcon::Marker);
        assert_eq!(rows[1].label, "Annapurna Trek");
        assert_eq!(rows[1].icon, RowIcon::Arrow);
        assert_eq!(rows[1].highlights, vec![12..13]);
        assert_eq!(
            rows[1].segments(),
            vec![("Annapurna Tr", false), ("e", true), ("k", false)]
        );
    }

    #[test]
    fn test_no_results_message() {
        let vm = PaletteViewModel::from_state(&state(&[], "xyz"));
        assert_eq!(vm.phase, Phase::NoResults);
        assert!(vm.sections.is_empty());
        assert_eq!(vm.empty_message.as_deref(), Some("No match for \"xyz\"."));
    }

    #[test]
    fn test_segments_cover_label() {
        let row = PaletteRow {
            index: 0,
            label: "Everest".to_string(),
            icon: RowIcon::Arrow,
            is_selected: false,
            removable: false,
            highlights: vec![0..1, 2..3],
        };
        assert_eq!(
            row.segments(),
            vec![("E", true), ("v", false), ("e", true), ("rest", false)]
        );
    }
}
