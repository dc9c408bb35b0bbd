//! Recent history actions
//!
//! Only honoured while the palette is open with an empty query, which is
//! the only time the history list is on screen.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryAction {
    /// Forget a single entry
    Remove(String),
    /// Forget every entry
    Clear,
}
