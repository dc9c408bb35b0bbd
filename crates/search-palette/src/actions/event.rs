//! Events - facts that re-enter the middleware chain
//!
//! Events are dispatched by middleware (or the store) after something has
//! happened. They never ask for something to happen.

use crate::candidate::Catalog;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The candidate source delivered a fresh catalog
    CatalogLoaded(Catalog),
    /// The history store changed; carries the persisted entries
    HistoryChanged(Vec<String>),
    /// The palette transitioned from closed to open
    Opened,
    /// The palette transitioned from open to closed
    Closed,
    /// A label was selected and recorded in the history
    Selected(String),
}
