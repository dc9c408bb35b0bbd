//! Search palette engine
//!
//! A text input that filters a candidate list as the user types, remembers
//! recent selections, supports keyboard navigation and dismisses itself on
//! outside interaction.
//!
//! This crate provides:
//! - Query matching with highlight spans (`matcher`)
//! - A bounded, persisted recent-selection history (`history`)
//! - A pure reducer driving the open/idle/typing/no-results state machine
//! - A store with middleware for side effects (persistence, host callbacks)
//! - A presentation-agnostic view model
//!
//! Storage and page effects are injected through [`KeyValueStore`] and
//! [`HostSurface`], so hosts and tests can substitute their own.

pub mod actions;
pub mod candidate;
pub mod dispatcher;
pub mod history;
pub mod matcher;
pub mod middleware;
pub mod palette;
pub mod reducer;
pub mod state;
pub mod storage;
pub mod store;
pub mod surface;
pub mod view_model;

pub use actions::{
    Action, CloseReason, Event, HistoryAction, NavigationAction, PaletteAction, TextInputAction,
};
pub use candidate::{Candidate, CandidateSource, Catalog, Category, StaticCandidates};
pub use history::{HistoryStore, DEFAULT_HISTORY_KEY, HISTORY_CAPACITY};
pub use matcher::{highlight_spans, is_blank, match_candidates, QueryPattern};
pub use palette::{PaletteBuilder, SearchPalette};
pub use state::{EntrySource, ListEntry, PaletteOptions, PaletteState, Phase};
pub use storage::{KeyValueStore, MemoryStore, StorageError};
pub use store::Store;
pub use surface::{HostSurface, NullSurface, RecordingSurface, SurfaceCall};
pub use view_model::{FooterHints, PaletteRow, PaletteViewModel, RowIcon, Section, SectionKind};
