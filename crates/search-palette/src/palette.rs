//! Search palette facade
//!
//! Wires the store with the standard middleware chain:
//!
//! 1. `LoggingMiddleware` - debug log of every action
//! 2. `CandidateMiddleware` - fresh catalog on open
//! 3. `HistoryMiddleware` - history writes, reports selections
//! 4. `SelectionMiddleware` - host `on_select` callback
//! 5. `SurfaceMiddleware` - scroll lock and focus

use crate::actions::Action;
use crate::candidate::CandidateSource;
use crate::history::{HistoryStore, DEFAULT_HISTORY_KEY};
use crate::middleware::{
    CandidateMiddleware, HistoryMiddleware, LoggingMiddleware, SelectionMiddleware,
    SurfaceMiddleware,
};
use crate::middleware::selection_middleware::OnSelect;
use crate::state::{PaletteOptions, PaletteState};
use crate::storage::{KeyValueStore, MemoryStore};
use crate::store::Store;
use crate::surface::{HostSurface, NullSurface};
use crate::view_model::PaletteViewModel;

/// A ready-to-use search palette
#[derive(Debug)]
pub struct SearchPalette {
    store: Store,
}

impl SearchPalette {
    pub fn builder(source: impl CandidateSource + 'static) -> PaletteBuilder {
        PaletteBuilder::new(Box::new(source))
    }

    /// Process an action through middleware chain and reducer
    pub fn dispatch(&mut self, action: Action) {
        self.store.dispatch(action);
    }

    pub fn state(&self) -> &PaletteState {
        self.store.state()
    }

    pub fn view_model(&self) -> PaletteViewModel {
        PaletteViewModel::from_state(self.store.state())
    }
}

fn ignore_selection(_label: &str) {}

/// Builder for [`SearchPalette`]
///
/// Defaults: in-memory storage under [`DEFAULT_HISTORY_KEY`], a surface that
/// ignores requests, no selection callback and default options.
pub struct PaletteBuilder {
    source: Box<dyn CandidateSource>,
    storage: Box<dyn KeyValueStore>,
    history_key: String,
    surface: Box<dyn HostSurface>,
    on_select: OnSelect,
    options: PaletteOptions,
}

impl PaletteBuilder {
    fn new(source: Box<dyn CandidateSource>) -> Self {
        Self {
            source,
            storage: Box::new(MemoryStore::new()),
            history_key: DEFAULT_HISTORY_KEY.to_string(),
            surface: Box::new(NullSurface),
            on_select: Box::new(ignore_selection),
            options: PaletteOptions::default(),
        }
    }

    pub fn storage(mut self, storage: impl KeyValueStore + 'static) -> Self {
        self.storage = Box::new(storage);
        self
    }

    pub fn history_key(mut self, key: impl Into<String>) -> Self {
        self.history_key = key.into();
        self
    }

    pub fn surface(mut self, surface: impl HostSurface + 'static) -> Self {
        self.surface = Box::new(surface);
        self
    }

    pub fn on_select(mut self, on_select: impl FnMut(&str) + 'static) -> Self {
        self.on_select = Box::new(on_select);
        self
    }

    pub fn options(mut self, options: PaletteOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build(mut self) -> SearchPalette {
        let history = HistoryStore::load(self.storage, self.history_key);
        let catalog = self.source.catalog();
        let state = PaletteState::new(catalog, history.entries().to_vec(), self.options);

        // Add middleware in order (they execute in this order)
        let mut store = Store::new(state);
        store.add_middleware(Box::new(LoggingMiddleware::new()));
        store.add_middleware(Box::new(CandidateMiddleware::new(self.source)));
        store.add_middleware(Box::new(HistoryMiddleware::new(history)));
        store.add_middleware(Box::new(SelectionMiddleware::new(self.on_select)));
        store.add_middleware(Box::new(SurfaceMiddleware::new(self.surface)));

        SearchPalette { store }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{CloseReason, HistoryAction, NavigationAction, PaletteAction, TextInputAction};
    use crate::candidate::{Catalog, StaticCandidates};
    use crate::state::Phase;
    use crate::surface::{RecordingSurface, SurfaceCall};
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Fixture {
        palette: SearchPalette,
        storage: MemoryStore,
        surface: RecordingSurface,
        selected: Rc<RefCell<Vec<String>>>,
    }

    fn fixture(payload: Option<&str>) -> Fixture {
        let storage = match payload {
            Some(payload) => MemoryStore::with_entry(DEFAULT_HISTORY_KEY, payload),
            None => MemoryStore::new(),
        };
        let surface = RecordingSurface::new();
        let selected = Rc::new(RefCell::new(Vec::new()));
        let sink = selected.clone();

        let catalog = Catalog::from_labels(
            ["Everest Base Camp", "Annapurna Trek", "Lumbini"],
            ["Everest Base Camp"],
        );
        let palette = SearchPalette::builder(StaticCandidates::new(catalog))
            .storage(storage.clone())
            .surface(surface.clone())
            .on_select(move |label| sink.borrow_mut().push(label.to_string()))
            .build();

        Fixture {
            palette,
            storage,
            surface,
            selected,
        }
    }

    fn open() -> Action {
        Action::Palette(PaletteAction::Open)
    }

    fn down() -> Action {
        Action::Navigate(NavigationAction::Next)
    }

    fn type_text(text: &str) -> Action {
        Action::TextInput(TextInputAction::Replace(text.to_string()))
    }

    #[test]
    fn test_loads_history_at_build() {
        let f = fixture(Some(r#"["Illam","Lumbini"]"#));
        assert_eq!(f.palette.state().history, vec!["Illam", "Lumbini"]);
    }

    #[test]
    fn test_malformed_history_starts_empty() {
        let f = fixture(Some("{{{"));
        assert!(f.palette.state().history.is_empty());
    }

    #[test]
    fn test_open_locks_and_focuses() {
        let mut f = fixture(None);
        f.palette.dispatch(open());

        assert_eq!(f.palette.state().phase(), Phase::Idle);
        assert_eq!(
            f.surface.calls(),
            vec![SurfaceCall::ScrollLocked(true), SurfaceCall::FocusInput]
        );

        f.palette.dispatch(Action::Palette(PaletteAction::Close(CloseReason::Escape)));
        assert!(!f.surface.is_scroll_locked());
    }

    #[test]
    fn test_enter_selects_records_and_notifies_once() {
        let mut f = fixture(Some(r#"["Illam"]"#));

        f.palette.dispatch(open());
        f.palette.dispatch(type_text("tr"));
        f.palette.dispatch(down());
        f.palette.dispatch(Action::Palette(PaletteAction::Confirm));

        assert_eq!(*f.selected.borrow(), vec!["Annapurna Trek"]);
        assert_eq!(f.palette.state().history, vec!["Annapurna Trek", "Illam"]);
        assert_eq!(
            f.storage.get(DEFAULT_HISTORY_KEY).as_deref(),
            Some(r#"["Annapurna Trek","Illam"]"#)
        );

        let state = f.palette.state();
        assert_eq!(state.phase(), Phase::Closed);
        assert!(state.query.is_empty());
        assert!(!f.surface.is_scroll_locked());

        // A second Enter while closed selects nothing
        f.palette.dispatch(Action::Palette(PaletteAction::Confirm));
        assert_eq!(f.selected.borrow().len(), 1);
    }

    #[test]
    fn test_click_on_featured_entry_records_it() {
        let mut f = fixture(Some(r#"["Everest Base Camp"]"#));

        f.palette.dispatch(open());
        // Active list: "Everest Base Camp" (recent), "Everest Base Camp" (featured)
        f.palette.dispatch(Action::Palette(PaletteAction::SelectEntry(1)));

        assert_eq!(*f.selected.borrow(), vec!["Everest Base Camp"]);
        assert_eq!(f.palette.state().history, vec!["Everest Base Camp"]);
    }

    #[test]
    fn test_remove_and_clear_history_keep_palette_open() {
        let mut f = fixture(Some(r#"["Illam","Lumbini"]"#));
        f.palette.dispatch(open());

        f.palette
            .dispatch(Action::History(HistoryAction::Remove("Illam".to_string())));
        assert!(f.palette.state().open);
        assert_eq!(f.palette.state().history, vec!["Lumbini"]);
        assert_eq!(
            f.storage.get(DEFAULT_HISTORY_KEY).as_deref(),
            Some(r#"["Lumbini"]"#)
        );

        f.palette.dispatch(Action::History(HistoryAction::Clear));
        assert!(f.palette.state().open);
        assert!(f.palette.state().history.is_empty());
        assert!(f.storage.get(DEFAULT_HISTORY_KEY).is_none());
    }

    #[test]
    fn test_history_actions_ignored_while_typing() {
        let mut f = fixture(Some(r#"["Illam"]"#));
        f.palette.dispatch(open());
        f.palette.dispatch(type_text("lum"));
        f.palette.dispatch(Action::History(HistoryAction::Clear));

        assert_eq!(f.palette.state().history, vec!["Illam"]);
    }

    #[test]
    fn test_dynamic_source_is_pulled_on_open() {
        let labels = Rc::new(RefCell::new(vec!["Lumbini".to_string()]));
        let feed = labels.clone();
        let mut palette = SearchPalette::builder(move || {
            Catalog::from_labels(feed.borrow().clone(), Vec::<String>::new())
        })
        .build();

        labels.borrow_mut().push("Pokhara".to_string());
        palette.dispatch(open());
        palette.dispatch(type_text("pok"));

        assert_eq!(palette.state().phase(), Phase::Typing);
        assert_eq!(palette.state().matches[0].label, "Pokhara");
    }

    #[test]
    fn test_view_model_snapshot() {
        let mut f = fixture(Some(r#"["Illam"]"#));
        f.palette.dispatch(open());
        f.palette.dispatch(down());

        let vm = f.palette.view_model();
        assert!(vm.open);
        assert_eq!(vm.selected_index, Some(0));
        let labels: Vec<&str> = vm.rows().map(|row| row.label.as_str()).collect();
        assert_eq!(labels, vec!["Illam", "Everest Base Camp"]);
    }
}
