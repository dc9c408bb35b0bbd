//! The trek-finder app: page, palette and event loop

use crate::debounce::Debouncer;
use crate::input::{self, Intent};
use crate::page::{PageState, SharedPage};
use crate::views::{self, HitMap, Screen};
use ratatui::{
    backend::Backend,
    crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent},
    Terminal,
};
use search_palette::{
    Action, KeyValueStore, PaletteAction, SearchPalette, StaticCandidates, TextInputAction,
};
use search_palette_config::AppConfig;
use search_palette_theme::Theme;
use std::time::{Duration, Instant};

/// Idle poll interval when no query update is pending
const TICK: Duration = Duration::from_millis(100);

pub struct App {
    palette: SearchPalette,
    page: SharedPage,
    debouncer: Debouncer,
    hits: HitMap,
    theme: Theme,
    placeholder: String,
    running: bool,
}

impl App {
    pub fn new(config: &AppConfig, storage: impl KeyValueStore + 'static) -> Self {
        let page = SharedPage::new(PageState::new(config.destinations.clone()));
        let navigator = page.clone();

        let palette = SearchPalette::builder(StaticCandidates::new(config.catalog()))
            .storage(storage)
            .history_key(config.history_key.clone())
            .surface(page.clone())
            .on_select(move |label| navigator.borrow_mut().navigate_to(label))
            .options(config.palette_options())
            .build();

        Self {
            palette,
            page,
            debouncer: Debouncer::new(Duration::from_millis(config.debounce_ms)),
            hits: HitMap::default(),
            theme: Theme::default(),
            placeholder: config.placeholder.clone(),
            running: true,
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        while self.running {
            self.draw(terminal)?;

            let timeout = self
                .debouncer
                .time_until_due(Instant::now())
                .map_or(TICK, |due| due.min(TICK));

            if event::poll(timeout)? {
                match event::read()? {
                    // Only process key press events (ignore key release)
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => {}
                }
            }

            if let Some(query) = self.debouncer.poll(Instant::now()) {
                self.apply_query(query);
            }
        }
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        let vm = self.palette.view_model();
        let page = self.page.borrow();
        let screen = Screen {
            page: &page,
            palette: &vm,
            pending_query: self.debouncer.pending_text(),
            placeholder: &self.placeholder,
            theme: &self.theme,
        };

        let mut hits = HitMap::default();
        terminal.draw(|f| hits = views::render(&screen, f))?;
        self.hits = hits;
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let intent = input::keyboard::translate(key, self.palette.state());
        self.handle_intent(intent);
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let intent = input::mouse::translate(mouse, self.palette.state(), &self.hits);
        self.handle_intent(intent);
    }

    fn handle_intent(&mut self, intent: Intent) {
        match intent {
            Intent::Dispatch(action @ Action::Palette(PaletteAction::SelectEntry(_))) => {
                // Row indices refer to the list on screen, which predates the pending text
                if let Some(query) = self.debouncer.flush() {
                    log::debug!("Discarding pending query {:?} on row click", query);
                }
                self.palette.dispatch(action);
            }
            Intent::Dispatch(action) => {
                // Anything other than typing sees the settled query first
                if let Some(query) = self.debouncer.flush() {
                    self.apply_query(query);
                }
                self.palette.dispatch(action);
            }
            Intent::Edit(edit) if self.debouncer.is_enabled() => {
                let mut query = self
                    .debouncer
                    .pending_text()
                    .map_or_else(|| self.palette.state().query.clone(), str::to_string);
                edit.apply(&mut query);
                self.debouncer.schedule(query, Instant::now());
            }
            Intent::Edit(edit) => self.palette.dispatch(Action::TextInput(edit)),
            Intent::ScrollPage(delta) => self.page.borrow_mut().scroll(delta),
            Intent::Quit => {
                log::info!("Quit requested");
                self.running = false;
            }
            Intent::Ignore => {}
        }
    }

    fn apply_query(&mut self, query: String) {
        self.palette
            .dispatch(Action::TextInput(TextInputAction::Replace(query)));
    }

    #[cfg(test)]
    fn flush_pending(&mut self) {
        if let Some(query) = self.debouncer.flush() {
            self.apply_query(query);
        }
    }
}
