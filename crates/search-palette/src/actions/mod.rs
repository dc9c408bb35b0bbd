//! Actions module
//!
//! Everything that can happen to the palette is an [`Action`]:
//! - Generic input (`Navigate`, `TextInput`) coming from keyboard handling
//! - Palette actions (open, close, confirm, pointer selection)
//! - History management triggered by the user
//! - Events: facts reported back into the middleware chain

pub mod event;
pub mod history;
pub mod navigation;
pub mod palette;
pub mod text_input;

pub use event::Event;
pub use history::HistoryAction;
pub use navigation::NavigationAction;
pub use palette::{CloseReason, PaletteAction};
pub use text_input::TextInputAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Events are facts/observations that re-enter the middleware chain.
    /// Use `Action::event(Event::X)` to create - ensures visibility at call site.
    Event(Event),

    /// Move the highlighted row
    Navigate(NavigationAction),
    /// Edit the query text
    TextInput(TextInputAction),

    /// Open, close and select
    Palette(PaletteAction),
    /// Explicit user actions on the recent history
    History(HistoryAction),

    /// No-op action
    None,
}

impl Action {
    /// Factory method for creating events.
    ///
    /// Using this factory makes event creation visually distinct at the call site,
    /// signaling that the action will re-enter the middleware chain.
    pub fn event(event: Event) -> Action {
        Action::Event(event)
    }
}
