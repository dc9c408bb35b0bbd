//! Terminal input translation
//!
//! Raw crossterm events become [`Intent`]s. Anything the palette handles
//! is wrapped as a palette [`Action`]; the rest belongs to the page.

pub mod keyboard;
pub mod mouse;

use search_palette::{Action, TextInputAction};

/// What a terminal event asks the app to do
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Forward to the palette as-is
    Dispatch(Action),
    /// Query edit, subject to debouncing
    Edit(TextInputAction),
    /// Scroll the page behind the palette
    ScrollPage(isize),
    Quit,
    Ignore,
}

impl From<Action> for Intent {
    fn from(action: Action) -> Self {
        Intent::Dispatch(action)
    }
}
