//! Palette reducer
//!
//! Pure state transitions. Side effects (persisting history, locking the
//! host page, notifying the host of a selection) happen in middleware;
//! the reducer only ever sees the action and the current state.

use crate::actions::{
    Action, CloseReason, Event, NavigationAction, PaletteAction, TextInputAction,
};
use crate::matcher::QueryPattern;
use crate::state::{PaletteState, Phase};
use std::sync::Arc;

/// Reducer - produces the next state from the current state and an action
pub fn reduce(state: PaletteState, action: &Action) -> PaletteState {
    match action {
        Action::Palette(action) => reduce_palette(state, action),
        Action::Navigate(nav) => reduce_navigation(state, *nav),
        Action::TextInput(input) => reduce_text_input(state, input),
        Action::Event(event) => reduce_event(state, event),
        // History changes come back as Event::HistoryChanged
        Action::History(_) | Action::None => state,
    }
}

fn reduce_palette(mut state: PaletteState, action: &PaletteAction) -> PaletteState {
    match action {
        PaletteAction::Open => {
            if state.open {
                return state;
            }
            state.open = true;
            state.selected_index = None;
            refresh_matches(&mut state);
        }

        PaletteAction::Close(reason) => {
            if state.open {
                close(&mut state, *reason);
            }
        }

        PaletteAction::ClearOrClose => {
            if !state.open {
                return state;
            }
            if state.query.is_empty() {
                close(&mut state, CloseReason::Explicit);
            } else {
                // Clear query but keep palette open
                state.query.clear();
                state.matches.clear();
                state.selected_index = None;
            }
        }

        PaletteAction::Confirm => {
            if state.open && state.selected_entry().is_some() {
                finish_selection(&mut state);
            }
        }

        PaletteAction::SelectEntry(index) => {
            if state.open && *index < state.active_len() {
                finish_selection(&mut state);
            }
        }
    }

    state
}

fn reduce_navigation(mut state: PaletteState, nav: NavigationAction) -> PaletteState {
    if !state.open {
        return state;
    }

    let len = state.active_len();
    if len == 0 {
        return state;
    }

    state.selected_index = Some(match (nav, state.selected_index) {
        (NavigationAction::Next, Some(index)) if index + 1 < len => index + 1,
        (NavigationAction::Next, _) => 0,
        (NavigationAction::Previous, Some(index)) if index > 0 && index < len => index - 1,
        (NavigationAction::Previous, _) => len - 1,
    });

    state
}

fn reduce_text_input(mut state: PaletteState, input: &TextInputAction) -> PaletteState {
    if !state.open {
        return state;
    }

    input.apply(&mut state.query);
    state.selected_index = None;
    refresh_matches(&mut state);
    state
}

fn reduce_event(mut state: PaletteState, event: &Event) -> PaletteState {
    match event {
        Event::CatalogLoaded(catalog) => {
            state.catalog = Arc::new(catalog.clone());
            if state.open {
                state.selected_index = None;
            }
            refresh_matches(&mut state);
        }

        Event::HistoryChanged(entries) => {
            state.history = entries.clone();
            // Rows shifted under the cursor
            if state.phase() == Phase::Idle {
                state.selected_index = None;
            }
        }

        Event::Opened | Event::Closed | Event::Selected(_) => {}
    }

    state
}

fn close(state: &mut PaletteState, reason: CloseReason) {
    state.open = false;
    state.selected_index = None;

    if reason == CloseReason::OutsideClick && !state.options.preserve_query_on_outside_click {
        state.query.clear();
        state.matches.clear();
    }
}

fn finish_selection(state: &mut PaletteState) {
    state.open = false;
    state.query.clear();
    state.matches.clear();
    state.selected_index = None;
}

fn refresh_matches(state: &mut PaletteState) {
    if state.has_query() {
        state.matches = QueryPattern::new(&state.query).filter(&state.catalog.candidates);
    } else {
        state.matches.clear();
    }
}
