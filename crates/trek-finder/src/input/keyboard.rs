//! Key bindings
//!
//! Closed palette: `/` or `Ctrl+K` opens it, `j`/`k` and the arrows scroll
//! the page, `q` quits. Open palette: keys edit the query or drive the list.

use super::Intent;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use search_palette::{
    Action, CloseReason, EntrySource, HistoryAction, NavigationAction, PaletteAction,
    PaletteState, TextInputAction,
};

const PAGE_JUMP: isize = 10;

/// Translate a key press given the current palette state
pub fn translate(key: KeyEvent, state: &PaletteState) -> Intent {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('c') {
        return Intent::Quit;
    }

    if state.open {
        translate_open(key, ctrl, state)
    } else {
        translate_closed(key, ctrl)
    }
}

fn translate_closed(key: KeyEvent, ctrl: bool) -> Intent {
    match key.code {
        KeyCode::Char('k') if ctrl => palette(PaletteAction::Open),
        KeyCode::Char('/') => palette(PaletteAction::Open),
        KeyCode::Char('q') | KeyCode::Esc => Intent::Quit,
        KeyCode::Down | KeyCode::Char('j') => Intent::ScrollPage(1),
        KeyCode::Up | KeyCode::Char('k') => Intent::ScrollPage(-1),
        KeyCode::PageDown => Intent::ScrollPage(PAGE_JUMP),
        KeyCode::PageUp => Intent::ScrollPage(-PAGE_JUMP),
        _ => Intent::Ignore,
    }
}

fn translate_open(key: KeyEvent, ctrl: bool, state: &PaletteState) -> Intent {
    match key.code {
        KeyCode::Esc => palette(PaletteAction::Close(CloseReason::Escape)),
        KeyCode::Enter => palette(PaletteAction::Confirm),
        KeyCode::Down | KeyCode::Tab => Action::Navigate(NavigationAction::Next).into(),
        KeyCode::Up | KeyCode::BackTab => Action::Navigate(NavigationAction::Previous).into(),
        KeyCode::Char('n') if ctrl => Action::Navigate(NavigationAction::Next).into(),
        KeyCode::Char('p') if ctrl => Action::Navigate(NavigationAction::Previous).into(),
        KeyCode::Char('u') if ctrl => Intent::Edit(TextInputAction::ClearLine),
        KeyCode::Char('x') if ctrl => palette(PaletteAction::ClearOrClose),
        KeyCode::Char('l') if ctrl => Action::History(HistoryAction::Clear).into(),
        KeyCode::Char('d') if ctrl => remove_selected(state),
        KeyCode::Delete => remove_selected(state),
        KeyCode::Backspace => Intent::Edit(TextInputAction::Backspace),
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            Intent::Edit(TextInputAction::Char(c))
        }
        _ => Intent::Ignore,
    }
}

/// Remove the highlighted row from history, if it is a history row
fn remove_selected(state: &PaletteState) -> Intent {
    match state.selected_entry() {
        Some(entry) if entry.source == EntrySource::History => {
            Action::History(HistoryAction::Remove(entry.label.to_string())).into()
        }
        _ => Intent::Ignore,
    }
}

fn palette(action: PaletteAction) -> Intent {
    Action::Palette(action).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use search_palette::{Catalog, PaletteOptions};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn open_state() -> PaletteState {
        let mut state = PaletteState::new(
            Catalog::from_labels(["Lumbini"], ["Everest Base Camp"]),
            vec!["Illam".to_string()],
            PaletteOptions::default(),
        );
        state.open = true;
        state
    }

    #[test]
    fn test_closed_bindings() {
        let state = PaletteState::default();
        assert_eq!(
            translate(key(KeyCode::Char('/')), &state),
            palette(PaletteAction::Open)
        );
        assert_eq!(translate(ctrl('k'), &state), palette(PaletteAction::Open));
        assert_eq!(translate(key(KeyCode::Char('k')), &state), Intent::ScrollPage(-1));
        assert_eq!(translate(key(KeyCode::Char('j')), &state), Intent::ScrollPage(1));
        assert_eq!(translate(key(KeyCode::Char('q')), &state), Intent::Quit);
        assert_eq!(translate(key(KeyCode::Char('x')), &state), Intent::Ignore);
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        assert_eq!(translate(ctrl('c'), &open_state()), Intent::Quit);
        assert_eq!(translate(ctrl('c'), &PaletteState::default()), Intent::Quit);
    }

    #[test]
    fn test_open_bindings() {
        let state = open_state();
        assert_eq!(
            translate(key(KeyCode::Esc), &state),
            palette(PaletteAction::Close(CloseReason::Escape))
        );
        assert_eq!(
            translate(key(KeyCode::Enter), &state),
            palette(PaletteAction::Confirm)
        );
        assert_eq!(
            translate(key(KeyCode::Up), &state),
            Intent::from(Action::Navigate(NavigationAction::Previous))
        );
        assert_eq!(
            translate(key(KeyCode::Char('q')), &state),
            Intent::Edit(TextInputAction::Char('q'))
        );
        assert_eq!(
            translate(key(KeyCode::Backspace), &state),
            Intent::Edit(TextInputAction::Backspace)
        );
        assert_eq!(translate(ctrl('x'), &state), palette(PaletteAction::ClearOrClose));
    }

    #[test]
    fn test_remove_only_targets_history_rows() {
        let mut state = open_state();
        assert_eq!(translate(ctrl('d'), &state), Intent::Ignore);

        state.selected_index = Some(0);
        assert_eq!(
            translate(ctrl('d'), &state),
            Intent::from(Action::History(HistoryAction::Remove("Illam".to_string())))
        );

        state.selected_index = Some(1);
        assert_eq!(translate(key(KeyCode::Delete), &state), Intent::Ignore);
    }
}
