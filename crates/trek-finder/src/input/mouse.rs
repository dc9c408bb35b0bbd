//! Pointer handling
//!
//! Clicks are resolved against the [`HitMap`] recorded by the last render.
//! Any press outside the palette dismisses it.

use super::Intent;
use crate::views::HitMap;
use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;
use search_palette::{Action, CloseReason, HistoryAction, PaletteAction, PaletteState};

const WHEEL_STEP: isize = 3;

pub fn translate(mouse: MouseEvent, state: &PaletteState, hits: &HitMap) -> Intent {
    let at = Position::new(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::ScrollDown => Intent::ScrollPage(WHEEL_STEP),
        MouseEventKind::ScrollUp => Intent::ScrollPage(-WHEEL_STEP),
        MouseEventKind::Down(_) if state.open => click_open(at, hits),
        MouseEventKind::Down(MouseButton::Left) if hits.trigger.contains(at) => {
            Action::Palette(PaletteAction::Open).into()
        }
        _ => Intent::Ignore,
    }
}

fn click_open(at: Position, hits: &HitMap) -> Intent {
    if !hits.popup.is_some_and(|popup| popup.contains(at)) {
        return Action::Palette(PaletteAction::Close(CloseReason::OutsideClick)).into();
    }
    if hits.close_button.is_some_and(|area| area.contains(at)) {
        return Action::Palette(PaletteAction::ClearOrClose).into();
    }
    if hits.clear_button.is_some_and(|area| area.contains(at)) {
        return Action::History(HistoryAction::Clear).into();
    }

    for row in &hits.rows {
        if let Some((area, label)) = &row.remove_button {
            if area.contains(at) {
                return Action::History(HistoryAction::Remove(label.clone())).into();
            }
        }
        if row.area.contains(at) {
            return Action::Palette(PaletteAction::SelectEntry(row.index)).into();
        }
    }
    Intent::Ignore
}
