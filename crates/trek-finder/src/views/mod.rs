//! Views
//!
//! Rendering is stateless apart from the [`HitMap`] it hands back: the
//! screen areas of everything clickable, used to resolve the next click.

mod page_view;
mod palette_view;

use crate::page::PageState;
use ratatui::{layout::Rect, Frame};
use search_palette::PaletteViewModel;
use search_palette_theme::Theme;

/// Clickable areas from the last render
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    /// Search bar on the page that opens the palette
    pub trigger: Rect,
    /// Whole palette panel; clicks outside it dismiss the palette
    pub popup: Option<Rect>,
    pub close_button: Option<Rect>,
    /// "Clear" on the recent section header
    pub clear_button: Option<Rect>,
    pub rows: Vec<RowHit>,
}

#[derive(Debug, Clone)]
pub struct RowHit {
    pub area: Rect,
    /// Position in the active list
    pub index: usize,
    /// Remove button and the history label it removes
    pub remove_button: Option<(Rect, String)>,
}

/// Everything a frame needs
pub struct Screen<'a> {
    pub page: &'a PageState,
    pub palette: &'a PaletteViewModel,
    /// Typed text not yet applied to the palette
    pub pending_query: Option<&'a str>,
    pub placeholder: &'a str,
    pub theme: &'a Theme,
}

pub fn render(screen: &Screen<'_>, f: &mut Frame) -> HitMap {
    let area = f.area();
    let mut hits = HitMap {
        trigger: page_view::render(screen.page, screen.theme, area, f),
        ..HitMap::default()
    };

    if screen.palette.open {
        palette_view::render(screen, area, f, &mut hits);
    }
    hits
}
