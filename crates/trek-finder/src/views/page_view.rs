use crate::page::PageState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use search_palette_theme::Theme;

/// Render the destination page; returns the trigger area
pub fn render(page: &PageState, theme: &Theme, area: Rect, f: &mut Frame) -> Rect {
    f.render_widget(Block::default().style(theme.page_background()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Search trigger
            Constraint::Min(3),    // Destinations
            Constraint::Length(1), // Status line
        ])
        .split(area);

    let title = Line::from(vec![
        Span::styled(" Trek Finder ", theme.panel_title().bold()),
        Span::styled("Explore Nepal", theme.muted()),
    ]);
    f.render_widget(Paragraph::new(title), chunks[0]);

    let trigger = Paragraph::new(Line::from(Span::styled(
        "Find your destination...",
        theme.muted().italic(),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.panel_border())
            .title(Line::from(Span::styled(" / or Ctrl+K ", theme.key_hint())).right_aligned())
            .style(theme.input()),
    );
    f.render_widget(trigger, chunks[1]);

    let items: Vec<ListItem> = page
        .destinations
        .iter()
        .enumerate()
        .skip(page.scroll_offset)
        .map(|(index, destination)| {
            let style = if index == page.scroll_offset {
                theme.text().bold()
            } else {
                theme.text_secondary()
            };
            ListItem::new(Line::from(vec![
                Span::styled("  ▲ ", theme.muted()),
                Span::styled(destination.as_str(), style),
            ]))
        })
        .collect();

    let mut list_title = format!(
        " Destinations ({}/{}) ",
        (page.scroll_offset + 1).min(page.destinations.len()),
        page.destinations.len()
    );
    if page.scroll_locked {
        list_title.push_str("[scroll locked] ");
    }
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.panel_border())
            .title(list_title),
    );
    f.render_widget(list, chunks[2]);

    let status = match &page.status {
        Some(status) => Span::styled(format!(" {}", status), theme.text()),
        None => Span::styled(" j/k scroll  / search  q quit", theme.muted()),
    };
    f.render_widget(Paragraph::new(Line::from(status)), chunks[3]);

    chunks[1]
}
