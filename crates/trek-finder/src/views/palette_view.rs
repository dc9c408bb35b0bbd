use super::{HitMap, RowHit, Screen};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Position, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use search_palette::{PaletteRow, PaletteViewModel, RowIcon, Section};
use search_palette_theme::Theme;

/// One line of the palette body
enum BodyLine<'a> {
    Header(&'a Section),
    Row(&'a PaletteRow),
    Spacer,
}

/// Render the palette as a centered floating panel over the page
pub fn render(screen: &Screen<'_>, area: Rect, f: &mut Frame, hits: &mut HitMap) {
    let theme = screen.theme;
    let vm = screen.palette;

    // Dimmed overlay over the page to create modal effect
    let overlay = Block::default().style(Style::default().bg(Color::Black).add_modifier(Modifier::DIM));
    f.render_widget(overlay, area);

    // Calculate centered area (70% width, 60% height)
    let popup_width = percent(area.width, 70).min(100);
    let popup_height = percent(area.height, 60).clamp(10.min(area.height), 30);
    let popup_area = Rect {
        x: area.x + area.width.saturating_sub(popup_width) / 2,
        y: area.y + area.height.saturating_sub(popup_height) / 2,
        width: popup_width,
        height: popup_height,
    };
    hits.popup = Some(popup_area);

    // Clear the popup area (removes the dim effect for the popup itself)
    f.render_widget(Clear, popup_area);

    let footer_hint = Line::from(vec![
        Span::styled(format!(" {}", vm.footer_hints.navigate), theme.key_hint().bold()),
        Span::styled(" navigate  ", theme.muted()),
        Span::styled(&vm.footer_hints.select, theme.key_hint().bold()),
        Span::styled(" select  ", theme.muted()),
        Span::styled(&vm.footer_hints.close, theme.key_hint().bold()),
        Span::styled(" close ", theme.muted()),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Search ({} destinations) ", vm.total_candidates))
        .title_style(theme.panel_title().add_modifier(Modifier::BOLD))
        .title_bottom(footer_hint)
        .title_alignment(Alignment::Center)
        .border_style(theme.panel_border().add_modifier(Modifier::BOLD))
        .style(theme.panel_background());
    f.render_widget(block, popup_area);

    let inner = popup_area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input box
            Constraint::Min(1),    // Sections or empty state
        ])
        .split(inner);

    render_input(screen, chunks[0], f, hits);

    match &vm.empty_message {
        Some(message) => render_empty(message, theme, chunks[1], f),
        None => render_sections(vm, theme, chunks[1], f, hits),
    }
}

/// `pct` percent of `len`, computed without overflowing u16
fn percent(len: u16, pct: u16) -> u16 {
    (u32::from(len) * u32::from(pct) / 100) as u16
}

fn render_input(screen: &Screen<'_>, area: Rect, f: &mut Frame, hits: &mut HitMap) {
    let theme = screen.theme;
    let text = screen.pending_query.unwrap_or(&screen.palette.input_text);

    let line = if text.is_empty() {
        Line::from(Span::styled(screen.placeholder, theme.muted().italic()))
    } else {
        Line::from(Span::styled(text, theme.text()))
    };
    let input = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.panel_border())
            .style(theme.input()),
    );
    f.render_widget(input, area);

    let field = area.inner(Margin {
        horizontal: 1,
        vertical: 1,
    });
    if field.width < 4 || field.height == 0 {
        return;
    }

    let close_button = Rect::new(field.right() - 2, field.y, 2, 1);
    f.render_widget(Paragraph::new(Span::styled("✕", theme.muted())), close_button);
    hits.close_button = Some(close_button);

    if screen.page.input_focused {
        let typed = Span::raw(text).width() as u16;
        f.set_cursor_position(Position::new(
            (field.x + typed).min(close_button.x.saturating_sub(1)),
            field.y,
        ));
    }
}

fn render_empty(message: &str, theme: &Theme, area: Rect, f: &mut Frame) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("No results found", theme.text().bold())),
        Line::from(Span::styled(message, theme.muted())),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_sections(vm: &PaletteViewModel, theme: &Theme, area: Rect, f: &mut Frame, hits: &mut HitMap) {
    let mut lines = Vec::new();
    for (i, section) in vm.sections.iter().enumerate() {
        if i > 0 {
            lines.push(BodyLine::Spacer);
        }
        lines.push(BodyLine::Header(section));
        lines.extend(section.rows.iter().map(BodyLine::Row));
    }

    // Scroll so the highlighted row stays visible
    let height = area.height as usize;
    let selected_line = lines
        .iter()
        .position(|line| matches!(line, BodyLine::Row(row) if row.is_selected));
    let offset = match selected_line {
        Some(line) if line >= height => line + 1 - height,
        _ => 0,
    };

    for (y, line) in (area.y..area.bottom()).zip(lines.iter().skip(offset)) {
        let line_area = Rect::new(area.x, y, area.width, 1);
        match line {
            BodyLine::Spacer => {}
            BodyLine::Header(section) => render_header(section, theme, line_area, f, hits),
            BodyLine::Row(row) => render_row(row, theme, line_area, f, hits),
        }
    }
}

fn render_header(section: &Section, theme: &Theme, area: Rect, f: &mut Frame, hits: &mut HitMap) {
    f.render_widget(
        Paragraph::new(Span::styled(section.title.to_uppercase(), theme.section_header())),
        area,
    );

    if section.rows.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled("nothing here yet", theme.muted().italic()))
                .alignment(Alignment::Right),
            area,
        );
    } else if section.clearable && area.width > 5 {
        let clear = Rect::new(area.right() - 5, area.y, 5, 1);
        f.render_widget(Paragraph::new(Span::styled("Clear", theme.danger())), clear);
        hits.clear_button = Some(clear);
    }
}

fn render_row(row: &PaletteRow, theme: &Theme, area: Rect, f: &mut Frame, hits: &mut HitMap) {
    let base = if row.is_selected {
        theme.selected_row()
    } else {
        theme.text()
    };

    let mut spans = vec![
        Span::styled(if row.is_selected { "› " } else { "  " }, base),
        Span::styled(format!("{} ", icon(row.icon)), base.patch(theme.muted())),
    ];
    spans.extend(row.segments().into_iter().map(|(text, matched)| {
        if matched {
            Span::styled(text, base.patch(theme.matched_text()))
        } else {
            Span::styled(text, base)
        }
    }));
    f.render_widget(Paragraph::new(Line::from(spans)).style(base), area);

    let remove_button = (row.removable && area.width > 3).then(|| {
        let button = Rect::new(area.right() - 3, area.y, 3, 1);
        f.render_widget(
            Paragraph::new(Span::styled(" ✕ ", base.patch(theme.muted()))),
            button,
        );
        (button, row.label.clone())
    });

    hits.rows.push(RowHit {
        area,
        index: row.index,
        remove_button,
    });
}

fn icon(icon: RowIcon) -> &'static str {
    match icon {
        RowIcon::History => "↺",
        RowIcon::Mountain => "▲",
        RowIcon::Marker => "◆",
        RowIcon::Arrow => "→",
    }
}
