use ratatui::{prelude::*, style::palette::tailwind};

/// Application theme - centralized color and style management
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg_primary: Color,
    pub bg_panel: Color,
    pub bg_input: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Status colors
    pub status_danger: Color,

    // Selection colors
    pub selected_bg: Color,
    pub selected_fg: Color,

    /// Matched part of a label
    pub match_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            // Backgrounds
            bg_primary: tailwind::SLATE.c950,
            bg_panel: tailwind::SLATE.c800,
            bg_input: tailwind::SLATE.c900,

            // Text
            text_primary: tailwind::SLATE.c100,
            text_secondary: tailwind::SLATE.c200,
            text_muted: tailwind::SLATE.c400,

            // Accents
            accent_primary: tailwind::CYAN.c400,
            accent_secondary: tailwind::CYAN.c600,

            // Status
            status_danger: tailwind::RED.c400,

            // Selection
            selected_bg: tailwind::SLATE.c600,
            selected_fg: Color::White,

            match_fg: tailwind::AMBER.c300,
        }
    }

    // Prebuilt styles for common use cases

    /// Style for the page behind the palette
    pub fn page_background(&self) -> Style {
        Style::default().bg(self.bg_primary).fg(self.text_secondary)
    }

    /// Style for panel backgrounds
    pub fn panel_background(&self) -> Style {
        Style::default().bg(self.bg_panel)
    }

    /// Style for panel borders
    pub fn panel_border(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for panel titles
    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the search input box
    pub fn input(&self) -> Style {
        Style::default().fg(self.text_primary).bg(self.bg_input)
    }

    /// Style for section headers ("Recent", "Suggested", "Results")
    pub fn section_header(&self) -> Style {
        Style::default()
            .fg(self.text_muted)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key hints (e.g., "esc" in "esc close")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Regular text
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for the highlighted row
    pub fn selected_row(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the matched part of a label
    pub fn matched_text(&self) -> Style {
        Style::default()
            .fg(self.match_fg)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Style for destructive affordances (remove, clear)
    pub fn danger(&self) -> Style {
        Style::default().fg(self.status_danger)
    }
}
