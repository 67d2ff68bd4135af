//! Header bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::theme::{palette, styles};

/// Header widget displaying the app title and key hints for the
/// active screen.
pub struct Header {
    hints: &'static [(&'static str, &'static str)],
}

impl Header {
    /// Header for the user list screen.
    pub fn list() -> Self {
        Self {
            hints: &[
                ("/", "Search"),
                ("t/c", "View"),
                ("↵", "Open"),
                ("q", "Quit"),
            ],
        }
    }

    /// Header for the user detail screen.
    pub fn detail() -> Self {
        Self {
            hints: &[("esc", "Back"), ("q", "Quit")],
        }
    }
}

impl Widget for Header {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = Style::default()
            .fg(palette::ACCENT)
            .add_modifier(Modifier::BOLD);
        let dim = styles::text_muted();
        let key = styles::keybinding();

        let mut spans = vec![Span::styled(" userdeck", title), Span::raw("   ")];
        for (k, label) in self.hints {
            spans.push(Span::styled("[", dim));
            spans.push(Span::styled(*k, key));
            spans.push(Span::styled(format!("] {}  ", label), dim));
        }

        Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::BOTTOM))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_list_header_shows_title_and_hints() {
        let mut term = TestTerminal::new();
        term.render_widget(Header::list(), term.area());

        assert!(term.buffer_contains("userdeck"));
        assert!(term.buffer_contains("Search"));
        assert!(term.buffer_contains("Quit"));
    }

    #[test]
    fn test_detail_header_shows_back_hint() {
        let mut term = TestTerminal::new();
        term.render_widget(Header::detail(), term.area());

        assert!(term.buffer_contains("Back"));
        assert!(!term.buffer_contains("Search"));
    }
}
