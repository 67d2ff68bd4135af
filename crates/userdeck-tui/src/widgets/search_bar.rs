//! Search box widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// One-line search box. The border lights up while the box has input
/// focus, and a block cursor marks the insertion point.
pub struct SearchBar<'a> {
    value: &'a str,
    active: bool,
}

impl<'a> SearchBar<'a> {
    pub fn new(value: &'a str, active: bool) -> Self {
        Self { value, active }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(self.value.to_string(), styles::text_primary())];
        if self.active {
            spans.push(Span::styled("█", styles::accent()));
        } else if self.value.is_empty() {
            spans.push(Span::styled(
                "press / to search by name or email",
                styles::text_muted(),
            ));
        }

        Paragraph::new(Line::from(spans))
            .block(styles::panel(" Search ", self.active))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_shows_typed_value() {
        let mut term = TestTerminal::new();
        term.render_widget(SearchBar::new("ervin", true), term.area());
        assert!(term.buffer_contains("ervin"));
    }

    #[test]
    fn test_empty_inactive_shows_hint() {
        let mut term = TestTerminal::new();
        term.render_widget(SearchBar::new("", false), term.area());
        assert!(term.buffer_contains("press / to search"));
    }

    #[test]
    fn test_active_shows_cursor() {
        let mut term = TestTerminal::new();
        term.render_widget(SearchBar::new("le", true), term.area());
        assert!(term.buffer_contains("le█"));
    }
}
