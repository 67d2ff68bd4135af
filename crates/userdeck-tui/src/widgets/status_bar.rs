//! Status bar widget
//!
//! Shows the load phase, pagination position, result counts, the
//! active layout, and the current location.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use userdeck_app::{AppState, LoadPhase, Route};

use crate::theme::{palette, styles};

/// Status bar showing application state
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn phase_indicator(&self) -> Span<'static> {
        match self.state.route() {
            Route::Detail(_) => {
                let loading = self
                    .state
                    .detail
                    .as_ref()
                    .map(|d| d.loading)
                    .unwrap_or(true);
                if loading {
                    Span::styled("↻ Loading", styles::status_yellow())
                } else {
                    Span::styled("● Detail", Style::default().fg(palette::STATUS_GREEN))
                }
            }
            Route::List => match self.state.list.phase {
                LoadPhase::Loading => Span::styled("↻ Loading", styles::status_yellow()),
                LoadPhase::Loaded => Span::styled(
                    "● Ready",
                    Style::default()
                        .fg(palette::STATUS_GREEN)
                        .add_modifier(Modifier::BOLD),
                ),
                LoadPhase::Error => Span::styled("✗ Error", styles::status_red()),
            },
        }
    }

    fn list_summary(&self) -> Vec<Span<'static>> {
        let list = &self.state.list;
        let sep = Span::styled("  │  ", styles::text_muted());

        let mut spans = vec![
            sep.clone(),
            Span::styled(
                format!("Page {}/{}", list.page, list.page_count()),
                styles::text_secondary(),
            ),
            sep.clone(),
            Span::styled(
                format!("{} of {} users", list.filtered.len(), list.users.len()),
                styles::text_secondary(),
            ),
            sep,
            Span::styled(list.view_mode.as_key().to_string(), styles::accent()),
        ];
        if !list.search_input.is_empty() {
            spans.push(Span::styled(
                format!("  search: {}", list.search_input),
                styles::text_secondary(),
            ));
        }
        spans
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" "), self.phase_indicator()];

        if self.state.route() == Route::List && self.state.list.phase == LoadPhase::Loaded {
            spans.extend(self.list_summary());
        }

        spans.push(Span::styled(
            format!("  {}", self.state.router.location()),
            styles::text_muted(),
        ));

        Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::TOP))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{loaded_test_state, TestTerminal};
    use userdeck_app::Message;

    #[test]
    fn test_loaded_list_shows_counts_and_location() {
        let state = loaded_test_state();
        let mut term = TestTerminal::new();
        term.render_widget(StatusBar::new(&state), term.area());

        assert!(term.buffer_contains("● Ready"));
        assert!(term.buffer_contains("Page 1/1"));
        assert!(term.buffer_contains("3 of 3 users"));
        assert!(term.buffer_contains("table"));
    }

    #[test]
    fn test_error_phase_shows_error() {
        let mut state = loaded_test_state();
        state.list.phase = LoadPhase::Error;

        let mut term = TestTerminal::new();
        term.render_widget(StatusBar::new(&state), term.area());
        assert!(term.buffer_contains("✗ Error"));
    }

    #[test]
    fn test_search_term_appears_in_location() {
        let mut state = loaded_test_state();
        userdeck_app::handler::update(
            &mut state,
            Message::SearchCommitted {
                term: "ervin".to_string(),
            },
        );

        let mut term = TestTerminal::new();
        term.render_widget(StatusBar::new(&state), term.area());
        assert!(term.buffer_contains("/?search=ervin"));
    }
}
