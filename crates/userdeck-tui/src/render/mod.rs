//! Main render/view function (View in TEA pattern)

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use userdeck_app::{AppState, InputMode, LoadPhase, Route, ViewMode};

use crate::theme::styles;
use crate::widgets;


const SPINNER_FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

fn spinner(frame: usize) -> &'static str {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Render the complete UI (View function in TEA)
///
/// Pure rendering: derives everything from state, mutates nothing.
pub fn view(frame: &mut Frame, state: &AppState) {
    let [header_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(2),
    ])
    .areas(frame.area());

    match state.route() {
        Route::List => {
            frame.render_widget(widgets::Header::list(), header_area);
            render_list(frame, state, body_area);
        }
        Route::Detail(_) => {
            frame.render_widget(widgets::Header::detail(), header_area);
            render_detail(frame, state, body_area);
        }
    }

    frame.render_widget(widgets::StatusBar::new(state), status_area);
}

fn render_list(frame: &mut Frame, state: &AppState, area: Rect) {
    let [search_area, list_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

    let search_active = state.input_mode == InputMode::Search;
    frame.render_widget(
        widgets::SearchBar::new(&state.list.search_input, search_active),
        search_area,
    );

    match state.list.phase {
        LoadPhase::Loading => {
            let line = Line::from(Span::styled(
                format!("{} Loading users...", spinner(state.spinner_frame)),
                styles::text_secondary(),
            ));
            frame.render_widget(
                Paragraph::new(line).block(styles::panel(" Users ", false)),
                list_area,
            );
        }

        LoadPhase::Error => {
            let message = state
                .list
                .last_error
                .as_deref()
                .unwrap_or("something went wrong");
            let lines = vec![
                Line::from(Span::styled(
                    "Could not load users",
                    styles::status_red(),
                )),
                Line::from(Span::styled(message.to_string(), styles::text_secondary())),
                Line::default(),
                Line::from(vec![
                    Span::styled("press ", styles::text_muted()),
                    Span::styled("r", styles::keybinding()),
                    Span::styled(" to retry", styles::text_muted()),
                ]),
            ];
            frame.render_widget(
                Paragraph::new(lines).block(styles::panel(" Users ", false)),
                list_area,
            );
        }

        LoadPhase::Loaded if state.list.filtered.is_empty() => {
            let line = Line::from(Span::styled(
                "No users match the current search.",
                styles::status_yellow(),
            ));
            frame.render_widget(
                Paragraph::new(line).block(styles::panel(" Users ", false)),
                list_area,
            );
        }

        LoadPhase::Loaded => {
            let page = state.list.page_slice();
            match state.list.view_mode {
                ViewMode::Table => frame.render_widget(
                    widgets::UserTable::new(page, state.list.selected),
                    list_area,
                ),
                ViewMode::Card => frame.render_widget(
                    widgets::UserCards::new(page, state.list.selected),
                    list_area,
                ),
            }
        }
    }
}

fn render_detail(frame: &mut Frame, state: &AppState, area: Rect) {
    if let Some(detail) = &state.detail {
        frame.render_widget(
            widgets::UserDetail::new(detail, spinner(state.spinner_frame)),
            area,
        );
    }
}
