//! User detail widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use userdeck_app::DetailState;
use userdeck_core::User;

use crate::theme::styles;

/// Detail screen body: loading, a loaded user, or "no user".
pub struct UserDetail<'a> {
    state: &'a DetailState,
    spinner: &'static str,
}

impl<'a> UserDetail<'a> {
    pub fn new(state: &'a DetailState, spinner: &'static str) -> Self {
        Self { state, spinner }
    }

    fn field(label: &str, value: String) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{label:>10}  "), styles::text_muted()),
            Span::styled(value, styles::text_primary()),
        ])
    }

    fn user_lines(user: &User) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(user.name.clone(), styles::accent_bold())),
            Line::default(),
            Self::field("ID", user.id.to_string()),
            Self::field("Email", user.email.clone()),
        ];

        // Optional fields carried along in the response body
        if let Some(phone) = user.extra_str("phone") {
            lines.push(Self::field("Phone", phone.to_string()));
        }
        if let Some(website) = user.extra_str("website") {
            lines.push(Self::field("Website", website.to_string()));
        }
        if let Some(company) = user
            .extra
            .get("company")
            .and_then(|v| v.get("name"))
            .and_then(|v| v.as_str())
        {
            lines.push(Self::field("Company", company.to_string()));
        }
        if let Some(city) = user
            .extra
            .get("address")
            .and_then(|v| v.get("city"))
            .and_then(|v| v.as_str())
        {
            lines.push(Self::field("City", city.to_string()));
        }

        lines
    }
}

impl Widget for UserDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = if self.state.loading {
            vec![Line::from(Span::styled(
                format!("{} Loading user {}...", self.spinner, self.state.user_id),
                styles::text_secondary(),
            ))]
        } else {
            match &self.state.user {
                Some(user) => Self::user_lines(user),
                None => vec![Line::from(Span::styled(
                    "No user found.",
                    styles::status_yellow(),
                ))],
            }
        };

        Paragraph::new(lines)
            .block(styles::panel(" User ", false))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use serde_json::json;

    #[test]
    fn test_loading_state() {
        let state = DetailState::new(3);
        let mut term = TestTerminal::new();
        term.render_widget(UserDetail::new(&state, "⠋"), term.area());

        assert!(term.buffer_contains("Loading user 3"));
    }

    #[test]
    fn test_loaded_user_shows_fields() {
        let mut user = User::new(1, "Leanne Graham", "Sincere@april.biz");
        user.extra
            .insert("phone".to_string(), json!("1-770-736-8031"));
        user.extra
            .insert("company".to_string(), json!({"name": "Romaguera-Crona"}));

        let mut state = DetailState::new(1);
        state.loading = false;
        state.user = Some(user);

        let mut term = TestTerminal::new();
        term.render_widget(UserDetail::new(&state, ""), term.area());

        assert!(term.buffer_contains("Leanne Graham"));
        assert!(term.buffer_contains("Sincere@april.biz"));
        assert!(term.buffer_contains("1-770-736-8031"));
        assert!(term.buffer_contains("Romaguera-Crona"));
    }

    #[test]
    fn test_missing_user_shows_placeholder() {
        let mut state = DetailState::new(99);
        state.loading = false;

        let mut term = TestTerminal::new();
        term.render_widget(UserDetail::new(&state, ""), term.area());

        assert!(term.buffer_contains("No user found."));
    }
}
