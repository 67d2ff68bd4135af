//! Table layout for the user list

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    widgets::{Cell, Row, Table, Widget},
};

use userdeck_core::User;

use crate::theme::styles;

/// Users of the current page as a three-column table.
pub struct UserTable<'a> {
    users: &'a [User],
    selected: usize,
}

impl<'a> UserTable<'a> {
    pub fn new(users: &'a [User], selected: usize) -> Self {
        Self { users, selected }
    }
}

impl Widget for UserTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let header = Row::new(vec![
            Cell::from("ID"),
            Cell::from("Name"),
            Cell::from("Email"),
        ])
        .style(styles::accent_bold());

        let rows = self.users.iter().enumerate().map(|(i, user)| {
            let row = Row::new(vec![
                Cell::from(user.id.to_string()),
                Cell::from(user.name.clone()),
                Cell::from(user.email.clone()),
            ]);
            if i == self.selected {
                row.style(styles::selection())
            } else {
                row.style(styles::text_primary())
            }
        });

        let widths = [
            Constraint::Length(6),
            Constraint::Percentage(40),
            Constraint::Percentage(50),
        ];

        Table::new(rows, widths)
            .header(header)
            .block(styles::panel(" Users ", false))
            .render(area, buf);
    }
}
