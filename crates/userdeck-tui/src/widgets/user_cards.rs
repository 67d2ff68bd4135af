//! Card layout for the user list

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use userdeck_core::User;

use crate::theme::styles;

/// Height of a single card, borders included.
const CARD_HEIGHT: u16 = 4;

/// Users of the current page as a stack of small cards.
pub struct UserCards<'a> {
    users: &'a [User],
    selected: usize,
}

impl<'a> UserCards<'a> {
    pub fn new(users: &'a [User], selected: usize) -> Self {
        Self { users, selected }
    }
}

impl Widget for UserCards<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut y = area.y;
        for (i, user) in self.users.iter().enumerate() {
            if y + CARD_HEIGHT > area.y + area.height {
                break;
            }
            let card_area = Rect::new(area.x, y, area.width, CARD_HEIGHT);

            let name_style = if i == self.selected {
                styles::selection()
            } else {
                styles::accent_bold()
            };
            let lines = vec![
                Line::from(Span::styled(user.name.clone(), name_style)),
                Line::from(Span::styled(user.email.clone(), styles::text_secondary())),
            ];

            Paragraph::new(lines)
                .block(styles::panel(
                    &format!(" #{} ", user.id),
                    i == self.selected,
                ))
                .render(card_area, buf);

            y += CARD_HEIGHT;
        }
    }
}
