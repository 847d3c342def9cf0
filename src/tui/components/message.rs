use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};

use crate::core::message::{Message, Role};
use crate::tui::components::text_wrap::wrap_options;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;
/// Assistant bubbles carry one extra row for the badges.
const BADGE_ROWS: u16 = 1;
/// User bubbles never shrink below this many columns.
const MIN_USER_BUBBLE_WIDTH: u16 = 24;

const BADGES: [&str; 2] = ["Helpful", "Clear"];

/// A stateless component that renders a single chat message as a bubble.
///
/// User messages sit on the right at two thirds of the available width;
/// assistant messages take the full width and end with a row of badges.
///
/// Heights are predicted with `textwrap` using options that match
/// `Paragraph`'s wrapping, so `MessageList` can lay the thread out without
/// rendering it first.
#[derive(Clone, Copy)]
pub struct MessageBubble<'a> {
    pub message: &'a Message,
    pub assistant_name: &'a str,
}

impl<'a> MessageBubble<'a> {
    pub fn new(message: &'a Message, assistant_name: &'a str) -> Self {
        Self {
            message,
            assistant_name,
        }
    }

    /// Width of the bubble inside a row of `row_width` columns.
    pub fn bubble_width(role: Role, row_width: u16) -> u16 {
        match role {
            Role::User => ((u32::from(row_width) * 2 / 3) as u16)
                .max(MIN_USER_BUBBLE_WIDTH)
                .min(row_width),
            Role::Assistant => row_width,
        }
    }

    /// Rect the bubble occupies within a row, right-aligned for the user.
    pub fn bubble_rect(role: Role, row: Rect) -> Rect {
        let width = Self::bubble_width(role, row.width);
        let x = match role {
            Role::User => row.x + row.width - width,
            Role::Assistant => row.x,
        };
        Rect::new(x, row.y, width, row.height)
    }

    /// Height of the bubble for a row of the given width.
    pub fn calculate_height(message: &Message, row_width: u16) -> u16 {
        let width = Self::bubble_width(message.role, row_width);
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            // Terminal too narrow for borders + padding; keep one row so the
            // message still occupies space.
            return 1;
        }

        let extra = match message.role {
            Role::User => 0,
            Role::Assistant => BADGE_ROWS,
        };

        let content = message.content.trim();
        if content.is_empty() {
            return VERTICAL_OVERHEAD + extra;
        }

        let lines = textwrap::wrap(content, wrap_options(content_width));

        (lines.len() as u16).max(1) + VERTICAL_OVERHEAD + extra
    }

    fn title(&self) -> String {
        let who = match self.message.role {
            Role::User => self.message.role.label(),
            Role::Assistant => self.assistant_name,
        };
        format!(" {} · {} ", who, self.message.timestamp.format("%H:%M"))
    }
}

pub fn role_style(role: Role) -> Style {
    match role {
        Role::User => Style::default().fg(Color::White).bg(Color::Blue),
        Role::Assistant => Style::default().fg(Color::Reset),
    }
}

fn border_style(role: Role) -> Style {
    match role {
        Role::User => Style::default().fg(Color::Blue),
        Role::Assistant => Style::default().fg(Color::Cyan).add_modifier(Modifier::DIM),
    }
}

fn badge_line() -> Line<'static> {
    let mut spans = Vec::with_capacity(BADGES.len() * 2);
    for badge in BADGES {
        spans.push(Span::styled(
            format!(" {badge} "),
            Style::default().fg(Color::Black).bg(Color::Gray),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

impl<'a> Widget for MessageBubble<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let role = self.message.role;
        let bubble = Self::bubble_rect(role, area);

        let block = Block::bordered()
            .title(self.title())
            .border_type(BorderType::Rounded)
            .border_style(border_style(role))
            .title_style(border_style(role))
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let mut inner = block.inner(bubble);
        block.style(role_style(role)).render(bubble, buf);

        if role == Role::Assistant && inner.height > BADGE_ROWS {
            let badge_area = Rect::new(inner.x, inner.bottom() - BADGE_ROWS, inner.width, BADGE_ROWS);
            badge_line().render(badge_area, buf);
            inner.height -= BADGE_ROWS;
        }

        Paragraph::new(self.message.content.trim())
            .style(role_style(role))
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn calculate_height_single_line_user() {
        let msg = Message::user("Hello");
        assert_eq!(MessageBubble::calculate_height(&msg, 80), 1 + VERTICAL_OVERHEAD);
    }

    #[test]
    fn calculate_height_assistant_includes_badges() {
        let msg = Message::assistant("Hello");
        assert_eq!(
            MessageBubble::calculate_height(&msg, 80),
            1 + VERTICAL_OVERHEAD + BADGE_ROWS
        );
    }

    #[test]
    fn calculate_height_whitespace_only_treated_as_empty() {
        let msg = Message::user("   \n\t  ");
        assert_eq!(MessageBubble::calculate_height(&msg, 80), VERTICAL_OVERHEAD);
    }

    #[test]
    fn calculate_height_zero_width_returns_minimum() {
        let msg = Message::assistant("Hello world");
        assert_eq!(MessageBubble::calculate_height(&msg, 0), 1);
    }

    #[test]
    fn calculate_height_wraps_at_width_boundary() {
        // Assistant bubble spans the row: width 9 → content width 5
        let msg = Message::assistant("Hello world");
        assert_eq!(
            MessageBubble::calculate_height(&msg, 9),
            2 + VERTICAL_OVERHEAD + BADGE_ROWS
        );
    }

    #[test]
    fn user_bubble_is_right_aligned() {
        let row = Rect::new(0, 0, 90, 3);
        let rect = MessageBubble::bubble_rect(Role::User, row);
        assert_eq!(rect.width, 60);
        assert_eq!(rect.right(), 90);
    }

    #[test]
    fn user_bubble_never_exceeds_row() {
        assert_eq!(MessageBubble::bubble_width(Role::User, 10), 10);
        assert_eq!(MessageBubble::bubble_width(Role::User, 30), MIN_USER_BUBBLE_WIDTH);
    }

    #[test]
    fn render_assistant_shows_name_and_badges() {
        let backend = TestBackend::new(60, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        let msg = Message::assistant("Here's how I would approach this");

        terminal
            .draw(|f| f.render_widget(MessageBubble::new(&msg, "Cloude"), f.area()))
            .unwrap();

        let text: String = terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Cloude"));
        assert!(text.contains("Helpful"));
        assert!(text.contains("Clear"));
        assert!(text.contains("approach"));
    }
}
