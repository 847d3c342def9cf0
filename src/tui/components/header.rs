//! # Header Component
//!
//! Top bar of the main pane showing which view is active and the current
//! status message.
//!
//! ## Conditional Formatting
//!
//! - **Chat**: `"◆ Cloude"` over `"Your AI assistant"`
//! - **Analytics**: `"▥ Analytics Dashboard"` over `"Data visualization"`
//!
//! A non-empty status message (e.g. `"Cloude is typing..."`) is drawn
//! right-aligned on the title row.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::state::ViewMode;
use crate::tui::component::Component;

/// Title, subtitle and bottom border.
pub const HEADER_HEIGHT: u16 = 3;

/// Stateless header. All fields are props.
pub struct Header<'a> {
    pub title: &'a str,
    pub view: ViewMode,
    pub status_message: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, view: ViewMode, status_message: &'a str) -> Self {
        Self {
            title,
            view,
            status_message,
        }
    }

    fn icon(&self) -> &'static str {
        match self.view {
            ViewMode::Chat => "◆",
            ViewMode::Analytics => "▥",
        }
    }
}

impl<'a> Component for Header<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [title_row, subtitle_row] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(inner);

        let title = Line::from(vec![
            Span::styled(format!(" {} ", self.icon()), Style::default().fg(Color::LightBlue)),
            Span::styled(self.title, Style::default().add_modifier(Modifier::BOLD)),
        ]);
        frame.render_widget(Paragraph::new(title), title_row);

        if !self.status_message.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    format!("{} ", self.status_message),
                    Style::default().fg(Color::Yellow),
                ))
                .alignment(Alignment::Right),
                title_row,
            );
        }

        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("   {}", self.view.subtitle()),
                Style::default().fg(Color::DarkGray),
            )),
            subtitle_row,
        );
    }
}
