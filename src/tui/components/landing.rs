//! # Landing Page Component
//!
//! Shown in the chat pane while the conversation is empty: a greeting and a
//! grid of suggestion cards. Selecting a card fills the draft.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::tui::component::Component;

const CARD_HEIGHT: u16 = 4;
const CARD_COLUMNS: usize = 2;
const GRID_MAX_WIDTH: u16 = 76;
const GREETING_HEIGHT: u16 = 4;

pub struct LandingPage<'a> {
    pub assistant_name: &'a str,
    pub suggestions: &'a [String],
}

impl<'a> LandingPage<'a> {
    pub fn new(assistant_name: &'a str, suggestions: &'a [String]) -> Self {
        Self {
            assistant_name,
            suggestions,
        }
    }

    fn rows(count: usize) -> u16 {
        count.div_ceil(CARD_COLUMNS) as u16
    }

    /// Splits the pane into the greeting area and the card grid area.
    fn split(area: Rect, count: usize) -> (Rect, Rect) {
        let grid_height = Self::rows(count) * CARD_HEIGHT;
        let [greeting, _, grid] = Layout::vertical([
            Constraint::Length(GREETING_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(grid_height),
        ])
        .flex(Flex::Center)
        .areas(area);
        (greeting, grid)
    }

    /// Screen rects of each suggestion card, in suggestion order.
    /// Used both for rendering and for mouse hit testing.
    pub fn card_areas(area: Rect, count: usize) -> Vec<Rect> {
        if count == 0 {
            return Vec::new();
        }
        let (_, grid) = Self::split(area, count);
        let [grid] = Layout::horizontal([Constraint::Max(GRID_MAX_WIDTH)])
            .flex(Flex::Center)
            .areas(grid);

        let rows = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); Self::rows(count) as usize])
            .split(grid);

        rows.iter()
            .flat_map(|row| {
                Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
                    .spacing(1)
                    .split(*row)
                    .to_vec()
            })
            .take(count)
            .collect()
    }
}

impl<'a> Component for LandingPage<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (greeting_area, _) = Self::split(area, self.suggestions.len());

        let greeting = vec![
            Line::from(Span::styled(
                "◆",
                Style::default().fg(Color::LightBlue).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("Hello! I'm {}", self.assistant_name),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "How can I help you today?",
                Style::default().fg(Color::Gray),
            )),
        ];
        frame.render_widget(
            Paragraph::new(greeting).alignment(Alignment::Center),
            greeting_area,
        );

        for (i, (card, prompt)) in Self::card_areas(area, self.suggestions.len())
            .into_iter()
            .zip(self.suggestions)
            .enumerate()
        {
            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    format!(" F{} ", i + 1),
                    Style::default().fg(Color::DarkGray),
                ));
            frame.render_widget(
                Paragraph::new(prompt.as_str())
                    .wrap(Wrap { trim: true })
                    .block(block),
                card,
            );
        }
    }
}
