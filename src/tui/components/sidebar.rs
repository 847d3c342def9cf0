//! # Sidebar Component
//!
//! Left column: product name, the "New Chat" and chart toggle buttons, and
//! the user footer. Stateless; the button rects are exposed through
//! [`SidebarLayout`] so the event loop can hit-test mouse clicks against the
//! same geometry that was drawn.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::state::ViewMode;
use crate::tui::component::Component;

const BUTTON_HEIGHT: u16 = 3;
const BRAND_HEIGHT: u16 = 2;
const FOOTER_HEIGHT: u16 = 2;

/// Geometry of the sidebar for a given area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarLayout {
    pub brand: Rect,
    pub new_chat: Rect,
    pub toggle_view: Rect,
    pub footer: Rect,
}

impl SidebarLayout {
    pub fn compute(area: Rect) -> Self {
        // Leave room for the right-hand border
        let inner = Rect {
            width: area.width.saturating_sub(1),
            ..area
        }
        .inner(Margin::new(1, 1));
        let [brand, new_chat, toggle_view, _, footer] = Layout::vertical([
            Constraint::Length(BRAND_HEIGHT),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .areas(inner);

        Self {
            brand,
            new_chat,
            toggle_view,
            footer,
        }
    }
}

pub struct Sidebar<'a> {
    pub assistant_name: &'a str,
    pub user_name: &'a str,
    pub view: ViewMode,
}

impl<'a> Sidebar<'a> {
    pub fn new(assistant_name: &'a str, user_name: &'a str, view: ViewMode) -> Self {
        Self {
            assistant_name,
            user_name,
            view,
        }
    }

    fn toggle_label(&self) -> &'static str {
        match self.view {
            ViewMode::Chat => "Show Chart",
            ViewMode::Analytics => "Hide Chart",
        }
    }
}

fn button<'b>(label: &'b str, hint: &'b str, active: bool) -> Paragraph<'b> {
    let (border, text) = if active {
        (
            Style::default().fg(Color::Blue),
            Style::default().fg(Color::White).bg(Color::Blue).add_modifier(Modifier::BOLD),
        )
    } else {
        (Style::default().fg(Color::DarkGray), Style::default())
    };

    Paragraph::new(Line::from(vec![
        Span::styled(label, text),
        Span::styled(format!("  {hint}"), Style::default().fg(Color::DarkGray)),
    ]))
    .block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border),
    )
}

/// Cut `text` down to `max` display columns, marking the cut with an ellipsis.
fn fit(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

impl<'a> Component for Sidebar<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Block::default()
                .borders(Borders::RIGHT)
                .border_style(Style::default().fg(Color::DarkGray))
                .style(Style::default().bg(Color::Black)),
            area,
        );

        let layout = SidebarLayout::compute(area);
        let name_width = usize::from(layout.brand.width.saturating_sub(2));

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("◆ ", Style::default().fg(Color::LightBlue)),
                Span::styled(
                    fit(self.assistant_name, name_width),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ])),
            layout.brand,
        );

        frame.render_widget(button("+ New Chat", "^N", true), layout.new_chat);
        frame.render_widget(
            button(
                self.toggle_label(),
                "Tab",
                self.view == ViewMode::Analytics,
            ),
            layout.toggle_view,
        );

        let initial = self
            .user_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default();
        let user_width = usize::from(layout.footer.width.saturating_sub(4));
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(
                    format!("({initial})"),
                    Style::default().fg(Color::LightBlue),
                ),
                Span::raw(" "),
                Span::raw(fit(self.user_name, user_width)),
            ]))
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(Color::DarkGray)),
            ),
            layout.footer,
        );
    }
}
