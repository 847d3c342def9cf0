//! # MessageList Component
//!
//! The conversation thread: bubbles top to bottom, the typing indicator
//! under the last one while a reply is pending, and a scroll position that
//! follows new messages until the user scrolls away.
//!
//! `MessageList` is rebuilt every frame around a borrowed [`ThreadState`],
//! which lives in `TuiState` and survives between frames. Messages are never
//! edited after they are appended, so measured heights only go stale when
//! the width changes or the conversation is reset.

use std::ops::Range;

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::message::ConversationHistory;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::message::MessageBubble;
use crate::tui::event::TuiEvent;

/// Bordered indicator with a single text row.
const TYPING_HEIGHT: u16 = 3;
const TYPING_MAX_WIDTH: u16 = 40;
/// Blank rows under each bubble.
const BUBBLE_GAP: u16 = 1;

/// Scroll position and measurements for the thread.
pub struct ThreadState {
    pub scroll: ScrollViewState,
    pub rows: RowIndex,
    /// Keep the newest message in view as the thread grows.
    pub follow: bool,
    /// Viewport height from the last render.
    pub viewport: u16,
}

impl Default for ThreadState {
    fn default() -> Self {
        Self {
            scroll: ScrollViewState::default(),
            rows: RowIndex::default(),
            follow: true,
            viewport: 0,
        }
    }
}

impl ThreadState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> u16 {
        self.scroll.offset().y
    }

    fn bottom_offset(&self) -> u16 {
        self.rows.total().saturating_sub(self.viewport)
    }

    fn set_offset(&mut self, y: u16) {
        let y = y.min(self.bottom_offset());
        self.scroll.set_offset(Position::new(0, y));
    }

    /// Move by `delta` rows. Reaching the bottom turns following back on;
    /// moving up turns it off.
    pub fn scroll_by(&mut self, delta: i32) {
        let target = (i32::from(self.offset()) + delta).clamp(0, i32::from(u16::MAX)) as u16;
        self.set_offset(target);
        self.follow = delta > 0 && self.offset() >= self.bottom_offset();
    }

    fn page(&self) -> i32 {
        i32::from(self.viewport.saturating_sub(1).max(1))
    }
}

impl EventHandler for ThreadState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        let delta = match event {
            TuiEvent::ScrollUp => -1,
            TuiEvent::ScrollDown => 1,
            TuiEvent::ScrollPageUp => -self.page(),
            TuiEvent::ScrollPageDown => self.page(),
            _ => return None,
        };
        self.scroll_by(delta);
        None
    }
}

/// Scrollable conversation view, created fresh each frame.
pub struct MessageList<'a> {
    pub state: &'a mut ThreadState,
    pub history: &'a ConversationHistory,
    pub assistant_name: &'a str,
    pub busy: bool,
    pub tick: usize,
}

impl<'a> MessageList<'a> {
    pub fn new(
        state: &'a mut ThreadState,
        history: &'a ConversationHistory,
        assistant_name: &'a str,
        busy: bool,
        tick: usize,
    ) -> Self {
        Self {
            state,
            history,
            assistant_name,
            busy,
            tick,
        }
    }
}

impl<'a> Component for MessageList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // One column stays free for the scrollbar
        let width = area.width.saturating_sub(1);

        self.state.rows.measure(self.history, width);
        self.state.rows.footer = if self.busy { TYPING_HEIGHT } else { 0 };
        self.state.viewport = area.height;

        let offset = if self.state.follow {
            self.state.bottom_offset()
        } else {
            self.state.offset()
        };
        self.state.set_offset(offset);

        let mut view = ScrollView::new(Size::new(width, self.state.rows.total()))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let rows = &self.state.rows;
        for i in rows.visible(self.state.offset(), area.height) {
            if let Some(message) = self.history.get(i) {
                let rect = Rect::new(0, rows.tops[i], width, rows.height_of(i));
                view.render_widget(MessageBubble::new(message, self.assistant_name), rect);
            }
        }

        if self.busy {
            let rect = Rect::new(0, rows.bubbles_end, width.min(TYPING_MAX_WIDTH), TYPING_HEIGHT);
            view.render_widget(typing_indicator(self.assistant_name, self.tick), rect);
        }

        frame.render_stateful_widget(view, area, &mut self.state.scroll);
    }
}

/// "Cloude is typing..." with one of three dots lit per tick.
fn typing_indicator(assistant_name: &str, tick: usize) -> Paragraph<'static> {
    let lit = tick % 3;
    let mut spans: Vec<Span> = (0..3)
        .map(|i| {
            let style = if i == lit {
                Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Span::styled("● ", style)
        })
        .collect();
    spans.push(Span::styled(
        format!("{assistant_name} is typing..."),
        Style::default().fg(Color::DarkGray),
    ));

    Paragraph::new(Line::from(spans)).block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
}

/// Top row of every bubble in thread coordinates.
#[derive(Debug, Default)]
pub struct RowIndex {
    pub tops: Vec<u16>,
    /// First row below the last bubble and its gap.
    pub bubbles_end: u16,
    /// Rows reserved after the bubbles (typing indicator).
    pub footer: u16,
    width: u16,
}

impl RowIndex {
    /// Measure new messages; start over when the width changed or the
    /// history got shorter than what was measured.
    pub fn measure(&mut self, history: &ConversationHistory, width: u16) {
        if width != self.width || history.len() < self.tops.len() {
            self.tops.clear();
            self.bubbles_end = 0;
            self.width = width;
        }
        for message in history.iter().skip(self.tops.len()) {
            self.tops.push(self.bubbles_end);
            let rows = MessageBubble::calculate_height(message, width) + BUBBLE_GAP;
            self.bubbles_end = self.bubbles_end.saturating_add(rows);
        }
    }

    pub fn total(&self) -> u16 {
        self.bubbles_end.saturating_add(self.footer)
    }

    /// Bubble height without the gap.
    pub fn height_of(&self, index: usize) -> u16 {
        let next = self.tops.get(index + 1).copied().unwrap_or(self.bubbles_end);
        next.saturating_sub(self.tops[index]).saturating_sub(BUBBLE_GAP)
    }

    /// Bubbles that overlap rows `offset..offset + height`.
    pub fn visible(&self, offset: u16, height: u16) -> Range<usize> {
        let end_row = offset.saturating_add(height);
        let start = self.tops.partition_point(|&top| top <= offset).saturating_sub(1);
        let end = self.tops.partition_point(|&top| top < end_row);
        start..end.max(start)
    }
}
