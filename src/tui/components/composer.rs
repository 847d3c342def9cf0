//! # Composer Component
//!
//! The multi-line text box at the bottom of the chat pane.
//!
//! ## Responsibilities
//!
//! - Capture text input, paste and editing keys
//! - Word-wrap the buffer like a sent bubble and keep the cursor visible
//! - Emit `Submit` on Enter (the controller decides whether it goes anywhere)
//!
//! ## State Management
//!
//! The buffer mirrors `app.composer.draft`. Every edit is reported as
//! `ComposerEvent::Edited` so the loop can forward it to the core, and the
//! loop pushes the draft back with [`ComposerBox::set_text`] whenever the
//! core changes it (suggestion applied, message sent, conversation reset).
//! Submitting does not clear the buffer here: a suppressed submit must leave
//! the draft where it was.

use std::ops::Range;

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::tui::component::{Component, EventHandler};
use crate::tui::components::text_wrap::visual_lines;
use crate::tui::event::TuiEvent;

/// Border (2) + padding (2) consumed horizontally
const HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom borders
const VERTICAL_OVERHEAD: u16 = 2;
/// Content lines shown before the box starts scrolling internally
const MAX_VISIBLE_LINES: u16 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposerEvent {
    /// Enter pressed with non-blank text
    Submit(String),
    /// Buffer content changed
    Edited,
    /// Cursor already on the first/last line; the parent may scroll instead
    AtTop,
    AtBottom,
}

pub struct ComposerBox {
    pub buffer: String,
    /// Shown dimmed while the buffer is empty
    pub placeholder: String,
    /// Whether a reply is pending (prop)
    pub busy: bool,
    /// Byte offset into `buffer`, always on a char boundary
    cursor: usize,
    scroll_offset: u16,
    last_inner_width: u16,
}

impl ComposerBox {
    pub fn new(placeholder: String) -> Self {
        Self {
            buffer: String::new(),
            placeholder,
            busy: false,
            cursor: 0,
            scroll_offset: 0,
            last_inner_width: 76,
        }
    }

    /// Replace the buffer, leaving the cursor at the end.
    pub fn set_text(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.cursor = self.buffer.len();
        self.scroll_offset = 0;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Box height for the given outer width, borders included.
    pub fn calculate_height(&self, outer_width: u16) -> u16 {
        let width = outer_width.saturating_sub(HORIZONTAL_OVERHEAD);
        line_count(&self.buffer, self.cursor, width).min(MAX_VISIBLE_LINES) + VERTICAL_OVERHEAD
    }

    fn insert_str(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    fn move_vertically(&mut self, down: bool) -> bool {
        let width = self.last_inner_width;
        let lines = visual_lines(&self.buffer, width);
        let (row, col) = cursor_row_col(&self.buffer, &lines, self.cursor, width);

        let target = if down {
            row + 1
        } else if row == 0 {
            return false;
        } else {
            row - 1
        };
        let Some(range) = lines.get(target) else {
            return false;
        };

        self.cursor = offset_at_column(&self.buffer, range.clone(), col);
        true
    }

    fn keep_cursor_visible(&mut self, width: u16) {
        let lines = visual_lines(&self.buffer, width);
        let (row, _) = cursor_row_col(&self.buffer, &lines, self.cursor, width);
        let row = row as u16;

        if row < self.scroll_offset {
            self.scroll_offset = row;
        } else if row >= self.scroll_offset + MAX_VISIBLE_LINES {
            self.scroll_offset = row + 1 - MAX_VISIBLE_LINES;
        }
        let total = line_count(&self.buffer, self.cursor, width);
        let max_scroll = total.saturating_sub(MAX_VISIBLE_LINES);
        self.scroll_offset = self.scroll_offset.min(max_scroll);
    }
}

impl Component for ComposerBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = area.width.saturating_sub(HORIZONTAL_OVERHEAD);
        self.last_inner_width = width;
        self.keep_cursor_visible(width);

        let title = if self.busy {
            " Message (waiting for reply) "
        } else {
            " Message "
        };
        let border_style = if self.busy {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Blue)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(title)
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(self.placeholder.as_str())
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
        } else {
            let lines: Vec<Line> = visual_lines(&self.buffer, width)
                .into_iter()
                .skip(self.scroll_offset as usize)
                .take(MAX_VISIBLE_LINES as usize)
                .map(|range| Line::raw(&self.buffer[range]))
                .collect();
            Paragraph::new(lines)
        };

        frame.render_widget(paragraph.block(block), area);

        if width > 0 && inner.height > 0 {
            let lines = visual_lines(&self.buffer, width);
            let (row, col) = cursor_row_col(&self.buffer, &lines, self.cursor, width);
            let visible_row = (row as u16).saturating_sub(self.scroll_offset);
            frame.set_cursor_position(Position {
                x: inner.x + col.min(width.saturating_sub(1)),
                y: inner.y + visible_row.min(inner.height - 1),
            });
        }
    }
}

impl EventHandler for ComposerBox {
    type Event = ComposerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut encoded = [0u8; 4];
                self.insert_str(c.encode_utf8(&mut encoded));
                Some(ComposerEvent::Edited)
            }
            TuiEvent::Paste(text) => {
                // Terminals send CR line endings in bracketed paste
                let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
                self.insert_str(&normalized);
                Some(ComposerEvent::Edited)
            }
            TuiEvent::Backspace => {
                let prev = self.buffer[..self.cursor].char_indices().next_back()?.0;
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                Some(ComposerEvent::Edited)
            }
            TuiEvent::Delete => {
                let c = self.buffer[self.cursor..].chars().next()?;
                self.buffer.drain(self.cursor..self.cursor + c.len_utf8());
                Some(ComposerEvent::Edited)
            }
            TuiEvent::CursorLeft => {
                self.cursor = self.buffer[..self.cursor].char_indices().next_back()?.0;
                None
            }
            TuiEvent::CursorRight => {
                let c = self.buffer[self.cursor..].chars().next()?;
                self.cursor += c.len_utf8();
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = self.buffer[..self.cursor].rfind('\n').map_or(0, |i| i + 1);
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer[self.cursor..]
                    .find('\n')
                    .map_or(self.buffer.len(), |i| self.cursor + i);
                None
            }
            TuiEvent::CursorUp => (!self.move_vertically(false)).then_some(ComposerEvent::AtTop),
            TuiEvent::CursorDown => {
                (!self.move_vertically(true)).then_some(ComposerEvent::AtBottom)
            }
            TuiEvent::Submit => {
                (!self.buffer.trim().is_empty()).then(|| ComposerEvent::Submit(self.buffer.clone()))
            }
            _ => None,
        }
    }
}

// ============================================================================
// Wrapping helpers
// ============================================================================

/// Visual (row, column) of the byte offset `pos`.
///
/// A cursor sitting right after a completely full line is shown at the start
/// of the following row.
fn cursor_row_col(text: &str, lines: &[Range<usize>], pos: usize, width: u16) -> (usize, u16) {
    let row = lines
        .iter()
        .rposition(|range| range.start <= pos)
        .unwrap_or(0);
    let start = lines.get(row).map_or(0, |r| r.start);
    let col: usize = text[start..pos].chars().map(|c| c.width().unwrap_or(0)).sum();

    if width > 0 && col >= usize::from(width) {
        (row + 1, 0)
    } else {
        (row, col as u16)
    }
}

/// Visual line count including the phantom row a wrapped-off cursor occupies.
fn line_count(text: &str, cursor: usize, width: u16) -> u16 {
    let lines = visual_lines(text, width);
    let (row, _) = cursor_row_col(text, &lines, cursor, width);
    lines.len().max(row + 1) as u16
}

/// Byte offset within `range` closest to display column `col`.
fn offset_at_column(text: &str, range: Range<usize>, col: u16) -> usize {
    let mut used = 0u16;
    for (i, c) in text[range.clone()].char_indices() {
        let w = c.width().unwrap_or(0) as u16;
        if used + w > col {
            return range.start + i;
        }
        used += w;
    }
    range.end
}
