//! Screen layout.
//!
//! ```text
//! ┌──────────┬──────────────────────────────────────┐
//! │ sidebar  │ header                               │
//! │          ├──────────────────────────────────────┤
//! │ New Chat │ chat: thread / landing               │
//! │ Chart    │       composer                       │
//! │          │       disclaimer                     │
//! │          │   or analytics                       │
//! │ (U) User │                                      │
//! └──────────┴──────────────────────────────────────┘
//! ```
//!
//! Every clickable element drawn this frame is recorded in
//! `TuiState::click_targets` so mouse clicks are hit-tested against exactly
//! what is on screen.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::core::state::{App, ViewMode};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    AnalyticsView, HEADER_HEIGHT, Header, LandingPage, MessageList, Sidebar, SidebarLayout,
};

/// Something on screen that reacts to a left click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    NewConversation,
    ToggleView,
    Suggestion(usize),
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, tick: usize) {
    use Constraint::{Length, Min};

    tui.click_targets.clear();

    let [sidebar_area, main_area] =
        Layout::horizontal([Length(tui.sidebar_width), Min(0)]).areas(frame.area());

    Sidebar::new(&app.assistant_name, &tui.user_name, app.view).render(frame, sidebar_area);
    let sidebar = SidebarLayout::compute(sidebar_area);
    tui.click_targets.push((sidebar.new_chat, ClickTarget::NewConversation));
    tui.click_targets.push((sidebar.toggle_view, ClickTarget::ToggleView));

    let [header_area, body] = Layout::vertical([Length(HEADER_HEIGHT), Min(0)]).areas(main_area);
    Header::new(app.title(), app.view, &app.status_message).render(frame, header_area);

    match app.view {
        ViewMode::Chat => draw_chat(frame, body, app, tui, tick),
        ViewMode::Analytics => {
            AnalyticsView::default().render(frame, body.inner(Margin::new(2, 1)));
        }
    }
}

fn draw_chat(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState, tick: usize) {
    use Constraint::{Length, Min};

    let column = area.inner(Margin::new(2, 0));
    let composer_height = tui.composer.calculate_height(column.width);
    let [thread_area, composer_area, disclaimer_area] =
        Layout::vertical([Min(0), Length(composer_height), Length(1)]).areas(column);
    let thread_area = thread_area.inner(Margin::new(0, 1));

    if app.history.is_empty() {
        LandingPage::new(&app.assistant_name, &tui.suggestions).render(frame, thread_area);
        for (i, card) in LandingPage::card_areas(thread_area, tui.suggestions.len())
            .into_iter()
            .enumerate()
        {
            tui.click_targets.push((card, ClickTarget::Suggestion(i)));
        }
    } else {
        MessageList::new(
            &mut tui.thread,
            &app.history,
            &app.assistant_name,
            app.composer.busy,
            tick,
        )
        .render(frame, thread_area);
    }

    tui.composer.render(frame, composer_area);

    frame.render_widget(
        Paragraph::new(Line::from(format!(
            "{} can make mistakes. Please use with discretion.",
            app.assistant_name
        )))
        .style(Style::default().fg(Color::DarkGray))
        .centered(),
        disclaimer_area,
    );
}

/// Which click target, if any, covers the given screen cell.
pub fn hit_test(targets: &[(Rect, ClickTarget)], column: u16, row: u16) -> Option<ClickTarget> {
    let position = Position::new(column, row);
    targets
        .iter()
        .find(|(rect, _)| rect.contains(position))
        .map(|(_, target)| *target)
}
