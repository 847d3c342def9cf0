//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse input into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Busy** (reply pending): draws every ~100ms so the typing dots move.
//! - **Idle**: sleeps up to 500ms and only redraws on input, resize or a
//!   delivered reply.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic during continuous redraws.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::layout::Rect;
use tokio::task::AbortHandle;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, ViewMode};
use crate::reply::{CannedReplyProvider, ReplyProvider, spawn_reply};
use crate::tui::component::EventHandler;
use crate::tui::components::{ComposerBox, ComposerEvent, ThreadState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::{ClickTarget, hit_test};

/// Milliseconds per typing-indicator frame
const TICK_MS: u128 = 300;

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub thread: ThreadState,
    pub composer: ComposerBox,
    // Rebuilt on every draw
    pub click_targets: Vec<(Rect, ClickTarget)>,
    // Presentation config
    pub suggestions: Vec<String>,
    pub user_name: String,
    pub sidebar_width: u16,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            thread: ThreadState::new(),
            composer: ComposerBox::new(format!("Message {}...", config.assistant_name)),
            click_targets: Vec::new(),
            suggestions: config.suggestions.clone(),
            user_name: config.user_name.clone(),
            sidebar_width: config.sidebar_width,
        }
    }

    #[cfg(test)]
    pub(crate) fn for_tests() -> Self {
        Self::new(&crate::test_support::test_config())
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol is what lets us see Shift+Enter; terminals
        // without it ignore the sequence
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!(
            "Terminal modes enabled (mouse, bracketed paste, steady block cursor, keyboard enhancement)"
        );
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide
        );
    }
}

/// Build the reply provider, seeded when a seed was configured.
pub fn build_provider(config: &ResolvedConfig) -> Arc<dyn ReplyProvider> {
    let responses = config.responses.clone();
    match config.seed {
        Some(seed) => Arc::new(CannedReplyProvider::with_seed(responses, seed)),
        None => Arc::new(CannedReplyProvider::new(responses)),
    }
}

/// Translate one input event into at most one core action, updating
/// presentation-only state (scrolling, composer buffer) along the way.
fn handle_event(app: &App, tui: &mut TuiState, event: TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Resize => None,
        TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::NewConversation => Some(Action::ResetConversation),
        TuiEvent::ToggleView => Some(Action::ToggleView),
        TuiEvent::Suggestion(index) => suggestion(app, tui, index),
        TuiEvent::MouseClick(column, row) => match hit_test(&tui.click_targets, column, row)? {
            ClickTarget::NewConversation => Some(Action::ResetConversation),
            ClickTarget::ToggleView => Some(Action::ToggleView),
            ClickTarget::Suggestion(index) => suggestion(app, tui, index),
        },
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            tui.thread.handle_event(&event);
            None
        }
        // The composer is not on screen in the dashboard
        _ if app.view == ViewMode::Analytics => None,
        _ => match tui.composer.handle_event(&event)? {
            ComposerEvent::Submit(text) => Some(Action::Submit(text)),
            ComposerEvent::Edited => Some(Action::EditDraft(tui.composer.buffer.clone())),
            ComposerEvent::AtTop => {
                tui.thread.handle_event(&TuiEvent::ScrollUp);
                None
            }
            ComposerEvent::AtBottom => {
                tui.thread.handle_event(&TuiEvent::ScrollDown);
                None
            }
        },
    }
}

/// Suggestions only apply while their cards are visible.
fn suggestion(app: &App, tui: &TuiState, index: usize) -> Option<Action> {
    if app.view != ViewMode::Chat || !app.history.is_empty() {
        return None;
    }
    tui.suggestions.get(index).cloned().map(Action::ApplySuggestion)
}

/// Push core state the composer mirrors back into the widget. Runs after
/// every reducer step so the next event in a batch edits the current draft.
fn sync_composer(app: &App, tui: &mut TuiState) {
    tui.composer.busy = app.composer.busy;
    if tui.composer.buffer != app.composer.draft {
        tui.composer.set_text(&app.composer.draft);
    }
}

/// Dispatch an action and carry out its effect. Returns true on quit.
fn dispatch(
    app: &mut App,
    tui: &mut TuiState,
    action: Action,
    provider: &Arc<dyn ReplyProvider>,
    delay: Duration,
    tx: &mpsc::Sender<Action>,
    pending: &mut Option<AbortHandle>,
) -> bool {
    // Only a reply for the live exchange finishes the pending task
    let settles_pending = match &action {
        Action::ReplyReady { generation, .. } | Action::ReplyFailed { generation, .. } => {
            *generation == app.generation
        }
        _ => false,
    };
    let is_reset = matches!(action, Action::ResetConversation);

    let effect = update(app, action);
    if settles_pending {
        *pending = None;
    }
    if is_reset {
        tui.thread = ThreadState::new();
    }
    sync_composer(app, tui);

    match effect {
        Effect::None => false,
        Effect::ScheduleReply(reply) => {
            *pending = Some(spawn_reply(provider.clone(), reply, delay, tx.clone()));
            false
        }
        Effect::CancelPending => {
            if let Some(handle) = pending.take() {
                debug!("Aborting pending reply");
                handle.abort();
            }
            false
        }
        Effect::Quit => true,
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let provider = build_provider(&config);
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(&config);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Could not enable terminal modes: {}", e);
            None
        }
    };

    // Channel for actions from reply tasks
    let (tx, rx) = mpsc::channel();
    let mut pending: Option<AbortHandle> = None;

    let start_time = Instant::now();
    let mut needs_redraw = true;

    loop {
        let animating = app.composer.busy;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let tick = (start_time.elapsed().as_millis() / TICK_MS) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, tick))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain everything queued before the next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = handle_event(&app, &mut tui, event) {
                should_quit |= dispatch(
                    &mut app,
                    &mut tui,
                    action,
                    &provider,
                    config.reply_delay,
                    &tx,
                    &mut pending,
                );
            }
            if should_quit {
                break;
            }
        }

        if should_quit {
            break;
        }

        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            dispatch(
                &mut app,
                &mut tui,
                action,
                &provider,
                config.reply_delay,
                &tx,
                &mut pending,
            );
        }
    }

    if let Some(handle) = pending.take() {
        handle.abort();
    }
    info!("Shutting down ({} messages in conversation)", app.history.len());

    ratatui::restore();
    Ok(())
}
