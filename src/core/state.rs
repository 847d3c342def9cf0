//! # Application State
//!
//! Core business state for Cloude. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── history: ConversationHistory   // the thread, append-only until reset
//! ├── composer: Composer             // draft text + busy flag
//! ├── view: ViewMode                 // chat or analytics
//! ├── generation: u64                // bumped on every reset
//! ├── status_message: String         // header status text
//! └── assistant_name: String         // display name for the assistant
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::config::{DEFAULT_ASSISTANT_NAME, ResolvedConfig};
use crate::core::message::ConversationHistory;

/// Which of the two panes is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Chat,
    Analytics,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Chat => ViewMode::Analytics,
            ViewMode::Analytics => ViewMode::Chat,
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            ViewMode::Chat => "Your AI assistant",
            ViewMode::Analytics => "Data visualization",
        }
    }
}

/// Draft text plus whether a reply is still on its way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composer {
    pub draft: String,
    pub busy: bool,
}

/// Lifecycle of a single exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangePhase {
    Idle,
    AwaitingReply,
}

pub struct App {
    pub history: ConversationHistory,
    pub composer: Composer,
    pub view: ViewMode,
    /// Replies scheduled under an older generation are dropped on arrival.
    pub generation: u64,
    pub status_message: String,
    pub assistant_name: String,
}

impl App {
    pub fn new(assistant_name: String) -> Self {
        Self {
            history: ConversationHistory::new(),
            composer: Composer::default(),
            view: ViewMode::default(),
            generation: 0,
            status_message: String::new(),
            assistant_name,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.assistant_name.clone())
    }

    pub fn phase(&self) -> ExchangePhase {
        if self.composer.busy {
            ExchangePhase::AwaitingReply
        } else {
            ExchangePhase::Idle
        }
    }

    /// Header title for the current view.
    pub fn title(&self) -> &str {
        match self.view {
            ViewMode::Chat => &self.assistant_name,
            ViewMode::Analytics => "Analytics Dashboard",
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(DEFAULT_ASSISTANT_NAME.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert!(app.history.is_empty());
        assert_eq!(app.view, ViewMode::Chat);
        assert_eq!(app.phase(), ExchangePhase::Idle);
        assert_eq!(app.generation, 0);
        assert_eq!(app.title(), "Cloude");
    }

    #[test]
    fn test_view_mode_toggled() {
        assert_eq!(ViewMode::Chat.toggled(), ViewMode::Analytics);
        assert_eq!(ViewMode::Analytics.toggled(), ViewMode::Chat);
    }

    #[test]
    fn test_title_follows_view() {
        let mut app = test_app();
        app.view = ViewMode::Analytics;
        assert_eq!(app.title(), "Analytics Dashboard");
        assert_eq!(app.view.subtitle(), "Data visualization");
    }

    #[test]
    fn test_phase_tracks_busy_flag() {
        let mut app = test_app();
        app.composer.busy = true;
        assert_eq!(app.phase(), ExchangePhase::AwaitingReply);
    }
}
