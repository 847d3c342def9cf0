//! # Actions
//!
//! Everything that can happen in Cloude becomes an `Action`.
//! User presses Enter? That's `Action::Submit(draft)`.
//! The reply timer fires? That's `Action::ReplyReady { .. }`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` describing any side effect
//! the adapter must perform (start a timer, abort one, quit). No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Every scheduled reply is tagged with the conversation generation it was
//! scheduled under. A reset bumps the generation, so a late reply from the
//! old conversation is recognized and dropped instead of leaking into the
//! new one.

use log::{debug, info, warn};

use crate::core::message::Message;
use crate::core::state::{App, ViewMode};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Submit the given text as a user message.
    Submit(String),
    /// The composer's buffer changed.
    EditDraft(String),
    /// Put a suggested prompt into the draft without sending it.
    ApplySuggestion(String),
    /// The reply provider produced text for a scheduled exchange.
    ReplyReady { generation: u64, content: String },
    /// The reply provider failed for a scheduled exchange.
    ReplyFailed { generation: u64, error: String },
    /// Start a new chat: history, draft and view all go back to empty.
    ResetConversation,
    /// Switch between the chat and analytics panes.
    ToggleView,
    Quit,
}

/// A reply the adapter should produce after the configured delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub generation: u64,
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    ScheduleReply(PendingReply),
    /// Abort whatever reply task is still in flight.
    CancelPending,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Submit(text) => submit(app, text),
        Action::EditDraft(text) => {
            app.composer.draft = text;
            Effect::None
        }
        Action::ApplySuggestion(text) => {
            app.composer.draft = text;
            Effect::None
        }
        Action::ReplyReady { generation, content } => {
            if generation != app.generation {
                info!(
                    "Discarding stale reply (generation {} != current {})",
                    generation, app.generation
                );
                return Effect::None;
            }
            app.history.push(Message::assistant(content));
            app.composer.busy = false;
            app.status_message.clear();
            Effect::None
        }
        Action::ReplyFailed { generation, error } => {
            if generation != app.generation {
                info!("Discarding stale reply failure: {}", error);
                return Effect::None;
            }
            warn!("Reply failed: {}", error);
            app.composer.busy = false;
            app.status_message = format!("Reply failed: {error}");
            Effect::None
        }
        Action::ResetConversation => {
            let was_busy = app.composer.busy;
            app.history.clear();
            app.composer.draft.clear();
            app.composer.busy = false;
            app.view = ViewMode::Chat;
            app.generation += 1;
            app.status_message.clear();
            info!("Conversation reset (generation {})", app.generation);
            if was_busy {
                Effect::CancelPending
            } else {
                Effect::None
            }
        }
        Action::ToggleView => {
            app.view = app.view.toggled();
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn submit(app: &mut App, text: String) -> Effect {
    if text.trim().is_empty() {
        return Effect::None;
    }
    if app.composer.busy {
        debug!("Submit ignored: reply already pending");
        return Effect::None;
    }

    app.history.push(Message::user(text.clone()));
    app.composer.draft.clear();
    app.composer.busy = true;
    app.status_message = format!("{} is typing...", app.assistant_name);

    Effect::ScheduleReply(PendingReply {
        generation: app.generation,
        prompt: text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::message::Role;
    use crate::core::state::ExchangePhase;
    use crate::test_support::test_app;

    fn ready(app: &App, content: &str) -> Action {
        Action::ReplyReady {
            generation: app.generation,
            content: content.to_string(),
        }
    }

    #[test]
    fn test_submit_appends_user_message_and_schedules_reply() {
        let mut app = test_app();
        app.composer.draft = "hello".to_string();

        let effect = update(&mut app, Action::Submit("hello".to_string()));

        assert_eq!(
            effect,
            Effect::ScheduleReply(PendingReply {
                generation: 0,
                prompt: "hello".to_string(),
            })
        );
        assert_eq!(app.history.len(), 1);
        let msg = app.history.last().unwrap();
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "hello");
        assert!(app.composer.draft.is_empty());
        assert_eq!(app.phase(), ExchangePhase::AwaitingReply);
    }

    #[test]
    fn test_submit_keeps_text_as_typed() {
        let mut app = test_app();
        update(&mut app, Action::Submit("  padded  ".to_string()));
        assert_eq!(app.history.last().unwrap().content, "  padded  ");
    }

    #[test]
    fn test_submit_empty_is_noop() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Submit(String::new())), Effect::None);
        assert_eq!(update(&mut app, Action::Submit(" \n\t ".to_string())), Effect::None);
        assert!(app.history.is_empty());
        assert!(!app.composer.busy);
    }

    #[test]
    fn test_submit_while_busy_is_suppressed() {
        let mut app = test_app();
        let first = update(&mut app, Action::Submit("one".to_string()));
        assert!(matches!(first, Effect::ScheduleReply(_)));

        app.composer.draft = "two".to_string();
        let second = update(&mut app, Action::Submit("two".to_string()));

        assert_eq!(second, Effect::None);
        assert_eq!(app.history.len(), 1);
        // Suppressed submit leaves the draft alone
        assert_eq!(app.composer.draft, "two");
    }

    #[test]
    fn test_reply_ready_appends_assistant_and_clears_busy() {
        let mut app = test_app();
        update(&mut app, Action::Submit("hi".to_string()));
        let action = ready(&app, "canned");
        update(&mut app, action);

        assert_eq!(app.history.len(), 2);
        assert_eq!(app.history.get(0).unwrap().role, Role::User);
        assert_eq!(app.history.get(1).unwrap().role, Role::Assistant);
        assert_eq!(app.history.get(1).unwrap().content, "canned");
        assert_eq!(app.phase(), ExchangePhase::Idle);
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn test_reset_clears_everything_and_returns_to_chat() {
        let mut app = test_app();
        update(&mut app, Action::Submit("hi".to_string()));
        let action = ready(&app, "reply");
        update(&mut app, action);
        update(&mut app, Action::ToggleView);
        update(&mut app, Action::EditDraft("unsent".to_string()));

        let effect = update(&mut app, Action::ResetConversation);

        assert_eq!(effect, Effect::None);
        assert_eq!(app.history.len(), 0);
        assert!(app.composer.draft.is_empty());
        assert_eq!(app.view, ViewMode::Chat);
        assert_eq!(app.generation, 1);
    }

    #[test]
    fn test_reset_while_busy_cancels_pending() {
        let mut app = test_app();
        update(&mut app, Action::Submit("hi".to_string()));
        assert_eq!(update(&mut app, Action::ResetConversation), Effect::CancelPending);
        assert!(!app.composer.busy);
    }

    #[test]
    fn test_stale_reply_after_reset_is_discarded() {
        let mut app = test_app();
        update(&mut app, Action::Submit("old".to_string()));
        let stale = ready(&app, "late reply");
        update(&mut app, Action::ResetConversation);

        // New exchange in the fresh conversation
        update(&mut app, Action::Submit("new".to_string()));
        update(&mut app, stale);

        assert_eq!(app.history.len(), 1);
        assert_eq!(app.history.last().unwrap().content, "new");
        assert!(app.composer.busy, "stale reply must not finish the new exchange");
    }

    #[test]
    fn test_reply_failed_clears_busy_without_message() {
        let mut app = test_app();
        update(&mut app, Action::Submit("hi".to_string()));
        update(
            &mut app,
            Action::ReplyFailed {
                generation: 0,
                error: "no responses".to_string(),
            },
        );
        assert_eq!(app.history.len(), 1);
        assert!(!app.composer.busy);
        assert!(app.status_message.contains("no responses"));
    }

    #[test]
    fn test_toggle_view_is_involution() {
        let mut app = test_app();
        update(&mut app, Action::Submit("keep me".to_string()));
        let before = app.history.len();

        update(&mut app, Action::ToggleView);
        assert_eq!(app.view, ViewMode::Analytics);
        update(&mut app, Action::ToggleView);
        assert_eq!(app.view, ViewMode::Chat);

        assert_eq!(app.history.len(), before);
        assert!(app.composer.busy);
    }

    #[test]
    fn test_apply_suggestion_sets_draft_without_submitting() {
        let mut app = test_app();
        let effect = update(
            &mut app,
            Action::ApplySuggestion("Explain a complex topic simply".to_string()),
        );
        assert_eq!(effect, Effect::None);
        assert_eq!(app.composer.draft, "Explain a complex topic simply");
        assert!(app.history.is_empty());
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
