//! Delayed reply delivery.
//!
//! A submitted message gets its reply after a fixed delay, produced by
//! whatever `ReplyProvider` is installed. The result comes back to the
//! event loop as an `Action` tagged with the generation it belongs to.

use std::sync::{Arc, mpsc};
use std::time::Duration;

use log::{info, warn};
use tokio::task::AbortHandle;

use super::provider::{ReplyProvider, ReplyRequest};
use crate::core::action::{Action, PendingReply};

/// Spawns the reply task. Must be called from within a tokio runtime.
///
/// The returned handle aborts the task; the reducer still drops replies from
/// a superseded generation if one slips through before the abort lands.
pub fn spawn_reply(
    provider: Arc<dyn ReplyProvider>,
    pending: PendingReply,
    delay: Duration,
    tx: mpsc::Sender<Action>,
) -> AbortHandle {
    info!(
        "Scheduling {} reply in {}ms (generation {})",
        provider.name(),
        delay.as_millis(),
        pending.generation
    );

    let handle = tokio::spawn(async move {
        tokio::time::sleep(delay).await;

        let request = ReplyRequest {
            prompt: &pending.prompt,
        };
        let action = match provider.reply(request).await {
            Ok(content) => Action::ReplyReady {
                generation: pending.generation,
                content,
            },
            Err(e) => {
                warn!("Reply provider '{}' failed: {}", provider.name(), e);
                Action::ReplyFailed {
                    generation: pending.generation,
                    error: e.to_string(),
                }
            }
        };

        if tx.send(action).is_err() {
            warn!("Failed to deliver reply: receiver dropped");
        }
    });

    handle.abort_handle()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FailingProvider, FixedProvider};

    fn pending(generation: u64) -> PendingReply {
        PendingReply {
            generation,
            prompt: "hello".to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_not_delivered_before_delay() {
        let (tx, rx) = mpsc::channel();
        spawn_reply(Arc::new(FixedProvider("hi")), pending(0), Duration::from_millis(1500), tx);

        tokio::time::sleep(Duration::from_millis(1499)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(
            rx.try_recv().unwrap(),
            Action::ReplyReady {
                generation: 0,
                content: "hi".to_string(),
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_carries_generation() {
        let (tx, rx) = mpsc::channel();
        spawn_reply(Arc::new(FixedProvider("x")), pending(7), Duration::from_millis(5), tx);

        tokio::time::sleep(Duration::from_millis(10)).await;
        match rx.try_recv().unwrap() {
            Action::ReplyReady { generation, .. } => assert_eq!(generation, 7),
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_provider_error_becomes_reply_failed() {
        let (tx, rx) = mpsc::channel();
        spawn_reply(Arc::new(FailingProvider), pending(2), Duration::from_millis(5), tx);

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(matches!(
            rx.try_recv().unwrap(),
            Action::ReplyFailed { generation: 2, .. }
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_aborted_reply_never_arrives() {
        let (tx, rx) = mpsc::channel();
        let handle = spawn_reply(
            Arc::new(FixedProvider("late")),
            pending(0),
            Duration::from_millis(1500),
            tx,
        );

        tokio::time::sleep(Duration::from_millis(100)).await;
        handle.abort();
        tokio::time::sleep(Duration::from_millis(2000)).await;

        assert!(rx.try_recv().is_err());
    }
}
