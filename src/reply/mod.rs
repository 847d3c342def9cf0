//! # Reply Providers
//!
//! Where assistant replies come from. The controller only ever sees
//! `Action::ReplyReady`, so swapping the canned provider for a real
//! request/response client touches nothing in `core`.

pub mod canned;
pub mod provider;
pub mod scheduler;

pub use canned::CannedReplyProvider;
pub use provider::{ReplyError, ReplyProvider, ReplyRequest};
pub use scheduler::spawn_reply;
