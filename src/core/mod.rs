//! # Core Application Logic
//!
//! This module contains Cloude's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │   Reply    │
//!            │  Adapter   │            │  Provider  │
//!            │ (ratatui)  │            │  (canned)  │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`message`]: Messages and the conversation history
//! - [`config`]: Layered configuration
//! - [`sample_data`]: Canned replies, prompts and dashboard figures

pub mod action;
pub mod config;
pub mod message;
pub mod sample_data;
pub mod state;
