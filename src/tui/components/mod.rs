//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as fields, created each frame:
//! - `Sidebar`: brand, New Chat / chart toggle buttons, user footer
//! - `Header`: view title, subtitle and status
//! - `LandingPage`: greeting and suggestion cards for an empty chat
//! - `MessageBubble`: a single message
//! - `AnalyticsView`: bar chart and summary cards
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep local state across frames and emit events:
//! - `ComposerBox`: multi-line draft editor
//! - `MessageList`: scrollable thread with layout caching
//!
//! Each component file keeps its state types, event types, rendering and
//! tests together.
//!
//! Components receive external data as props rather than reading `App`
//! directly, which keeps their dependencies explicit:
//!
//! ```rust,ignore
//! Header::new(app.title(), app.view, &app.status_message).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── sidebar.rs       (Left column with buttons)
//! ├── header.rs        (Top bar of the main pane)
//! ├── landing.rs       (Empty-chat greeting + suggestions)
//! ├── message.rs       (Single message bubble)
//! ├── message_list.rs  (Scrollable thread)
//! ├── composer.rs      (Draft editor)
//! ├── analytics.rs     (Dashboard pane)
//! └── text_wrap.rs     (Row wrapping shared by composer and bubbles)
//! ```

pub mod analytics;
pub mod composer;
pub mod header;
pub mod landing;
pub mod message;
pub mod message_list;
pub mod sidebar;
mod text_wrap;

pub use analytics::AnalyticsView;
pub use composer::{ComposerBox, ComposerEvent};
pub use header::{HEADER_HEIGHT, Header};
pub use landing::LandingPage;
pub use message_list::{MessageList, ThreadState};
pub use sidebar::{Sidebar, SidebarLayout};
