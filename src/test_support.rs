//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::core::config::{CliOverrides, CloudeConfig, ResolvedConfig, resolve_with_env};
use crate::core::state::App;
use crate::reply::{ReplyError, ReplyProvider, ReplyRequest};

/// Always answers with the same text.
pub struct FixedProvider(pub &'static str);

#[async_trait]
impl ReplyProvider for FixedProvider {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn reply(&self, _request: ReplyRequest<'_>) -> Result<String, ReplyError> {
        Ok(self.0.to_string())
    }
}

/// Always fails.
pub struct FailingProvider;

#[async_trait]
impl ReplyProvider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    async fn reply(&self, _request: ReplyRequest<'_>) -> Result<String, ReplyError> {
        Err(ReplyError::Unavailable("test".to_string()))
    }
}

/// Creates a test App with the default assistant name.
pub fn test_app() -> App {
    App::new("Cloude".to_string())
}

/// Built-in defaults with no file, env or CLI overrides applied.
pub fn test_config() -> ResolvedConfig {
    resolve_with_env(&CloudeConfig::default(), &CliOverrides::default(), |_| None)
}
