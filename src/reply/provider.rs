use std::fmt;

use async_trait::async_trait;

/// Errors a reply provider can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyError {
    /// The provider has nothing it could answer with.
    NoResponses,
    /// The provider could not be reached or gave up. Reserved for real backends.
    Unavailable(String),
}

impl fmt::Display for ReplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplyError::NoResponses => write!(f, "no canned responses configured"),
            ReplyError::Unavailable(msg) => write!(f, "reply provider unavailable: {msg}"),
        }
    }
}

impl std::error::Error for ReplyError {}

/// Everything a provider needs to produce a reply.
pub struct ReplyRequest<'a> {
    pub prompt: &'a str,
}

#[async_trait]
pub trait ReplyProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Produces the assistant's reply to the given request.
    async fn reply(&self, request: ReplyRequest<'_>) -> Result<String, ReplyError>;
}
