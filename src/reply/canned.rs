use std::sync::Mutex;

use async_trait::async_trait;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use super::provider::{ReplyError, ReplyProvider, ReplyRequest};
use crate::core::sample_data::CANNED_RESPONSES;

/// Picks one of a fixed set of replies uniformly at random.
///
/// The prompt is ignored. Seeding makes the sequence of picks reproducible,
/// which is what the `--seed` flag is for.
pub struct CannedReplyProvider {
    responses: Vec<String>,
    rng: Mutex<StdRng>,
}

impl CannedReplyProvider {
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            responses,
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    pub fn with_seed(responses: Vec<String>, seed: u64) -> Self {
        Self {
            responses,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for CannedReplyProvider {
    fn default() -> Self {
        Self::new(CANNED_RESPONSES.iter().map(|s| s.to_string()).collect())
    }
}

#[async_trait]
impl ReplyProvider for CannedReplyProvider {
    fn name(&self) -> &str {
        "canned"
    }

    async fn reply(&self, request: ReplyRequest<'_>) -> Result<String, ReplyError> {
        debug!("Canned reply requested for prompt of {} bytes", request.prompt.len());
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        self.responses
            .choose(&mut *rng)
            .cloned()
            .ok_or(ReplyError::NoResponses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(prompt: &str) -> ReplyRequest<'_> {
        ReplyRequest { prompt }
    }

    #[test]
    fn test_reply_comes_from_canned_set() {
        let provider = CannedReplyProvider::default();
        for _ in 0..20 {
            let reply = tokio_test::block_on(provider.reply(request("anything"))).unwrap();
            assert!(CANNED_RESPONSES.contains(&reply.as_str()));
        }
    }

    #[test]
    fn test_reply_ignores_prompt() {
        let provider = CannedReplyProvider::new(vec!["only one".to_string()]);
        let a = tokio_test::block_on(provider.reply(request("first"))).unwrap();
        let b = tokio_test::block_on(provider.reply(request("something else"))).unwrap();
        assert_eq!(a, "only one");
        assert_eq!(b, "only one");
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let responses: Vec<String> = CANNED_RESPONSES.iter().map(|s| s.to_string()).collect();
        let a = CannedReplyProvider::with_seed(responses.clone(), 42);
        let b = CannedReplyProvider::with_seed(responses, 42);

        for _ in 0..10 {
            let left = tokio_test::block_on(a.reply(request("x"))).unwrap();
            let right = tokio_test::block_on(b.reply(request("x"))).unwrap();
            assert_eq!(left, right);
        }
    }

    #[test]
    fn test_empty_responses_is_an_error() {
        let provider = CannedReplyProvider::new(Vec::new());
        let result = tokio_test::block_on(provider.reply(request("hi")));
        assert_eq!(result, Err(ReplyError::NoResponses));
        assert_eq!(provider.name(), "canned");
    }
}
