use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, warn};

use crate::application::interfaces::ChatBackend;
use crate::application::use_cases::RetryPolicy;
use crate::domain::{ChatAnswer, ChatError, ChatQuery};

/// Sends a question to the chat backend, retrying failed attempts with
/// exponential backoff and normalizing the answer text before returning it.
///
/// Retries are unconditional: every failure kind is retried until the policy
/// is exhausted, including answer-less responses. Retries are invisible to
/// the caller; only the final classified failure (or the eventual success)
/// crosses this boundary, and a terminal failure is never swallowed.
pub struct AskQuestionUseCase {
    backend: Arc<dyn ChatBackend>,
    retry_policy: RetryPolicy,
}

impl AskQuestionUseCase {
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self {
            backend,
            retry_policy: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    pub async fn execute(&self, query: &ChatQuery) -> Result<ChatAnswer, ChatError> {
        let start = Instant::now();
        let total = self.retry_policy.total_attempts();
        let mut attempt = 0u32;

        loop {
            match self.backend.query(query).await {
                Ok(answer) => {
                    if attempt > 0 {
                        debug!(
                            "chat query succeeded after {} retries ({:?})",
                            attempt,
                            start.elapsed()
                        );
                    }
                    return Ok(answer.normalized());
                }
                Err(error) => {
                    if attempt + 1 >= total {
                        warn!(
                            "chat query failed permanently: {error} (attempt {}/{}, elapsed {:?})",
                            attempt + 1,
                            total,
                            start.elapsed()
                        );
                        return Err(error);
                    }

                    let delay = self.retry_policy.delay_for(attempt);
                    warn!(
                        "chat query failed, retrying in {:?}: {error} (attempt {}/{})",
                        delay,
                        attempt + 1,
                        total
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}
