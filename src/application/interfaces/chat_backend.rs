use async_trait::async_trait;

use crate::domain::{ChatAnswer, ChatError, ChatQuery};

/// A single question/answer exchange with the question-answering backend.
///
/// Implementors encapsulate transport and serialization details; consumers
/// (e.g. [`crate::application::AskQuestionUseCase`]) stay decoupled from any
/// particular HTTP client library.
///
/// One call is one attempt. Retry sits above this trait, so implementors
/// classify each failure into a [`ChatError`] and return it without retrying
/// themselves.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn query(&self, query: &ChatQuery) -> Result<ChatAnswer, ChatError>;
}
