pub mod application;
pub mod connector;
pub mod domain;

pub use application::{AskQuestionUseCase, ChatBackend, RetryPolicy};

pub use connector::{HttpBackendConfig, HttpChatBackend, DEFAULT_BASE_URL};

pub use domain::{normalize_answer_text, ChatAnswer, ChatError, ChatQuery, Language, Source};
