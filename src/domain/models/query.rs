use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Languages the question-answering backend can answer in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Vietnamese,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Vietnamese => "vietnamese",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "vietnamese" | "vi" => Ok(Language::Vietnamese),
            other => Err(format!(
                "unsupported language: {other} (expected english or vietnamese)"
            )),
        }
    }
}

/// One question for the assistant. Immutable; built per request.
///
/// Serializes directly into the backend's wire body:
/// `{ "question": ..., "language": ..., "enhance_retrieval": ... }`.
///
/// An empty question is passed through as-is; validating it is the caller's
/// job (the admin console disables the send button on empty input).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatQuery {
    question: String,
    language: Language,
    enhance_retrieval: bool,
}

impl ChatQuery {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            language: Language::default(),
            enhance_retrieval: false,
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_enhanced_retrieval(mut self, enhance: bool) -> Self {
        self.enhance_retrieval = enhance;
        self
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn enhance_retrieval(&self) -> bool {
        self.enhance_retrieval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_builder_defaults() {
        let query = ChatQuery::new("what are the visiting hours?");
        assert_eq!(query.question(), "what are the visiting hours?");
        assert_eq!(query.language(), Language::English);
        assert!(!query.enhance_retrieval());
    }

    #[test]
    fn query_serializes_to_wire_format() {
        let query = ChatQuery::new("giờ thăm bệnh?")
            .with_language(Language::Vietnamese)
            .with_enhanced_retrieval(true);

        let body = serde_json::to_value(&query).expect("serialize");
        assert_eq!(
            body,
            serde_json::json!({
                "question": "giờ thăm bệnh?",
                "language": "vietnamese",
                "enhance_retrieval": true,
            })
        );
    }

    #[test]
    fn language_parses_case_insensitively() {
        assert_eq!("English".parse::<Language>(), Ok(Language::English));
        assert_eq!("VIETNAMESE".parse::<Language>(), Ok(Language::Vietnamese));
        assert!("french".parse::<Language>().is_err());
    }
}
