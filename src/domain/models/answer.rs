use serde::{Deserialize, Serialize};

/// Opaque citation/snippet record attached to an answer by the backend.
/// Passed through to the caller unmodified.
pub type Source = serde_json::Value;

/// An answer from the question-answering backend.
///
/// `answer` text is normalized (see [`normalize_answer_text`]) before the
/// answer is handed to the caller; `question` and `sources` pass through
/// exactly as the backend sent them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatAnswer {
    answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sources: Option<Vec<Source>>,
}

impl ChatAnswer {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            question: None,
            sources: None,
        }
    }

    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }

    pub fn with_sources(mut self, sources: Vec<Source>) -> Self {
        self.sources = Some(sources);
        self
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn question(&self) -> Option<&str> {
        self.question.as_deref()
    }

    pub fn sources(&self) -> Option<&[Source]> {
        self.sources.as_deref()
    }

    /// Normalize the answer text, leaving everything else untouched.
    pub fn normalized(mut self) -> Self {
        self.answer = normalize_answer_text(&self.answer);
        self
    }
}

/// Clean up raw answer text from the backend:
///
/// 1. line endings become plain `\n` (CRLF pairs and stray `\r` alike, so the
///    result never contains a carriage return);
/// 2. runs of three or more newlines collapse to exactly two;
/// 3. leading and trailing whitespace is stripped.
///
/// Idempotent.
pub fn normalize_answer_text(text: &str) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut out = String::with_capacity(unified.len());
    let mut newlines = 0usize;
    for ch in unified.chars() {
        if ch == '\n' {
            newlines += 1;
            if newlines <= 2 {
                out.push(ch);
            }
        } else {
            newlines = 0;
            out.push(ch);
        }
    }

    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_handles_crlf_blank_runs_and_padding() {
        assert_eq!(normalize_answer_text("a\r\nb\n\n\nc   "), "a\nb\n\nc");
    }

    #[test]
    fn normalize_strips_lone_carriage_returns() {
        let normalized = normalize_answer_text("a\rb\r\r\r\rc");
        assert!(!normalized.contains('\r'));
        assert_eq!(normalized, "a\nb\n\nc");
    }

    #[test]
    fn normalize_keeps_double_newlines() {
        assert_eq!(normalize_answer_text("para one\n\npara two"), "para one\n\npara two");
    }

    #[test]
    fn normalize_is_idempotent() {
        let messy = "  hello\r\n\r\n\r\nworld\n\n\n\n\n!  \n";
        let once = normalize_answer_text(messy);
        assert_eq!(normalize_answer_text(&once), once);
    }

    #[test]
    fn normalize_never_leaves_three_newlines() {
        let normalized = normalize_answer_text("x\n\n\n\n\n\n\ny");
        assert!(!normalized.contains("\n\n\n"));
        assert_eq!(normalized, "x\n\ny");
    }

    #[test]
    fn normalized_answer_keeps_question_and_sources() {
        let sources = vec![serde_json::json!({"title": "Visiting policy", "page": 2})];
        let answer = ChatAnswer::new("  hi\r\nthere  ")
            .with_question("hours?")
            .with_sources(sources.clone());

        let normalized = answer.normalized();
        assert_eq!(normalized.answer(), "hi\nthere");
        assert_eq!(normalized.question(), Some("hours?"));
        assert_eq!(normalized.sources(), Some(sources.as_slice()));
    }
}
