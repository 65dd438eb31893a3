//! Assistant: the chatbot's get-response action.

use crate::domain::{Notice, Responder, ResponseMatcher};

use super::require_text;

/// Notice shown when the question box is blank.
pub const EMPTY_QUESTION_NOTICE: &str = "Please enter a question.";

/// Answers health questions with canned responses.
pub struct Assistant<R = ResponseMatcher>
where
    R: Responder,
{
    responder: R,
}

impl Default for Assistant<ResponseMatcher> {
    fn default() -> Self {
        Self::new(ResponseMatcher::new())
    }
}

impl<R> Assistant<R>
where
    R: Responder,
{
    pub fn new(responder: R) -> Self {
        Self { responder }
    }

    /// Answer `question`.
    ///
    /// Blank questions never reach the responder.
    #[must_use]
    pub fn ask(&self, question: &str) -> Notice {
        match require_text(question) {
            Ok(question) => Notice::success(self.responder.respond(question)),
            Err(_) => Notice::info(EMPTY_QUESTION_NOTICE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NoticeLevel, FALLBACK_REPLY};

    struct PanickingResponder;

    impl Responder for PanickingResponder {
        fn respond(&self, _query: &str) -> &'static str {
            panic!("responder must not be called for blank input");
        }
    }

    #[test]
    fn test_blank_question_short_circuits() {
        let assistant = Assistant::new(PanickingResponder);
        for blank in ["", "   ", "\t\n"] {
            let notice = assistant.ask(blank);
            assert_eq!(notice.level, NoticeLevel::Info);
            assert_eq!(notice.message, EMPTY_QUESTION_NOTICE);
        }
    }

    #[test]
    fn test_question_is_answered() {
        let assistant: Assistant = Assistant::default();
        let notice = assistant.ask("I have covid and a symptom");
        assert_eq!(notice.level, NoticeLevel::Success);
        assert_eq!(
            notice.message,
            "COVID-19 is a respiratory virus. Stay up to date on boosters."
        );
    }

    #[test]
    fn test_unknown_topic_gets_prompt() {
        let assistant: Assistant = Assistant::default();
        let notice = assistant.ask("what about allergies");
        assert_eq!(notice.message, FALLBACK_REPLY);
    }
}
