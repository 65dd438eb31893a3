//! Keyword responder for the health FAQ.
//!
//! Rules are evaluated in order; the first keyword found anywhere in the
//! lowercased query wins.

/// Ordered `(keyword, answer)` rules. Earlier entries take priority.
pub const RULES: &[(&str, &str)] = &[
    (
        "covid",
        "COVID-19 is a respiratory virus. Stay up to date on boosters.",
    ),
    ("flu", "Flu is seasonal. Annual vaccines help prevent it."),
    (
        "dengue",
        "Dengue is mosquito-borne. Use repellent and avoid bites.",
    ),
    (
        "monkeypox",
        "Monkeypox causes rash and fever. Avoid close contact.",
    ),
    ("symptom", "Symptoms vary. Fever, cough, fatigue are common."),
];

/// Answer when no rule matches.
pub const FALLBACK_REPLY: &str = "Try asking about COVID-19, flu, dengue, or symptoms.";

/// Anything that can answer a free-text health question.
pub trait Responder {
    /// Answer for `query`. Must be deterministic.
    fn respond(&self, query: &str) -> &'static str;
}

/// Maps a free-text question to a canned answer.
#[derive(Debug, Clone, Copy)]
pub struct ResponseMatcher {
    rules: &'static [(&'static str, &'static str)],
    fallback: &'static str,
}

impl Default for ResponseMatcher {
    fn default() -> Self {
        Self {
            rules: RULES,
            fallback: FALLBACK_REPLY,
        }
    }
}

impl ResponseMatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Responder for ResponseMatcher {
    fn respond(&self, query: &str) -> &'static str {
        let query = query.to_lowercase();
        self.rules
            .iter()
            .find(|(keyword, _)| query.contains(keyword))
            .map_or(self.fallback, |(_, answer)| *answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_for(keyword: &str) -> &'static str {
        RULES
            .iter()
            .find(|(k, _)| *k == keyword)
            .map(|(_, a)| *a)
            .expect("keyword exists")
    }

    #[test]
    fn test_each_keyword_matches() {
        let matcher = ResponseMatcher::new();
        assert_eq!(matcher.respond("Tell me about COVID"), answer_for("covid"));
        assert_eq!(matcher.respond("is the flu bad?"), answer_for("flu"));
        assert_eq!(matcher.respond("DENGUE fever"), answer_for("dengue"));
        assert_eq!(matcher.respond("monkeypox rash"), answer_for("monkeypox"));
        assert_eq!(matcher.respond("common symptoms"), answer_for("symptom"));
    }

    #[test]
    fn test_priority_order() {
        let matcher = ResponseMatcher::new();
        assert_eq!(
            matcher.respond("I have covid and a symptom"),
            answer_for("covid")
        );
        assert_eq!(
            matcher.respond("symptom of dengue or flu"),
            answer_for("flu")
        );
    }

    #[test]
    fn test_no_match_returns_fallback() {
        let matcher = ResponseMatcher::new();
        assert_eq!(matcher.respond("what about allergies"), FALLBACK_REPLY);
    }

    #[test]
    fn test_substring_match_inside_words() {
        let matcher = ResponseMatcher::new();
        // "influenza" contains "flu"
        assert_eq!(matcher.respond("influenza season"), answer_for("flu"));
    }

    #[test]
    fn test_keyword_order_is_fixed() {
        let keywords: Vec<_> = RULES.iter().map(|(keyword, _)| *keyword).collect();
        assert_eq!(keywords, ["covid", "flu", "dengue", "monkeypox", "symptom"]);
    }

    #[test]
    fn test_deterministic() {
        let matcher = ResponseMatcher::new();
        let q = "Any flu symptom?";
        assert_eq!(matcher.respond(q), matcher.respond(q));
    }
}
