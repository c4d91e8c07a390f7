//! Keyword-based question classifier

use crate::core::category::ModelCategory;

/// Terms that mark a question as code-related (matched as lowercase substrings)
pub const CODE_KEYWORDS: &[&str] = &[
    "function",
    "code",
    "programming",
    "python",
    "javascript",
    "algorithm",
    "debug",
    "syntax",
    "class",
    "method",
];

/// Classifies a question into a concrete [`ModelCategory`]
///
/// Implementations must be pure: the same question always yields the
/// same category.
pub trait QuestionClassifier: Send + Sync {
    fn classify(&self, question: &str) -> ModelCategory;
}

/// Substring match against a fixed keyword list
///
/// Any keyword hit selects [`ModelCategory::Code`]; otherwise
/// [`ModelCategory::General`].
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    keywords: Vec<String>,
}

impl KeywordClassifier {
    pub fn new() -> Self {
        Self::with_keywords(CODE_KEYWORDS.iter().copied())
    }

    pub fn with_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionClassifier for KeywordClassifier {
    fn classify(&self, question: &str) -> ModelCategory {
        let question = question.to_lowercase();
        if self.keywords.iter().any(|k| question.contains(k.as_str())) {
            ModelCategory::Code
        } else {
            ModelCategory::General
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_question() {
        let classifier = KeywordClassifier::new();
        assert_eq!(
            classifier.classify("Explain this Python function"),
            ModelCategory::Code
        );
    }

    #[test]
    fn test_general_question() {
        let classifier = KeywordClassifier::new();
        assert_eq!(
            classifier.classify("What is quantum entanglement?"),
            ModelCategory::General
        );
    }

    #[test]
    fn test_every_keyword_matches_case_insensitively() {
        let classifier = KeywordClassifier::new();
        for keyword in CODE_KEYWORDS {
            let question = format!("Tell me about {} please", keyword.to_uppercase());
            assert_eq!(
                classifier.classify(&question),
                ModelCategory::Code,
                "keyword: {keyword}"
            );
        }
    }

    #[test]
    fn test_substring_match() {
        // "classic" contains "class", "decoder" contains "code"
        let classifier = KeywordClassifier::new();
        assert_eq!(classifier.classify("A classic novel"), ModelCategory::Code);
        assert_eq!(classifier.classify("How does a decoder ring work"), ModelCategory::Code);
    }

    #[test]
    fn test_empty_question_is_general() {
        assert_eq!(KeywordClassifier::new().classify(""), ModelCategory::General);
    }

    #[test]
    fn test_custom_keywords() {
        let classifier = KeywordClassifier::with_keywords(["Rust", ""]);
        assert_eq!(classifier.keywords(), &["rust".to_string()]);
        assert_eq!(classifier.classify("why RUST?"), ModelCategory::Code);
        assert_eq!(classifier.classify("explain a function"), ModelCategory::General);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let classifier = KeywordClassifier::new();
        let q = "Debug my loop";
        assert_eq!(classifier.classify(q), classifier.classify(q));
    }
}
