//! Topic validation.
//!
//! Rejects strings that cannot plausibly name something to learn before any
//! roadmap is generated. Rules run in a fixed order and the first failure is
//! reported.

use std::fmt;
use thiserror::Error;

const MIN_TOPIC_LEN: usize = 3;
const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Unicode whitespace plus the byte-order mark, which pasted text often carries.
fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Why a topic was rejected. The `Display` text is meant for the end user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a topic")]
    EmptyTopic,

    #[error("Topic must be at least 3 characters long")]
    TooShort,

    #[error("Topic can only contain letters and spaces")]
    InvalidCharacters,

    #[error("\"{word}\" doesn't look like a real word; please enter a meaningful topic")]
    NotMeaningful { word: String },
}

/// A trimmed topic that passed [`validate_topic`].
///
/// The only way to get one is through the validator, so the generator never
/// sees unchecked input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidTopic(String);

impl ValidTopic {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for ValidTopic {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ValidTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Checks `raw` and returns it trimmed.
pub fn validate_topic(raw: &str) -> Result<ValidTopic, ValidationError> {
    let topic = raw.trim_matches(is_space);

    if topic.is_empty() {
        return Err(ValidationError::EmptyTopic);
    }
    if topic.chars().count() < MIN_TOPIC_LEN {
        return Err(ValidationError::TooShort);
    }
    if !topic
        .chars()
        .all(|c| c.is_ascii_alphabetic() || is_space(c))
    {
        return Err(ValidationError::InvalidCharacters);
    }

    let lowered = topic.to_lowercase();
    if let Some(word) = lowered
        .split(is_space)
        .filter(|w| !w.is_empty())
        .find(|w| !is_meaningful(w)) {
        return Err(ValidationError::NotMeaningful {
            word: word.to_string(),
        });
    }

    Ok(ValidTopic(topic.to_string()))
}

fn is_meaningful(word: &str) -> bool {
    has_vowel(word) && !has_triple_run(word) && !is_tiled(word)
}

fn has_vowel(word: &str) -> bool {
    word.chars().any(|c| VOWELS.contains(&c))
}

fn has_triple_run(word: &str) -> bool {
    let bytes = word.as_bytes();
    bytes
        .windows(3)
        .any(|w| w[0] == w[1] && w[1] == w[2])
}

// "ababab", "abcabc": a shorter prefix repeated to fill the whole word.
// Words are ASCII by the time they get here, so byte slicing is safe.
fn is_tiled(word: &str) -> bool {
    let len = word.len();
    if len < 6 {
        return false;
    }
    (1..=len / 2)
        .filter(|size| len % size == 0)
        .any(|size| word[..size].repeat(len / size) == word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_in_rule_order() {
        assert_eq!(validate_topic("   "), Err(ValidationError::EmptyTopic));
        assert_eq!(validate_topic(" ab "), Err(ValidationError::TooShort));
        assert_eq!(validate_topic("abc123"), Err(ValidationError::InvalidCharacters));
        // Short and invalid: length is checked first.
        assert_eq!(validate_topic("a1"), Err(ValidationError::TooShort));
    }

    #[test]
    fn reports_the_offending_word() {
        assert_eq!(
            validate_topic("Rust xyz"),
            Err(ValidationError::NotMeaningful { word: "xyz".into() })
        );
        assert_eq!(
            validate_topic("aaa bbb"),
            Err(ValidationError::NotMeaningful { word: "aaa".into() })
        );
    }

    #[test]
    fn detects_tiled_words() {
        assert!(is_tiled("asdasd"));
        assert!(is_tiled("ababab"));
        assert!(!is_tiled("banana"));
        assert!(!is_tiled("abab"));
        assert!(!has_triple_run("coffee"));
        assert!(has_triple_run("aaabbb"));
    }

    #[test]
    fn accepts_and_trims_real_topics() {
        let topic = validate_topic("  Web Development ").unwrap();
        assert_eq!(topic.as_str(), "Web Development");
        assert!(validate_topic("Python").is_ok());
        assert!(validate_topic("Machine\tLearning").is_ok());
    }

    #[test]
    fn byte_order_mark_counts_as_whitespace() {
        let topic = validate_topic("\u{FEFF}Python\u{FEFF}").unwrap();
        assert_eq!(topic.as_str(), "Python");
        let topic = validate_topic("Data\u{FEFF}Science").unwrap();
        assert_eq!(topic.as_str(), "Data\u{FEFF}Science");
        assert_eq!(validate_topic("\u{FEFF}ab"), Err(ValidationError::TooShort));
    }

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(
            ValidationError::TooShort.to_string(),
            "Topic must be at least 3 characters long"
        );
    }
}
