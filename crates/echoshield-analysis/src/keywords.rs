//! Fixed keyword tables for detection and clustering
//!
//! All matching is case-insensitive.

use echoshield_domain::Topic;

/// Keywords associated with misinformation-prone topics
pub const MISINFORMATION_KEYWORDS: [&str; 6] = ["causes", "cancer", "vaccine", "5g", "microchip", "hoax"];

/// Canned detector explanations
pub const REASONING_POOL: [&str; 5] = [
    "This claim contradicts recent peer-reviewed studies.",
    "Multiple trusted sources confirm this information.",
    "While partially accurate, this claim lacks important context.",
    "This appears to be a misinterpretation of scientific data.",
    "Fact-checkers have debunked this claim multiple times.",
];

/// Canned verification method descriptions
pub const VERIFICATION_METHODS: [&str; 5] = [
    "Cross-referenced with WHO guidelines",
    "Compared against CDC publications",
    "Fact-checked by Reuters and AP",
    "Analyzed peer-reviewed research",
    "Cross-verified with government sources",
];

/// A topic predicate: matches if any substring or any whole word is present
struct TopicRule {
    topic: Topic,
    substrings: &'static [&'static str],
    words: &'static [&'static str],
}

/// Topic predicates in priority order; the first match wins
const TOPIC_RULES: [TopicRule; 4] = [
    TopicRule {
        topic: Topic::Health,
        substrings: &["vaccine", "health"],
        words: &[],
    },
    // "ai" only as a word, otherwise "said" or "again" would match
    TopicRule {
        topic: Topic::Technology,
        substrings: &["5g"],
        words: &["ai"],
    },
    TopicRule {
        topic: Topic::Politics,
        substrings: &["election"],
        words: &[],
    },
    TopicRule {
        topic: Topic::Environment,
        substrings: &["climate", "renewable"],
        words: &[],
    },
];

/// Whether the text mentions any misinformation-prone keyword
///
/// # Examples
///
/// ```
/// use echoshield_analysis::keywords::mentions_misinformation_keyword;
///
/// assert!(mentions_misinformation_keyword("5G towers spread illness"));
/// assert!(!mentions_misinformation_keyword("The sky is blue"));
/// ```
pub fn mentions_misinformation_keyword(text: &str) -> bool {
    let lower = text.to_lowercase();
    MISINFORMATION_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// Assign a topic to a claim text
///
/// Predicates are evaluated in priority order (health, technology,
/// politics, environment); text matching none is `Topic::Other`.
pub fn classify_topic(text: &str) -> Topic {
    let lower = text.to_lowercase();

    TOPIC_RULES
        .iter()
        .find(|rule| {
            rule.substrings.iter().any(|s| lower.contains(s))
                || rule.words.iter().any(|w| contains_word(&lower, w))
        })
        .map(|rule| rule.topic)
        .unwrap_or(Topic::Other)
}

fn contains_word(text: &str, word: &str) -> bool {
    text.split(|c: char| !c.is_alphanumeric()).any(|token| token == word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        assert!(mentions_misinformation_keyword("VACCINE injuries"));
        assert!(mentions_misinformation_keyword("the moon landing was a Hoax"));
        assert!(!mentions_misinformation_keyword(""));
    }

    #[test]
    fn test_topic_priority() {
        // Health outranks technology
        assert_eq!(classify_topic("5G makes the vaccine stronger"), Topic::Health);
        assert_eq!(classify_topic("Public health after the election"), Topic::Health);
        // Technology outranks politics
        assert_eq!(classify_topic("AI will decide the election"), Topic::Technology);
        assert_eq!(classify_topic("Election fraud affects climate policy"), Topic::Politics);
        assert_eq!(classify_topic("Renewable energy is cheap"), Topic::Environment);
        assert_eq!(classify_topic("Cats are liquid"), Topic::Other);
    }

    #[test]
    fn test_ai_matches_only_as_word() {
        assert_eq!(classify_topic("AI models pass exams"), Topic::Technology);
        assert_eq!(classify_topic("She said it again"), Topic::Other);
    }

    #[test]
    fn test_empty_text_is_other() {
        assert_eq!(classify_topic(""), Topic::Other);
    }
}
