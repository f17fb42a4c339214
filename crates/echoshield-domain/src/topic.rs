//! Topic clusters

use serde::{Serialize, Serializer};
use std::fmt;

/// Topic label a claim is clustered under
///
/// Variants are listed in match priority order: a claim that mentions both a
/// health keyword and a technology keyword is a health claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    /// Vaccines, disease, medicine
    Health,

    /// 5G, AI and other technology
    Technology,

    /// Elections
    Politics,

    /// Climate, renewable energy
    Environment,

    /// Catch-all for claims no predicate matched
    Other,
}

impl Topic {
    /// All topics, in priority order
    pub const ALL: [Topic; 5] = [
        Topic::Health,
        Topic::Technology,
        Topic::Politics,
        Topic::Environment,
        Topic::Other,
    ];

    /// Get the topic label
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Health => "health",
            Topic::Technology => "technology",
            Topic::Politics => "politics",
            Topic::Environment => "environment",
            Topic::Other => "other",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Partition of claim texts by topic
///
/// Topics are kept in the order they were first seen; texts within a topic
/// keep their input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterMap {
    clusters: Vec<(Topic, Vec<String>)>,
}

impl ClusterMap {
    /// Create an empty cluster map
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a claim text to a topic, creating the topic on first use
    pub fn insert(&mut self, topic: Topic, text: impl Into<String>) {
        match self.clusters.iter_mut().find(|(t, _)| *t == topic) {
            Some((_, texts)) => texts.push(text.into()),
            None => self.clusters.push((topic, vec![text.into()])),
        }
    }

    /// Texts clustered under a topic
    pub fn get(&self, topic: Topic) -> Option<&[String]> {
        self.clusters
            .iter()
            .find(|(t, _)| *t == topic)
            .map(|(_, texts)| texts.as_slice())
    }

    /// Topic labels present, in first-seen order
    pub fn topics(&self) -> Vec<Topic> {
        self.clusters.iter().map(|(t, _)| *t).collect()
    }

    /// Iterate over `(topic, texts)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (Topic, &[String])> {
        self.clusters.iter().map(|(t, texts)| (*t, texts.as_slice()))
    }

    /// Number of topics present
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// Whether no claims were clustered
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Total number of claim texts across all topics
    pub fn total_claims(&self) -> usize {
        self.clusters.iter().map(|(_, texts)| texts.len()).sum()
    }
}

impl Serialize for ClusterMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.clusters.len()))?;
        for (topic, texts) in &self.clusters {
            map.serialize_entry(topic.as_str(), texts)?;
        }
        map.end()
    }
}
