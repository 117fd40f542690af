//! Keyword-based alert classification
//!
//! Maps the free-text `message` field of a webhook payload to an alert type
//! and priority using a fixed, ordered rule table. Rules are evaluated in
//! order and every match overwrites the result, so when a message contains
//! several keywords the last matching rule wins.

use crate::models::{AlertType, Priority};

/// One keyword rule: any listed keyword matches as a substring
struct Rule {
    keywords: &'static [&'static str],
    alert_type: AlertType,
    priority: Priority,
}

/// Ordered rule table. Order matters: later matches overwrite earlier ones.
const RULES: &[Rule] = &[
    Rule {
        keywords: &["section change"],
        alert_type: AlertType::SectionChange,
        priority: Priority::High,
    },
    Rule {
        keywords: &["volume climax"],
        alert_type: AlertType::VolumeClimax,
        priority: Priority::High,
    },
    Rule {
        keywords: &["50%", "fifty"],
        alert_type: AlertType::FiftyPercent,
        priority: Priority::Medium,
    },
];

/// Result of classifying a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Detected alert type
    pub alert_type: AlertType,
    /// Priority set by the matching rule, if any
    pub priority: Option<Priority>,
}

impl Default for Classification {
    fn default() -> Self {
        Self {
            alert_type: AlertType::General,
            priority: None,
        }
    }
}

/// Classifies webhook payloads against the Gann keyword rules
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier;

impl Classifier {
    /// Create a new classifier
    pub fn new() -> Self {
        Self
    }

    /// Classify a payload by its `message` field.
    ///
    /// A payload without a string `message` field, or whose message matches
    /// no rule, classifies as `GENERAL` with no priority.
    pub fn classify(&self, payload: &serde_json::Value) -> Classification {
        let mut result = Classification::default();

        let Some(message) = payload.get("message").and_then(|m| m.as_str()) else {
            return result;
        };
        let message = message.to_lowercase();

        for rule in RULES {
            if rule.keywords.iter().any(|k| message.contains(k)) {
                result.alert_type = rule.alert_type;
                result.priority = Some(rule.priority);
            }
        }

        result
    }
}
