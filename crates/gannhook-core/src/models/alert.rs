//! Alert data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Gann pattern detected in an alert message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertType {
    /// Gann section change
    SectionChange,
    /// Volume climax
    VolumeClimax,
    /// 50% retracement level
    FiftyPercent,
    /// No recognized pattern
    #[default]
    General,
}

/// Alert priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    /// Act on immediately
    High,
    /// Worth attention
    Medium,
}

/// One ingested webhook notification
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// Unique identifier, strictly increasing, derived from creation time
    pub id: u64,

    /// Opaque bot identifier taken verbatim from the webhook route
    pub bot_id: String,

    /// Creation time, fixed at ingestion
    pub timestamp: DateTime<Utc>,

    /// Raw webhook body, stored unmodified
    pub payload: serde_json::Value,

    /// Detected Gann pattern
    #[serde(rename = "type")]
    pub alert_type: AlertType,

    /// Priority assigned by the matching rule, absent when no rule set one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    /// Whether classification has run; stored alerts always have this set
    pub processed: bool,
}

impl Alert {
    /// Create an unclassified alert for the given bot and payload.
    ///
    /// The id is assigned by the store at insertion; until then it is zero.
    pub fn new(bot_id: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            id: 0,
            bot_id: bot_id.into(),
            timestamp: Utc::now(),
            payload,
            alert_type: AlertType::default(),
            priority: None,
            processed: false,
        }
    }
}
