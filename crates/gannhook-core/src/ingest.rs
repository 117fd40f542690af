//! Ingestion pipeline for webhook alerts
//!
//! The pipeline receives a bot id and raw payload, builds an alert record,
//! classifies it, and hands the finished record to the store. Insertion only
//! happens after classification completes, so readers never see a partially
//! processed alert.

use tracing::{debug, info};

use crate::classifier::Classifier;
use crate::models::{Alert, AlertType};
use crate::store::AlertStore;

/// Ingestion pipeline: classify incoming webhooks and store them
#[derive(Clone)]
pub struct Ingestor {
    classifier: Classifier,
    store: AlertStore,
}

impl Ingestor {
    /// Create a new ingestor backed by the given store
    pub fn new(store: AlertStore) -> Self {
        Self {
            classifier: Classifier::new(),
            store,
        }
    }

    /// Ingest one webhook payload and return the stored alert's id.
    ///
    /// Any payload shape is accepted; classification degrades to `GENERAL`
    /// when the payload carries no recognizable message.
    pub fn ingest(&self, bot_id: &str, payload: serde_json::Value) -> u64 {
        debug!(bot_id, "webhook received");

        let mut alert = Alert::new(bot_id, payload);

        let classification = self.classifier.classify(&alert.payload);
        alert.alert_type = classification.alert_type;
        alert.priority = classification.priority;
        alert.processed = true;

        match alert.alert_type {
            AlertType::SectionChange => info!(bot_id, "Gann section change detected"),
            AlertType::VolumeClimax => info!(bot_id, "volume climax detected"),
            AlertType::FiftyPercent => info!(bot_id, "50% level alert"),
            AlertType::General => {}
        }

        let id = self.store.insert(alert);
        info!(bot_id, alert_id = id, ?classification, "alert processed");
        id
    }

    /// The store this ingestor writes to
    pub fn store(&self) -> &AlertStore {
        &self.store
    }
}
