//! Bounded in-memory alert history
//!
//! The store owns all alert records exclusively. It keeps at most
//! `max_alerts` records in most-recent-first order, evicting the oldest on
//! overflow. Id assignment happens under the same lock as insertion, so ids
//! are unique and strictly increasing even under concurrent ingestion, and
//! readers never observe a transient overflow or a half-inserted record.

use std::collections::VecDeque;
use std::sync::Arc;

use chrono::Utc;
use parking_lot::Mutex;
use serde::Serialize;

use crate::models::Alert;

/// Result of a filtered store query
#[derive(Debug, Clone, Serialize)]
pub struct QueryResult {
    /// Matching alerts in most-recent-first order, truncated to the limit
    pub alerts: Vec<Alert>,
    /// Number of matching alerts before truncation
    pub total: usize,
}

struct Inner {
    alerts: VecDeque<Alert>,
    last_id: u64,
}

/// Bounded, most-recent-first collection of alerts
#[derive(Clone)]
pub struct AlertStore {
    inner: Arc<Mutex<Inner>>,
    max_alerts: usize,
}

impl AlertStore {
    /// Create a store that retains at most `max_alerts` records
    pub fn new(max_alerts: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                alerts: VecDeque::with_capacity(max_alerts),
                last_id: 0,
            })),
            max_alerts,
        }
    }

    /// Insert an alert, assigning its id, and return that id.
    ///
    /// The id is the current wall-clock in milliseconds, bumped past the
    /// previously issued id when the clock has not advanced. After insertion
    /// the store is truncated to the newest `max_alerts` records.
    pub fn insert(&self, mut alert: Alert) -> u64 {
        let mut inner = self.inner.lock();

        let now_ms = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        let id = now_ms.max(inner.last_id + 1);
        inner.last_id = id;
        alert.id = id;

        inner.alerts.push_front(alert);
        inner.alerts.truncate(self.max_alerts);

        id
    }

    /// Query alerts in stored order, optionally filtered by bot id.
    ///
    /// Returns up to `limit` records plus the total count of matches before
    /// truncation.
    pub fn query(&self, bot_id: Option<&str>, limit: usize) -> QueryResult {
        let inner = self.inner.lock();

        let matching = inner
            .alerts
            .iter()
            .filter(|a| bot_id.map_or(true, |id| a.bot_id == id));

        let total = matching.clone().count();
        let alerts = matching.take(limit).cloned().collect();

        QueryResult { alerts, total }
    }

    /// Current number of stored alerts
    pub fn len(&self) -> usize {
        self.inner.lock().alerts.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
