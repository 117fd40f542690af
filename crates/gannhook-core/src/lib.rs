//! # Gannhook
//!
//! Webhook alert server for Gann-based TradingView alerts.
//!
//! Gannhook receives webhook notifications from charting platforms, tags each
//! alert with a type and priority derived from keyword matching against Gann
//! trading patterns, and keeps a bounded in-memory history queryable per bot.
//!
//! ## Architecture
//!
//! - **Classifier**: pure keyword-rule classification of alert payloads
//! - **Store**: bounded, most-recent-first alert history with eviction
//! - **Ingest**: the receive → classify → store pipeline
//! - **API**: REST endpoints for webhooks, alert queries, and status
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the webhook server on the default port (3000)
//! gannhook
//!
//! # Point TradingView at http://<host>:3000/webhook/<your-bot-id>
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod api;
pub mod classifier;
pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};

/// Re-exports for convenience
pub mod prelude {
    pub use crate::classifier::Classifier;
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::ingest::Ingestor;
    pub use crate::models::*;
    pub use crate::store::AlertStore;
}
