//! Data models for Gannhook

mod alert;

pub use alert::*;
