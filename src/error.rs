//! Error types for NestSense

use thiserror::Error;

/// Errors that can occur while building or driving the scoring engine
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to compile pattern '{pattern}': {source}")]
    PatternError {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}
