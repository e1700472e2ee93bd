//! NestSense - Stateless scoring engine for child digital wellbeing
//!
//! NestSense turns raw usage and messaging signals into bounded, explainable
//! risk assessments through two independent components:
//!
//! - **Addiction scoring**: weighted combination of six usage factors into a
//!   0-100 risk score with a discrete tier and a human-readable rationale
//! - **Toxicity detection**: keyword-pattern analysis of free text (singly or
//!   batched) into a 0-1 toxicity score, detected categories, and sentiment
//!
//! Both components are pure functions over their inputs with process-wide
//! constant lookup tables, safe for unrestricted concurrent use.

pub mod addiction;
pub mod error;
pub mod toxicity;
pub mod types;

// HTTP transport (requires the `server` feature)
#[cfg(feature = "server")]
pub mod http;

pub use addiction::AddictionScorer;
pub use error::EngineError;
pub use toxicity::ToxicityDetector;
pub use types::{
    AddictionAssessment, BatchAnalysis, CategoryDetection, RiskTier, Sentiment, TextAnalysis,
    UsageFactors,
};

/// Engine version embedded in service metadata
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Service name reported by the metadata endpoint
pub const SERVICE_NAME: &str = "NestSense AI Service";
