//! Core types for the NestSense scoring engine
//!
//! This module defines the data structures that flow through the two scoring
//! components: usage factors in, assessments and text analyses out. Every
//! output type is immutable after construction and produced fresh per call.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The six usage-behavior factors feeding the addiction score.
///
/// Each field is expected in the 0-100 range; anything outside is clamped
/// before weighting. Missing fields deserialize to 0.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageFactors {
    /// Daily screen time relative to a healthy threshold (percent)
    pub screen_time: f64,
    /// Device usage during late-night hours (percent)
    pub night_usage: f64,
    /// Share of usage spent on social media (percent)
    pub social_media_ratio: f64,
    /// Frequency of switching between apps (normalized 0-100)
    pub app_switching: f64,
    /// Emotional volatility inferred from usage patterns (normalized 0-100)
    pub sentiment_volatility: f64,
    /// Reward-driven usage behavior (normalized 0-100)
    pub reward_dependency: f64,
}

impl UsageFactors {
    /// Factor values paired with their canonical names, in weighting order
    pub fn named(&self) -> [(&'static str, f64); 6] {
        [
            ("screen_time", self.screen_time),
            ("night_usage", self.night_usage),
            ("social_media_ratio", self.social_media_ratio),
            ("app_switching", self.app_switching),
            ("sentiment_volatility", self.sentiment_volatility),
            ("reward_dependency", self.reward_dependency),
        ]
    }
}

/// Discrete addiction risk tier derived from the 0-100 score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "LOW",
            RiskTier::Moderate => "MODERATE",
            RiskTier::High => "HIGH",
            RiskTier::Critical => "CRITICAL",
        }
    }
}

/// Result of a single addiction-score calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddictionAssessment {
    /// Weighted risk score in [0,100]
    pub score: f64,
    /// Tier whose band contains the score
    pub risk_level: RiskTier,
    /// Human-readable rationale; never empty
    pub explanation: String,
}

/// Sentiment label attached to a text analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Neutral,
    Positive,
    Negative,
    VeryNegative,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Neutral => "neutral",
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::VeryNegative => "very_negative",
        }
    }
}

/// A toxicity category detected in a text, with its matched substrings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDetection {
    /// Category label (e.g. "hate_speech", "body_shaming")
    pub category: String,
    /// Per-category score in (0,1], rounded to 2 decimals
    pub score: f64,
    /// Literal matched substrings in order of occurrence
    pub matches: Vec<String>,
}

/// Result of analyzing a single text for toxicity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAnalysis {
    /// Final toxicity score in [0,1], rounded to 3 decimals
    pub toxicity_score: f64,
    /// Detected categories in pattern-table order
    pub categories: Vec<CategoryDetection>,
    /// Sentiment label
    pub sentiment: Sentiment,
    /// Whether the final score crosses the toxicity threshold (0.5)
    pub is_toxic: bool,
    /// Human-readable rationale; never empty
    pub explanation: String,
}

/// Aggregate result of analyzing a batch of texts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchAnalysis {
    /// Amplified overall risk in [0,1], rounded to 3 decimals
    pub overall_risk_score: f64,
    /// Number of texts analyzed
    pub total_texts: usize,
    /// Number of texts flagged toxic
    pub toxic_texts: usize,
    /// Mean per-text toxicity, rounded to 3 decimals (0 for an empty batch)
    pub average_toxicity: f64,
    /// Category name -> number of texts in which it appeared
    pub category_distribution: BTreeMap<String, u32>,
    /// Per-text results in input order
    pub individual_results: Vec<TextAnalysis>,
    /// Whether the overall risk warrants alerting a guardian
    pub alert_recommended: bool,
}
