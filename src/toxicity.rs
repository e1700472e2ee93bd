//! Toxicity and cyberbullying detection
//!
//! Pattern-matching baseline over lowercased text: each toxic pattern carries
//! a category label and severity weight, each positive pattern a dampening
//! weight applied once per text. The highest-scoring category drives the base
//! score; positive matches pull it down before clamping to [0,1].

use crate::error::EngineError;
use crate::types::{BatchAnalysis, CategoryDetection, Sentiment, TextAnalysis};
use regex::Regex;
use std::collections::BTreeMap;

/// Toxic keyword patterns in fixed evaluation order: (pattern, category, severity)
pub const TOXIC_PATTERNS: [(&str, &str, f64); 6] = [
    (
        r"\b(hate|kill|die|ugly|stupid|dumb|loser|freak|weirdo)\b",
        "hate_speech",
        0.6,
    ),
    (r"\b(kys|stfu|gtfo|foff)\b", "severe_toxicity", 0.9),
    (r"\b(bully|threat|hurt|punch|beat)\b", "threat", 0.7),
    (
        r"\b(fat|skinny|ugly|gross|disgusting)\b",
        "body_shaming",
        0.65,
    ),
    (
        r"\b(nobody likes|no friends|go away|leave)\b",
        "exclusion",
        0.55,
    ),
    (
        r"\b(worthless|pathetic|trash|garbage)\b",
        "severe_insult",
        0.8,
    ),
];

/// Positive patterns that dampen the toxicity score, each applied at most
/// once per text regardless of match count
pub const POSITIVE_PATTERNS: [(&str, f64); 3] = [
    (r"\b(love|kind|friend|amazing|great|awesome|wonderful)\b", -0.2),
    (r"\b(thank|please|sorry|help|care)\b", -0.15),
    (r"\b(happy|excited|glad|proud)\b", -0.1),
];

/// Final score at or above this is flagged toxic
const TOXIC_THRESHOLD: f64 = 0.5;

struct ToxicRule {
    pattern: Regex,
    category: &'static str,
    weight: f64,
}

struct PositiveRule {
    pattern: Regex,
    weight: f64,
}

/// Keyword-pattern toxicity detector with positive-sentiment dampening.
///
/// Patterns are compiled once at construction; the detector itself is
/// immutable and safe to share across request handlers.
pub struct ToxicityDetector {
    toxic: Vec<ToxicRule>,
    positive: Vec<PositiveRule>,
}

impl ToxicityDetector {
    /// Compile the fixed pattern tables into a ready detector
    pub fn new() -> Result<Self, EngineError> {
        let toxic = TOXIC_PATTERNS
            .into_iter()
            .map(|(pattern, category, weight)| {
                Ok(ToxicRule {
                    pattern: compile(pattern)?,
                    category,
                    weight,
                })
            })
            .collect::<Result<Vec<_>, EngineError>>()?;

        let positive = POSITIVE_PATTERNS
            .into_iter()
            .map(|(pattern, weight)| {
                Ok(PositiveRule {
                    pattern: compile(pattern)?,
                    weight,
                })
            })
            .collect::<Result<Vec<_>, EngineError>>()?;

        Ok(Self { toxic, positive })
    }

    /// Analyze a single text for toxicity and sentiment.
    ///
    /// Empty or whitespace-only input short-circuits to a zero-valued result
    /// without any pattern evaluation.
    pub fn analyze_text(&self, text: &str) -> TextAnalysis {
        if text.trim().is_empty() {
            return TextAnalysis {
                toxicity_score: 0.0,
                categories: Vec::new(),
                sentiment: Sentiment::Neutral,
                is_toxic: false,
                explanation: "Empty text provided.".to_string(),
            };
        }

        let lowered = text.to_lowercase();

        // Only the single highest-scoring category drives the base score
        let mut max_score: f64 = 0.0;
        let mut categories: Vec<CategoryDetection> = Vec::new();

        for rule in &self.toxic {
            let matches: Vec<String> = rule
                .pattern
                .find_iter(&lowered)
                .map(|m| m.as_str().to_string())
                .collect();
            if !matches.is_empty() {
                let score = (rule.weight * matches.len() as f64).min(1.0);
                max_score = max_score.max(score);
                categories.push(CategoryDetection {
                    category: rule.category.to_string(),
                    score: round2(score),
                    matches,
                });
            }
        }

        // Existence check, not count: each positive pattern applies once
        let mut positive_modifier: f64 = 0.0;
        for rule in &self.positive {
            if rule.pattern.is_match(&lowered) {
                positive_modifier += rule.weight;
            }
        }

        let final_score = (max_score + positive_modifier).clamp(0.0, 1.0);

        let sentiment = if final_score > 0.6 {
            Sentiment::VeryNegative
        } else if final_score > 0.3 {
            Sentiment::Negative
        } else if positive_modifier <= -0.2 {
            Sentiment::Positive
        } else {
            Sentiment::Neutral
        };

        TextAnalysis {
            toxicity_score: round3(final_score),
            explanation: generate_explanation(final_score, &categories),
            categories,
            sentiment,
            is_toxic: final_score >= TOXIC_THRESHOLD,
        }
    }

    /// Analyze a batch of texts and aggregate the results.
    ///
    /// Texts are analyzed independently in input order. When more than one
    /// text is toxic, the mean toxicity is amplified by 1.5x (capped at 1.0)
    /// to produce the overall risk score.
    pub fn analyze_batch(&self, texts: &[String]) -> BatchAnalysis {
        let results: Vec<TextAnalysis> = texts.iter().map(|t| self.analyze_text(t)).collect();

        let toxic_texts = results.iter().filter(|r| r.is_toxic).count();
        let average_toxicity = if results.is_empty() {
            0.0
        } else {
            results.iter().map(|r| r.toxicity_score).sum::<f64>() / results.len() as f64
        };

        // Counts texts containing the category, not individual matches
        let mut category_distribution: BTreeMap<String, u32> = BTreeMap::new();
        for result in &results {
            for detection in &result.categories {
                *category_distribution
                    .entry(detection.category.clone())
                    .or_insert(0) += 1;
            }
        }

        let overall_risk = if toxic_texts > 1 {
            (average_toxicity * 1.5).min(1.0)
        } else {
            average_toxicity
        };

        BatchAnalysis {
            overall_risk_score: round3(overall_risk),
            total_texts: texts.len(),
            toxic_texts,
            average_toxicity: round3(average_toxicity),
            category_distribution,
            individual_results: results,
            alert_recommended: overall_risk >= 0.5,
        }
    }
}

fn compile(pattern: &str) -> Result<Regex, EngineError> {
    Regex::new(pattern).map_err(|source| EngineError::PatternError {
        pattern: pattern.to_string(),
        source,
    })
}

/// Compose the risk explanation from the unrounded final score and the
/// categories in detection order
fn generate_explanation(score: f64, categories: &[CategoryDetection]) -> String {
    if score < 0.3 {
        return "No significant toxicity detected. Content appears safe.".to_string();
    }

    let names: Vec<&str> = categories.iter().map(|c| c.category.as_str()).collect();
    let joined = names.join(", ");

    if score >= 0.7 {
        format!(
            "HIGH RISK: Severe toxic content detected. Categories: {joined}. \
             Immediate review recommended."
        )
    } else if score >= 0.5 {
        format!(
            "MODERATE RISK: Potentially harmful content detected. Categories: {joined}. \
             Parental review advised."
        )
    } else {
        format!(
            "LOW RISK: Mild concerning language detected. Categories: {joined}. \
             Monitor for patterns."
        )
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
